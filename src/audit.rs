use chrono::{DateTime, Utc};

/// One entry in the audit trail: what happened and when.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

impl AuditEvent {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            description: description.into(),
        }
    }
}

/// Audit collaborator injected into the collection at construction. Replaces
/// the process-wide event log the original design relied on.
pub trait AuditLog {
    fn record(&self, event: AuditEvent);
}

/// Forwards audit events to the `log` facade.
pub struct LoggerAudit;

impl AuditLog for LoggerAudit {
    fn record(&self, event: AuditEvent) {
        log::info!("[audit] {} {}", event.timestamp.to_rfc3339(), event.description);
    }
}

/// Discards every event.
pub struct NullAudit;

impl AuditLog for NullAudit {
    fn record(&self, _event: AuditEvent) {}
}
