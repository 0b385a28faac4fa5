use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analysis::EmailAnalysis;
use crate::audit::AuditLog;
use crate::message::Message;
use crate::scorer;

/// On-disk application state: the message list nested under a single key.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct StateRecord {
    #[serde(default)]
    pub emails: Vec<MessageRecord>,
}

/// One persisted message: the four raw text fields plus the three derived
/// fields. Key names match the original state files.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageRecord {
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub url: String,
    #[serde(rename = "phishingRiskScore")]
    pub risk_score: f64,
    pub flagged: bool,
    #[serde(rename = "majorIndicator")]
    pub major_indicator: String,
}

impl From<&Message> for MessageRecord {
    fn from(message: &Message) -> Self {
        Self {
            sender: message.sender().to_string(),
            subject: message.subject().to_string(),
            body: message.body().to_string(),
            url: message.url().to_string(),
            risk_score: message.risk_score(),
            flagged: message.is_flagged(),
            major_indicator: message.primary_indicator().to_string(),
        }
    }
}

/// Writes the collection to `path` as pretty-printed JSON, creating the parent
/// directory if needed.
pub fn save_state(path: &Path, analysis: &EmailAnalysis) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
    }
    let state = StateRecord {
        emails: analysis.all().iter().map(MessageRecord::from).collect(),
    };
    let json = serde_json::to_string_pretty(&state).context("Failed to encode state")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write state file: {}", path.display()))?;
    log::info!("saved {} emails to {}", analysis.len(), path.display());
    Ok(())
}

/// Reads the state file and rebuilds a fresh collection around the given audit
/// collaborator. A missing file yields an empty collection, not an error.
pub fn load_state(path: &Path, audit: Box<dyn AuditLog>) -> Result<EmailAnalysis> {
    if !path.exists() {
        log::info!("no state file at {}, starting empty", path.display());
        return Ok(EmailAnalysis::with_audit(audit));
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;
    let state: StateRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file: {}", path.display()))?;
    Ok(rebuild(state, audit))
}

/// Reconstructs messages from their raw text fields and re-runs the scorer on
/// each one. Persisted derived fields are never trusted.
pub fn rebuild(state: StateRecord, audit: Box<dyn AuditLog>) -> EmailAnalysis {
    let mut analysis = EmailAnalysis::with_audit(audit);
    for record in state.emails {
        let mut message = Message::new(record.sender, record.subject, record.body, record.url);
        scorer::score(&mut message);
        analysis.insert(message);
    }
    analysis
}
