use crate::audit::{AuditEvent, AuditLog, NullAudit};
use crate::message::Message;
use crate::scorer::{INDICATOR_BODY, INDICATOR_SUBJECT, INDICATOR_URL};

/// Ordered collection of scored messages with summary queries. Insertion order
/// is preserved and duplicates are permitted; individual removal is not
/// supported. Callers score messages before inserting them.
pub struct EmailAnalysis {
    messages: Vec<Message>,
    audit: Box<dyn AuditLog>,
}

impl EmailAnalysis {
    pub fn new() -> Self {
        Self::with_audit(Box::new(NullAudit))
    }

    /// Builds an empty collection reporting to the given audit collaborator.
    pub fn with_audit(audit: Box<dyn AuditLog>) -> Self {
        Self {
            messages: Vec::new(),
            audit,
        }
    }

    /// Appends unconditionally: no validation, no deduplication.
    pub fn insert(&mut self, message: Message) {
        self.audit
            .record(AuditEvent::new(format!("Email added: {}", message.subject())));
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Every message, in insertion order.
    pub fn all(&self) -> &[Message] {
        self.audit.record(AuditEvent::new(format!(
            "Viewed all emails. Total emails: {}",
            self.messages.len()
        )));
        &self.messages
    }

    /// The flagged subset, relative order preserved.
    pub fn flagged(&self) -> Vec<&Message> {
        let flagged: Vec<&Message> = self.messages.iter().filter(|m| m.is_flagged()).collect();
        self.audit.record(AuditEvent::new(format!(
            "Viewed all flagged emails. Total flagged emails: {}",
            flagged.len()
        )));
        flagged
    }

    fn flagged_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_flagged()).count()
    }

    // Counts only the three recognized indicator names among flagged messages;
    // any other indicator text is excluded from all three counters.
    fn indicator_counts(&self) -> (usize, usize, usize) {
        let mut subject = 0;
        let mut body = 0;
        let mut url = 0;
        for message in self.messages.iter().filter(|m| m.is_flagged()) {
            match message.primary_indicator() {
                INDICATOR_SUBJECT => subject += 1,
                INDICATOR_BODY => body += 1,
                INDICATOR_URL => url += 1,
                _ => {}
            }
        }
        (subject, body, url)
    }

    /// Most frequent indicator among flagged messages, or `"None"` when no
    /// message is flagged. Ties resolve Subject over Body over URL, matching
    /// the per-message selection chain.
    pub fn most_common_indicator(&self) -> String {
        if self.flagged_count() == 0 {
            return "None".to_string();
        }
        let (subject, body, url) = self.indicator_counts();
        if subject >= body && subject >= url {
            INDICATOR_SUBJECT
        } else if body >= subject && body >= url {
            INDICATOR_BODY
        } else {
            INDICATOR_URL
        }
        .to_string()
    }

    /// Percentage of flagged messages attributed to each recognized indicator,
    /// or a no-data sentinel when nothing is flagged. Debug formatting keeps
    /// the full floating-point precision and the trailing `.0` on whole values.
    pub fn indicator_percentages(&self) -> String {
        let total = self.flagged_count();
        if total == 0 {
            return "No flagged emails.".to_string();
        }
        let (subject, body, url) = self.indicator_counts();
        let percent = |count: usize| count as f64 * 100.0 / total as f64;
        format!(
            "{}: {:?}%, {}: {:?}%, {}: {:?}%",
            INDICATOR_SUBJECT,
            percent(subject),
            INDICATOR_BODY,
            percent(body),
            INDICATOR_URL,
            percent(url)
        )
    }

    /// Share of flagged messages over the whole collection, rounded to one
    /// decimal place. An empty collection reports 0.0% rather than dividing.
    pub fn flagged_percentage(&self) -> String {
        if self.messages.is_empty() {
            return "0.0% of the emails are flagged.".to_string();
        }
        let percentage = self.flagged_count() as f64 * 100.0 / self.messages.len() as f64;
        self.audit
            .record(AuditEvent::new("Summary report computed"));
        format!("{percentage:.1}% of the emails are flagged.")
    }
}

impl Default for EmailAnalysis {
    fn default() -> Self {
        Self::new()
    }
}
