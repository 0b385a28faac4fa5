/// Sentinel indicator for a message that has not been scored yet.
pub const INDICATOR_UNSCORED: &str = "None";
/// Sentinel indicator for a scored message that fell below the flag threshold.
pub const INDICATOR_NOT_FLAGGED: &str = "None - not flagged";

/// One email under analysis: four raw text fields plus the derived risk fields
/// written by the scorer.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    sender: String,
    subject: String,
    body: String,
    url: String,
    risk_score: f64,
    flagged: bool,
    primary_indicator: String,
}

impl Message {
    /// Creates an unscored message. Empty strings are valid for every field.
    pub fn new(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
            url: url.into(),
            risk_score: 0.0,
            flagged: false,
            primary_indicator: INDICATOR_UNSCORED.to_string(),
        }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn risk_score(&self) -> f64 {
        self.risk_score
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }

    pub fn primary_indicator(&self) -> &str {
        &self.primary_indicator
    }

    /// Overwrites all three derived fields at once. Only the scorer (and tests)
    /// may write them, so a message is never half-scored.
    pub(crate) fn apply_score(&mut self, risk_score: f64, flagged: bool, primary_indicator: String) {
        self.risk_score = risk_score;
        self.flagged = flagged;
        self.primary_indicator = primary_indicator;
    }

    /// One-line analysis report for display.
    pub fn report(&self) -> String {
        format!(
            "Phishing Risk Score: {:?}, Flagged: {}, Major Indicator: {}",
            self.risk_score, self.flagged, self.primary_indicator
        )
    }
}
