use crate::message::{Message, INDICATOR_NOT_FLAGGED};

/// Indicator names recognized by the aggregation queries. Anything else on a
/// flagged message is ignored by the counters.
pub const INDICATOR_SUBJECT: &str = "Common Phishing Word in Subject";
pub const INDICATOR_BODY: &str = "Body Length";
pub const INDICATOR_URL: &str = "Non-ASCII Character Identified in URL";

/// A message whose total risk score reaches this value is flagged.
pub const FLAG_THRESHOLD: f64 = 40.0;

const SUBJECT_KEYWORDS: [&str; 3] = ["urgent", "verify now", "limited offer"];
const EMPTY_SUBJECT_SCORE: f64 = 10.0;
const KEYWORD_SUBJECT_SCORE: f64 = 30.0;
const SHORT_BODY_SCORE: f64 = 25.0;
const SHORT_BODY_LIMIT: usize = 90;
const NON_ASCII_URL_SCORE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub risk_score: f64,
    pub flagged: bool,
    pub primary_indicator: String,
}

/// Scores one message against the fixed rule set and writes the derived fields
/// back into it. Total over any string input, deterministic, idempotent.
pub fn score(message: &mut Message) -> ScoreResult {
    let subject_score = score_subject(message.subject());
    let body_score = score_body(message.body());
    let url_score = score_url(message.url());

    let risk_score = subject_score + body_score + url_score;
    let flagged = risk_score >= FLAG_THRESHOLD;

    // Sequential >= chain, not a symmetric max: subject wins ties against body
    // and url, body wins ties against url.
    let primary_indicator = if !flagged {
        INDICATOR_NOT_FLAGGED
    } else if subject_score >= body_score && subject_score >= url_score && subject_score > 0.0 {
        INDICATOR_SUBJECT
    } else if body_score >= subject_score && body_score >= url_score && body_score > 0.0 {
        INDICATOR_BODY
    } else {
        INDICATOR_URL
    }
    .to_string();

    message.apply_score(risk_score, flagged, primary_indicator.clone());
    log::debug!(
        "scored message from '{}': {} (flagged: {})",
        message.sender(),
        risk_score,
        flagged
    );

    ScoreResult {
        risk_score,
        flagged,
        primary_indicator,
    }
}

fn score_subject(subject: &str) -> f64 {
    if subject.is_empty() {
        return EMPTY_SUBJECT_SCORE;
    }
    let lower = subject.to_lowercase();
    if SUBJECT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        KEYWORD_SUBJECT_SCORE
    } else {
        0.0
    }
}

// Empty and short bodies score the same, so one length check covers both.
fn score_body(body: &str) -> f64 {
    if body.chars().count() < SHORT_BODY_LIMIT {
        SHORT_BODY_SCORE
    } else {
        0.0
    }
}

// `any` stops at the first non-ASCII character; an empty url scores 0.0.
fn score_url(url: &str) -> f64 {
    if url.chars().any(|c| !c.is_ascii()) {
        NON_ASCII_URL_SCORE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_BODY: &str = "This is a perfectly ordinary message body that runs well past the \
                             ninety character limit used by the body rule.";

    #[test]
    fn plain_subject_contributes_nothing() {
        let mut message = Message::new("a@b.com", "Quarterly report attached", LONG_BODY, "");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 0.0);
        assert!(!result.flagged);
        assert_eq!(result.primary_indicator, INDICATOR_NOT_FLAGGED);
    }

    #[test]
    fn all_empty_fields_score_thirty_five_unflagged() {
        let mut message = Message::new("", "", "", "");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 35.0);
        assert!(!result.flagged);
        assert!(!message.is_flagged());
        assert_eq!(message.primary_indicator(), INDICATOR_NOT_FLAGGED);
    }

    #[test]
    fn urgent_subject_with_non_ascii_url_and_empty_body() {
        let mut message = Message::new("a@b.com", "URGENT: act today", "", "http://ехample.com");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 75.0);
        assert!(result.flagged);
        assert_eq!(result.primary_indicator, INDICATOR_SUBJECT);
    }

    #[test]
    fn keyword_match_is_case_insensitive_and_phrase_based() {
        let mut message = Message::new("", "Limited Offer just for you", LONG_BODY, "");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 30.0);
        assert!(!result.flagged);
    }

    #[test]
    fn ascii_url_with_empty_subject_and_body_stays_unflagged() {
        let mut message = Message::new("a@b.com", "", "", "http://example.com");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 35.0);
        assert!(!result.flagged);
    }

    #[test]
    fn body_wins_over_url_when_subject_score_is_lower() {
        // empty subject (10) + empty body (25) + non-ASCII url (20) = 55
        let mut message = Message::new("a@b.com", "", "", "http://例え.jp");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 55.0);
        assert!(result.flagged);
        assert_eq!(result.primary_indicator, INDICATOR_BODY);
    }

    #[test]
    fn subject_wins_when_its_score_is_highest() {
        // keyword subject (30) + short body (25) + non-ASCII url (20) = 75
        let mut message = Message::new("a@b.com", "verify now", "short", "http://例え.jp");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 75.0);
        assert_eq!(result.primary_indicator, INDICATOR_SUBJECT);
    }

    #[test]
    fn body_at_ninety_characters_scores_zero() {
        let body = "x".repeat(90);
        let mut message = Message::new("", "verify now", body, "");
        let result = score(&mut message);
        assert_eq!(result.risk_score, 30.0);
        assert!(!result.flagged);
    }

    #[test]
    fn rescoring_is_idempotent() {
        let mut message = Message::new("a@b.com", "urgent", "", "http://例え.jp");
        let first = score(&mut message);
        let second = score(&mut message);
        assert_eq!(first, second);
        assert_eq!(message.risk_score(), first.risk_score);
        assert_eq!(message.primary_indicator(), first.primary_indicator);
    }
}
