pub mod analysis;
pub mod audit;
pub mod message;
pub mod persistence;
pub mod scorer;

pub use analysis::EmailAnalysis;
pub use audit::{AuditEvent, AuditLog, LoggerAudit, NullAudit};
pub use message::Message;
pub use scorer::{score, ScoreResult};
