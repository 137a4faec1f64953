//! Core data model: agent statuses, per-agent reports, and history records.

mod record;
mod report;
mod status;

pub use record::HistoryRecord;
pub use report::{AgentOutcome, AgentReport, ReportedOutcome, ResolvedGeneration};
pub use status::AgentStatus;
