//! Immutable history records of completed generation attempts.

use super::AgentReport;
use crate::utils::{generate_id, now_utc, Timestamp};
use serde::{Deserialize, Serialize};

/// A snapshot of one completed (or fallback-completed) generation attempt.
///
/// Records are created once by the orchestrator's completion step and never
/// mutated afterwards; the history store owns them from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique record id.
    pub id: String,

    /// The prompt that triggered the generation.
    pub prompt: String,

    /// When the record was created.
    pub created_at: Timestamp,

    /// The final artifact text.
    pub artifact: String,

    /// The final per-agent reports, in registry order, all terminal.
    pub reports: Vec<AgentReport>,
}

impl HistoryRecord {
    /// Creates a record from a finished session snapshot.
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        artifact: impl Into<String>,
        reports: Vec<AgentReport>,
    ) -> Self {
        Self {
            id: generate_id(),
            prompt: prompt.into(),
            created_at: now_utc(),
            artifact: artifact.into(),
            reports,
        }
    }
}
