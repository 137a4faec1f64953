//! The live generation session observed by the presentation layer.

use crate::core::{AgentOutcome, AgentReport};
use crate::registry::AgentRegistry;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// Shared handle to the active session.
///
/// Single writer (the orchestrator), many readers (presentation). The lock
/// is held only for individual field updates, so every intermediate state a
/// reader can observe is a valid one.
pub type SessionHandle = Arc<RwLock<GenerationSession>>;

/// Creates a fresh idle session behind a shared handle.
#[must_use]
pub fn new_session_handle() -> SessionHandle {
    Arc::new(RwLock::new(GenerationSession::default()))
}

/// Transient state of one generation attempt.
///
/// Created (reset in place) at the start of each run, snapshotted into a
/// history record when the pipeline finishes, and overwritten wholesale when
/// a history record is replayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationSession {
    /// The prompt text driving (or last driving) the pipeline.
    pub prompt: String,

    /// The current artifact text; empty until a source resolves one.
    pub artifact: String,

    /// One report per registry agent, in registry order.
    pub reports: Vec<AgentReport>,

    /// Whether a generation run is currently in flight.
    pub in_progress: bool,
}

impl GenerationSession {
    /// Resets the session for a new run: stores the prompt, clears the
    /// artifact, re-initializes all reports to `Pending`, and raises the
    /// in-progress flag.
    pub fn reset_for(&mut self, prompt: &str, registry: &AgentRegistry) {
        self.prompt = prompt.to_string();
        self.artifact.clear();
        self.reports = registry.initial_reports();
        self.in_progress = true;
    }

    /// Marks the named agent as running.
    pub fn mark_running(&mut self, agent: &str) {
        if let Some(report) = self.reports.iter_mut().find(|r| r.agent == agent) {
            report.mark_running();
        }
    }

    /// Applies a terminal outcome to the named agent.
    pub fn resolve(&mut self, agent: &str, outcome: AgentOutcome) {
        if let Some(report) = self.reports.iter_mut().find(|r| r.agent == agent) {
            report.resolve(outcome);
        }
    }

    /// Returns the report for the named agent, if present.
    #[must_use]
    pub fn report_for(&self, agent: &str) -> Option<&AgentReport> {
        self.reports.iter().find(|r| r.agent == agent)
    }

    /// Returns true if every report has reached a terminal state.
    #[must_use]
    pub fn all_terminal(&self) -> bool {
        self.reports.iter().all(AgentReport::is_terminal)
    }

    /// Returns how many reports are currently `Running`.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.status == crate::core::AgentStatus::Running)
            .count()
    }
}
