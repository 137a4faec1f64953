//! Typed orchestration events and the sink trait the presentation layer
//! subscribes to.

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

use crate::core::AgentStatus;
use serde::Serialize;

/// An observable state change during one generation run.
///
/// Events are emitted in a fixed order: `GenerationStarted`, optionally
/// `FallbackEngaged`, `ArtifactReady`, then for each registry agent
/// `AgentRunning` followed by `AgentResolved`, and finally
/// `GenerationCompleted`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrchestratorEvent {
    /// A generation run was accepted and the session was reset.
    GenerationStarted {
        /// The trimmed prompt driving the run.
        prompt: String,
    },

    /// The remote call failed and the local fallback took over.
    FallbackEngaged {
        /// The transport failure that triggered the fallback.
        reason: String,
    },

    /// The resolved artifact was published to the session.
    ArtifactReady {
        /// Length of the artifact text in bytes.
        bytes: usize,
    },

    /// An agent moved from `Pending` to `Running`.
    AgentRunning {
        /// The agent name.
        agent: String,
    },

    /// An agent reached a terminal state.
    AgentResolved {
        /// The agent name.
        agent: String,
        /// The terminal status it resolved to.
        status: AgentStatus,
    },

    /// The run finished and a history record was committed.
    GenerationCompleted {
        /// Id of the appended history record.
        record_id: String,
    },
}

impl OrchestratorEvent {
    /// A short event-type label, used for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GenerationStarted { .. } => "generation.started",
            Self::FallbackEngaged { .. } => "generation.fallback",
            Self::ArtifactReady { .. } => "generation.artifact_ready",
            Self::AgentRunning { .. } => "agent.running",
            Self::AgentResolved { .. } => "agent.resolved",
            Self::GenerationCompleted { .. } => "generation.completed",
        }
    }
}
