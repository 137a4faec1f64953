//! Agent lifecycle status enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The lifecycle status of a pipeline agent during one generation attempt.
///
/// Every agent starts at `Pending`, moves to `Running`, and ends in exactly
/// one of the terminal states. The serialized names match the wire format
/// used by the remote generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    /// Agent has not started yet.
    Pending,
    /// Agent is currently executing.
    Running,
    /// Agent finished successfully.
    #[serde(rename = "success")]
    Succeeded,
    /// Agent finished with a failure.
    #[serde(rename = "failed")]
    Failed,
}

impl Default for AgentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Running => write!(f, "running"),
            Self::Succeeded => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl AgentStatus {
    /// Returns true if the status is a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Returns true if the status indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// Returns true if the status indicates failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }
}
