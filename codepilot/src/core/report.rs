//! Per-agent report and outcome types.

use super::AgentStatus;
use serde::{Deserialize, Serialize};

/// The visible status entry for one agent during a generation attempt.
///
/// Exactly one report exists per registry agent per attempt. Reports are
/// mutated in place by the progressor as the agent moves through its
/// lifecycle, then frozen into a [`HistoryRecord`](super::HistoryRecord).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReport {
    /// The agent name (identity within the registry).
    pub agent: String,

    /// Current lifecycle status.
    pub status: AgentStatus,

    /// Optional human-readable message attached at resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AgentReport {
    /// Creates a pending report for an agent.
    #[must_use]
    pub fn pending(agent: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            status: AgentStatus::Pending,
            message: None,
        }
    }

    /// Marks the report as running.
    pub fn mark_running(&mut self) {
        self.status = AgentStatus::Running;
    }

    /// Applies a terminal outcome to the report.
    pub fn resolve(&mut self, outcome: AgentOutcome) {
        self.status = outcome.status;
        self.message = outcome.message;
    }

    /// Returns true if the report has reached a terminal state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// A terminal outcome for a single agent: status plus optional message.
///
/// Constructors only produce terminal statuses; the progressor applies an
/// outcome verbatim whether it came from the server, the fallback, or the
/// default policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentOutcome {
    /// The terminal status.
    pub status: AgentStatus,

    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AgentOutcome {
    /// Creates a succeeded outcome with a message.
    #[must_use]
    pub fn succeeded(message: impl Into<String>) -> Self {
        Self {
            status: AgentStatus::Succeeded,
            message: Some(message.into()),
        }
    }

    /// Creates a failed outcome with a message.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: AgentStatus::Failed,
            message: Some(message.into()),
        }
    }

    /// Creates an outcome from an already-terminal status.
    ///
    /// Returns `None` if the status is not terminal.
    #[must_use]
    pub fn terminal(status: AgentStatus, message: Option<String>) -> Option<Self> {
        status.is_terminal().then_some(Self { status, message })
    }
}

/// An explicit outcome the generation source reported for a named agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedOutcome {
    /// The agent the outcome belongs to.
    pub agent: String,

    /// The terminal outcome to apply verbatim.
    pub outcome: AgentOutcome,
}

/// The normalized output of one generation source (remote or fallback).
///
/// Agents without an entry in `outcomes` are left for the progressor to
/// resolve via its default policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGeneration {
    /// The generated artifact text.
    pub artifact: String,

    /// Explicit per-agent outcomes, possibly empty.
    pub outcomes: Vec<ReportedOutcome>,
}

impl ResolvedGeneration {
    /// Creates a resolved generation with no explicit outcomes.
    #[must_use]
    pub fn new(artifact: impl Into<String>) -> Self {
        Self {
            artifact: artifact.into(),
            outcomes: Vec::new(),
        }
    }

    /// Adds an explicit outcome for an agent.
    #[must_use]
    pub fn with_outcome(mut self, agent: impl Into<String>, outcome: AgentOutcome) -> Self {
        self.outcomes.push(ReportedOutcome {
            agent: agent.into(),
            outcome,
        });
        self
    }

    /// Looks up the explicit outcome for an agent, if the source supplied one.
    #[must_use]
    pub fn outcome_for(&self, agent: &str) -> Option<&AgentOutcome> {
        self.outcomes
            .iter()
            .find(|reported| reported.agent == agent)
            .map(|reported| &reported.outcome)
    }
}
