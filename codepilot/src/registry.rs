//! The fixed ordered list of pipeline agents.

use crate::core::AgentReport;
use serde::{Deserialize, Serialize};

/// Default agent pipeline, in execution order.
pub const DEFAULT_AGENTS: [&str; 3] = ["Build", "Test", "Deploy"];

/// The ordered set of agent names used by every generation run.
///
/// The set and order are configuration, not derived data; the registry is
/// pure, stateless, and read-only once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRegistry {
    agents: Vec<String>,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self {
            agents: DEFAULT_AGENTS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl AgentRegistry {
    /// Creates a registry from an ordered list of agent names.
    #[must_use]
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the agent names in execution order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.agents.iter().map(String::as_str)
    }

    /// Returns the number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Returns the position of an agent in the pipeline, if present.
    #[must_use]
    pub fn position(&self, agent: &str) -> Option<usize> {
        self.agents.iter().position(|a| a == agent)
    }

    /// Builds the initial all-`Pending` report list for one attempt.
    #[must_use]
    pub fn initial_reports(&self) -> Vec<AgentReport> {
        self.agents
            .iter()
            .map(|agent| AgentReport::pending(agent.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentStatus;

    #[test]
    fn test_default_registry_order() {
        let registry = AgentRegistry::default();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Build", "Test", "Deploy"]);
    }

    #[test]
    fn test_custom_registry() {
        let registry = AgentRegistry::new(["Lint", "Build"]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.position("Build"), Some(1));
        assert_eq!(registry.position("Deploy"), None);
    }

    #[test]
    fn test_initial_reports_all_pending_in_order() {
        let registry = AgentRegistry::default();
        let reports = registry.initial_reports();

        assert_eq!(reports.len(), 3);
        for (report, name) in reports.iter().zip(registry.names()) {
            assert_eq!(report.agent, name);
            assert_eq!(report.status, AgentStatus::Pending);
        }
    }
}
