//! Sequential per-agent lifecycle driver.

use crate::config::ProgressTiming;
use crate::core::{AgentOutcome, ResolvedGeneration};
use crate::events::{EventSink, OrchestratorEvent};
use crate::registry::AgentRegistry;
use crate::session::SessionHandle;
use rand::Rng;
use tracing::debug;

/// Resolves a terminal outcome for an agent the source left unreported.
///
/// Injected into the progressor so tests can force deterministic outcomes;
/// the production policy is [`RandomOutcomePolicy`].
pub trait OutcomePolicy: Send + Sync {
    /// Picks the terminal outcome for one agent.
    fn resolve(&self, agent: &str) -> AgentOutcome;
}

/// Default message attached to policy-resolved successes.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Completed successfully";

/// Default message attached to policy-resolved failures.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Process failed";

/// Resolves to `Succeeded` with a fixed probability, modeling real CI
/// variance for agents the server did not report on.
#[derive(Debug, Clone)]
pub struct RandomOutcomePolicy {
    success_probability: f64,
}

impl Default for RandomOutcomePolicy {
    fn default() -> Self {
        Self {
            success_probability: 0.9,
        }
    }
}

impl RandomOutcomePolicy {
    /// Creates a policy with the given success probability, clamped to
    /// `0.0..=1.0`.
    #[must_use]
    pub fn new(success_probability: f64) -> Self {
        Self {
            success_probability: success_probability.clamp(0.0, 1.0),
        }
    }
}

impl OutcomePolicy for RandomOutcomePolicy {
    fn resolve(&self, _agent: &str) -> AgentOutcome {
        if rand::thread_rng().gen::<f64>() < self.success_probability {
            AgentOutcome::succeeded(DEFAULT_SUCCESS_MESSAGE)
        } else {
            AgentOutcome::failed(DEFAULT_FAILURE_MESSAGE)
        }
    }
}

/// Drives each registry agent through `Pending -> Running -> terminal`,
/// strictly in registry order.
///
/// Agent *i+1* does not start until agent *i* is terminal, and a failed
/// agent never halts the pipeline: downstream agents still execute. Both
/// are design invariants, not timing artifacts.
#[derive(Debug, Clone)]
pub struct AgentProgressor {
    registry: AgentRegistry,
    timing: ProgressTiming,
}

impl AgentProgressor {
    /// Creates a progressor over a registry with the given timing.
    #[must_use]
    pub fn new(registry: AgentRegistry, timing: ProgressTiming) -> Self {
        Self { registry, timing }
    }

    /// Runs the full stage progression against a resolved generation.
    ///
    /// Explicit outcomes from `resolved` are applied verbatim; unreported
    /// agents are resolved through `policy`. Every transition is published
    /// to the session before the next dwell, so observers always see a
    /// valid intermediate state.
    pub async fn run(
        &self,
        session: &SessionHandle,
        resolved: &ResolvedGeneration,
        policy: &dyn OutcomePolicy,
        sink: &dyn EventSink,
    ) {
        for agent in self.registry.names() {
            tokio::time::sleep(self.timing.running_dwell()).await;
            session.write().mark_running(agent);
            sink.emit(&OrchestratorEvent::AgentRunning {
                agent: agent.to_string(),
            })
            .await;

            tokio::time::sleep(self.timing.resolve_dwell()).await;
            let outcome = resolved
                .outcome_for(agent)
                .cloned()
                .unwrap_or_else(|| policy.resolve(agent));

            debug!(agent, status = %outcome.status, "agent resolved");
            let status = outcome.status;
            session.write().resolve(agent, outcome);
            sink.emit(&OrchestratorEvent::AgentResolved {
                agent: agent.to_string(),
                status,
            })
            .await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentStatus;
    use crate::events::CollectingEventSink;
    use crate::session::new_session_handle;
    use crate::testing::{FixedOutcomePolicy, ScriptedOutcomePolicy};

    fn setup(registry: &AgentRegistry) -> SessionHandle {
        let session = new_session_handle();
        session.write().reset_for("p", registry);
        session
    }

    #[tokio::test]
    async fn test_all_agents_reach_terminal_in_order() {
        let registry = AgentRegistry::default();
        let session = setup(&registry);
        let progressor = AgentProgressor::new(registry.clone(), ProgressTiming::zero());
        let sink = CollectingEventSink::new();
        let policy = FixedOutcomePolicy::succeeding();

        progressor
            .run(
                &session,
                &ResolvedGeneration::new("code"),
                &policy,
                &sink,
            )
            .await;

        let snapshot = session.read().clone();
        assert!(snapshot.all_terminal());
        let agents: Vec<String> = snapshot.reports.iter().map(|r| r.agent.clone()).collect();
        assert_eq!(agents, vec!["Build", "Test", "Deploy"]);
    }

    #[tokio::test]
    async fn test_explicit_outcome_used_verbatim() {
        let registry = AgentRegistry::default();
        let session = setup(&registry);
        let progressor = AgentProgressor::new(registry, ProgressTiming::zero());
        let sink = CollectingEventSink::new();
        // Policy would fail everything; the explicit Build outcome must win.
        let policy = FixedOutcomePolicy::failing();

        let resolved = ResolvedGeneration::new("code")
            .with_outcome("Build", AgentOutcome::succeeded("server says ok"));
        progressor.run(&session, &resolved, &policy, &sink).await;

        let snapshot = session.read().clone();
        let build = snapshot.report_for("Build").unwrap();
        assert_eq!(build.status, AgentStatus::Succeeded);
        assert_eq!(build.message.as_deref(), Some("server says ok"));

        for agent in ["Test", "Deploy"] {
            let report = snapshot.report_for(agent).unwrap();
            assert_eq!(report.status, AgentStatus::Failed);
            assert_eq!(report.message.as_deref(), Some(DEFAULT_FAILURE_MESSAGE));
        }
    }

    #[tokio::test]
    async fn test_failure_does_not_halt_pipeline() {
        let registry = AgentRegistry::default();
        let session = setup(&registry);
        let progressor = AgentProgressor::new(registry, ProgressTiming::zero());
        let sink = CollectingEventSink::new();
        let policy = ScriptedOutcomePolicy::new()
            .with("Build", AgentOutcome::failed("broken"))
            .with_default(AgentOutcome::succeeded(DEFAULT_SUCCESS_MESSAGE));

        progressor
            .run(
                &session,
                &ResolvedGeneration::new("code"),
                &policy,
                &sink,
            )
            .await;

        let snapshot = session.read().clone();
        assert_eq!(
            snapshot.report_for("Build").map(|r| r.status),
            Some(AgentStatus::Failed)
        );
        assert_eq!(
            snapshot.report_for("Test").map(|r| r.status),
            Some(AgentStatus::Succeeded)
        );
        assert_eq!(
            snapshot.report_for("Deploy").map(|r| r.status),
            Some(AgentStatus::Succeeded)
        );
    }

    #[tokio::test]
    async fn test_event_sequence_alternates_running_resolved() {
        let registry = AgentRegistry::default();
        let session = setup(&registry);
        let progressor = AgentProgressor::new(registry.clone(), ProgressTiming::zero());
        let sink = CollectingEventSink::new();
        let policy = FixedOutcomePolicy::succeeding();

        progressor
            .run(
                &session,
                &ResolvedGeneration::new("code"),
                &policy,
                &sink,
            )
            .await;

        let kinds: Vec<&str> = sink.events().iter().map(OrchestratorEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "agent.running",
                "agent.resolved",
                "agent.running",
                "agent.resolved",
                "agent.running",
                "agent.resolved",
            ]
        );
    }

    #[test]
    fn test_random_policy_extremes_are_deterministic() {
        let always = RandomOutcomePolicy::new(1.0);
        let never = RandomOutcomePolicy::new(0.0);
        for _ in 0..50 {
            assert_eq!(always.resolve("Build").status, AgentStatus::Succeeded);
            assert_eq!(never.resolve("Build").status, AgentStatus::Failed);
        }
    }

    #[test]
    fn test_random_policy_clamps_probability() {
        let policy = RandomOutcomePolicy::new(7.0);
        assert_eq!(policy.resolve("Build").status, AgentStatus::Succeeded);
    }
}
