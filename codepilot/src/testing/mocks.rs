//! Mock clients and deterministic outcome policies.

use crate::client::GenerationClient;
use crate::core::{AgentOutcome, ResolvedGeneration};
use crate::errors::TransportError;
use crate::progress::OutcomePolicy;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// A generation client that records calls and returns a configurable
/// response.
#[derive(Debug)]
pub struct StubGenerationClient {
    response: Mutex<ResolvedGeneration>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerationClient {
    /// Creates a stub that returns the given artifact with no explicit
    /// outcomes.
    #[must_use]
    pub fn with_artifact(artifact: impl Into<String>) -> Self {
        Self::with_response(ResolvedGeneration::new(artifact))
    }

    /// Creates a stub that returns the given resolved generation.
    #[must_use]
    pub fn with_response(response: ResolvedGeneration) -> Self {
        Self {
            response: Mutex::new(response),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the configured response.
    pub fn set_response(&self, response: ResolvedGeneration) {
        *self.response.lock() = response;
    }

    /// Number of times `generate` was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }

    /// The prompts received, in call order.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl GenerationClient for StubGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<ResolvedGeneration, TransportError> {
        self.prompts.lock().push(prompt.to_string());
        Ok(self.response.lock().clone())
    }
}

/// A generation client that always fails with a configurable transport
/// error.
#[derive(Debug)]
pub struct FailingGenerationClient {
    error: TransportError,
    calls: Mutex<usize>,
}

impl FailingGenerationClient {
    /// Fails with a network error, as if the endpoint were unreachable.
    #[must_use]
    pub fn unreachable() -> Self {
        Self::with_error(TransportError::Network("connection refused".to_string()))
    }

    /// Fails with the given HTTP status.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self::with_error(TransportError::Http { status })
    }

    /// Fails with an arbitrary transport error.
    #[must_use]
    pub fn with_error(error: TransportError) -> Self {
        Self {
            error,
            calls: Mutex::new(0),
        }
    }

    /// Number of times `generate` was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl GenerationClient for FailingGenerationClient {
    async fn generate(&self, _prompt: &str) -> Result<ResolvedGeneration, TransportError> {
        *self.calls.lock() += 1;
        Err(self.error.clone())
    }
}

/// A policy that resolves every agent to the same outcome.
#[derive(Debug, Clone)]
pub struct FixedOutcomePolicy {
    outcome: AgentOutcome,
}

impl FixedOutcomePolicy {
    /// Creates a policy resolving every agent to the given outcome.
    #[must_use]
    pub fn new(outcome: AgentOutcome) -> Self {
        Self { outcome }
    }

    /// Succeeds every agent with the default success message.
    #[must_use]
    pub fn succeeding() -> Self {
        Self::new(AgentOutcome::succeeded(
            crate::progress::DEFAULT_SUCCESS_MESSAGE,
        ))
    }

    /// Fails every agent with the default failure message.
    #[must_use]
    pub fn failing() -> Self {
        Self::new(AgentOutcome::failed(
            crate::progress::DEFAULT_FAILURE_MESSAGE,
        ))
    }
}

impl OutcomePolicy for FixedOutcomePolicy {
    fn resolve(&self, _agent: &str) -> AgentOutcome {
        self.outcome.clone()
    }
}

/// A policy that resolves named agents per a script, with a default for the
/// rest.
#[derive(Debug, Clone)]
pub struct ScriptedOutcomePolicy {
    script: HashMap<String, AgentOutcome>,
    default: AgentOutcome,
}

impl Default for ScriptedOutcomePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedOutcomePolicy {
    /// Creates an empty script that succeeds unnamed agents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
            default: AgentOutcome::succeeded(crate::progress::DEFAULT_SUCCESS_MESSAGE),
        }
    }

    /// Scripts the outcome for one agent.
    #[must_use]
    pub fn with(mut self, agent: impl Into<String>, outcome: AgentOutcome) -> Self {
        self.script.insert(agent.into(), outcome);
        self
    }

    /// Sets the outcome for unscripted agents.
    #[must_use]
    pub fn with_default(mut self, outcome: AgentOutcome) -> Self {
        self.default = outcome;
        self
    }
}

impl OutcomePolicy for ScriptedOutcomePolicy {
    fn resolve(&self, agent: &str) -> AgentOutcome {
        self.script.get(agent).cloned().unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentStatus;

    #[test]
    fn test_stub_client_records_prompts() {
        let stub = StubGenerationClient::with_artifact("code");
        let resolved = tokio_test::block_on(stub.generate("first")).unwrap();
        assert_eq!(resolved.artifact, "code");

        stub.set_response(ResolvedGeneration::new("other"));
        let resolved = tokio_test::block_on(stub.generate("second")).unwrap();
        assert_eq!(resolved.artifact, "other");

        assert_eq!(stub.call_count(), 2);
        assert_eq!(stub.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_failing_client_preserves_error_detail() {
        let failing = FailingGenerationClient::with_status(502);
        let err = failing.generate("p").await.unwrap_err();
        assert!(matches!(err, TransportError::Http { status: 502 }));
        assert_eq!(failing.call_count(), 1);
    }

    #[test]
    fn test_scripted_policy_falls_back_to_default() {
        let policy = ScriptedOutcomePolicy::new()
            .with("Test", AgentOutcome::failed("flaky suite"));

        assert_eq!(policy.resolve("Test").status, AgentStatus::Failed);
        assert_eq!(policy.resolve("Build").status, AgentStatus::Succeeded);
        assert_eq!(policy.resolve("Deploy").status, AgentStatus::Succeeded);
    }
}
