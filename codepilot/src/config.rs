//! Configuration for the orchestrator and its collaborators.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default endpoint of the remote code-generation service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/generate";

/// Dwell times the progressor uses to make stage transitions visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressTiming {
    /// Delay before an agent moves from `Pending` to `Running`.
    pub running_dwell_ms: u64,

    /// Delay an agent spends `Running` before its terminal outcome resolves.
    pub resolve_dwell_ms: u64,
}

impl Default for ProgressTiming {
    fn default() -> Self {
        Self {
            running_dwell_ms: 800,
            resolve_dwell_ms: 1200,
        }
    }
}

impl ProgressTiming {
    /// Zero-delay timing, used in tests to run pipelines instantly.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            running_dwell_ms: 0,
            resolve_dwell_ms: 0,
        }
    }

    /// The `Pending` to `Running` dwell as a duration.
    #[must_use]
    pub fn running_dwell(&self) -> Duration {
        Duration::from_millis(self.running_dwell_ms)
    }

    /// The `Running` to terminal dwell as a duration.
    #[must_use]
    pub fn resolve_dwell(&self) -> Duration {
        Duration::from_millis(self.resolve_dwell_ms)
    }
}

/// Top-level orchestrator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Endpoint the HTTP generation client posts prompts to.
    pub endpoint: String,

    /// Timeout for the remote generation request, in seconds.
    pub request_timeout_secs: u64,

    /// Per-stage dwell times.
    pub timing: ProgressTiming,

    /// Probability the default policy resolves an agent to `Succeeded`.
    pub success_probability: f64,

    /// Maximum number of history records retained.
    pub history_capacity: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            timing: ProgressTiming::default(),
            success_probability: 0.9,
            history_capacity: 10,
        }
    }
}

impl OrchestratorConfig {
    /// Creates a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generation endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Sets the progress timing.
    #[must_use]
    pub fn with_timing(mut self, timing: ProgressTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Sets the default success probability, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_success_probability(mut self, p: f64) -> Self {
        self.success_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// The request timeout as a duration.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
