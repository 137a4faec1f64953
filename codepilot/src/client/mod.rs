//! Remote generation client: trait, wire format, and the HTTP implementation.
//!
//! A client performs exactly one request/response exchange per generation
//! attempt. Transport failures of any kind surface uniformly as
//! [`TransportError`]; the orchestrator recovers from them via the fallback
//! synthesizer, never by retrying.

mod http;

pub use http::HttpGenerationClient;

use crate::core::{AgentOutcome, AgentStatus, ResolvedGeneration};
use crate::errors::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One request/response exchange against the remote generation service.
///
/// Implementations must not retry: a single failed attempt is final for
/// that generation attempt. Callers are responsible for validating that the
/// prompt is non-empty before invoking.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Sends the prompt and returns the normalized generation result.
    async fn generate(&self, prompt: &str) -> Result<ResolvedGeneration, TransportError>;
}

/// Request body posted to the generation endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub prompt: &'a str,
}

/// Raw success response body from the generation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The generated code text.
    pub code: String,

    /// Optional per-agent outcomes; agents without an entry are resolved by
    /// the caller's default policy.
    #[serde(default)]
    pub statuses: Option<Vec<WireAgentStatus>>,
}

/// One server-reported agent status as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct WireAgentStatus {
    /// The agent name.
    pub agent: String,

    /// The reported status string (`"success"`, `"failed"`, ...).
    pub status: String,

    /// Optional message to attach verbatim.
    #[serde(default)]
    pub message: Option<String>,
}

impl WireAgentStatus {
    /// Interprets the wire status string as a terminal outcome.
    ///
    /// Only `"success"` and `"failed"` map to explicit outcomes; any other
    /// string is treated as "no explicit outcome" so the default policy
    /// resolves the agent instead.
    #[must_use]
    pub fn as_outcome(&self) -> Option<AgentOutcome> {
        let status = match self.status.as_str() {
            "success" => AgentStatus::Succeeded,
            "failed" => AgentStatus::Failed,
            _ => return None,
        };
        Some(AgentOutcome {
            status,
            message: self.message.clone(),
        })
    }
}

impl GenerateResponse {
    /// Normalizes the wire response into a [`ResolvedGeneration`].
    #[must_use]
    pub fn into_resolved(self) -> ResolvedGeneration {
        let mut resolved = ResolvedGeneration::new(self.code);
        for wire in self.statuses.unwrap_or_default() {
            if let Some(outcome) = wire.as_outcome() {
                resolved = resolved.with_outcome(wire.agent, outcome);
            }
        }
        resolved
    }
}
