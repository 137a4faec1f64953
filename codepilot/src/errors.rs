//! Error types for the codepilot orchestration engine.
//!
//! The taxonomy is intentionally small: transport faults are recovered via
//! the fallback synthesizer at the orchestrator boundary, and individual
//! agent failures travel as status data, never as errors. Validation and
//! re-entrancy rejections are expressed through
//! [`StartOutcome`](crate::orchestrator::StartOutcome) rather than this
//! module.

use thiserror::Error;

/// A failed exchange with the remote generation service.
///
/// The variants preserve diagnostic detail (status code, underlying cause)
/// but callers treat all of them uniformly: one failed attempt is final and
/// triggers the fallback path, never a retry.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The service responded outside the HTTP success range.
    #[error("remote generation endpoint returned HTTP {status}")]
    Http {
        /// The response status code, kept as diagnostic detail only.
        status: u16,
    },

    /// The request never produced a response.
    #[error("request to remote generation endpoint failed: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("malformed response from remote generation endpoint: {0}")]
    MalformedResponse(String),
}

/// The crate-level error type.
///
/// Transport faults never reach this enum: the orchestrator converts every
/// [`TransportError`] into the fallback outcome, so the only failures that
/// escape to callers are construction-time ones.
#[derive(Debug, Error)]
pub enum CodepilotError {
    /// A component could not be constructed from its configuration.
    #[error("misconfiguration: {0}")]
    Misconfiguration(String),
}
