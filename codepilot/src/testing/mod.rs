//! Test doubles for the client and policy seams.
//!
//! Public so downstream consumers can exercise the orchestrator without a
//! live generation endpoint.

mod mocks;

pub use mocks::{
    FailingGenerationClient, FixedOutcomePolicy, ScriptedOutcomePolicy, StubGenerationClient,
};
