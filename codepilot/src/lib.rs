//! # Codepilot
//!
//! The generation-and-agent-status orchestration engine behind a
//! prompt-driven code-generation frontend.
//!
//! Codepilot manages one in-flight generation request at a time:
//!
//! - **Remote-or-fallback resolution**: a single request/response exchange
//!   against a code-generation service, with a deterministic local fallback
//!   when the service is unreachable
//! - **Stage progression**: a fixed ordered pipeline of named agents driven
//!   through `Pending -> Running -> terminal`, one at a time
//! - **Observable sessions**: an explicit session object plus typed events
//!   the presentation layer subscribes to
//! - **Bounded history**: a capped, most-recent-first record list with
//!   replay
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use codepilot::prelude::*;
//!
//! let config = OrchestratorConfig::default();
//! let orchestrator = GenerationOrchestrator::from_config(&config)?;
//!
//! orchestrator.start("build a chatbot").await;
//! let session = orchestrator.snapshot();
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod client;
pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod fallback;
pub mod history;
pub mod observability;
pub mod orchestrator;
pub mod progress;
pub mod registry;
pub mod session;
pub mod testing;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{GenerationClient, HttpGenerationClient};
    pub use crate::config::{OrchestratorConfig, ProgressTiming};
    pub use crate::core::{
        AgentOutcome, AgentReport, AgentStatus, HistoryRecord, ResolvedGeneration,
    };
    pub use crate::errors::{CodepilotError, TransportError};
    pub use crate::events::{
        CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink, OrchestratorEvent,
    };
    pub use crate::fallback::FallbackSynthesizer;
    pub use crate::history::HistoryStore;
    pub use crate::orchestrator::{GenerationOrchestrator, StartOutcome};
    pub use crate::progress::{AgentProgressor, OutcomePolicy, RandomOutcomePolicy};
    pub use crate::registry::AgentRegistry;
    pub use crate::session::{GenerationSession, SessionHandle};
    pub use crate::utils::{generate_id, now_utc, Timestamp};
}
