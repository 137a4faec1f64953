//! Top-level generation coordinator.

use crate::client::{GenerationClient, HttpGenerationClient};
use crate::config::{OrchestratorConfig, ProgressTiming};
use crate::core::HistoryRecord;
use crate::errors::CodepilotError;
use crate::events::{EventSink, NoOpEventSink, OrchestratorEvent};
use crate::fallback::FallbackSynthesizer;
use crate::history::HistoryStore;
use crate::progress::{AgentProgressor, OutcomePolicy, RandomOutcomePolicy};
use crate::registry::AgentRegistry;
use crate::session::{new_session_handle, GenerationSession, SessionHandle};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// How a `start` call was handled.
///
/// Rejections are silent no-ops by design: the session is left untouched
/// and nothing is appended to history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// The run executed to completion and a history record was committed.
    Completed {
        /// Id of the committed record.
        record_id: String,
    },

    /// The prompt was empty after trimming whitespace.
    RejectedEmptyPrompt,

    /// Another generation was already in flight.
    Busy,
}

/// Coordinates one in-flight generation: validates input, resets the
/// session, resolves an artifact remotely or via fallback, drives the stage
/// progression, and commits a history record.
///
/// There is no pipeline-fatal path: transport faults are converted to the
/// fallback outcome at this boundary, and individual agent failures travel
/// only as status data.
pub struct GenerationOrchestrator {
    registry: AgentRegistry,
    client: Arc<dyn GenerationClient>,
    policy: Arc<dyn OutcomePolicy>,
    sink: Arc<dyn EventSink>,
    timing: ProgressTiming,
    session: SessionHandle,
    history: Arc<RwLock<HistoryStore>>,
}

impl GenerationOrchestrator {
    /// Creates an orchestrator over the given client with default registry,
    /// policy, timing, and history capacity.
    #[must_use]
    pub fn new(client: Arc<dyn GenerationClient>) -> Self {
        Self {
            registry: AgentRegistry::default(),
            client,
            policy: Arc::new(RandomOutcomePolicy::default()),
            sink: Arc::new(NoOpEventSink),
            timing: ProgressTiming::default(),
            session: new_session_handle(),
            history: Arc::new(RwLock::new(HistoryStore::default())),
        }
    }

    /// Creates an orchestrator backed by the HTTP client described by the
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CodepilotError::Misconfiguration`] if the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &OrchestratorConfig) -> Result<Self, CodepilotError> {
        let client = HttpGenerationClient::new(config)?;
        Ok(Self::new(Arc::new(client))
            .with_timing(config.timing.clone())
            .with_policy(Arc::new(RandomOutcomePolicy::new(
                config.success_probability,
            )))
            .with_history_capacity(config.history_capacity))
    }

    /// Replaces the agent registry.
    #[must_use]
    pub fn with_registry(mut self, registry: AgentRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Replaces the default outcome policy.
    #[must_use]
    pub fn with_policy(mut self, policy: Arc<dyn OutcomePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the progress timing.
    #[must_use]
    pub fn with_timing(mut self, timing: ProgressTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Replaces the history store with an empty one of the given capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = Arc::new(RwLock::new(HistoryStore::new(capacity)));
        self
    }

    /// The shared session handle the presentation layer observes.
    #[must_use]
    pub fn session(&self) -> SessionHandle {
        Arc::clone(&self.session)
    }

    /// A point-in-time copy of the session.
    #[must_use]
    pub fn snapshot(&self) -> GenerationSession {
        self.session.read().clone()
    }

    /// All history records, newest first.
    #[must_use]
    pub fn records(&self) -> Vec<HistoryRecord> {
        self.history.read().all().to_vec()
    }

    /// Re-hydrates the session from the history record with the given id.
    ///
    /// Returns false if no such record exists. Never re-runs generation and
    /// never touches the in-progress flag.
    pub fn load_record(&self, id: &str) -> bool {
        let history = self.history.read();
        match history.get(id) {
            Some(record) => {
                HistoryStore::load_into(&self.session, record);
                true
            }
            None => false,
        }
    }

    /// Runs one full generation for the prompt.
    ///
    /// Rejects empty/whitespace prompts and concurrent starts as silent
    /// no-ops. Otherwise resets the session, resolves the artifact (remote
    /// or fallback), publishes it immediately, drives the stage progression
    /// to completion, and commits a history record before clearing the
    /// in-progress flag.
    pub async fn start(&self, prompt: &str) -> StartOutcome {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return StartOutcome::RejectedEmptyPrompt;
        }

        // Check-and-set under the write lock so racing starts cannot both
        // pass the guard.
        {
            let mut session = self.session.write();
            if session.in_progress {
                return StartOutcome::Busy;
            }
            session.reset_for(trimmed, &self.registry);
        }

        info!(prompt = %trimmed, "generation started");
        self.sink
            .emit(&OrchestratorEvent::GenerationStarted {
                prompt: trimmed.to_string(),
            })
            .await;

        let resolved = match self.client.generate(trimmed).await {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!(error = %err, "remote generation failed, engaging fallback");
                self.sink
                    .emit(&OrchestratorEvent::FallbackEngaged {
                        reason: err.to_string(),
                    })
                    .await;
                FallbackSynthesizer::synthesize(trimmed, &self.registry)
            }
        };

        // The artifact is visible while the stages are still animating.
        self.session.write().artifact = resolved.artifact.clone();
        self.sink
            .emit(&OrchestratorEvent::ArtifactReady {
                bytes: resolved.artifact.len(),
            })
            .await;

        let progressor = AgentProgressor::new(self.registry.clone(), self.timing.clone());
        progressor
            .run(
                &self.session,
                &resolved,
                self.policy.as_ref(),
                self.sink.as_ref(),
            )
            .await;

        let record = {
            let session = self.session.read();
            HistoryRecord::new(
                session.prompt.clone(),
                session.artifact.clone(),
                session.reports.clone(),
            )
        };
        let record_id = record.id.clone();
        self.history.write().append(record);
        self.session.write().in_progress = false;

        info!(record_id = %record_id, "generation completed");
        self.sink
            .emit(&OrchestratorEvent::GenerationCompleted {
                record_id: record_id.clone(),
            })
            .await;

        StartOutcome::Completed { record_id }
    }
}
