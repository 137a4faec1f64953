//! Event sink trait and implementations.

use super::OrchestratorEvent;
use async_trait::async_trait;
use tracing::{debug, info, Level};

/// Receives orchestration events as they happen.
///
/// The orchestrator emits through a sink so the presentation layer can
/// subscribe to state changes instead of polling the session. Sinks must
/// never fail; they observe the pipeline, they do not steer it.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Delivers one event.
    async fn emit(&self, event: &OrchestratorEvent);
}

/// A sink that discards all events.
///
/// Used as the default when no subscriber is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: &OrchestratorEvent) {
        // Intentionally empty - discards all events
    }
}

/// A sink that logs events through the tracing framework.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingEventSink {
    /// Creates a logging sink at the given level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, event: &OrchestratorEvent) {
        match self.level {
            Level::DEBUG => debug!(event = ?event, "{}", event.kind()),
            _ => info!(event = ?event, "{}", event.kind()),
        }
    }
}

/// A sink that records every event, for tests and introspection.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: parking_lot::RwLock<Vec<OrchestratorEvent>>,
}

impl CollectingEventSink {
    /// Creates an empty collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<OrchestratorEvent> {
        self.events.read().clone()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Clears all collected events.
    pub fn clear(&self) {
        self.events.write().clear();
    }

    /// Returns the collected events matching a kind label.
    #[must_use]
    pub fn events_of_kind(&self, kind: &str) -> Vec<OrchestratorEvent> {
        self.events
            .read()
            .iter()
            .filter(|event| event.kind() == kind)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventSink for CollectingEventSink {
    async fn emit(&self, event: &OrchestratorEvent) {
        self.events.write().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentStatus;

    #[tokio::test]
    async fn test_noop_sink() {
        let sink = NoOpEventSink;
        sink.emit(&OrchestratorEvent::ArtifactReady { bytes: 1 }).await;
        // Should not panic
    }

    #[tokio::test]
    async fn test_logging_sink() {
        let sink = LoggingEventSink::debug();
        sink.emit(&OrchestratorEvent::GenerationStarted {
            prompt: "p".to_string(),
        })
        .await;
        // Should not panic
    }

    #[tokio::test]
    async fn test_collecting_sink_preserves_order() {
        let sink = CollectingEventSink::new();
        assert!(sink.is_empty());

        sink.emit(&OrchestratorEvent::AgentRunning {
            agent: "Build".to_string(),
        })
        .await;
        sink.emit(&OrchestratorEvent::AgentResolved {
            agent: "Build".to_string(),
            status: AgentStatus::Succeeded,
        })
        .await;

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind(), "agent.running");
        assert_eq!(events[1].kind(), "agent.resolved");
    }

    #[tokio::test]
    async fn test_collecting_sink_filter_and_clear() {
        let sink = CollectingEventSink::new();
        sink.emit(&OrchestratorEvent::AgentRunning {
            agent: "Build".to_string(),
        })
        .await;
        sink.emit(&OrchestratorEvent::AgentRunning {
            agent: "Test".to_string(),
        })
        .await;
        sink.emit(&OrchestratorEvent::ArtifactReady { bytes: 10 }).await;

        assert_eq!(sink.events_of_kind("agent.running").len(), 2);
        assert_eq!(sink.events_of_kind("generation.artifact_ready").len(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }
}
