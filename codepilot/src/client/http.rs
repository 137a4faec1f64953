//! HTTP implementation of the generation client over reqwest.

use super::{GenerateRequest, GenerateResponse, GenerationClient};
use crate::config::OrchestratorConfig;
use crate::core::ResolvedGeneration;
use crate::errors::{CodepilotError, TransportError};
use async_trait::async_trait;
use tracing::debug;

/// Generation client that posts prompts to a configured HTTP endpoint.
///
/// The request body is `{"prompt": "..."}`; a success response carries
/// `{"code": "...", "statuses": [...]}`. Any non-2xx status, network fault,
/// or undecodable body becomes a [`TransportError`].
#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpGenerationClient {
    /// Creates a client from the orchestrator configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CodepilotError::Misconfiguration`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &OrchestratorConfig) -> Result<Self, CodepilotError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|err| CodepilotError::Misconfiguration(err.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    async fn generate(&self, prompt: &str) -> Result<ResolvedGeneration, TransportError> {
        debug!(endpoint = %self.endpoint, "sending generation request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|err| TransportError::MalformedResponse(err.to_string()))?;

        debug!(
            artifact_len = body.code.len(),
            reported = body.statuses.as_ref().map_or(0, Vec::len),
            "generation response decoded"
        );

        Ok(body.into_resolved())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AgentStatus;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serves one canned HTTP response on a local port and returns the
    /// endpoint URL pointing at it.
    async fn serve_once(response: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}/generate")
    }

    fn client_for(endpoint: String) -> HttpGenerationClient {
        let config = OrchestratorConfig::default()
            .with_endpoint(endpoint)
            .with_request_timeout_secs(5);
        HttpGenerationClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let config = OrchestratorConfig::default().with_endpoint("http://127.0.0.1:9/generate");
        let client = HttpGenerationClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/generate");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        // Port 9 (discard) is not listening; the connect fails immediately.
        let config = OrchestratorConfig::default()
            .with_endpoint("http://127.0.0.1:9/generate")
            .with_request_timeout_secs(1);
        let client = HttpGenerationClient::new(&config).unwrap();

        let err = client.generate("build a chatbot").await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[tokio::test]
    async fn test_non_success_status_preserves_code() {
        let endpoint =
            serve_once("HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\n\r\n").await;
        let client = client_for(endpoint);

        let err = client.generate("build a chatbot").await.unwrap_err();
        assert!(matches!(err, TransportError::Http { status: 503 }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_malformed_response() {
        let endpoint = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 8\r\n\r\nnot json",
        )
        .await;
        let client = client_for(endpoint);

        let err = client.generate("build a chatbot").await.unwrap_err();
        assert!(matches!(err, TransportError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_success_body_is_normalized() {
        let body = r#"{"code":"def f(): pass","statuses":[{"agent":"Build","status":"success"}]}"#;
        let endpoint = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 74\r\n\r\n{\"code\":\"def f(): pass\",\"statuses\":[{\"agent\":\"Build\",\"status\":\"success\"}]}",
        )
        .await;
        assert_eq!(body.len(), 74);
        let client = client_for(endpoint);

        let resolved = client.generate("build a chatbot").await.unwrap();
        assert_eq!(resolved.artifact, "def f(): pass");
        assert_eq!(
            resolved.outcome_for("Build").map(|o| o.status),
            Some(AgentStatus::Succeeded)
        );
        assert!(resolved.outcome_for("Test").is_none());
    }
}
