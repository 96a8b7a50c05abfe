//! OllamaGateway -- concrete [`ChatGateway`] implementation for a local
//! Ollama server.
//!
//! Sends the message history to the `/api/chat` endpoint as a single
//! non-streaming request and extracts the reply from
//! `{message: {content}}`. No authentication: the endpoint is a local
//! service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use petfolio_core::llm::gateway::ChatGateway;
use petfolio_types::config::GatewaySettings;
use petfolio_types::llm::{GatewayError, Message};

/// Ollama chat-completion gateway.
///
/// Implements [`ChatGateway`] for the Ollama `/api/chat` API.
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGateway {
    /// Create a new gateway from configuration.
    pub fn new(settings: &GatewaySettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
        }
    }

    /// The model sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn to_chat_request<'a>(&'a self, history: &'a [Message]) -> OllamaChatRequest<'a> {
        OllamaChatRequest {
            model: &self.model,
            messages: history
                .iter()
                .map(|m| OllamaMessage {
                    role: m.role.to_string(),
                    content: &m.content,
                })
                .collect(),
            stream: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: String,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

impl ChatGateway for OllamaGateway {
    async fn complete(&self, history: &[Message]) -> Result<String, GatewayError> {
        let body = self.to_chat_request(history);
        let url = self.url("/api/chat");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let chat_resp: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(format!("failed to parse response: {e}")))?;

        Ok(chat_resp.message.content)
    }
}
