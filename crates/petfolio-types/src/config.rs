//! Global configuration types for Petfolio.
//!
//! `AppConfig` represents the top-level `config.toml` that controls the
//! chat gateway endpoint and history behavior.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Petfolio backend.
///
/// Loaded from `~/.petfolio/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Settings for the LLM chat gateway.
    #[serde(default)]
    pub gateway: GatewaySettings,

    /// Settings for chat history and context handling.
    #[serde(default)]
    pub chat: ChatSettings,
}

/// Connection settings for the chat-completion gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySettings {
    /// Base URL of the gateway (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with every completion request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Chat history and context-window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Maximum number of trailing messages sent to the gateway per turn.
    /// Applies only to the outbound request; stored history is never trimmed.
    #[serde(default = "default_context_window_messages")]
    pub context_window_messages: usize,

    /// Number of sessions returned by the cross-user recent feed.
    #[serde(default = "default_recent_feed_limit")]
    pub recent_feed_limit: u32,
}

fn default_context_window_messages() -> usize {
    30
}

fn default_recent_feed_limit() -> u32 {
    20
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            context_window_messages: default_context_window_messages(),
            recent_feed_limit: default_recent_feed_limit(),
        }
    }
}
