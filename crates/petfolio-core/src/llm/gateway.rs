//! ChatGateway trait definition.
//!
//! One operation: ordered history in, one assistant reply out. No
//! streaming and no retries; a turn is a single round trip.

use petfolio_types::llm::{GatewayError, Message};

/// Trait for chat-completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in petfolio-infra (e.g., `OllamaGateway`).
pub trait ChatGateway: Send + Sync {
    /// Send the ordered message history and return the assistant reply text.
    fn complete(
        &self,
        history: &[Message],
    ) -> impl std::future::Future<Output = Result<String, GatewayError>> + Send;
}
