//! ChatRepository trait definition.
//!
//! Provides persistence for chat sessions and their ordered messages.
//! Follows the same RPITIT pattern as UserRepository.

use petfolio_types::chat::{ChatMessage, ChatSession};
use petfolio_types::error::RepositoryError;

/// Repository trait for chat session and message persistence.
///
/// Implementations live in petfolio-infra (e.g., `SqliteChatRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ChatRepository: Send + Sync {
    /// Get a session by its `chat_id`.
    fn get_session(
        &self,
        chat_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// Get a session's messages ordered by `seq` ascending.
    fn get_messages(
        &self,
        chat_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Persist one completed turn atomically.
    ///
    /// Upserts the session row and appends the user and assistant
    /// messages in a single transaction: either all three writes land
    /// or none do.
    fn append_turn(
        &self,
        session: &ChatSession,
        user_message: &ChatMessage,
        assistant_message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Replace a session's stored state wholesale.
    ///
    /// Upserts the session row, deletes any existing messages, and
    /// inserts the given ones, all in a single transaction.
    fn replace_snapshot(
        &self,
        session: &ChatSession,
        messages: &[ChatMessage],
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// List a user's sessions ordered by `updated_at` descending.
    fn list_sessions_for_user(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, RepositoryError>> + Send;

    /// List the most recently updated sessions across all users.
    fn list_recent_sessions(
        &self,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ChatSession>, RepositoryError>> + Send;
}
