//! Chat session and message types.
//!
//! A chat is a session row identified by a client-supplied `chat_id` plus an
//! append-only, `seq`-ordered list of messages. History listings return
//! summaries with the full transcript flattened back to `{role, content}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::error::RepositoryError;
pub use crate::llm::{GatewayError, Message, MessageRole};

/// Title shown for a session that has no stored title and no messages.
pub const DEFAULT_TITLE: &str = "New Chat";

/// A chat session.
///
/// `user_id` is nullable: a session created through the turn endpoint
/// without a user id stays unowned until a snapshot save claims it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub chat_id: String,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single stored message within a session.
///
/// `seq` is the position within the session, starting at 0. The pair
/// `(chat_id, seq)` is unique and defines transcript order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub chat_id: String,
    pub seq: u32,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Flatten to the `{role, content}` wire shape.
    pub fn to_message(&self) -> Message {
        Message {
            role: self.role.clone(),
            content: self.content.clone(),
        }
    }
}

/// A session with its transcript, as returned by history listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSummary {
    pub chat_id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub updated_at: DateTime<Utc>,
}

/// A full-session save request: replaces the stored transcript wholesale.
///
/// `title`, `created_at`, and `updated_at` are optional; omitted values
/// fall back to the stored session (or to now for a new one). An empty
/// `messages` list is legal and clears the transcript.
#[derive(Debug, Clone)]
pub struct ChatSnapshot {
    pub chat_id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub messages: Vec<Message>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Errors from chat operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("storage error: {0}")]
    Storage(#[from] RepositoryError),
}
