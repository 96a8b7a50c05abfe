//! Chat service orchestrating turns, snapshot saves, and history listings.
//!
//! ChatService coordinates the ChatRepository and ChatGateway ports. Every
//! write to a session happens under that session's turn lock, and a turn
//! persists either both of its messages or neither.

use chrono::Utc;
use petfolio_types::chat::{
    ChatError, ChatMessage, ChatSession, ChatSnapshot, ChatSummary, DEFAULT_TITLE, Message,
    MessageRole,
};
use tracing::info;
use uuid::Uuid;

use crate::chat::context_window::ContextWindow;
use crate::chat::repository::ChatRepository;
use crate::chat::turn_lock::TurnLocks;
use crate::llm::gateway::ChatGateway;

/// Orchestrates chat session writes and reads.
///
/// Generic over `ChatRepository` and `ChatGateway` to maintain clean
/// architecture (petfolio-core never depends on petfolio-infra).
pub struct ChatService<R: ChatRepository, G: ChatGateway> {
    repo: R,
    gateway: G,
    locks: TurnLocks,
    window: ContextWindow,
    recent_feed_limit: i64,
}

impl<R: ChatRepository, G: ChatGateway> ChatService<R, G> {
    /// Create a new chat service with the given ports and policies.
    pub fn new(repo: R, gateway: G, window: ContextWindow, recent_feed_limit: i64) -> Self {
        Self {
            repo,
            gateway,
            locks: TurnLocks::new(),
            window,
            recent_feed_limit,
        }
    }

    /// Run one chat turn and return the assistant reply text.
    ///
    /// Loads the session (creating it on first turn), sends the trailing
    /// window of the accumulated history plus the new user message to the
    /// gateway, then persists the session upsert and both messages in one
    /// transaction. If the gateway fails, nothing is written: the session
    /// is exactly as it was before the turn.
    ///
    /// `user_id` is adopted by a session that does not have an owner yet;
    /// an existing owner is never overwritten.
    pub async fn append_turn(
        &self,
        chat_id: &str,
        user_id: Option<&str>,
        message: &str,
    ) -> Result<String, ChatError> {
        if chat_id.trim().is_empty() {
            return Err(ChatError::MissingField("chatId"));
        }
        if message.trim().is_empty() {
            return Err(ChatError::MissingField("message"));
        }

        let lock = self.locks.for_chat(chat_id);
        let _guard = lock.lock().await;

        let now = Utc::now();
        let session = match self.repo.get_session(chat_id).await? {
            Some(mut session) => {
                if session.user_id.is_none() {
                    session.user_id = user_id.map(String::from);
                }
                session.updated_at = now;
                session
            }
            None => ChatSession {
                chat_id: chat_id.to_string(),
                user_id: user_id.map(String::from),
                title: None,
                created_at: now,
                updated_at: now,
            },
        };

        let stored = self.repo.get_messages(chat_id).await?;
        let next_seq = stored.len() as u32;

        let mut history: Vec<Message> = stored.iter().map(ChatMessage::to_message).collect();
        history.push(Message::user(message));

        let reply = self.gateway.complete(self.window.trailing(&history)).await?;

        let user_message = ChatMessage {
            id: Uuid::now_v7(),
            chat_id: chat_id.to_string(),
            seq: next_seq,
            role: MessageRole::User,
            content: message.to_string(),
            created_at: now,
        };
        let assistant_message = ChatMessage {
            id: Uuid::now_v7(),
            chat_id: chat_id.to_string(),
            seq: next_seq + 1,
            role: MessageRole::Assistant,
            content: reply.clone(),
            created_at: now,
        };

        self.repo
            .append_turn(&session, &user_message, &assistant_message)
            .await?;

        info!(chat_id = %chat_id, seq = next_seq, "Chat turn appended");
        Ok(reply)
    }

    /// Replace a session's stored state with a client-submitted snapshot.
    ///
    /// This is a full overwrite, not a merge: the stored transcript becomes
    /// exactly `snapshot.messages` (an empty list is legal and clears it).
    /// Omitted `title` and `created_at` fall back to the stored session, or
    /// to now for a brand-new one, so resaving never loses them. Saving the
    /// same snapshot twice yields the same single stored session.
    pub async fn save_snapshot(
        &self,
        snapshot: ChatSnapshot,
    ) -> Result<(ChatSession, Vec<ChatMessage>), ChatError> {
        if snapshot.chat_id.trim().is_empty() {
            return Err(ChatError::MissingField("chatId"));
        }
        if snapshot.user_id.trim().is_empty() {
            return Err(ChatError::MissingField("userId"));
        }

        let lock = self.locks.for_chat(&snapshot.chat_id);
        let _guard = lock.lock().await;

        let existing = self.repo.get_session(&snapshot.chat_id).await?;
        let now = Utc::now();

        let created_at = snapshot
            .created_at
            .or(existing.as_ref().map(|s| s.created_at))
            .unwrap_or(now);
        let title = snapshot
            .title
            .or_else(|| existing.as_ref().and_then(|s| s.title.clone()));
        let updated_at = snapshot.updated_at.unwrap_or(now);

        let session = ChatSession {
            chat_id: snapshot.chat_id.clone(),
            user_id: Some(snapshot.user_id),
            title,
            created_at,
            updated_at,
        };

        let messages: Vec<ChatMessage> = snapshot
            .messages
            .iter()
            .enumerate()
            .map(|(i, m)| ChatMessage {
                id: Uuid::now_v7(),
                chat_id: session.chat_id.clone(),
                seq: i as u32,
                role: m.role.clone(),
                content: m.content.clone(),
                created_at: updated_at,
            })
            .collect();

        self.repo.replace_snapshot(&session, &messages).await?;

        info!(chat_id = %session.chat_id, messages = messages.len(), "Chat snapshot saved");
        Ok((session, messages))
    }

    /// List a user's sessions with their transcripts, most recently
    /// updated first.
    pub async fn list_history(&self, user_id: &str) -> Result<Vec<ChatSummary>, ChatError> {
        if user_id.trim().is_empty() {
            return Err(ChatError::MissingField("userId"));
        }
        let sessions = self.repo.list_sessions_for_user(user_id).await?;
        self.summarize(sessions).await
    }

    /// List the most recently updated sessions across all users.
    pub async fn recent_feed(&self) -> Result<Vec<ChatSummary>, ChatError> {
        let sessions = self.repo.list_recent_sessions(self.recent_feed_limit).await?;
        self.summarize(sessions).await
    }

    async fn summarize(
        &self,
        sessions: Vec<ChatSession>,
    ) -> Result<Vec<ChatSummary>, ChatError> {
        let mut summaries = Vec::with_capacity(sessions.len());
        for session in sessions {
            let messages: Vec<Message> = self
                .repo
                .get_messages(&session.chat_id)
                .await?
                .iter()
                .map(ChatMessage::to_message)
                .collect();
            let title = session
                .title
                .or_else(|| messages.first().map(|m| m.content.clone()))
                .unwrap_or_else(|| DEFAULT_TITLE.to_string());
            summaries.push(ChatSummary {
                chat_id: session.chat_id,
                title,
                messages,
                updated_at: session.updated_at,
            });
        }
        Ok(summaries)
    }
}
