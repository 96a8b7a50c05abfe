//! Chat turn, snapshot save, and history handlers.
//!
//! POST /api/llama3 runs one chat turn through the LLM gateway and persists
//! it. POST /api/saveChat replaces a session's stored transcript with a
//! client-submitted snapshot. The history endpoints return sessions newest
//! first: GET /api/chatHistory scoped to one user, GET /api/admin/recentChats
//! across all users.

use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use petfolio_types::chat::{ChatError, ChatMessage, ChatSession, ChatSnapshot, ChatSummary};
use petfolio_types::llm::Message;

use crate::http::error::AppError;
use crate::http::extractors::body::BodyJson;
use crate::http::extractors::query::HistoryQuery;
use crate::state::AppState;

/// Request body for POST /api/llama3.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub chat_id: Option<String>,
    pub message: Option<String>,
    pub user_id: Option<String>,
}

/// Request body for POST /api/saveChat.
///
/// `timestamp` and `lastUpdated` are accepted as aliases for `createdAt`
/// and `updatedAt`; older clients still send the legacy names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveChatRequest {
    pub chat_id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub messages: Option<Vec<Message>>,
    #[serde(alias = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(alias = "lastUpdated")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A session summary in wire casing, as returned by the history endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSummaryBody {
    pub chat_id: String,
    pub title: String,
    pub messages: Vec<Message>,
    pub updated_at: DateTime<Utc>,
}

impl From<ChatSummary> for ChatSummaryBody {
    fn from(summary: ChatSummary) -> Self {
        Self {
            chat_id: summary.chat_id,
            title: summary.title,
            messages: summary.messages,
            updated_at: summary.updated_at,
        }
    }
}

/// The stored session echoed back by POST /api/saveChat.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecordBody {
    pub chat_id: String,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChatRecordBody {
    fn new(session: ChatSession, messages: Vec<ChatMessage>) -> Self {
        Self {
            chat_id: session.chat_id,
            user_id: session.user_id,
            title: session.title,
            messages: messages.iter().map(ChatMessage::to_message).collect(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

/// POST /api/llama3 - Run one chat turn and return the assistant reply.
pub async fn chat_turn(
    State(state): State<AppState>,
    BodyJson(body): BodyJson<TurnRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let reply = state
        .chat_service
        .append_turn(
            body.chat_id.as_deref().unwrap_or(""),
            body.user_id.as_deref(),
            body.message.as_deref().unwrap_or(""),
        )
        .await
        .map_err(|e| {
            if !matches!(e, ChatError::MissingField(_)) {
                tracing::error!(error = %e, "Chat turn failed");
            }
            AppError::Turn(e)
        })?;

    Ok(Json(json!({ "response": reply })))
}

/// POST /api/saveChat - Replace a session's stored state with a snapshot.
pub async fn save_chat(
    State(state): State<AppState>,
    BodyJson(body): BodyJson<SaveChatRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let messages = body
        .messages
        .ok_or(AppError::Chat(ChatError::MissingField("messages")))?;

    let snapshot = ChatSnapshot {
        chat_id: body.chat_id.unwrap_or_default(),
        user_id: body.user_id.unwrap_or_default(),
        title: body.title,
        messages,
        created_at: body.created_at,
        updated_at: body.updated_at,
    };

    let (session, messages) = state.chat_service.save_snapshot(snapshot).await?;

    Ok(Json(json!({
        "message": "Chat saved",
        "chat": ChatRecordBody::new(session, messages),
    })))
}

/// GET /api/chatHistory - List one user's sessions, newest first.
pub async fn chat_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = query.user_id.unwrap_or_default();
    let summaries = state.chat_service.list_history(&user_id).await?;

    let summaries: Vec<ChatSummaryBody> =
        summaries.into_iter().map(ChatSummaryBody::from).collect();
    Ok(Json(json!({ "chatHistory": summaries })))
}

/// GET /api/admin/recentChats - List the most recently updated sessions
/// across all users.
pub async fn recent_chats(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let summaries = state.chat_service.recent_feed().await?;

    let summaries: Vec<ChatSummaryBody> =
        summaries.into_iter().map(ChatSummaryBody::from).collect();
    Ok(Json(json!({ "chatHistory": summaries })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use petfolio_types::llm::MessageRole;

    #[test]
    fn test_save_chat_request_parses_wire_casing() {
        let body: SaveChatRequest = serde_json::from_str(
            r#"{
                "chatId": "chat-1",
                "userId": "user-1",
                "title": "Vet questions",
                "messages": [{"role": "user", "content": "hi"}],
                "createdAt": "2024-05-01T10:00:00Z",
                "updatedAt": "2024-05-01T10:05:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(body.chat_id.as_deref(), Some("chat-1"));
        assert_eq!(body.messages.as_ref().unwrap().len(), 1);
        assert!(body.created_at.is_some());
        assert!(body.updated_at.is_some());
    }

    #[test]
    fn test_save_chat_request_accepts_legacy_timestamp_names() {
        let body: SaveChatRequest = serde_json::from_str(
            r#"{
                "chatId": "chat-1",
                "userId": "user-1",
                "messages": [],
                "timestamp": "2024-05-01T10:00:00Z",
                "lastUpdated": "2024-05-01T10:05:00Z"
            }"#,
        )
        .unwrap();

        assert!(body.created_at.is_some());
        assert!(body.updated_at.is_some());
        assert!(body.messages.unwrap().is_empty());
    }

    #[test]
    fn test_turn_request_tolerates_missing_fields() {
        let body: TurnRequest = serde_json::from_str(r#"{"chatId": "chat-1"}"#).unwrap();

        assert_eq!(body.chat_id.as_deref(), Some("chat-1"));
        assert!(body.message.is_none());
        assert!(body.user_id.is_none());
    }

    #[test]
    fn test_chat_summary_body_serializes_wire_casing() {
        let body = ChatSummaryBody {
            chat_id: "chat-1".to_string(),
            title: "Vet questions".to_string(),
            messages: vec![Message {
                role: MessageRole::User,
                content: "hi".to_string(),
            }],
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"chatId\":\"chat-1\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(json.contains("\"role\":\"user\""));
    }
}
