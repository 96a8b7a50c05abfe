//! Application error type mapping to HTTP status codes and response bodies.
//!
//! Most endpoints report failures as `{"success": false, "message": "..."}`.
//! The chat turn endpoint is the exception: its internal failures use the
//! `{"error": "..."}` shape that chat clients expect.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use petfolio_types::chat::ChatError;
use petfolio_types::error::{AccountError, PetError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Account-related errors.
    Account(AccountError),
    /// Pet-related errors.
    Pet(PetError),
    /// Chat persistence and history errors.
    Chat(ChatError),
    /// Chat turn errors (the turn endpoint has its own error body shape).
    Turn(ChatError),
    /// Authentication failure.
    Unauthorized(String),
    /// Resource missing.
    NotFound(String),
    /// Validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<AccountError> for AppError {
    fn from(e: AccountError) -> Self {
        AppError::Account(e)
    }
}

impl From<PetError> for AppError {
    fn from(e: PetError) -> Self {
        AppError::Pet(e)
    }
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Turn failures past validation keep the legacy {"error": ...} body.
        if let AppError::Turn(e) = &self {
            if !matches!(e, ChatError::MissingField(_)) {
                let body = json!({"error": "Failed to get response from llama3"});
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(axum::http::header::CONTENT_TYPE, "application/json")],
                    body.to_string(),
                )
                    .into_response();
            }
        }

        let (status, message) = match &self {
            AppError::Account(AccountError::MissingField(field)) => {
                (StatusCode::BAD_REQUEST, format!("{field} is required"))
            }
            AppError::Account(AccountError::IdentityTaken) => (
                StatusCode::BAD_REQUEST,
                "Email or username already exists".to_string(),
            ),
            AppError::Account(AccountError::UserNotFound) => {
                (StatusCode::NOT_FOUND, "User not found".to_string())
            }
            AppError::Account(AccountError::InvalidPassword) => {
                (StatusCode::UNAUTHORIZED, "Invalid password".to_string())
            }
            AppError::Account(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Pet(PetError::MissingField(field)) => {
                (StatusCode::BAD_REQUEST, format!("{field} is required"))
            }
            AppError::Pet(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Chat(ChatError::MissingField(field))
            | AppError::Turn(ChatError::MissingField(field)) => {
                (StatusCode::BAD_REQUEST, format!("{field} is required"))
            }
            AppError::Chat(_) | AppError::Turn(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = json!({
            "success": false,
            "message": message,
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use petfolio_types::error::RepositoryError;
    use petfolio_types::llm::GatewayError;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn test_missing_field_maps_to_400_fail_body() {
        let (status, body) =
            response_parts(AppError::Account(AccountError::MissingField("email"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "email is required");
    }

    #[tokio::test]
    async fn test_identity_taken_maps_to_400() {
        let (status, body) = response_parts(AppError::Account(AccountError::IdentityTaken)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Email or username already exists");
    }

    #[tokio::test]
    async fn test_invalid_password_maps_to_401() {
        let (status, body) =
            response_parts(AppError::Account(AccountError::InvalidPassword)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid password");
    }

    #[tokio::test]
    async fn test_account_storage_error_maps_to_500_server_error() {
        let (status, body) =
            response_parts(AppError::Account(AccountError::Storage(RepositoryError::Connection)))
                .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Server error");
    }

    #[tokio::test]
    async fn test_turn_gateway_error_uses_legacy_error_body() {
        let err = AppError::Turn(ChatError::Gateway(GatewayError::Http(
            "connection refused".to_string(),
        )));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to get response from llama3");
        assert!(body.get("success").is_none());
    }

    #[tokio::test]
    async fn test_turn_missing_field_still_uses_fail_body() {
        let (status, body) =
            response_parts(AppError::Turn(ChatError::MissingField("chatId"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "chatId is required");
    }

    #[tokio::test]
    async fn test_chat_storage_error_maps_to_500() {
        let err = AppError::Chat(ChatError::Storage(RepositoryError::Query(
            "disk I/O error".to_string(),
        )));
        let (status, body) = response_parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Server error");
    }
}
