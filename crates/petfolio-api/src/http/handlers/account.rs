//! Account registration, login, and profile update handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::json;

use petfolio_types::error::AccountError;
use petfolio_types::user::{NewAccount, ProfileUpdate};

use crate::http::error::AppError;
use crate::http::extractors::body::BodyJson;
use crate::state::AppState;

/// Request body for POST /api/register.
///
/// Every field is optional at the wire level; presence is enforced by the
/// account service so a missing field comes back as a 400, not a parse error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub ext: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

/// Request body for POST /api/login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<SecretString>,
}

/// Request body for POST /api/updateProfile.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub user_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub ext: Option<String>,
    pub username: Option<String>,
}

/// POST /api/register - Create a new user account.
pub async fn register(
    State(state): State<AppState>,
    BodyJson(body): BodyJson<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let new_account = NewAccount {
        last_name: body.last_name.unwrap_or_default(),
        first_name: body.first_name.unwrap_or_default(),
        middle_name: body.middle_name,
        ext: body.ext,
        email: body.email.unwrap_or_default(),
        username: body.username.unwrap_or_default(),
        password: body.password.unwrap_or_else(|| SecretString::from("")),
    };

    state
        .account_service
        .register(new_account)
        .await
        .map_err(|e| match e {
            AccountError::MissingField(_) | AccountError::IdentityTaken => AppError::Account(e),
            e => {
                tracing::error!(error = %e, "Registration failed");
                AppError::Internal("Registration failed".to_string())
            }
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "User registered successfully",
        })),
    ))
}

/// POST /api/login - Authenticate by email and password.
///
/// No presence validation here: an absent or empty email fails the lookup
/// and reports the same 401 as an unknown address.
pub async fn login(
    State(state): State<AppState>,
    BodyJson(body): BodyJson<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_else(|| SecretString::from(""));

    let account = state
        .account_service
        .login(&email, &password)
        .await
        .map_err(|e| match e {
            AccountError::UserNotFound => AppError::Unauthorized("User not found".to_string()),
            AccountError::InvalidPassword => {
                AppError::Unauthorized("Invalid password".to_string())
            }
            e => {
                tracing::error!(error = %e, "Login failed");
                AppError::Internal("Server error".to_string())
            }
        })?;

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "user": account.to_public(),
    })))
}

/// POST /api/updateProfile - Partially update profile fields.
///
/// A malformed user ID cannot match any account, so it reports the same
/// 404 as an unknown one.
pub async fn update_profile(
    State(state): State<AppState>,
    BodyJson(body): BodyJson<UpdateProfileRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let user_id = match body.user_id.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => uuid::Uuid::parse_str(raw)
            .map_err(|_| AppError::NotFound("User not found".to_string()))?,
        _ => return Err(AppError::Validation("userId is required".to_string())),
    };

    let update = ProfileUpdate {
        user_id,
        first_name: body.first_name,
        last_name: body.last_name,
        middle_name: body.middle_name,
        ext: body.ext,
        username: body.username,
    };

    let account = state
        .account_service
        .update_profile(update)
        .await
        .map_err(|e| match e {
            AccountError::MissingField(_)
            | AccountError::IdentityTaken
            | AccountError::UserNotFound => AppError::Account(e),
            e => {
                tracing::error!(error = %e, "Profile update failed");
                AppError::Internal("Server error".to_string())
            }
        })?;

    Ok(Json(json!({
        "success": true,
        "message": "Profile updated successfully",
        "user": account.to_public(),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use secrecy::ExposeSecret;

    #[test]
    fn test_register_request_parses_wire_casing() {
        let body: RegisterRequest = serde_json::from_str(
            r#"{
                "lastName": "Reyes",
                "firstName": "Ana",
                "middleName": "C",
                "ext": "Jr",
                "email": "ana@example.com",
                "username": "ana",
                "password": "pw1"
            }"#,
        )
        .unwrap();

        assert_eq!(body.last_name.as_deref(), Some("Reyes"));
        assert_eq!(body.first_name.as_deref(), Some("Ana"));
        assert_eq!(body.password.unwrap().expose_secret(), "pw1");
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let body: RegisterRequest = serde_json::from_str("{}").unwrap();

        assert!(body.last_name.is_none());
        assert!(body.email.is_none());
        assert!(body.password.is_none());
    }

    #[test]
    fn test_login_request_tolerates_missing_fields() {
        let body: LoginRequest = serde_json::from_str(r#"{"email": "a@x.com"}"#).unwrap();

        assert_eq!(body.email.as_deref(), Some("a@x.com"));
        assert!(body.password.is_none());
    }
}
