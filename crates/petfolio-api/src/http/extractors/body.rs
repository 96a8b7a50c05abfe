//! JSON body extractor that reports rejections in the API's fail envelope.
//!
//! Axum's stock `Json` rejection replies with a plain-text body. Clients of
//! this API expect every error as `{"success": false, "message": "..."}`, so
//! this wrapper converts the rejection into an [`AppError::Validation`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::http::error::AppError;

/// JSON request body. Deserialization failures become 400 responses in the
/// standard fail envelope.
pub struct BodyJson<T>(pub T);

impl<S, T> FromRequest<S> for BodyJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;

        Ok(Self(value))
    }
}
