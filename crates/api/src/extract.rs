//! Extractors that reject malformed input with the standard JSON error body.
//!
//! Axum's own `Json` and `Path` reject with plain-text 4xx responses; these
//! wrappers route the rejection through [`AppError`] so every client error
//! is a 400 carrying `{ "error", "code" }`.

use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON object request body.
///
/// Syntax errors, type mismatches, a missing `Content-Type:
/// application/json`, and any top-level value other than an object all
/// become [`AppError::BadRequest`].
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<serde_json::Value>::from_request(req, state).await?;
        if !value.is_object() {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value)
            .map(AppJson)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))
    }
}

/// Path parameters. A segment that fails to parse (e.g. a non-numeric id)
/// becomes [`AppError::BadRequest`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
