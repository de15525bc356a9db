//! Schema-checked JSON body extractor.
//!
//! Every API handler takes `ApiJson<T>` instead of `axum::Json<T>` so that a
//! missing or malformed body is rejected as `AppError::InvalidRequest` (400)
//! with the same JSON error shape as every other failure.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

pub const NO_DATA: &str = "No data provided";

pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("JSON body rejected: {rejection}");
                AppError::InvalidRequest(NO_DATA.to_string())
            })?;

        if !carries_data(&value) {
            return Err(AppError::InvalidRequest(NO_DATA.to_string()));
        }

        serde_json::from_value(value)
            .map(ApiJson)
            .map_err(|e| AppError::InvalidRequest(format!("Invalid request body: {e}")))
    }
}

/// Only a non-empty JSON object carries data; `null`, `{}`, arrays and
/// scalars are treated like a missing body.
fn carries_data(value: &Value) -> bool {
    matches!(value, Value::Object(map) if !map.is_empty())
}
