use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::contact::models::{ContactNotification, ContactRequest, PushoverCredentials};
use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    pub success: bool,
}

/// POST /api/contact
///
/// Validates the form and forwards it as a single push notification.
/// A failed send is reported to the client; the submission is not kept.
pub async fn handle_contact(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    let request = request.validated()?;

    let credentials = match (&state.config.pushover_token, &state.config.pushover_user) {
        (Some(token), Some(user)) => PushoverCredentials {
            token: token.clone(),
            user: user.clone(),
        },
        _ => {
            return Err(AppError::ConfigurationMissing(
                "Notification service not configured".to_string(),
            ))
        }
    };

    let notification = ContactNotification::from_request(&request);

    state
        .notifier
        .send(&credentials, &notification)
        .await
        .map_err(|e| AppError::Upstream(format!("Failed to send message: Pushover error: {e}")))?;

    info!(
        "Contact notification sent for: {} ({})",
        request.name, request.email
    );

    Ok(Json(ContactResponse {
        message: "Message sent successfully! I'll get back to you soon.".to_string(),
        success: true,
    }))
}
