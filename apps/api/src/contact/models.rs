use serde::Deserialize;

use crate::errors::AppError;

/// Contact form submission. Fields default to empty so a missing field and a
/// blank one fail validation the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// Trims every field and rejects the submission if any is left empty.
    pub fn validated(self) -> Result<Self, AppError> {
        let request = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
            return Err(AppError::InvalidRequest(
                "Name, email, and message are required".to_string(),
            ));
        }

        Ok(request)
    }
}

/// Push notification derived from a validated contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification {
    pub title: String,
    pub body: String,
}

impl ContactNotification {
    pub fn from_request(request: &ContactRequest) -> Self {
        Self {
            title: format!("New Contact Message from {}", request.name),
            body: format!(
                "From: {}\nEmail: {}\n\nMessage:\n{}",
                request.name, request.email, request.message
            ),
        }
    }
}

/// Application token and recipient key for the notification service.
#[derive(Debug, Clone)]
pub struct PushoverCredentials {
    pub token: String,
    pub user: String,
}
