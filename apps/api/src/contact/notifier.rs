//! Outbound push notifications for contact submissions.
//!
//! `AppState` holds an `Arc<dyn Notifier>`; `PushoverClient` is the production
//! backend. One call per submission: no retries, nothing persisted.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::contact::models::{ContactNotification, PushoverCredentials};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("notification rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        credentials: &PushoverCredentials,
        notification: &ContactNotification,
    ) -> Result<(), NotifyError>;
}

#[derive(Debug, Deserialize)]
struct PushoverReply {
    status: i64,
    #[serde(default)]
    errors: Vec<String>,
}

#[derive(Clone)]
pub struct PushoverClient {
    client: Client,
    api_url: String,
}

impl PushoverClient {
    pub fn new(api_url: &str) -> Result<Self, NotifyError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            api_url: api_url.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for PushoverClient {
    async fn send(
        &self,
        credentials: &PushoverCredentials,
        notification: &ContactNotification,
    ) -> Result<(), NotifyError> {
        let form = [
            ("token", credentials.token.as_str()),
            ("user", credentials.user.as_str()),
            ("title", notification.title.as_str()),
            ("message", notification.body.as_str()),
        ];

        let response = self.client.post(&self.api_url).form(&form).send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        let reply = serde_json::from_str::<PushoverReply>(&body).ok();
        let accepted = status.is_success() && reply.as_ref().is_some_and(|r| r.status == 1);

        if !accepted {
            let message = match reply {
                Some(r) if !r.errors.is_empty() => r.errors.join(", "),
                _ => body,
            };
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("Pushover accepted notification '{}'", notification.title);
        Ok(())
    }
}
