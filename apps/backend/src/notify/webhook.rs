//! Chat webhook notifier.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use super::{Notice, Notifier, NotifyError};
use crate::logging::pii::Redacted;

#[derive(Debug, Serialize)]
struct WebhookMessage {
    content: String,
}

/// Posts `{"content": ...}` to a chat webhook, mentioning the player.
pub struct WebhookNotifier {
    client: reqwest::Client,
    webhook_url: String,
    site_url: String,
}

impl WebhookNotifier {
    pub fn new(
        webhook_url: impl Into<String>,
        site_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
            site_url: site_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn message_for(&self, notice: &Notice) -> String {
        match notice {
            Notice::NewPicks {
                draft_id,
                contact_id,
            } => format!(
                "<@{contact_id}> you have new picks <{}/draft/{draft_id}>",
                self.site_url
            ),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        let message = WebhookMessage {
            content: self.message_for(notice),
        };

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(NotifyError::Status(status.as_u16()));
        }

        debug!(
            draft_id = notice.draft_id(),
            contact = %Redacted(notice.contact_id()),
            "Notification sent"
        );
        Ok(())
    }
}
