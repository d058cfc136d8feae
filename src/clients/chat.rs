use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use chrono_tz::Tz;
use reqwest::Client;
use tracing::{debug, info};

use crate::{compose::MessageComposer, error::RelayError};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// One-shot delivery of rendered messages to a destination's Google Chat
/// webhook. No retries; a slow endpoint is bounded by the client timeout.
pub struct ChatClient {
    http_client: Client,
    timezone: Tz,
}

impl ChatClient {
    pub fn new(timezone: Tz) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        info!(timezone = %timezone, "Chat client initialized");

        Ok(Self {
            http_client,
            timezone,
        })
    }

    /// Renders the composer's message and POSTs it to the destination's
    /// chat webhook. Render failures propagate untouched.
    pub async fn deliver(&self, composer: &MessageComposer<'_>) -> Result<(), RelayError> {
        let destination = composer.destination();

        let url = destination
            .delivery_url()
            .ok_or(RelayError::MissingDestination)?;

        let message = composer.render(self.timezone)?;

        debug!(path = %destination.path, "Delivering quality gate notification");

        // The rendered text already carries `\n` escape tokens; routing it
        // through a serializer would escape the backslashes a second time.
        let body = format!(r#"{{"text": "{}"}}"#, message.as_str());

        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::DeliveryFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::DeliveryFailed(format!(
                "chat endpoint returned status {status}"
            )));
        }

        info!(path = %destination.path, "Notification delivered");

        Ok(())
    }
}
