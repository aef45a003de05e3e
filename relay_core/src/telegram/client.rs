use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info_span, Instrument};

use super::{Notifier, NotifyError, SendMessage, SendOutcome};
use crate::config::TelegramConfig;

const USER_AGENT: &str = concat!(
    "contact-relay/",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CARGO_PKG_HOMEPAGE"),
    ")"
);

/// `sendMessage` client backed by a pooled reqwest client.
///
/// The HTTP status is not inspected: Telegram reports failures in the JSON
/// body, and that body is what decides success.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: reqwest::Client,
    api_base_url: String,
}

impl TelegramClient {
    pub fn new(config: &TelegramConfig) -> Result<Self, NotifyError> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);

        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| NotifyError::Client(e.without_url().to_string()))?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn send_message_url(&self, bot_token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.api_base_url, bot_token)
    }
}

#[async_trait]
impl Notifier for TelegramClient {
    async fn send_message(
        &self,
        bot_token: &str,
        message: &SendMessage<'_>,
    ) -> Result<SendOutcome, NotifyError> {
        let span = info_span!("telegram_send_message", chat_id = %message.chat_id);

        async move {
            // The token is part of the URL, so errors drop it before they can be logged.
            let response = self
                .client
                .post(self.send_message_url(bot_token))
                .json(message)
                .send()
                .await
                .map_err(|e| NotifyError::Transport(e.without_url()))?;

            let status = response.status();
            let payload = response
                .json::<Value>()
                .await
                .map_err(|e| NotifyError::Decode(e.without_url()))?;

            debug!(status = status.as_u16(), "Telegram responded");

            Ok(SendOutcome::from_payload(payload))
        }
        .instrument(span)
        .await
    }
}
