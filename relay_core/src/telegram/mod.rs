//! Outbound delivery to the Telegram Bot API

pub mod client;

pub use client::TelegramClient;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::TelegramConfig;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Telegram request failed: {0}")]
    Transport(reqwest::Error),

    #[error("Telegram response was not valid JSON: {0}")]
    Decode(reqwest::Error),
}

/// Bot token and destination chat, only available when both are set.
#[derive(Clone)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl TelegramCredentials {
    pub fn from_config(config: &TelegramConfig) -> Option<Self> {
        match (config.bot_token.as_deref(), config.chat_id.as_deref()) {
            (Some(bot_token), Some(chat_id)) if !bot_token.is_empty() && !chat_id.is_empty() => {
                Some(Self {
                    bot_token: bot_token.to_string(),
                    chat_id: chat_id.to_string(),
                })
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Body of a `sendMessage` call.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'static str,
    pub disable_web_page_preview: bool,
}

impl<'a> SendMessage<'a> {
    pub fn markdown(chat_id: &'a str, text: &'a str) -> Self {
        Self {
            chat_id,
            text,
            parse_mode: "Markdown",
            disable_web_page_preview: true,
        }
    }
}

/// What Telegram answered. `ok` mirrors the API's own success flag.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub ok: bool,
    pub payload: Value,
}

impl SendOutcome {
    pub fn from_payload(payload: Value) -> Self {
        let ok = payload.get("ok").and_then(Value::as_bool).unwrap_or(false);
        Self { ok, payload }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_message(
        &self,
        bot_token: &str,
        message: &SendMessage<'_>,
    ) -> Result<SendOutcome, NotifyError>;
}
