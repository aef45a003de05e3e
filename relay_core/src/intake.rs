//! The submission pipeline: method, payload, fields, configuration, delivery.

use std::sync::Arc;

use axum::http::Method;
use chrono::Utc;
use tracing::info;

use crate::{
    config::{NotificationConfig, TelegramConfig},
    error::{IntakeError, Result},
    models::{response::SUCCESS_MESSAGE, Submission},
    notification::format_notification,
    telegram::{Notifier, SendMessage, TelegramCredentials},
};

#[derive(Clone)]
pub struct FormIntake {
    telegram: Arc<TelegramConfig>,
    notification: Arc<NotificationConfig>,
    notifier: Arc<dyn Notifier>,
}

impl FormIntake {
    pub fn new(
        telegram: TelegramConfig,
        notification: NotificationConfig,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            telegram: Arc::new(telegram),
            notification: Arc::new(notification),
            notifier,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.telegram.is_configured()
    }

    /// Runs one submission through every stage, stopping at the first failure.
    /// On success returns the confirmation text for the caller.
    pub async fn process(&self, method: &Method, body: &[u8]) -> Result<&'static str> {
        if method != Method::POST {
            return Err(IntakeError::MethodNotAllowed(method.to_string()));
        }

        let payload: serde_json::Value = serde_json::from_slice(body)?;
        let submission = Submission::from_payload(&payload)?;

        let credentials = TelegramCredentials::from_config(&self.telegram).ok_or_else(|| {
            IntakeError::Configuration {
                missing: self.telegram.missing_secrets(),
            }
        })?;

        let text = format_notification(&submission, Utc::now(), &self.notification.source_label);
        let message = SendMessage::markdown(&credentials.chat_id, &text);

        let outcome = self
            .notifier
            .send_message(&credentials.bot_token, &message)
            .await?;

        if !outcome.ok {
            return Err(IntakeError::Upstream(outcome.payload));
        }

        info!(service = submission.service_label(), "Submission relayed to Telegram");

        Ok(SUCCESS_MESSAGE)
    }
}
