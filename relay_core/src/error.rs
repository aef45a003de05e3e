//! Intake error taxonomy and its mapping onto HTTP responses

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{models::FormResponse, telegram::NotifyError};

pub type Result<T> = std::result::Result<T, IntakeError>;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed. Use POST.";
pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and message are required.";
pub const CONFIGURATION_MESSAGE: &str = "Server configuration error.";
pub const UPSTREAM_MESSAGE: &str = "Failed to send notification. Please try again.";
pub const INTERNAL_MESSAGE: &str = "Internal server error. Please try again later.";

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Missing required submission fields")]
    MissingFields,

    #[error("Missing configuration: {}", .missing.join(", "))]
    Configuration { missing: Vec<&'static str> },

    #[error("Telegram API rejected the message: {0}")]
    Upstream(serde_json::Value),

    #[error("Request body could not be read: {0}")]
    UnreadableBody(String),

    #[error("Invalid JSON payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Invalid submission payload: {0}")]
    InvalidPayload(String),

    #[error(transparent)]
    Delivery(#[from] NotifyError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IntakeError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IntakeError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            IntakeError::MissingFields => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text shown to the caller. Only the first two classes are specific;
    /// everything server-side collapses into three generic messages.
    pub fn public_message(&self) -> &'static str {
        match self {
            IntakeError::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_MESSAGE,
            IntakeError::MissingFields => MISSING_FIELDS_MESSAGE,
            IntakeError::Configuration { .. } => CONFIGURATION_MESSAGE,
            IntakeError::Upstream(_) => UPSTREAM_MESSAGE,
            IntakeError::UnreadableBody(_)
            | IntakeError::MalformedPayload(_)
            | IntakeError::InvalidPayload(_)
            | IntakeError::Delivery(_)
            | IntakeError::Other(_) => INTERNAL_MESSAGE,
        }
    }

    fn log(&self) {
        match self {
            IntakeError::MethodNotAllowed(method) => {
                tracing::debug!(method = %method, "Rejected non-POST submission");
            }
            IntakeError::MissingFields => {
                tracing::debug!("Rejected submission with missing fields");
            }
            IntakeError::Configuration { missing } => {
                tracing::error!(missing = ?missing, "Missing environment variables");
            }
            IntakeError::Upstream(payload) => {
                tracing::error!(response = %payload, "Telegram API error");
            }
            other => {
                tracing::error!("Server error: {:?}", other);
            }
        }
    }
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let body = Json(FormResponse::error(self.public_message()));
        let mut response = (status, body).into_response();

        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}
