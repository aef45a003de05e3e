//! Contact-form submission and its presence rules

use serde_json::{Map, Value};

use crate::error::{IntakeError, Result};

pub const SERVICE_PLACEHOLDER: &str = "Not specified";

/// A submission that passed validation. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub service: Option<String>,
    pub message: String,
}

impl Submission {
    /// Extracts the form fields from a decoded JSON body.
    ///
    /// `name`, `email` and `message` must be truthy: present and not `null`,
    /// `false`, `0` or `""`. A `null` body is a malformed request rather than
    /// an empty form; any other non-object body simply has no fields.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let fields = match payload {
            Value::Object(fields) => Some(fields),
            Value::Null => {
                return Err(IntakeError::InvalidPayload(
                    "submission body is null".to_string(),
                ))
            }
            _ => None,
        };

        let field = |key: &str| fields.and_then(|fields| truthy_text(fields, key));

        match (field("name"), field("email"), field("message")) {
            (Some(name), Some(email), Some(message)) => Ok(Self {
                name,
                email,
                service: field("service"),
                message,
            }),
            _ => Err(IntakeError::MissingFields),
        }
    }

    pub fn service_label(&self) -> &str {
        self.service.as_deref().unwrap_or(SERVICE_PLACEHOLDER)
    }
}

fn truthy_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
