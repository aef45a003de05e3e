//! Route table

use axum::{
    routing::{any, get},
    Router,
};

use super::{health::handle_health, submit::handle_submit_form};
use crate::AppState;

pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";

/// Path the existing front end posts to.
pub const LEGACY_SUBMIT_FORM_PATH: &str = "/.netlify/functions/submit-form";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handle_health))
        .route(SUBMIT_FORM_PATH, any(handle_submit_form))
        .route(LEGACY_SUBMIT_FORM_PATH, any(handle_submit_form))
}
