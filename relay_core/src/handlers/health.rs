//! Liveness endpoint

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

pub async fn handle_health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "app": state.app_name,
        "version": state.version,
        "telegram_configured": state.intake.is_configured(),
        "timestamp": chrono::Utc::now().timestamp()
    }))
}
