//! Contact-form submission endpoint

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
    Json,
};
use tracing::info;

use crate::{
    error::{IntakeError, Result},
    models::FormResponse,
    AppState,
};

/// Accepts every method so that non-POST requests get the JSON 405 body
/// instead of axum's empty one.
pub async fn handle_submit_form(
    State(state): State<AppState>,
    method: Method,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<FormResponse>> {
    info!("{} submit-form - {} byte body", method, body.as_ref().map_or(0, Bytes::len));

    let body = match body {
        Ok(body) => body,
        Err(rejection) if method == Method::POST => {
            return Err(IntakeError::UnreadableBody(rejection.body_text()));
        }
        Err(_) => Bytes::new(),
    };

    let confirmation = state.intake.process(&method, &body).await?;

    Ok(Json(FormResponse::success(confirmation)))
}
