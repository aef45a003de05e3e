//! CORS (Cross-Origin Resource Sharing) middleware configuration

use axum::http::{header, HeaderValue, Method};
use tower_http::{
    cors::{Any, CorsLayer as TowerCorsLayer},
    set_header::SetResponseHeaderLayer,
};

/// Answers browser preflight requests. The form is public, so any origin may
/// post to it.
pub fn cors_layer_permissive() -> TowerCorsLayer {
    TowerCorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}

/// Forces a single `Access-Control-Allow-Origin: *` onto every response,
/// including the ones produced by rejections and fallbacks.
pub fn allow_any_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}
