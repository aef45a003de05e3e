//! Contact-form intake that relays each submission to a Telegram chat.

pub mod config;
pub mod error;
pub mod handlers;
pub mod intake;
pub mod middleware;
pub mod models;
pub mod notification;
pub mod telegram;

pub use config::AppConfig;
pub use error::{IntakeError, Result};
pub use handlers::routes::create_routes;
pub use intake::FormIntake;
pub use models::{FormResponse, Submission};
pub use notification::format_notification;
pub use telegram::{Notifier, NotifyError, TelegramClient, TelegramCredentials};

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub intake: FormIntake,
}

impl AppState {
    pub fn new(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            app_name: "Contact Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            intake: FormIntake::new(
                config.telegram.clone(),
                config.notification.clone(),
                notifier,
            ),
        }
    }

    /// State wired to the real Telegram API client.
    pub fn from_config(config: &AppConfig) -> std::result::Result<Self, NotifyError> {
        let client = TelegramClient::new(&config.telegram)?;
        Ok(Self::new(config, Arc::new(client)))
    }
}

pub fn create_app(state: AppState) -> Router {
    let mut router = Router::new().merge(create_routes());

    router = router.layer(middleware::cors::cors_layer_permissive());

    router = router.layer(middleware::cors::allow_any_origin_layer());

    router = middleware::logging::with_request_logging(router);

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> std::io::Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
