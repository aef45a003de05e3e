pub mod settings;

pub use settings::{AppConfig, NotificationConfig, ServerConfig, TelegramConfig};
