use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_SOURCE_LABEL: &str = "thingsdoneimmediately.com";

/// Variable names the existing deployment exports its secrets under. They win
/// over every other source.
const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub telegram: TelegramConfig,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
    pub api_base_url: String,
    /// Unset means the outbound call is only bounded by the caller.
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub source_label: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            telegram: TelegramConfig::default(),
            notification: NotificationConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8888,
        }
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: None,
            api_base_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            source_label: DEFAULT_SOURCE_LABEL.to_string(),
        }
    }
}

impl TelegramConfig {
    /// Names of the secrets that are absent or empty.
    pub fn missing_secrets(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.bot_token) {
            missing.push(BOT_TOKEN_ENV);
        }
        if is_blank(&self.chat_id) {
            missing.push(CHAT_ID_ENV);
        }
        missing
    }

    pub fn is_configured(&self) -> bool {
        self.missing_secrets().is_empty()
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Layers defaults, an optional config file, `APP_*` variables and finally
    /// the `TELEGRAM_*` secrets.
    pub fn load_from(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name(config_file).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("telegram.bot_token", std::env::var(BOT_TOKEN_ENV).ok())?
            .set_override_option("telegram.chat_id", std::env::var(CHAT_ID_ENV).ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.server.host.is_empty() {
            return Err(ConfigError::Message("Server host cannot be empty".to_string()));
        }

        if let Err(e) = reqwest::Url::parse(&self.telegram.api_base_url) {
            return Err(ConfigError::Message(format!(
                "Invalid Telegram API URL '{}': {}",
                self.telegram.api_base_url, e
            )));
        }

        if self.telegram.request_timeout_seconds == Some(0) {
            return Err(ConfigError::Message(
                "Telegram request timeout must be greater than 0".to_string(),
            ));
        }

        if self.notification.source_label.is_empty() {
            return Err(ConfigError::Message(
                "Notification source label cannot be empty".to_string(),
            ));
        }

        let missing = self.telegram.missing_secrets();
        if !missing.is_empty() {
            tracing::warn!(
                missing = ?missing,
                "Telegram credentials are not configured; submissions will be rejected"
            );
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
