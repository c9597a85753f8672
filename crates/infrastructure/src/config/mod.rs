//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: Telegram and Notion
//! - `logging`: log format and filter
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml`, `EXPENSE_BOT__SECTION__KEY` environment variables, and
//! finally the flat `TELEGRAM_BOT_TOKEN`, `NOTION_SECRET`,
//! `NOTION_DATABASE_ID` and `PORT` variables.

mod integrations;
mod logging;
mod server;

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use integrations::{NotionAppConfig, TelegramAppConfig};
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Prefix for structured environment variables
const ENV_PREFIX: &str = "EXPENSE_BOT";

/// Separator between prefix, section and key
const ENV_SEPARATOR: &str = "__";

/// Flat environment variables and the config keys they override
const FLAT_OVERRIDES: [(&str, &str); 4] = [
    ("TELEGRAM_BOT_TOKEN", "telegram.bot_token"),
    ("NOTION_SECRET", "notion.secret"),
    ("NOTION_DATABASE_ID", "notion.database_id"),
    ("PORT", "server.port"),
];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Required values are absent or empty
    #[error("Missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Telegram configuration
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Notion configuration
    #[serde(default)]
    pub notion: NotionAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::build(config::File::with_name("config").required(false), &env)
    }

    /// Load configuration from TOML text and an explicit environment map
    pub fn from_sources(
        file: Option<&str>,
        env: &HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let file = config::File::from_str(file.unwrap_or_default(), config::FileFormat::Toml);
        Self::build(file, env)
    }

    fn build<S>(file: S, env: &HashMap<String, String>) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let mut builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(file)
            // Override with prefixed variables (e.g., EXPENSE_BOT__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .source(Some(env.clone().into_iter().collect())),
            );

        for (var, key) in FLAT_OVERRIDES {
            let value = env.get(var).filter(|v| !v.is_empty()).cloned();
            builder = builder.set_override_option(key, value)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Check that every required value is present
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();

        if is_blank_secret(self.telegram.bot_token.as_ref()) {
            missing.push("TELEGRAM_BOT_TOKEN");
        }
        if is_blank_secret(self.notion.secret.as_ref()) {
            missing.push("NOTION_SECRET");
        }
        if self
            .notion
            .database_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
        {
            missing.push("NOTION_DATABASE_ID");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }
}

fn is_blank_secret(secret: Option<&SecretString>) -> bool {
    secret.is_none_or(|s| s.expose_secret().trim().is_empty())
}
