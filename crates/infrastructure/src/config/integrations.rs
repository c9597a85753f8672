//! External service configuration: Telegram and Notion.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Telegram Bot API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot token from BotFather (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub bot_token: Option<SecretString>,

    /// API base URL (default: <https://api.telegram.org>)
    #[serde(default = "default_telegram_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for TelegramAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramAppConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            base_url: default_telegram_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TelegramAppConfig {
    /// Client configuration with the token exposed
    #[must_use]
    pub fn client_config(&self) -> integration_telegram::TelegramClientConfig {
        integration_telegram::TelegramClientConfig {
            bot_token: self
                .bot_token
                .as_ref()
                .map(|t| t.expose_secret().to_string())
                .unwrap_or_default(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// Notion API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct NotionAppConfig {
    /// Integration secret (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub secret: Option<SecretString>,

    /// Target database ID
    #[serde(default)]
    pub database_id: Option<String>,

    /// API base URL (default: <https://api.notion.com>)
    #[serde(default = "default_notion_base_url")]
    pub base_url: String,

    /// Value of the `Notion-Version` header
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Currency symbol used in generated titles and replies
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl std::fmt::Debug for NotionAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionAppConfig")
            .field("secret", &self.secret.as_ref().map(|_| "[REDACTED]"))
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("currency_symbol", &self.currency_symbol)
            .finish()
    }
}

impl Default for NotionAppConfig {
    fn default() -> Self {
        Self {
            secret: None,
            database_id: None,
            base_url: default_notion_base_url(),
            api_version: default_api_version(),
            timeout_secs: default_timeout_secs(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl NotionAppConfig {
    /// Client configuration with the secret exposed
    #[must_use]
    pub fn client_config(&self) -> integration_notion::NotionConfig {
        integration_notion::NotionConfig {
            token: self
                .secret
                .as_ref()
                .map(|s| s.expose_secret().to_string())
                .unwrap_or_default(),
            database_id: self.database_id.clone().unwrap_or_default(),
            base_url: self.base_url.clone(),
            api_version: self.api_version.clone(),
            timeout_secs: self.timeout_secs,
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

fn default_telegram_base_url() -> String {
    "https://api.telegram.org".to_string()
}

fn default_notion_base_url() -> String {
    "https://api.notion.com".to_string()
}

fn default_api_version() -> String {
    "2022-06-28".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_currency_symbol() -> String {
    "฿".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telegram_debug_redacts_token() {
        let config = TelegramAppConfig {
            bot_token: Some(SecretString::from("123:very-secret")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn notion_debug_redacts_secret() {
        let config = NotionAppConfig {
            secret: Some(SecretString::from("secret_abc")),
            database_id: Some("db".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret_abc"));
        assert!(debug.contains("db"));
    }

    #[test]
    fn notion_client_config_carries_values() {
        let config = NotionAppConfig {
            secret: Some(SecretString::from("secret_abc")),
            database_id: Some("db-1".to_string()),
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        let client = config.client_config();

        assert_eq!(client.token, "secret_abc");
        assert_eq!(client.database_id, "db-1");
        assert_eq!(client.api_version, "2022-06-28");
        assert_eq!(client.base_url, "https://api.notion.com");
        assert_eq!(client.currency_symbol, "$");
        assert_eq!(client.timeout_secs, 10);
    }

    #[test]
    fn telegram_client_config_carries_values() {
        let config = TelegramAppConfig {
            bot_token: Some(SecretString::from("123:abc")),
            timeout_secs: 3,
            ..Default::default()
        };
        let client = config.client_config();

        assert_eq!(client.bot_token, "123:abc");
        assert_eq!(client.base_url, "https://api.telegram.org");
        assert_eq!(client.timeout_secs, 3);
    }

    #[test]
    fn secrets_are_not_serialized() {
        let config = NotionAppConfig {
            secret: Some(SecretString::from("secret_abc")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret_abc"));
    }
}
