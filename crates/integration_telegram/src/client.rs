//! Telegram client for sending messages
//!
//! Uses the Telegram Bot API (<https://core.telegram.org/bots/api>).

use std::{fmt, time::Duration};

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument};

/// Telegram API errors
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Transport failure. The URL is stripped since it embeds the bot token.
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API error: {code} - {description}")]
    Api { code: i32, description: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }
}

/// Telegram client configuration
#[derive(Clone)]
pub struct TelegramClientConfig {
    /// Bot token from BotFather
    pub bot_token: String,
    /// API base URL (default: <https://api.telegram.org>)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl fmt::Debug for TelegramClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClientConfig")
            .field("bot_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for TelegramClientConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            base_url: "https://api.telegram.org".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient").finish_non_exhaustive()
    }
}

/// `sendMessage` request
#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_parameters: Option<ReplyParameters>,
}

#[derive(Debug, Serialize)]
struct ReplyParameters {
    message_id: i64,
    allow_sending_without_reply: bool,
}

/// Every Bot API response is wrapped in this envelope
#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default = "Option::default")]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    error_code: Option<i32>,
}

/// Sent message as returned by `sendMessage`
#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

/// The bot account, as returned by `getMe`
#[derive(Debug, Clone, Deserialize)]
pub struct BotUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl TelegramClient {
    /// Create a new Telegram client
    pub fn new(config: TelegramClientConfig) -> Result<Self, TelegramError> {
        if config.bot_token.is_empty() {
            return Err(TelegramError::Configuration(
                "bot_token is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = format!(
            "{}/bot{}",
            config.base_url.trim_end_matches('/'),
            config.bot_token
        );

        Ok(Self { client, base_url })
    }

    /// Send a text message, optionally as a reply to another message
    #[instrument(skip(self, text))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to_message_id: Option<i64>,
    ) -> Result<SentMessage, TelegramError> {
        let request = SendMessageRequest {
            chat_id,
            text,
            reply_parameters: reply_to_message_id.map(|message_id| ReplyParameters {
                message_id,
                allow_sending_without_reply: true,
            }),
        };

        debug!(message_len = text.len(), "Sending Telegram message");

        let response = self
            .client
            .post(format!("{}/sendMessage", self.base_url))
            .json(&request)
            .send()
            .await?;

        Self::read_envelope(response).await
    }

    /// Fetch the bot account; doubles as a token check
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<BotUser, TelegramError> {
        let response = self
            .client
            .get(format!("{}/getMe", self.base_url))
            .send()
            .await?;

        Self::read_envelope(response).await
    }

    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TelegramError> {
        let status = response.status();
        let envelope: ApiResponse<T> = response.json().await?;

        match envelope {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse {
                description,
                error_code,
                ..
            } => Err(TelegramError::Api {
                code: error_code.unwrap_or_else(|| i32::from(status.as_u16())),
                description: description.unwrap_or_else(|| "empty result".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation_requires_token() {
        let result = TelegramClient::new(TelegramClientConfig::default());
        assert!(matches!(result, Err(TelegramError::Configuration(_))));
    }

    #[test]
    fn client_creation_succeeds_with_token() {
        let config = TelegramClientConfig {
            bot_token: "123:abc".to_string(),
            ..Default::default()
        };
        assert!(TelegramClient::new(config).is_ok());
    }

    #[test]
    fn debug_never_shows_token() {
        let config = TelegramClientConfig {
            bot_token: "123:secret".to_string(),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("secret"));

        let client = TelegramClient::new(config).unwrap();
        assert!(!format!("{client:?}").contains("secret"));
    }

    #[test]
    fn reply_parameters_serialized_only_when_set() {
        let request = SendMessageRequest {
            chat_id: 1,
            text: "hi",
            reply_parameters: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("reply_parameters").is_none());

        let request = SendMessageRequest {
            chat_id: 1,
            text: "hi",
            reply_parameters: Some(ReplyParameters {
                message_id: 9,
                allow_sending_without_reply: true,
            }),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["reply_parameters"]["message_id"], 9);
    }

    #[test]
    fn error_display() {
        let err = TelegramError::Api {
            code: 400,
            description: "Bad Request: chat not found".to_string(),
        };
        assert!(err.to_string().contains("chat not found"));
    }
}
