//! Telegram messenger adapter
//!
//! Implements the `MessengerPort` trait using the Telegram integration crate.

use application::error::ApplicationError;
use application::ports::{MessengerPort, OutgoingReply};
use async_trait::async_trait;
use integration_telegram::{TelegramClient, TelegramClientConfig, TelegramError};
use tracing::{debug, instrument};

/// Adapter that implements `MessengerPort` using `TelegramClient`
#[derive(Debug)]
pub struct TelegramMessengerAdapter {
    client: TelegramClient,
}

impl TelegramMessengerAdapter {
    /// Create a new Telegram messenger adapter
    ///
    /// # Errors
    /// Returns an error if the client configuration is invalid.
    pub fn new(config: TelegramClientConfig) -> Result<Self, TelegramError> {
        Ok(Self {
            client: TelegramClient::new(config)?,
        })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn from_client(client: TelegramClient) -> Self {
        Self { client }
    }

    fn map_error(err: TelegramError) -> ApplicationError {
        match err {
            TelegramError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

#[async_trait]
impl MessengerPort for TelegramMessengerAdapter {
    #[instrument(skip(self, reply), fields(chat_id = reply.chat_id))]
    async fn send_reply(&self, reply: OutgoingReply) -> Result<(), ApplicationError> {
        let sent = self
            .client
            .send_message(reply.chat_id, &reply.text, reply.reply_to)
            .await
            .map_err(Self::map_error)?;

        debug!(message_id = sent.message_id, "Reply sent");
        Ok(())
    }
}
