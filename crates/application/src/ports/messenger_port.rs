//! Messenger port - Interface to the chat platform
//!
//! Carries the inbound message fields the expense flow needs and the reply
//! sent back into the same chat.

#[cfg(test)]
use mockall::automock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// An incoming text message from the chat platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    /// Display name or username of the sender
    pub sender_name: String,
    /// Chat the message was posted in
    pub chat_id: i64,
    /// Platform message ID
    pub message_id: i64,
    /// Text content
    pub text: String,
}

/// An outgoing text reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingReply {
    /// Target chat
    pub chat_id: i64,
    /// Text content
    pub text: String,
    /// Optional: reply to a specific message ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i64>,
}

impl OutgoingReply {
    /// Create a new message to a chat
    #[must_use]
    pub fn new(chat_id: i64, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            reply_to: None,
        }
    }

    /// Create a reply that quotes the incoming message
    #[must_use]
    pub fn reply_to(incoming: &IncomingMessage, text: impl Into<String>) -> Self {
        Self {
            chat_id: incoming.chat_id,
            text: text.into(),
            reply_to: Some(incoming.message_id),
        }
    }
}

/// Port for sending messages back to the chat platform
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MessengerPort: Send + Sync {
    /// Send a text reply
    async fn send_reply(&self, reply: OutgoingReply) -> Result<(), ApplicationError>;
}
