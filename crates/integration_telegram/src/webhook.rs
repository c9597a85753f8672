//! Telegram webhook payloads
//!
//! Only the fields the bot reads are modelled; everything else in an update
//! is ignored during deserialization.

use serde::Deserialize;

/// A webhook update
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// Username if set, else first name
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.first_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// The text message carried by an update, flattened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMessage {
    pub sender_name: String,
    pub chat_id: i64,
    pub message_id: i64,
    pub text: String,
}

impl Update {
    /// Extract the text message, `None` for non-message or non-text updates
    #[must_use]
    pub fn text_message(&self) -> Option<TextMessage> {
        let message = self.message.as_ref()?;
        let text = message.text.as_ref()?;

        Some(TextMessage {
            sender_name: message
                .from
                .as_ref()
                .map_or_else(|| "unknown".to_string(), |u| u.display_name().to_string()),
            chat_id: message.chat.id,
            message_id: message.message_id,
            text: text.clone(),
        })
    }
}
