//! Telegram integration
//!
//! Handles Telegram Bot API webhook updates and message sending.

pub mod client;
pub mod webhook;

pub use client::{BotUser, TelegramClient, TelegramClientConfig, TelegramError};
pub use webhook::{Chat, Message, TextMessage, Update, User};
