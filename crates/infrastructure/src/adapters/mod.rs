//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod notion_expense_store_adapter;
mod telegram_messenger_adapter;

pub use notion_expense_store_adapter::NotionExpenseStoreAdapter;
pub use telegram_messenger_adapter::TelegramMessengerAdapter;
