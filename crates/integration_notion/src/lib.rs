//! Notion integration
//!
//! Records expenses as pages in a Notion database
//! (<https://developers.notion.com/reference/post-page>).

pub mod client;
mod models;

pub use client::{NotionClient, NotionConfig, NotionError, default_title};
pub use models::{
    CreatePageRequest, CreatedPage, ExpenseProperties, NumberProperty, Parent, RichText,
    SelectOption, SelectProperty, TextContent, TitleProperty,
};
