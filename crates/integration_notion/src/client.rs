//! Notion client for creating expense pages
//!
//! One `POST /v1/pages` per expense, no retries.

use std::{fmt, time::Duration};

use domain::{Amount, Category, ParsedExpense};
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    ApiErrorResponse, CreatePageRequest, CreatedPage, ExpenseProperties, NumberProperty, Parent,
    SelectProperty, TitleProperty,
};

/// Notion API errors
#[derive(Debug, Error)]
pub enum NotionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} {code} - {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Missing configuration: {0}")]
    Configuration(String),
}

/// Notion client configuration
#[derive(Clone)]
pub struct NotionConfig {
    /// Integration secret (sent as bearer token)
    pub token: String,
    /// Target database ID
    pub database_id: String,
    /// API base URL (default: <https://api.notion.com>)
    pub base_url: String,
    /// Value of the `Notion-Version` header
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Currency symbol used in generated titles
    pub currency_symbol: String,
}

impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("token", &"[REDACTED]")
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("currency_symbol", &self.currency_symbol)
            .finish()
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            base_url: "https://api.notion.com".to_string(),
            api_version: "2022-06-28".to_string(),
            timeout_secs: 10,
            currency_symbol: "฿".to_string(),
        }
    }
}

/// Title used when the message carried none, e.g. `฿ 100.00 spend with food`
#[must_use]
pub fn default_title(currency_symbol: &str, amount: Amount, category: Category) -> String {
    format!(
        "{currency_symbol} {} spend with {}",
        amount.formatted(),
        category.name()
    )
}

/// Client for the Notion pages API
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: Client,
    config: NotionConfig,
}

impl NotionClient {
    /// Create a new Notion client
    pub fn new(config: NotionConfig) -> Result<Self, NotionError> {
        if config.token.is_empty() {
            return Err(NotionError::Configuration("token is required".to_string()));
        }
        if config.database_id.is_empty() {
            return Err(NotionError::Configuration(
                "database_id is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the create-page payload for an expense
    ///
    /// Always carries a title: the typed one, or a generated summary.
    #[must_use]
    pub fn build_create_page(&self, expense: &ParsedExpense) -> CreatePageRequest {
        let title = expense.title().map_or_else(
            || {
                default_title(
                    &self.config.currency_symbol,
                    expense.amount(),
                    expense.category(),
                )
            },
            ToString::to_string,
        );

        CreatePageRequest {
            parent: Parent::database(&self.config.database_id),
            properties: ExpenseProperties {
                title: TitleProperty::new(title),
                amount: NumberProperty::new(expense.amount().value()),
                category: SelectProperty::new(expense.category().name()),
            },
        }
    }

    /// Create one page for the expense
    ///
    /// Any 2xx status counts as success. Other statuses become
    /// [`NotionError::Api`] with whatever code and message the body carried.
    #[instrument(skip(self, expense), fields(category = %expense.category()))]
    pub async fn create_expense(&self, expense: &ParsedExpense) -> Result<CreatedPage, NotionError> {
        let request = self.build_create_page(expense);

        debug!(amount = %expense.amount(), "Creating Notion page");

        let response = self
            .client
            .post(format!("{}/v1/pages", self.config.base_url))
            .bearer_auth(&self.config.token)
            .header("Notion-Version", &self.config.api_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), body = %body, "Notion response");

        if status.is_success() {
            let page = serde_json::from_str::<CreatedPage>(&body).unwrap_or_else(|e| {
                warn!(error = %e, "Unreadable Notion response body");
                CreatedPage::default()
            });
            Ok(page)
        } else {
            let error = serde_json::from_str::<ApiErrorResponse>(&body).ok();
            Err(NotionError::Api {
                status: status.as_u16(),
                code: error.as_ref().map(|e| e.code.clone()).unwrap_or_default(),
                message: error.map(|e| e.message).unwrap_or(body),
            })
        }
    }

    /// Database this client writes to
    #[must_use]
    pub fn database_id(&self) -> &str {
        &self.config.database_id
    }
}
