//! Notion expense store adapter
//!
//! Implements the `ExpenseStorePort` trait using the Notion integration crate.

use application::error::ApplicationError;
use application::ports::ExpenseStorePort;
use async_trait::async_trait;
use domain::ParsedExpense;
use integration_notion::{NotionClient, NotionConfig, NotionError};
use tracing::{debug, instrument, warn};

/// Adapter that implements `ExpenseStorePort` using `NotionClient`
pub struct NotionExpenseStoreAdapter {
    client: NotionClient,
}

impl NotionExpenseStoreAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    /// Returns an error if the client configuration is invalid.
    pub fn new(config: NotionConfig) -> Result<Self, NotionError> {
        Ok(Self {
            client: NotionClient::new(config)?,
        })
    }

    fn map_error(err: NotionError) -> ApplicationError {
        match err {
            NotionError::Configuration(msg) => ApplicationError::Configuration(msg),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }
}

impl std::fmt::Debug for NotionExpenseStoreAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionExpenseStoreAdapter")
            .field("database_id", &self.client.database_id())
            .finish()
    }
}

#[async_trait]
impl ExpenseStorePort for NotionExpenseStoreAdapter {
    #[instrument(skip(self, expense), fields(category = %expense.category()))]
    async fn record_expense(&self, expense: &ParsedExpense) -> Result<String, ApplicationError> {
        match self.client.create_expense(expense).await {
            Ok(page) => {
                debug!(page_id = %page.id, "Expense page created");
                Ok(page.id)
            },
            Err(e) => {
                warn!(error = %e, "Failed to create expense page");
                Err(Self::map_error(e))
            },
        }
    }
}
