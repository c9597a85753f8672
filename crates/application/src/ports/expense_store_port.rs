//! Expense store port
//!
//! Defines the interface for persisting expenses in the external record store.

use async_trait::async_trait;
use domain::ParsedExpense;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the system of record that keeps expense entries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ExpenseStorePort: Send + Sync {
    /// Create one record for the expense
    ///
    /// Returns the store's identifier for the created record. Makes exactly
    /// one remote call and never retries.
    async fn record_expense(&self, expense: &ParsedExpense) -> Result<String, ApplicationError>;
}
