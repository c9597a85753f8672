//! Application state shared across handlers

use std::sync::Arc;

use application::ExpenseService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Expense service handling inbound chat messages
    pub expense_service: Arc<ExpenseService>,
}

impl AppState {
    /// Create state around the expense service
    #[must_use]
    pub const fn new(expense_service: Arc<ExpenseService>) -> Self {
        Self { expense_service }
    }
}
