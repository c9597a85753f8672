//! Parsed expense entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{Amount, Category};

/// An expense extracted from a single chat message
///
/// Built once per inbound message and discarded after the record store call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExpense {
    amount: Amount,
    category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
}

impl ParsedExpense {
    /// Create a new expense. The title is trimmed and dropped when blank.
    #[must_use]
    pub fn new(amount: Amount, category: Category, title: Option<String>) -> Self {
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        Self {
            amount,
            category,
            title,
        }
    }

    #[must_use]
    pub const fn amount(&self) -> Amount {
        self.amount
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Explicit title typed after the category code, if any
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Whether this expense should be recorded
    ///
    /// Zero amounts match the grammar but are never stored.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !self.amount.is_zero() && self.category.is_known()
    }
}
