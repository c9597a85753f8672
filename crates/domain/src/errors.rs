//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Amount could not be parsed or is out of range
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
