//! Application services - Use case implementations

mod expense_service;

pub use expense_service::{
    ExpenseService, ExpenseServiceConfig, NOT_UNDERSTOOD_REPLY, ReplyOutcome, STORE_FAILED_REPLY,
};
