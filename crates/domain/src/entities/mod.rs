//! Domain entities

mod expense;

pub use expense::ParsedExpense;
