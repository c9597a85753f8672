//! Application layer - Use cases and orchestration
//!
//! Contains the expense command parser, the port definitions for the record
//! store and the messenger, and the service that wires them together.

pub mod command_parser;
pub mod error;
pub mod ports;
pub mod services;

pub use command_parser::{ExpenseParser, ParsedCommand, extract_expense};
pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
