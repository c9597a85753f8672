//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod expense_store_port;
mod messenger_port;

pub use expense_store_port::ExpenseStorePort;
#[cfg(test)]
pub use expense_store_port::MockExpenseStorePort;
pub use messenger_port::{IncomingMessage, MessengerPort, OutgoingReply};
#[cfg(test)]
pub use messenger_port::MockMessengerPort;
