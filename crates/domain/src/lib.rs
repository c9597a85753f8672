//! Domain layer for the expense bot
//!
//! Contains the expense value objects and entities shared by every other crate.
//! This layer has no I/O and defines the ubiquitous language: amounts,
//! categories and parsed expenses.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
