//! Value Objects - Immutable, identity-less domain primitives

mod amount;
mod category;

pub use amount::Amount;
pub use category::Category;
