//! Logging initialization
//!
//! Installs the global `tracing` subscriber.

mod logging;

pub use logging::{TelemetryError, build_filter, init_logging};
