//! Application initialization.
//!
//! The gallery has a single process-wide resource to set up: the logger.

mod logger;

// Re-export public API
pub use logger::{init_logger, init_logger_with};
