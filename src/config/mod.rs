//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (sentinel value, display strings, thresholds)
//! - CLI option types and the library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExportFormat, LogFormat, LogLevel, SortMode};
