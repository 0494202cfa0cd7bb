//! Error handling and validation statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, catalog loading)
//! - Rejection reasons for malformed catalog entries
//! - Validation statistics tracking
//!
//! Catalog problems are fail-soft: they are counted and logged, never raised
//! to the caller of the pipeline.

mod stats;
mod types;

// Re-export public API
pub use stats::ValidationStats;
pub use types::{CatalogError, InitializationError, RejectReason};
