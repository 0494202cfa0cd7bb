//! Video catalog: record model, validation and loading.
//!
//! The catalog is read once, narrowed from untyped JSON into
//! [`VideoRecord`]s, and then treated as read-only for the rest of the run.

mod loader;
mod models;
mod validate;

// Re-export public API
pub use loader::{read_catalog, Catalog, CatalogStatus};
pub use models::VideoRecord;
pub use validate::{validate, validate_with_stats};
