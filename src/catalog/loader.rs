//! Catalog loading.
//!
//! Reads the catalog from a file, a string, or the bundled asset, then runs
//! the validator. Read and parse failures leave the catalog empty and mark it
//! unavailable instead of returning an error.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::models::VideoRecord;
use super::validate::validate_with_stats;
use crate::config::{BUNDLED_CATALOG, BUNDLED_CATALOG_LABEL};
use crate::error_handling::{CatalogError, ValidationStats};

/// Whether the catalog source itself could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// The source was read and parsed (it may still hold zero valid videos)
    Loaded,
    /// The source could not be read or parsed; the working set is empty
    Unavailable(String),
}

/// The immutable working set for a session.
///
/// Holds the validated records in catalog order. Nothing mutates it after
/// construction; views borrow from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<VideoRecord>,
    status: CatalogStatus,
    stats: ValidationStats,
    source: String,
}

impl Catalog {
    /// Builds a catalog from an already parsed JSON value.
    pub fn from_value(raw: &Value, source: impl Into<String>) -> Self {
        let mut stats = ValidationStats::new();
        let records = validate_with_stats(raw, &mut stats);
        Catalog {
            records,
            status: CatalogStatus::Loaded,
            stats,
            source: source.into(),
        }
    }

    /// Parses and validates catalog text.
    pub fn from_json_str(text: &str, source: impl Into<String>) -> Self {
        let source = source.into();
        match serde_json::from_str::<Value>(text) {
            Ok(raw) => Self::from_value(&raw, source),
            Err(e) => Self::unavailable(CatalogError::from(e), source),
        }
    }

    /// Loads the catalog compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_json_str(BUNDLED_CATALOG, BUNDLED_CATALOG_LABEL)
    }

    /// Loads a catalog file.
    pub fn load(path: &Path) -> Self {
        let source = path.display().to_string();
        match read_catalog(path) {
            Ok(raw) => Self::from_value(&raw, source),
            Err(e) => Self::unavailable(e, source),
        }
    }

    /// Loads `path` when given, otherwise the bundled catalog.
    pub fn open(path: Option<&Path>) -> Self {
        let catalog = match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        };
        if let CatalogStatus::Unavailable(reason) = &catalog.status {
            log::warn!("{}", reason);
        }
        catalog.stats.log_summary(&catalog.source);
        catalog
    }

    fn unavailable(error: CatalogError, source: String) -> Self {
        Catalog {
            records: Vec::new(),
            status: CatalogStatus::Unavailable(error.to_string()),
            stats: ValidationStats::new(),
            source,
        }
    }

    /// Valid records in catalog order.
    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == CatalogStatus::Loaded
    }

    pub fn stats(&self) -> &ValidationStats {
        &self.stats
    }

    /// Where the catalog came from (path or label).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads and parses a catalog file without validating it.
///
/// # Errors
///
/// Returns `CatalogError::Read` if the file cannot be read and
/// `CatalogError::Parse` if it is not JSON.
pub fn read_catalog(path: &Path) -> Result<Value, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
