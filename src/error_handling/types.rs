//! Error type definitions.
//!
//! This module defines the error types and rejection reasons used throughout
//! the application.

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for catalog loading.
///
/// These never abort a gallery run: the loader records them on the catalog
/// and continues with an empty working set.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The catalog text is not JSON.
    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reasons a catalog value is excluded from the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RejectReason {
    /// The catalog root is not an array; the whole catalog counts as empty
    RootNotArray,
    /// The element is null, a scalar, or an array
    NotAnObject,
    /// The element has no link field
    MissingLink,
    /// The link field is present but not a string
    LinkNotString,
    /// The link field is an empty string
    EmptyLink,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::RootNotArray => "Catalog root is not an array",
            RejectReason::NotAnObject => "Entry is not an object",
            RejectReason::MissingLink => "Entry has no link",
            RejectReason::LinkNotString => "Entry link is not a string",
            RejectReason::EmptyLink => "Entry link is empty",
        }
    }
}
