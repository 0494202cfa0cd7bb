//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::ALL_CATEGORIES;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Ordering applied to the filtered videos.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Keep catalog order
    #[default]
    Default,
    /// Most viewed first; unknown counts sort as zero
    Views,
}

/// Output format for a rendered gallery view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Card listing for the terminal
    #[default]
    Text,
    /// Self-contained static HTML page
    Html,
    /// One JSON object per displayed video
    Jsonl,
    /// Flat CSV, one row per displayed video
    Csv,
}

/// Library configuration (no CLI dependencies).
///
/// Describes which catalog to load and which view of it to render. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```
/// use video_gallery::{Config, SortMode};
///
/// let config = Config {
///     search: "yoga".to_string(),
///     sort: SortMode::Views,
///     ..Default::default()
/// };
/// assert_eq!(config.category, "all");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog file; the bundled catalog is used when `None`
    pub catalog: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Free-text search query
    pub search: String,

    /// Selected category, or the "all" sentinel
    pub category: String,

    /// Sort mode
    pub sort: SortMode,

    /// Output format
    pub format: ExportFormat,

    /// Output file (stdout if `None`)
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortMode::Default,
            format: ExportFormat::Text,
            output: None,
        }
    }
}

impl Config {
    /// Level filter for the logger.
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.clone().into()
    }
}
