//! video_gallery library: static video catalog browsing
//!
//! This library loads a fixed JSON catalog of video metadata, validates it,
//! and derives filtered, searched and sorted views of it that can be rendered
//! as terminal text, a static HTML page, JSONL or CSV.
//!
//! # Example
//!
//! ```
//! use video_gallery::{Catalog, GalleryView, SortMode, ViewState};
//!
//! let catalog = Catalog::from_json_str(
//!     r#"[{"link": "https://example.com/v/1", "category": "yoga", "viewCount": 10}]"#,
//!     "inline",
//! );
//! let state = ViewState::new("", "yoga", SortMode::Views);
//! let view = GalleryView::derive(&catalog, &state);
//! assert_eq!(view.count(), 1);
//! assert_eq!(view.categories(), ["all", "yoga"]);
//! ```

pub mod catalog;
pub mod config;
mod error_handling;
pub mod export;
pub mod initialization;
pub mod pipeline;
pub mod session;
pub mod view;

// Re-export public API
pub use catalog::{Catalog, CatalogStatus, VideoRecord};
pub use config::{Config, ExportFormat, LogFormat, LogLevel, SortMode};
pub use error_handling::{CatalogError, InitializationError, RejectReason, ValidationStats};
pub use pipeline::{CategoryFilter, ViewState};
pub use run::{run_gallery, GalleryReport};
pub use view::{Card, GalleryView, ResultState, Thumbnail};

// Internal run module (loads, derives and renders one view)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::catalog::Catalog;
    use crate::config::Config;
    use crate::export::render_to;
    use crate::pipeline::ViewState;
    use crate::view::GalleryView;

    /// Results of a gallery render.
    #[derive(Debug, Clone)]
    pub struct GalleryReport {
        /// Number of valid videos in the catalog
        pub catalog_size: usize,
        /// Number of videos matching the filters
        pub displayed: usize,
        /// Number of catalog entries skipped as malformed
        pub rejected: usize,
        /// Whether the catalog source could be read and parsed
        pub catalog_available: bool,
    }

    /// Loads the configured catalog and renders one view of it.
    ///
    /// Catalog problems never fail the run: a missing or unparsable catalog
    /// renders the "catalog unavailable" state and a malformed entry is
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output cannot be created or written.
    pub fn run_gallery(config: &Config) -> Result<GalleryReport> {
        let catalog = Catalog::open(config.catalog.as_deref());
        let state = ViewState::from_config(config);
        let view = GalleryView::derive(&catalog, &state);

        let displayed = render_to(&view, config.format, config.output.as_deref())
            .context("Failed to render gallery")?;

        if let Some(output) = &config.output {
            info!(
                "Wrote {} video{} to {}",
                displayed,
                if displayed == 1 { "" } else { "s" },
                output.display()
            );
        }

        Ok(GalleryReport {
            catalog_size: catalog.len(),
            displayed,
            rejected: catalog.stats().total_rejected(),
            catalog_available: catalog.is_available(),
        })
    }
}
