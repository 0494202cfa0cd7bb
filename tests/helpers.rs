// Shared test helpers for catalog fixtures.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

use video_gallery::{Catalog, GalleryView, VideoRecord};

/// The catalog used by the filter, search and sort scenarios.
///
/// Three videos: two yoga (one without a view count) and one pilates.
#[allow(dead_code)] // Used by other test files
pub fn scenario_json() -> Value {
    json!([
        {"link": "a", "title": "Morning Yoga", "category": "yoga", "viewCount": 500},
        {"link": "b", "title": "Core Pilates", "category": "pilates", "viewCount": 9000},
        {"link": "c", "title": "Evening Yoga", "category": "yoga"}
    ])
}

#[allow(dead_code)] // Used by other test files
pub fn scenario_catalog() -> Catalog {
    Catalog::from_value(&scenario_json(), "scenario")
}

/// Writes `contents` to a temporary catalog file.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)] // Used by other test files
pub fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp catalog");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp catalog");
    file.flush().expect("Failed to flush temp catalog");
    file
}

/// Links of the displayed records, in display order.
#[allow(dead_code)] // Used by other test files
pub fn links(view: &GalleryView<'_>) -> Vec<String> {
    view.records().map(|r| r.link.clone()).collect()
}

#[allow(dead_code)] // Used by other test files
pub fn record_links(records: &[&VideoRecord]) -> Vec<String> {
    records.iter().map(|r| r.link.clone()).collect()
}
