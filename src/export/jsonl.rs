//! JSONL export functionality.
//!
//! One JSON object per displayed video, in display order, using the catalog's
//! camelCase labels. Absent fields are omitted rather than written as null.

use anyhow::{Context, Result};
use std::io::Write;

use crate::view::GalleryView;

/// Writes the displayed records as JSON Lines.
///
/// Returns the number of records written.
pub fn render_jsonl<W: Write + ?Sized>(view: &GalleryView<'_>, out: &mut W) -> Result<usize> {
    let mut record_count = 0;
    for record in view.records() {
        let line = serde_json::to_string(record)
            .with_context(|| format!("Failed to serialize video {}", record.link))?;
        writeln!(out, "{}", line)?;
        record_count += 1;
    }
    Ok(record_count)
}
