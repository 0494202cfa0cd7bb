//! CSV export functionality.
//!
//! Flat view: one row per displayed video, one column per record field.
//! Absent fields are written as empty cells.

use anyhow::Result;
use csv::Writer;
use std::io::Write;

use crate::view::GalleryView;

const HEADERS: [&str; 8] = [
    "link",
    "title",
    "description",
    "thumbnailUrl",
    "duration",
    "viewCount",
    "authorUrl",
    "category",
];

/// Writes the displayed records as CSV with a header row.
///
/// Returns the number of records written.
pub fn render_csv<W: Write + ?Sized>(view: &GalleryView<'_>, out: &mut W) -> Result<usize> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(HEADERS)?;

    let mut record_count = 0;
    for record in view.records() {
        let view_count = record
            .view_count
            .map(|v| v.to_string())
            .unwrap_or_default();
        writer.write_record([
            record.link.as_str(),
            record.title.as_deref().unwrap_or(""),
            record.description.as_deref().unwrap_or(""),
            record.thumbnail_url.as_deref().unwrap_or(""),
            record.duration.as_deref().unwrap_or(""),
            view_count.as_str(),
            record.author_url.as_deref().unwrap_or(""),
            record.category.as_deref().unwrap_or(""),
        ])?;
        record_count += 1;
    }

    writer.flush()?;
    Ok(record_count)
}
