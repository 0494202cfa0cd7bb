//! Rendering of derived gallery views.
//!
//! This module turns a [`GalleryView`] into one of several output formats
//! (terminal text, static HTML, JSONL, CSV) for different use cases.

mod csv;
mod html;
mod jsonl;
mod text;
mod writer;

pub use csv::render_csv;
pub use html::render_html;
pub use jsonl::render_jsonl;
pub use text::render_text;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::config::ExportFormat;
use crate::view::GalleryView;

/// Renders `view` in `format` into `out`.
///
/// `color` only affects the text format. Returns the number of videos written.
pub fn render<W: Write + ?Sized>(
    view: &GalleryView<'_>,
    format: ExportFormat,
    out: &mut W,
    color: bool,
) -> Result<usize> {
    match format {
        ExportFormat::Text => render_text(view, out, color),
        ExportFormat::Html => render_html(view, out),
        ExportFormat::Jsonl => render_jsonl(view, out),
        ExportFormat::Csv => render_csv(view, out),
    }
}

/// Renders `view` to `output`, or to stdout when `None`.
///
/// Text output is colored only when writing to a terminal.
pub fn render_to(
    view: &GalleryView<'_>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<usize> {
    let (mut writer, is_terminal) = writer::open_output(output)?;
    let count = render(view, format, &mut *writer, is_terminal)?;
    writer.flush().context("Failed to flush output")?;
    Ok(count)
}
