//! Terminal card listing.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::io::Write;

use crate::config::{
    CATALOG_UNAVAILABLE_TITLE, EMPTY_STATE_HINT, EMPTY_STATE_TITLE, GALLERY_TITLE,
    THUMBNAIL_PLACEHOLDER,
};
use crate::view::{Card, GalleryView, ResultState, Thumbnail};

/// Writes the view as a numbered card list.
///
/// Returns the number of cards written.
pub fn render_text<W: Write + ?Sized>(
    view: &GalleryView<'_>,
    out: &mut W,
    color: bool,
) -> Result<usize> {
    let state = view.state();
    writeln!(
        out,
        "{}  {}",
        paint(GALLERY_TITLE, color, |s| s.bold()),
        view.summary()
    )?;
    writeln!(
        out,
        "category: {}  sort: {:?}  search: {:?}",
        state.selected_category, state.sort_mode, state.search_query
    )?;
    writeln!(out, "categories: {}", view.categories().join(", "))?;
    writeln!(out)?;

    match view.result() {
        ResultState::Results(_) => {
            for (index, card) in view.cards().iter().enumerate() {
                write_card(out, index + 1, card, color)?;
            }
        }
        ResultState::NoMatches => {
            writeln!(out, "{}", paint(EMPTY_STATE_TITLE, color, |s| s.yellow()))?;
            writeln!(out, "{}", EMPTY_STATE_HINT)?;
        }
        ResultState::CatalogUnavailable(reason) => {
            writeln!(out, "{}", paint(CATALOG_UNAVAILABLE_TITLE, color, |s| s.red()))?;
            writeln!(out, "{}", reason)?;
        }
    }

    Ok(view.count())
}

fn write_card<W: Write + ?Sized>(
    out: &mut W,
    number: usize,
    card: &Card<'_>,
    color: bool,
) -> Result<()> {
    let duration = card
        .duration()
        .map(|d| format!("  [{}]", d))
        .unwrap_or_default();
    writeln!(
        out,
        "{:>3}. {}{}",
        number,
        paint(card.title(), color, |s| s.bold()),
        duration
    )?;

    if let Some(description) = card.description() {
        writeln!(out, "     {}", description)?;
    }

    let mut meta = vec![card.views_label()];
    if let Some(category) = card.category() {
        meta.push(format!("#{}", category));
    }
    writeln!(out, "     {}", meta.join("  "))?;

    match card.thumbnail() {
        Thumbnail::Image(url) => writeln!(out, "     thumbnail: {}", url)?,
        Thumbnail::Placeholder => writeln!(out, "     thumbnail: {}", THUMBNAIL_PLACEHOLDER)?,
    }
    if let Some(author) = card.author_url() {
        writeln!(out, "     author: {}", paint(author, color, |s| s.blue()))?;
    }
    writeln!(out, "     {}", paint(card.link(), color, |s| s.cyan().underline()))?;
    writeln!(out)?;
    Ok(())
}

fn paint(text: &str, color: bool, style: impl Fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}
