//! Static HTML gallery page.
//!
//! The page is fully self-contained (inline styles and script, no asset
//! references), so it works from any deployment subpath or straight from
//! disk. Thumbnails are the only external requests.
//!
//! The page is a snapshot of one view. Its search, category and sort controls
//! are rendered disabled and only show the state the page was exported with;
//! changing them happens through `browse` or a new `list` run. Clicking a card
//! opens its link.

use anyhow::Result;
use std::io::Write;

use crate::config::{
    SortMode, AUTHOR_LINK_LABEL, CATALOG_UNAVAILABLE_TITLE, EMPTY_STATE_HINT, EMPTY_STATE_TITLE,
    GALLERY_TITLE, SEARCH_PLACEHOLDER, THUMBNAIL_PLACEHOLDER,
};
use crate::view::{Card, GalleryView, ResultState, Thumbnail};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #fafafa; color: #18181b; }
header { position: sticky; top: 0; background: #fff; box-shadow: 0 1px 2px rgba(0,0,0,.08); padding: 1.5rem 2rem; }
h1 { margin: 0 0 1rem; font-size: 1.75rem; }
.controls { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; }
.controls input, .controls select { padding: .5rem .75rem; border: 1px solid #d4d4d8; border-radius: .5rem; background: #f4f4f5; }
.controls input { flex: 1 1 20rem; }
.count { margin-left: auto; font-size: .875rem; color: #52525b; }
main { padding: 2rem; }
.grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.card { background: #fff; border-radius: .5rem; overflow: hidden; box-shadow: 0 2px 6px rgba(0,0,0,.1); cursor: pointer; transition: transform .3s; }
.card:hover { transform: translateY(-4px); }
.thumb { position: relative; aspect-ratio: 16 / 9; background: #e4e4e7; }
.thumb img { width: 100%; height: 100%; object-fit: cover; }
.placeholder { display: none; width: 100%; height: 100%; align-items: center; justify-content: center; font-size: 2.5rem; color: #a1a1aa; background: #d4d4d8; }
.thumb.failed img { display: none; }
.thumb.failed .placeholder, .thumb.empty .placeholder { display: flex; }
.duration { position: absolute; right: .5rem; bottom: .5rem; background: rgba(0,0,0,.8); color: #fff; font-size: .75rem; padding: .125rem .5rem; border-radius: .25rem; }
.body { padding: 1rem; }
.body h3 { margin: 0 0 .5rem; font-size: 1.1rem; }
.body p { margin: 0 0 .75rem; font-size: .875rem; color: #52525b; }
.meta { display: flex; justify-content: space-between; font-size: .875rem; color: #71717a; }
.meta a { color: #2563eb; text-decoration: none; }
.tag { display: inline-block; margin-top: .5rem; padding: .125rem .5rem; font-size: .75rem; background: #f4f4f5; border-radius: .25rem; }
.empty-state { text-align: center; padding: 5rem 0; color: #71717a; }
.empty-state .placeholder { display: flex; background: none; }
"#;

const SCRIPT: &str = r#"
document.querySelectorAll('.card[data-href]').forEach(function (card) {
  card.addEventListener('click', function () {
    window.open(card.getAttribute('data-href'), '_blank', 'noopener,noreferrer');
  });
});
document.querySelectorAll('.author-link').forEach(function (link) {
  link.addEventListener('click', function (event) { event.stopPropagation(); });
});
"#;

/// Writes the view as a complete HTML document.
///
/// Returns the number of cards written.
pub fn render_html<W: Write + ?Sized>(view: &GalleryView<'_>, out: &mut W) -> Result<usize> {
    let state = view.state();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(
        out,
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
    )?;
    writeln!(out, "<title>{}</title>", escape(GALLERY_TITLE))?;
    writeln!(out, "<style>{}</style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    writeln!(out, "<header>")?;
    writeln!(out, "<h1>{}</h1>", escape(GALLERY_TITLE))?;
    writeln!(out, "<div class=\"controls\">")?;
    writeln!(
        out,
        "<input type=\"text\" name=\"search\" placeholder=\"{}\" value=\"{}\" disabled>",
        escape(SEARCH_PLACEHOLDER),
        escape(&state.search_query)
    )?;
    writeln!(out, "<select name=\"category\" disabled>")?;
    for category in view.categories() {
        let selected = if category == state.selected_category.as_str() {
            " selected"
        } else {
            ""
        };
        writeln!(
            out,
            "<option value=\"{0}\"{1}>{0}</option>",
            escape(category),
            selected
        )?;
    }
    writeln!(out, "</select>")?;
    writeln!(out, "<select name=\"sort\" disabled>")?;
    for (mode, value, label) in [
        (SortMode::Default, "default", "Default"),
        (SortMode::Views, "views", "Most viewed"),
    ] {
        let selected = if mode == state.sort_mode { " selected" } else { "" };
        writeln!(out, "<option value=\"{}\"{}>{}</option>", value, selected, label)?;
    }
    writeln!(out, "</select>")?;
    writeln!(out, "<span class=\"count\">{}</span>", escape(&view.summary()))?;
    writeln!(out, "</div>")?;
    writeln!(out, "</header>")?;

    writeln!(out, "<main>")?;
    match view.result() {
        ResultState::Results(_) => {
            writeln!(out, "<div class=\"grid\">")?;
            for card in view.cards() {
                write_card(out, card)?;
            }
            writeln!(out, "</div>")?;
        }
        ResultState::NoMatches => {
            write_empty_state(out, EMPTY_STATE_TITLE, EMPTY_STATE_HINT)?;
        }
        ResultState::CatalogUnavailable(reason) => {
            write_empty_state(out, CATALOG_UNAVAILABLE_TITLE, reason)?;
        }
    }
    writeln!(out, "</main>")?;

    writeln!(out, "<script>{}</script>", SCRIPT)?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    Ok(view.count())
}

fn write_card<W: Write + ?Sized>(out: &mut W, card: &Card<'_>) -> Result<()> {
    writeln!(
        out,
        "<article class=\"card\" data-key=\"{}\" data-href=\"{}\">",
        escape(card.key()),
        escape(card.link())
    )?;

    // Each image hides itself and reveals its own placeholder on error.
    match card.thumbnail() {
        Thumbnail::Image(url) => {
            writeln!(out, "<div class=\"thumb\">")?;
            write!(
                out,
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" ",
                escape(url),
                escape(card.title())
            )?;
            writeln!(out, "onerror=\"this.parentNode.classList.add('failed')\">")?;
        }
        Thumbnail::Placeholder => {
            writeln!(out, "<div class=\"thumb empty\">")?;
        }
    }
    writeln!(
        out,
        "<div class=\"placeholder\">{}</div>",
        THUMBNAIL_PLACEHOLDER
    )?;
    if let Some(duration) = card.duration() {
        writeln!(out, "<span class=\"duration\">{}</span>", escape(duration))?;
    }
    writeln!(out, "</div>")?;

    writeln!(out, "<div class=\"body\">")?;
    writeln!(out, "<h3>{}</h3>", escape(card.title()))?;
    if let Some(description) = card.description() {
        writeln!(out, "<p>{}</p>", escape(description))?;
    }
    writeln!(out, "<div class=\"meta\">")?;
    writeln!(out, "<span>{}</span>", escape(&card.views_label()))?;
    if let Some(author) = card.author_url() {
        write!(out, "<a class=\"author-link\" href=\"{}\" ", escape(author))?;
        writeln!(
            out,
            "target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            AUTHOR_LINK_LABEL
        )?;
    }
    writeln!(out, "</div>")?;
    if let Some(category) = card.category() {
        writeln!(out, "<span class=\"tag\">{}</span>", escape(category))?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</article>")?;
    Ok(())
}

fn write_empty_state<W: Write + ?Sized>(out: &mut W, title: &str, detail: &str) -> Result<()> {
    writeln!(out, "<div class=\"empty-state\">")?;
    writeln!(out, "<div class=\"placeholder\">{}</div>", THUMBNAIL_PLACEHOLDER)?;
    writeln!(out, "<h3>{}</h3>", escape(title))?;
    writeln!(out, "<p>{}</p>", escape(detail))?;
    writeln!(out, "</div>")?;
    Ok(())
}

/// Escapes text for use in element content and quoted attribute values.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
