//! Per-video card presentation.

use crate::catalog::VideoRecord;
use crate::config::{UNKNOWN_VIEWS_LABEL, UNTITLED_LABEL, VIEWS_MILLION, VIEWS_THOUSAND};

/// What a card shows in its thumbnail slot.
///
/// Each card owns its own thumbnail state; a failed image on one card never
/// affects another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail<'a> {
    /// Image to request
    Image(&'a str),
    /// Placeholder glyph, used when there is no image or it failed to load
    Placeholder,
}

/// Display data for one displayed record.
#[derive(Debug, Clone)]
pub struct Card<'a> {
    key: String,
    record: &'a VideoRecord,
    thumbnail: Thumbnail<'a>,
}

impl<'a> Card<'a> {
    /// `position` is the card's index in the displayed sequence.
    pub fn new(record: &'a VideoRecord, position: usize) -> Self {
        let thumbnail = match record.thumbnail_url.as_deref() {
            Some(url) if !url.is_empty() => Thumbnail::Image(url),
            _ => Thumbnail::Placeholder,
        };
        Card {
            key: format!("{}-{}", record.link, position),
            record,
            thumbnail,
        }
    }

    /// Display key; unique even when two records share a link.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn record(&self) -> &'a VideoRecord {
        self.record
    }

    /// Target opened when the card body is activated.
    pub fn link(&self) -> &'a str {
        &self.record.link
    }

    pub fn thumbnail(&self) -> &Thumbnail<'a> {
        &self.thumbnail
    }

    /// Switches this card to the placeholder after its image failed to load.
    #[allow(dead_code)] // Used in tests; the HTML page does this per card in its script
    pub(crate) fn mark_thumbnail_failed(&mut self) {
        if let Thumbnail::Image(url) = self.thumbnail {
            log::debug!("Thumbnail failed for {}: {}", self.record.link, url);
        }
        self.thumbnail = Thumbnail::Placeholder;
    }

    /// Title, or a fallback when missing or empty.
    pub fn title(&self) -> &'a str {
        non_empty(&self.record.title).unwrap_or(UNTITLED_LABEL)
    }

    pub fn description(&self) -> Option<&'a str> {
        non_empty(&self.record.description)
    }

    pub fn duration(&self) -> Option<&'a str> {
        non_empty(&self.record.duration)
    }

    pub fn author_url(&self) -> Option<&'a str> {
        non_empty(&self.record.author_url)
    }

    pub fn category(&self) -> Option<&'a str> {
        non_empty(&self.record.category)
    }

    /// View count line, e.g. "1.2M views" or "unknown views".
    pub fn views_label(&self) -> String {
        match self.record.view_count {
            Some(1) => "1 view".to_string(),
            Some(views) => format!("{} views", format_views(views)),
            None => UNKNOWN_VIEWS_LABEL.to_string(),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Abbreviates a view count: one decimal with `M` from a million, with `K`
/// from a thousand, the plain number below that.
pub fn format_views(views: u64) -> String {
    if views >= VIEWS_MILLION {
        format!("{:.1}M", views as f64 / VIEWS_MILLION as f64)
    } else if views >= VIEWS_THOUSAND {
        format!("{:.1}K", views as f64 / VIEWS_THOUSAND as f64)
    } else {
        views.to_string()
    }
}
