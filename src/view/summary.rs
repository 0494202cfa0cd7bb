//! View projection.
//!
//! Turns the immutable catalog and the current [`ViewState`] into everything a
//! renderer needs: the cards to show, the result count, the category options
//! and which empty state (if any) applies.

use super::card::Card;
use crate::catalog::{Catalog, CatalogStatus, VideoRecord};
use crate::pipeline::{self, ViewState};

/// Outcome of a recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultState {
    /// At least one video matched
    Results(usize),
    /// The catalog loaded but nothing matched the current filters
    NoMatches,
    /// The catalog itself could not be loaded
    CatalogUnavailable(String),
}

/// A fully derived gallery view.
///
/// Borrows from the catalog; building a new view never changes it.
#[derive(Debug, Clone)]
pub struct GalleryView<'a> {
    state: ViewState,
    cards: Vec<Card<'a>>,
    categories: Vec<String>,
    result: ResultState,
    catalog_size: usize,
}

impl<'a> GalleryView<'a> {
    /// Recomputes the view for `state`.
    ///
    /// The card list and count follow the filters; the category options are
    /// always taken from the whole working set.
    pub fn derive(catalog: &'a Catalog, state: &ViewState) -> Self {
        let displayed = pipeline::apply(catalog.records(), state);
        let cards: Vec<Card<'a>> = displayed
            .into_iter()
            .enumerate()
            .map(|(position, record)| Card::new(record, position))
            .collect();

        let result = match catalog.status() {
            CatalogStatus::Unavailable(reason) => ResultState::CatalogUnavailable(reason.clone()),
            CatalogStatus::Loaded if cards.is_empty() => ResultState::NoMatches,
            CatalogStatus::Loaded => ResultState::Results(cards.len()),
        };

        log::debug!(
            "View recomputed: search={:?} category={} sort={:?} -> {} of {}",
            state.search_query,
            state.selected_category,
            state.sort_mode,
            cards.len(),
            catalog.len()
        );

        GalleryView {
            state: state.clone(),
            cards,
            categories: pipeline::categories(catalog.records()),
            result,
            catalog_size: catalog.len(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn cards(&self) -> &[Card<'a>] {
        &self.cards
    }

    /// Displayed records in display order.
    pub fn records(&self) -> impl Iterator<Item = &'a VideoRecord> + '_ {
        self.cards.iter().map(Card::record)
    }

    /// Number of videos matching the current filters.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Category options, "all" first.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Size of the whole working set.
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// One-line result summary, e.g. "Found 3 videos".
    pub fn summary(&self) -> String {
        let count = self.count();
        format!("Found {} video{}", count, if count == 1 { "" } else { "s" })
    }
}
