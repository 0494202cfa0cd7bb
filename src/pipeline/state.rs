//! Interaction state.
//!
//! Three independent inputs drive every view. Any combination is valid; there
//! are no transition rules between them.

use std::fmt;

use crate::catalog::VideoRecord;
use crate::config::{Config, SortMode, ALL_CATEGORIES};

/// Selected category filter.
///
/// `All` corresponds to the "all" sentinel shown first in the category list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No category restriction
    #[default]
    All,
    /// Keep only records whose category equals this value exactly
    Only(String),
}

impl CategoryFilter {
    /// Interprets a user selection; the sentinel maps to `All`.
    pub fn parse(selection: &str) -> Self {
        if selection == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_string())
        }
    }

    /// The selection as shown in the category list.
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Case-sensitive exact match; records without a category only pass `All`.
    pub fn matches(&self, record: &VideoRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category.as_deref() == Some(category.as_str()),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(selection: &str) -> Self {
        Self::parse(selection)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full interaction state vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text search; blank means no search
    pub search_query: String,
    pub selected_category: CategoryFilter,
    pub sort_mode: SortMode,
}

impl ViewState {
    pub fn new(search_query: impl Into<String>, category: &str, sort_mode: SortMode) -> Self {
        ViewState {
            search_query: search_query.into(),
            selected_category: CategoryFilter::parse(category),
            sort_mode,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.search.clone(), &config.category, config.sort)
    }

    /// True when a non-blank search query is active.
    pub fn has_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_parses_to_all() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Only("All".to_string())
        );
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::from("yoga").as_str(), "yoga");
    }

    #[test]
    fn test_category_match_is_exact() {
        let mut record = VideoRecord::new("a");
        record.category = Some("yoga".to_string());

        assert!(CategoryFilter::All.matches(&record));
        assert!(CategoryFilter::parse("yoga").matches(&record));
        assert!(!CategoryFilter::parse("Yoga").matches(&record));
        assert!(!CategoryFilter::parse("yog").matches(&record));

        let uncategorized = VideoRecord::new("b");
        assert!(CategoryFilter::All.matches(&uncategorized));
        assert!(!CategoryFilter::parse("yoga").matches(&uncategorized));
    }

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert!(state.search_query.is_empty());
        assert_eq!(state.selected_category, CategoryFilter::All);
        assert_eq!(state.sort_mode, SortMode::Default);
        assert!(!state.has_query());
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            search: "  ".to_string(),
            category: "pilates".to_string(),
            sort: SortMode::Views,
            ..Default::default()
        };
        let state = ViewState::from_config(&config);
        assert!(!state.has_query());
        assert_eq!(
            state.selected_category,
            CategoryFilter::Only("pilates".to_string())
        );
        assert_eq!(state.sort_mode, SortMode::Views);
    }
}
