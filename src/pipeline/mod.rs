//! Filter, search and sort pipeline.
//!
//! Every function here is pure: it borrows the working set and returns a new
//! sequence of references, so recomputing from the same state always yields
//! the same result.

mod categories;
mod filter;
mod sort;
mod state;

// Re-export public API
pub use categories::categories;
pub use filter::{filter, filter_by_category, filter_by_search};
pub use sort::sort;
pub use state::{CategoryFilter, ViewState};

use crate::catalog::VideoRecord;

/// Records to display for `state`: category filter, then search, then sort.
pub fn apply<'a>(records: &'a [VideoRecord], state: &ViewState) -> Vec<&'a VideoRecord> {
    let filtered = filter(records, &state.selected_category, &state.search_query);
    sort(&filtered, state.sort_mode)
}
