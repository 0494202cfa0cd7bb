//! Category and text filtering.
//!
//! Two stages, always applied in this order: exact category match, then a
//! case-insensitive substring search over title, description and category.
//! Neither stage reorders its input.

use super::state::CategoryFilter;
use crate::catalog::VideoRecord;

/// Keeps records matching the selected category.
pub fn filter_by_category<'a, I>(records: I, category: &CategoryFilter) -> Vec<&'a VideoRecord>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    records
        .into_iter()
        .filter(|record| category.matches(record))
        .collect()
}

/// Keeps records whose title, description or category contains `query`.
///
/// A blank query keeps everything. Otherwise the query is lower-cased as
/// typed (surrounding whitespace included) and a record matches when any of
/// its three text fields contains it, ignoring case. Absent fields never match.
pub fn filter_by_search<'a, I>(records: I, query: &str) -> Vec<&'a VideoRecord>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    if query.trim().is_empty() {
        return records.into_iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches_search(record, &needle))
        .collect()
}

/// Category stage followed by search stage.
pub fn filter<'a, I>(records: I, category: &CategoryFilter, query: &str) -> Vec<&'a VideoRecord>
where
    I: IntoIterator<Item = &'a VideoRecord>,
{
    let by_category = filter_by_category(records, category);
    filter_by_search(by_category, query)
}

/// `needle` must already be lower-cased.
fn matches_search(record: &VideoRecord, needle: &str) -> bool {
    [&record.title, &record.description, &record.category]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(needle))
}
