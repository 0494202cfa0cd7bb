//! Category list extraction.

use std::collections::BTreeSet;
use std::iter;

use crate::catalog::VideoRecord;
use crate::config::ALL_CATEGORIES;

/// Distinct non-empty categories in lexicographic order, after the "all"
/// sentinel.
///
/// Always computed from the full working set so the options do not shrink as
/// filters are applied. A category spelled exactly like the sentinel is
/// folded into it.
pub fn categories(records: &[VideoRecord]) -> Vec<String> {
    let unique: BTreeSet<&str> = records
        .iter()
        .filter_map(|record| record.category.as_deref())
        .filter(|category| !category.is_empty() && *category != ALL_CATEGORIES)
        .collect();

    iter::once(ALL_CATEGORIES)
        .chain(unique)
        .map(str::to_string)
        .collect()
}
