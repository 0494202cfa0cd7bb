//! Ordering of filtered records.

use std::cmp::Reverse;

use crate::catalog::VideoRecord;
use crate::config::SortMode;

/// Returns a newly ordered copy of `records`.
///
/// `SortMode::Default` keeps input order. `SortMode::Views` orders by view
/// count, highest first, with unknown counts compared as zero. The sort is
/// stable, so ties keep their input order. The input slice is not touched.
pub fn sort<'a>(records: &[&'a VideoRecord], mode: SortMode) -> Vec<&'a VideoRecord> {
    let mut sorted = records.to_vec();
    if mode == SortMode::Views {
        sorted.sort_by_key(|record| Reverse(record.views_for_sort()));
    }
    sorted
}
