//! In-place heap sort.

use crate::collections::heap::{heapify, sort_heap};

/// Sort ascending.
///
/// O(n log n) time complexity, O(1) extra space
pub fn heap_sort<T: Ord>(elements: &mut [T]) {
    heap_sort_by(elements, |a, b| a > b);
}

/// Sort with a heap ordered by `sort`.
///
/// A max-first comparator (`a > b`) sorts ascending; a min-first one
/// sorts descending.
pub fn heap_sort_by<T, F>(elements: &mut [T], sort: F)
where
    F: Fn(&T, &T) -> bool,
{
    heapify(elements, &sort);
    sort_heap(elements, &sort);
}
