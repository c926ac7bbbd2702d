//! Binary search over sorted slices.

use std::cmp::Ordering;
use std::ops::Range;

/// Index of `value` in a sorted slice.
///
/// The slice must be sorted ascending; on an unsorted slice the result is
/// unspecified. With duplicates, any matching index may be returned.
///
/// O(log n) time complexity
pub fn binary_search<T: Ord>(elements: &[T], value: &T) -> Option<usize> {
    binary_search_in(elements, value, 0..elements.len())
}

/// Like [`binary_search`], restricted to `range` (clamped to the slice).
pub fn binary_search_in<T: Ord>(elements: &[T], value: &T, range: Range<usize>) -> Option<usize> {
    let end = range.end.min(elements.len());
    if range.start >= end {
        return None;
    }
    let middle = range.start + (end - range.start) / 2;
    match elements[middle].cmp(value) {
        Ordering::Equal => Some(middle),
        Ordering::Greater => binary_search_in(elements, value, range.start..middle),
        Ordering::Less => binary_search_in(elements, value, middle + 1..end),
    }
}
