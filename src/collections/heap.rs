//! Binary heap ordered by a caller-supplied comparator.
//!
//! The tree is stored level by level in a dense `Vec`:
//! `left(i) = 2i + 1`, `right(i) = 2i + 2`, `parent(i) = (i - 1) / 2`.
//! The comparator `sort(a, b)` answers "does `a` come before `b`?"; ties are
//! allowed. After every public mutation no element comes before its parent.

use std::fmt;

/// Comparator type used by the `Ord`-based constructors.
pub type OrdComparator<T> = fn(&T, &T) -> bool;

/// A binary heap whose order is defined by `sort`.
#[derive(Clone)]
pub struct Heap<T, F> {
    elements: Vec<T>,
    sort: F,
}

impl<T: Ord> Heap<T, OrdComparator<T>> {
    /// Smallest element first.
    pub fn min_heap() -> Self {
        Self::new(|a, b| a < b)
    }

    /// Largest element first.
    pub fn max_heap() -> Self {
        Self::new(|a, b| a > b)
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty heap.
    pub fn new(sort: F) -> Self {
        Self {
            elements: Vec::new(),
            sort,
        }
    }

    /// Build a heap from an arbitrary sequence.
    ///
    /// O(n) time complexity (bottom-up heapify).
    pub fn with_elements(sort: F, elements: Vec<T>) -> Self {
        let mut heap = Self { elements, sort };
        heap.build_heap();
        heap
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The first element per the comparator, without removing it.
    ///
    /// O(1) time complexity
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Underlying storage in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Insert an element.
    ///
    /// O(log n) time complexity
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        let last = self.elements.len() - 1;
        sift_up(&mut self.elements, &self.sort, last);
    }

    /// Remove and return the first element per the comparator.
    ///
    /// O(log n) time complexity
    pub fn remove(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let root = self.elements.pop();
        let len = self.elements.len();
        sift_down(&mut self.elements, &self.sort, 0, len);
        root
    }

    /// Remove the element stored at `index`.
    ///
    /// Returns `None` when `index` is out of bounds.
    ///
    /// O(log n) time complexity
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.elements.len();
        if index >= len {
            return None;
        }
        if index == len - 1 {
            return self.elements.pop();
        }
        self.elements.swap(index, len - 1);
        let removed = self.elements.pop();
        // The relocated element moves in at most one of these directions.
        sift_down(&mut self.elements, &self.sort, index, len - 1);
        sift_up(&mut self.elements, &self.sort, index);
        removed
    }

    /// Absorb another heap's elements, reordering them under this heap's
    /// comparator.
    ///
    /// O(n + m) time complexity
    pub fn merge<G>(&mut self, other: Heap<T, G>) {
        self.elements.extend(other.elements);
        self.build_heap();
    }

    /// Heap sort over a copy of the storage.
    ///
    /// Ascending for a max-first comparator, descending for a min-first one.
    ///
    /// O(n log n) time complexity, O(n) space complexity
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = self.elements.clone();
        sort_heap(&mut elements, &self.sort);
        elements
    }

    /// Position of `element` in storage, if present.
    ///
    /// Subtrees whose root comes after the target are skipped entirely.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_from(element, 0)
    }

    fn index_from(&self, element: &T, index: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let candidate = self.elements.get(index)?;
        if (self.sort)(element, candidate) {
            return None;
        }
        if element == candidate {
            return Some(index);
        }
        self.index_from(element, left_child(index))
            .or_else(|| self.index_from(element, right_child(index)))
    }

    /// Check the heap-order property at every non-root index.
    pub fn is_heap(&self) -> bool {
        (1..self.elements.len())
            .all(|i| !(self.sort)(&self.elements[i], &self.elements[parent(i)]))
    }

    fn build_heap(&mut self) {
        heapify(&mut self.elements, &self.sort);
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish()
    }
}

#[inline]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// Move the element at `index` down until neither child within
/// `elements[..size]` comes before it.
pub(crate) fn sift_down<T, F>(elements: &mut [T], sort: &F, index: usize, size: usize)
where
    F: Fn(&T, &T) -> bool,
{
    let size = size.min(elements.len());
    let mut current = index;
    loop {
        let left = left_child(current);
        let right = right_child(current);
        let mut candidate = current;
        if left < size && sort(&elements[left], &elements[candidate]) {
            candidate = left;
        }
        if right < size && sort(&elements[right], &elements[candidate]) {
            candidate = right;
        }
        if candidate == current {
            return;
        }
        elements.swap(current, candidate);
        current = candidate;
    }
}

/// Move the element at `index` up while it comes before its parent.
pub(crate) fn sift_up<T, F>(elements: &mut [T], sort: &F, index: usize)
where
    F: Fn(&T, &T) -> bool,
{
    let mut child = index;
    while child > 0 {
        let up = parent(child);
        if !sort(&elements[child], &elements[up]) {
            break;
        }
        elements.swap(child, up);
        child = up;
    }
}

/// Bottom-up heapify: sift down from the last parent to the root.
pub(crate) fn heapify<T, F>(elements: &mut [T], sort: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let len = elements.len();
    for index in (0..len / 2).rev() {
        sift_down(elements, sort, index, len);
    }
}

/// Turn a valid heap into a sorted sequence in place.
///
/// Each pass moves the root behind the shrinking bound, so finished tail
/// elements are never touched again.
pub(crate) fn sort_heap<T, F>(elements: &mut [T], sort: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for end in (1..elements.len()).rev() {
        elements.swap(0, end);
        sift_down(elements, sort, 0, end);
    }
}
