//! Queue-shaped adapter over [`Heap`].

use std::fmt;

use super::heap::{Heap, OrdComparator};
use super::queue::Queue;

/// Sorted queue: dequeues the element that comes first per the comparator.
///
/// Elements the comparator ranks equal leave in no particular order.
#[derive(Clone)]
pub struct PriorityQueue<T, F> {
    heap: Heap<T, F>,
}

impl<T: Ord> PriorityQueue<T, OrdComparator<T>> {
    /// Smallest element dequeues first.
    pub fn min_first() -> Self {
        Self {
            heap: Heap::min_heap(),
        }
    }

    /// Largest element dequeues first.
    pub fn max_first() -> Self {
        Self {
            heap: Heap::max_heap(),
        }
    }
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `sort`.
    pub fn new(sort: F) -> Self {
        Self {
            heap: Heap::new(sort),
        }
    }

    /// Create a queue holding `elements`, ordered by `sort`.
    ///
    /// O(n) time complexity
    pub fn with_elements(sort: F, elements: Vec<T>) -> Self {
        Self {
            heap: Heap::with_elements(sort, elements),
        }
    }

    /// Add an element.
    ///
    /// O(log n) time complexity
    pub fn enqueue(&mut self, element: T) {
        self.heap.insert(element);
    }

    /// Remove the first element per the comparator.
    ///
    /// O(log n) time complexity
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.remove()
    }

    /// Remove one queued element equal to `element`.
    ///
    /// Returns `None` if no such element is queued.
    pub fn remove(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.heap.index_of(element)?;
        self.heap.remove_at(index)
    }

    /// O(1) time complexity
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// O(1) time complexity
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// The backing heap.
    pub fn heap(&self) -> &Heap<T, F> {
        &self.heap
    }
}

impl<T, F> Queue<T> for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn enqueue(&mut self, element: T) -> bool {
        PriorityQueue::enqueue(self, element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        PriorityQueue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
