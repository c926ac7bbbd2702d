//! FIFO queues behind a common [`Queue`] trait.

use std::collections::LinkedList;
use std::fmt;

/// First-in first-out container.
pub trait Queue<T> {
    /// Add an element at the back. Returns `false` if it was not accepted.
    fn enqueue(&mut self, element: T) -> bool;

    /// Remove the element at the front.
    fn dequeue(&mut self) -> Option<T>;

    /// The element at the front, without removing it.
    fn peek(&self) -> Option<&T>;

    /// Whether the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Number of queued elements.
    fn len(&self) -> usize;
}

fn write_list<'a, T, I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    T: fmt::Debug + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.debug_list().entries(items).finish()
}

// ==================== Array ====================

/// Queue over a plain `Vec`.
///
/// O(1) enqueue, O(n) dequeue (every element shifts forward).
#[derive(Debug, Clone, Default)]
pub struct QueueArray<T> {
    array: Vec<T>,
}

impl<T> QueueArray<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { array: Vec::new() }
    }
}

impl<T> Queue<T> for QueueArray<T> {
    fn enqueue(&mut self, element: T) -> bool {
        self.array.push(element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.array.is_empty() {
            None
        } else {
            Some(self.array.remove(0))
        }
    }

    fn peek(&self) -> Option<&T> {
        self.array.first()
    }

    fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    fn len(&self) -> usize {
        self.array.len()
    }
}

impl<T: fmt::Debug> fmt::Display for QueueArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.array)
    }
}

// ==================== Linked list ====================

/// Queue over a doubly linked list. O(1) for every operation.
#[derive(Debug, Clone, Default)]
pub struct QueueLinkedList<T> {
    list: LinkedList<T>,
}

impl<T> QueueLinkedList<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> Queue<T> for QueueLinkedList<T> {
    fn enqueue(&mut self, element: T) -> bool {
        self.list.push_back(element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<T: fmt::Debug> fmt::Display for QueueLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.list)
    }
}

// ==================== Ring buffer ====================

/// Fixed-capacity circular buffer.
#[derive(Debug, Clone)]
struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    read: usize,
    write: usize,
}

impl<T> RingBuffer<T> {
    fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            read: 0,
            write: 0,
        }
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.write - self.read
    }

    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    fn write(&mut self, element: T) -> bool {
        if self.is_full() {
            return false;
        }
        let slot = self.write % self.capacity();
        self.slots[slot] = Some(element);
        self.write += 1;
        true
    }

    fn read(&mut self) -> Option<T> {
        if self.len() == 0 {
            return None;
        }
        let slot = self.read % self.capacity();
        self.read += 1;
        self.slots[slot].take()
    }

    fn first(&self) -> Option<&T> {
        if self.len() == 0 {
            return None;
        }
        self.slots[self.read % self.capacity()].as_ref()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        (self.read..self.write).filter_map(move |i| self.slots[i % self.capacity()].as_ref())
    }
}

/// Bounded queue over a ring buffer.
///
/// `enqueue` returns `false` once the fixed capacity is reached.
#[derive(Debug, Clone)]
pub struct QueueRingBuffer<T> {
    ring_buffer: RingBuffer<T>,
}

impl<T> QueueRingBuffer<T> {
    /// Create an empty queue that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring_buffer: RingBuffer::new(capacity),
        }
    }

    /// Maximum number of elements.
    pub fn capacity(&self) -> usize {
        self.ring_buffer.capacity()
    }

    /// Whether another `enqueue` would be rejected.
    pub fn is_full(&self) -> bool {
        self.ring_buffer.is_full()
    }
}

impl<T> Queue<T> for QueueRingBuffer<T> {
    fn enqueue(&mut self, element: T) -> bool {
        self.ring_buffer.write(element)
    }

    fn dequeue(&mut self) -> Option<T> {
        self.ring_buffer.read()
    }

    fn peek(&self) -> Option<&T> {
        self.ring_buffer.first()
    }

    fn is_empty(&self) -> bool {
        self.ring_buffer.len() == 0
    }

    fn len(&self) -> usize {
        self.ring_buffer.len()
    }
}

impl<T: fmt::Debug> fmt::Display for QueueRingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.ring_buffer.iter())
    }
}

// ==================== Two stacks ====================

/// Queue built from two stacks.
///
/// Enqueue pushes onto the right stack; dequeue pops from the left stack,
/// refilling it with the reversed right stack when it runs dry. Amortized
/// O(1) dequeue.
#[derive(Debug, Clone, Default)]
pub struct QueueStack<T> {
    left: Vec<T>,
    right: Vec<T>,
}

impl<T> QueueStack<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            left: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl<T> Queue<T> for QueueStack<T> {
    fn enqueue(&mut self, element: T) -> bool {
        self.right.push(element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.left.is_empty() {
            self.left.extend(self.right.drain(..).rev());
        }
        self.left.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.left.last().or_else(|| self.right.first())
    }

    fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

impl<T: fmt::Debug> fmt::Display for QueueStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.left.iter().rev().chain(self.right.iter()))
    }
}
