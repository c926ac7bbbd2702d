//! Last-in first-out stack.

use std::fmt;

/// LIFO container over a `Vec`. Every operation is O(1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    storage: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Push an element on top.
    pub fn push(&mut self, element: T) {
        self.storage.push(element);
    }

    /// Remove the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// The top element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Whether the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }
}

/// The last element of the vector becomes the top.
impl<T> From<Vec<T>> for Stack<T> {
    fn from(storage: Vec<T>) -> Self {
        Self { storage }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            storage: iter.into_iter().collect(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----top----")?;
        for element in self.storage.iter().rev() {
            writeln!(f, "{}", element)?;
        }
        write!(f, "-----------")
    }
}
