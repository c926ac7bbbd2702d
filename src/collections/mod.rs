//! Containers: binary heap, priority queue, FIFO queues and a stack.

pub mod heap;
pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use heap::{Heap, OrdComparator};
pub use priority_queue::PriorityQueue;
pub use queue::{Queue, QueueArray, QueueLinkedList, QueueRingBuffer, QueueStack};
pub use stack::Stack;
