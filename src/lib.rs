//! algokit: classic algorithms around a comparator-driven binary heap.
//!
//! The [`Heap`] and the [`PriorityQueue`] built on it drive Dijkstra
//! shortest paths, Prim minimum spanning trees and heap sort over
//! adjacency-list graphs. Simple FIFO queues, a stack, BFS/DFS and binary
//! search round out the collection.

pub mod algorithms;
pub mod cli;
pub mod collections;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algorithms::{
    binary_search, binary_search_in, heap_sort, heap_sort_by, minimum_spanning_tree, path_to,
    shortest_paths, PathRecord, ShortestPaths, SpanningTree,
};
pub use collections::{
    Heap, OrdComparator, PriorityQueue, Queue, QueueArray, QueueLinkedList, QueueRingBuffer,
    QueueStack, Stack,
};
pub use graph::{
    breadth_first_search, depth_first_search, traverse, AdjacencyList, EdgeSpec, Graph,
    GraphBuilder, GraphDocument, TraversalOrder,
};
pub use types::{AlgoError, AlgoResult, Edge, EdgeKind, Vertex, VertexId};
