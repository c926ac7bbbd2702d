//! Algorithms built on the collections and graphs.

pub mod dijkstra;
pub mod prim;
pub mod search;
pub mod sort;

pub use dijkstra::{path_to, shortest_paths, PathRecord, ShortestPaths};
pub use prim::{minimum_spanning_tree, SpanningTree};
pub use search::{binary_search, binary_search_in};
pub use sort::{heap_sort, heap_sort_by};
