//! searchlab-core: Search algorithm trace engine
//!
//! This crate provides the replayable core for SearchLab, an
//! educational search-algorithm visualizer:
//! - Containers: array, singly linked list and binary search tree,
//!   each logging the positions or values its reads touch
//! - Trace: one `SearchStep` per observable unit of work, aggregated
//!   into a `SearchResult` with outcome, comparison count and timing
//! - Engines: linear, binary and BST lookup, each emitting a
//!   deterministic step sequence
//! - Dispatcher: algorithm-id to engine mapping with a static
//!   compatibility table
//!
//! The interactive UI, chart rendering and statistics aggregation are
//! external consumers: they replay the step sequences this crate
//! produces. Containers are mutable and single-owner; the `&mut`
//! borrows on every search make that discipline compile-checked.

pub mod containers;
pub mod engines;
pub mod errors;
pub mod trace;

// Re-exports for convenience
pub use containers::{
    create_container, BinarySearchTree, Container, ContainerKind, NodePosition, SearchArray,
    SearchLinkedList, TreeNodeInfo,
};
pub use engines::{
    available_algorithms, compatible_algorithms, is_compatible, search, search_by_name, Algorithm,
    BinarySearch, BstSearch, LinearSearch,
};
pub use errors::{ContainerError, SearchError};
pub use trace::{Comparison, SearchResult, SearchStep, StepAction};
