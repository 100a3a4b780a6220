//! Search engines
//!
//! Three engines (linear, binary, BST lookup), each producing a
//! deterministic step trace plus a found/not-found outcome, and the
//! dispatcher that maps algorithm ids onto them.
//!
//! No engine holds state across calls: re-running a search on an
//! unmutated container with the same target reproduces an identical
//! step sequence.

mod binary;
mod bst;
mod dispatcher;
mod linear;

pub use binary::BinarySearch;
pub use bst::BstSearch;
pub use dispatcher::{
    available_algorithms, compatible_algorithms, is_compatible, search, search_by_name, Algorithm,
};
pub use linear::LinearSearch;
