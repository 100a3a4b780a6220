//! Container access layer
//!
//! Three containers (array, singly linked list, binary search tree)
//! sharing one contract: history-recording reads, clearable access
//! logs, random population, and an ordered-sequence view for display.

mod array;
mod bst;
mod linked_list;
mod types;

pub use array::SearchArray;
pub use bst::{BinarySearchTree, NodePosition, TreeNodeInfo};
pub use linked_list::SearchLinkedList;
pub use types::{create_container, Container, ContainerKind};
