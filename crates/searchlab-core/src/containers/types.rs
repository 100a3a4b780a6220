//! Container types - Tagged union over the three container variants

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::array::SearchArray;
use super::bst::BinarySearchTree;
use super::linked_list::SearchLinkedList;
use crate::errors::ContainerError;

/// Container variant tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    Array,
    LinkedList,
    BinarySearchTree,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Array => "array",
            ContainerKind::LinkedList => "linked_list",
            ContainerKind::BinarySearchTree => "binary_search_tree",
        }
    }

    /// All kinds, in the order the UI lists them.
    pub fn all() -> &'static [ContainerKind] {
        &[
            ContainerKind::Array,
            ContainerKind::LinkedList,
            ContainerKind::BinarySearchTree,
        ]
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContainerKind {
    type Err = ContainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "array" => Ok(ContainerKind::Array),
            "linked_list" => Ok(ContainerKind::LinkedList),
            "binary_search_tree" => Ok(ContainerKind::BinarySearchTree),
            other => Err(ContainerError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Tagged union over the three containers.
///
/// Engines dispatch on the tag; each variant is also usable directly
/// when the caller knows the concrete type.
#[derive(Debug, Clone)]
pub enum Container {
    Array(SearchArray),
    LinkedList(SearchLinkedList),
    BinarySearchTree(BinarySearchTree),
}

impl Container {
    pub fn new(kind: ContainerKind, initial: Vec<i64>) -> Self {
        match kind {
            ContainerKind::Array => Container::Array(SearchArray::new(initial)),
            ContainerKind::LinkedList => Container::LinkedList(SearchLinkedList::new(initial)),
            ContainerKind::BinarySearchTree => {
                Container::BinarySearchTree(BinarySearchTree::new(initial))
            }
        }
    }

    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Array(_) => ContainerKind::Array,
            Container::LinkedList(_) => ContainerKind::LinkedList,
            Container::BinarySearchTree(_) => ContainerKind::BinarySearchTree,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Container::Array(arr) => arr.len(),
            Container::LinkedList(list) => list.len(),
            Container::BinarySearchTree(tree) => tree.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear_history(&mut self) {
        match self {
            Container::Array(arr) => arr.clear_history(),
            Container::LinkedList(list) => list.clear_history(),
            Container::BinarySearchTree(tree) => tree.clear_history(),
        }
    }

    /// Stable read-only view for display: identity for the array,
    /// front-to-back for the list, in-order (ascending) for the BST.
    pub fn to_ordered_sequence(&self) -> Vec<i64> {
        match self {
            Container::Array(arr) => arr.to_ordered_sequence(),
            Container::LinkedList(list) => list.to_ordered_sequence(),
            Container::BinarySearchTree(tree) => tree.to_ordered_sequence(),
        }
    }

    /// Fill with `size` random values in `[min, max]` using the thread
    /// RNG. For the BST, values are sampled without repetition. An
    /// empty range (`min > max`) leaves the container empty.
    pub fn populate_random(&mut self, size: usize, min: i64, max: i64) {
        self.populate_random_with(size, min, max, &mut rand::thread_rng());
    }

    /// Seedable variant of [`Container::populate_random`].
    pub fn populate_random_with<R: Rng + ?Sized>(
        &mut self,
        size: usize,
        min: i64,
        max: i64,
        rng: &mut R,
    ) {
        match self {
            Container::Array(arr) => arr.populate_random_with(size, min, max, rng),
            Container::LinkedList(list) => list.populate_random_with(size, min, max, rng),
            Container::BinarySearchTree(tree) => tree.populate_random_with(size, min, max, rng),
        }
    }
}

/// Boundary factory: build a container from a kind identifier.
///
/// Fails with [`ContainerError::UnsupportedKind`] for anything other
/// than `array`, `linked_list` or `binary_search_tree`.
pub fn create_container(kind: &str, initial: Vec<i64>) -> Result<Container, ContainerError> {
    Ok(Container::new(kind.parse()?, initial))
}
