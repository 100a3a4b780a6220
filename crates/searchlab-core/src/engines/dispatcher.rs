//! Algorithm dispatcher
//!
//! Maps an algorithm identifier plus container instance to the right
//! engine, enforcing a static compatibility table built once at
//! startup. Pure dispatch: no state, one call produces one result.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::containers::{Container, ContainerKind};
use crate::errors::SearchError;
use crate::trace::SearchResult;

use super::binary::BinarySearch;
use super::bst::BstSearch;
use super::linear::LinearSearch;

/// Search algorithm identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Linear,
    Binary,
    Bst,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
            Algorithm::Bst => "bst",
        }
    }

    /// All algorithms, in the order the UI lists them.
    pub fn all() -> &'static [Algorithm] {
        &[Algorithm::Linear, Algorithm::Binary, Algorithm::Bst]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Algorithm::Linear),
            "binary" => Ok(Algorithm::Binary),
            "bst" => Ok(Algorithm::Bst),
            other => Err(SearchError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Which container kinds each algorithm accepts. Built once, never
/// mutated.
static COMPATIBILITY: Lazy<HashMap<Algorithm, Vec<ContainerKind>>> = Lazy::new(|| {
    HashMap::from([
        (
            Algorithm::Linear,
            vec![ContainerKind::Array, ContainerKind::LinkedList],
        ),
        (Algorithm::Binary, vec![ContainerKind::Array]),
        (Algorithm::Bst, vec![ContainerKind::BinarySearchTree]),
    ])
});

/// Whether `algorithm` can run against containers of `kind`.
pub fn is_compatible(algorithm: Algorithm, kind: ContainerKind) -> bool {
    COMPATIBILITY
        .get(&algorithm)
        .is_some_and(|kinds| kinds.contains(&kind))
}

/// All available algorithm identifiers.
pub fn available_algorithms() -> &'static [Algorithm] {
    Algorithm::all()
}

/// Algorithms applicable to containers of `kind`.
pub fn compatible_algorithms(kind: ContainerKind) -> Vec<Algorithm> {
    Algorithm::all()
        .iter()
        .copied()
        .filter(|&a| is_compatible(a, kind))
        .collect()
}

/// Run `algorithm` against `container`, producing a result with the
/// full step trace.
///
/// Compatibility is checked before any traversal begins, so an
/// incompatible pair never produces a partial step sequence; each
/// engine re-checks its own variant defensively.
pub fn search(
    algorithm: Algorithm,
    container: &mut Container,
    target: i64,
) -> Result<SearchResult, SearchError> {
    if !is_compatible(algorithm, container.kind()) {
        return Err(SearchError::Incompatible {
            algorithm,
            kind: container.kind(),
        });
    }

    match algorithm {
        Algorithm::Linear => LinearSearch::search(container, target),
        Algorithm::Binary => BinarySearch::search(container, target),
        Algorithm::Bst => BstSearch::search(container, target),
    }
}

/// String boundary for `search`: parses the algorithm identifier,
/// failing with an unknown-algorithm error for anything else.
pub fn search_by_name(
    name: &str,
    container: &mut Container,
    target: i64,
) -> Result<SearchResult, SearchError> {
    search(name.parse()?, container, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_table() {
        assert!(is_compatible(Algorithm::Linear, ContainerKind::Array));
        assert!(is_compatible(Algorithm::Linear, ContainerKind::LinkedList));
        assert!(!is_compatible(
            Algorithm::Linear,
            ContainerKind::BinarySearchTree
        ));

        assert!(is_compatible(Algorithm::Binary, ContainerKind::Array));
        assert!(!is_compatible(Algorithm::Binary, ContainerKind::LinkedList));

        assert!(is_compatible(
            Algorithm::Bst,
            ContainerKind::BinarySearchTree
        ));
        assert!(!is_compatible(Algorithm::Bst, ContainerKind::Array));
    }

    #[test]
    fn test_compatible_algorithms_per_kind() {
        assert_eq!(
            compatible_algorithms(ContainerKind::Array),
            vec![Algorithm::Linear, Algorithm::Binary]
        );
        assert_eq!(
            compatible_algorithms(ContainerKind::LinkedList),
            vec![Algorithm::Linear]
        );
        assert_eq!(
            compatible_algorithms(ContainerKind::BinarySearchTree),
            vec![Algorithm::Bst]
        );
    }

    #[test]
    fn test_incompatible_pair_is_rejected_before_traversal() {
        let mut container = Container::new(ContainerKind::LinkedList, vec![1, 2, 3]);
        let err = search(Algorithm::Binary, &mut container, 2).unwrap_err();
        assert_eq!(
            err,
            SearchError::Incompatible {
                algorithm: Algorithm::Binary,
                kind: ContainerKind::LinkedList,
            }
        );
        // No partial trace: the container history stays untouched.
        if let Container::LinkedList(list) = &container {
            assert!(list.access_history().is_empty());
        }
    }

    #[test]
    fn test_search_by_name() {
        let mut container = Container::new(ContainerKind::Array, vec![1, 2, 3]);
        let result = search_by_name("linear", &mut container, 2).unwrap();
        assert!(result.found);

        let err = search_by_name("quantum", &mut container, 2).unwrap_err();
        assert_eq!(err, SearchError::UnknownAlgorithm("quantum".to_string()));
    }

    #[test]
    fn test_algorithm_round_trip() {
        for &algorithm in Algorithm::all() {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}
