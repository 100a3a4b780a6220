//! BST search engine
//!
//! Applicable only to the binary search tree. The traced root-to-target
//! walk recorded by the container becomes the step sequence.
//!
//! Verdict convention differs from the other engines: `greater` means
//! the visited value was greater than the target (descend left), and
//! `less` that it was less (descend right).

use std::time::Instant;

use crate::containers::Container;
use crate::errors::SearchError;
use crate::trace::{Comparison, SearchResult, SearchStep};

use super::dispatcher::Algorithm;

pub struct BstSearch;

impl BstSearch {
    /// Walk from the root toward `target`. Comparisons equal the
    /// length of the visited path; an empty tree yields zero steps and
    /// zero comparisons.
    pub fn search(container: &mut Container, target: i64) -> Result<SearchResult, SearchError> {
        let tree = match container {
            Container::BinarySearchTree(tree) => tree,
            other => {
                return Err(SearchError::Incompatible {
                    algorithm: Algorithm::Bst,
                    kind: other.kind(),
                })
            }
        };

        let start = Instant::now();
        let (found, path) = tree.search_with_path(target);
        let elapsed = start.elapsed();

        let comparisons = path.len();
        let mut steps = Vec::with_capacity(comparisons + 1);

        for value in path {
            let (verdict, step_found) = if value == target {
                (Comparison::Equal, true)
            } else if value > target {
                (Comparison::Greater, false)
            } else {
                (Comparison::Less, false)
            };
            steps.push(SearchStep::compare(
                steps.len() + 1,
                None,
                value,
                verdict,
                step_found,
            ));
        }

        if found {
            // The BST has no positional concept; position stays None.
            Ok(SearchResult::hit(None, steps, comparisons, elapsed))
        } else {
            if !steps.is_empty() {
                steps.push(SearchStep::not_found(steps.len() + 1));
            }
            Ok(SearchResult::miss(steps, comparisons, elapsed))
        }
    }
}
