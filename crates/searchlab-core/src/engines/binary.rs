//! Binary search engine
//!
//! Applicable only to the array. The array must already be sorted
//! ascending: the engine neither sorts nor verifies sortedness, and
//! behavior on unsorted input is undefined.

use std::time::Instant;

use crate::containers::{Container, SearchArray};
use crate::errors::{ContainerError, SearchError};
use crate::trace::{Comparison, SearchResult, SearchStep};

use super::dispatcher::Algorithm;

pub struct BinarySearch;

impl BinarySearch {
    /// Halve the search window until `target` is found or the window
    /// collapses.
    ///
    /// Every iteration emits exactly one `compare` step and, unless it
    /// matched, exactly one `move` step (`move_right` when the probed
    /// value was less than the target, `move_left` when greater).
    pub fn search(container: &mut Container, target: i64) -> Result<SearchResult, SearchError> {
        match container {
            Container::Array(arr) => Ok(Self::search_array(arr, target)?),
            other => Err(SearchError::Incompatible {
                algorithm: Algorithm::Binary,
                kind: other.kind(),
            }),
        }
    }

    fn search_array(arr: &mut SearchArray, target: i64) -> Result<SearchResult, ContainerError> {
        arr.clear_history();
        let start = Instant::now();

        let mut steps = Vec::new();
        let mut comparisons = 0;

        let mut low: i64 = 0;
        let mut high: i64 = arr.len() as i64 - 1;

        while low <= high {
            let mid = ((low + high) / 2) as usize;
            let value = arr.get(mid)?;
            comparisons += 1;

            if value == target {
                steps.push(SearchStep::compare(
                    steps.len() + 1,
                    Some(mid),
                    value,
                    Comparison::Equal,
                    true,
                ));
                return Ok(SearchResult::hit(
                    Some(mid),
                    steps,
                    comparisons,
                    start.elapsed(),
                ));
            }

            if value < target {
                steps.push(SearchStep::compare(
                    steps.len() + 1,
                    Some(mid),
                    value,
                    Comparison::Less,
                    false,
                ));
                steps.push(SearchStep::range_move(steps.len() + 1, Comparison::MoveRight));
                low = mid as i64 + 1;
            } else {
                steps.push(SearchStep::compare(
                    steps.len() + 1,
                    Some(mid),
                    value,
                    Comparison::Greater,
                    false,
                ));
                steps.push(SearchStep::range_move(steps.len() + 1, Comparison::MoveLeft));
                high = mid as i64 - 1;
            }
        }

        if !steps.is_empty() {
            steps.push(SearchStep::not_found(steps.len() + 1));
        }
        Ok(SearchResult::miss(steps, comparisons, start.elapsed()))
    }
}
