//! Linear search engine
//!
//! Applicable to the array and the linked list. Walks positions
//! 0..len in order, emitting one `compare` step per examined value and
//! returning at the first match.

use std::time::Instant;

use crate::containers::{Container, SearchArray, SearchLinkedList};
use crate::errors::{ContainerError, SearchError};
use crate::trace::{Comparison, SearchResult, SearchStep};

use super::dispatcher::Algorithm;

pub struct LinearSearch;

impl LinearSearch {
    /// Search `container` for `target`, front to back.
    ///
    /// Comparison count always equals the number of `compare` steps;
    /// an exhausted search over a non-empty container ends with one
    /// `not_found` step, and an empty container yields zero steps.
    pub fn search(container: &mut Container, target: i64) -> Result<SearchResult, SearchError> {
        match container {
            Container::Array(arr) => Ok(Self::search_array(arr, target)?),
            Container::LinkedList(list) => Ok(Self::search_linked_list(list, target)?),
            other => Err(SearchError::Incompatible {
                algorithm: Algorithm::Linear,
                kind: other.kind(),
            }),
        }
    }

    fn search_array(arr: &mut SearchArray, target: i64) -> Result<SearchResult, ContainerError> {
        arr.clear_history();
        let start = Instant::now();

        let mut steps = Vec::new();
        let mut comparisons = 0;

        for i in 0..arr.len() {
            let value = arr.get(i)?;
            comparisons += 1;

            let (verdict, found) = verdict_for(value, target);
            steps.push(SearchStep::compare(
                steps.len() + 1,
                Some(i),
                value,
                verdict,
                found,
            ));

            if found {
                return Ok(SearchResult::hit(
                    Some(i),
                    steps,
                    comparisons,
                    start.elapsed(),
                ));
            }
        }

        if !steps.is_empty() {
            steps.push(SearchStep::not_found(steps.len() + 1));
        }
        Ok(SearchResult::miss(steps, comparisons, start.elapsed()))
    }

    fn search_linked_list(
        list: &mut SearchLinkedList,
        target: i64,
    ) -> Result<SearchResult, ContainerError> {
        list.clear_history();
        let start = Instant::now();

        let mut steps = Vec::new();
        let mut comparisons = 0;

        for i in 0..list.len() {
            // Each read hops i links; the list logs the value read.
            let value = list.value_at(i)?;
            comparisons += 1;

            let (verdict, found) = verdict_for(value, target);
            steps.push(SearchStep::compare(
                steps.len() + 1,
                Some(i),
                value,
                verdict,
                found,
            ));

            if found {
                return Ok(SearchResult::hit(
                    Some(i),
                    steps,
                    comparisons,
                    start.elapsed(),
                ));
            }
        }

        if !steps.is_empty() {
            steps.push(SearchStep::not_found(steps.len() + 1));
        }
        Ok(SearchResult::miss(steps, comparisons, start.elapsed()))
    }
}

/// Observed value relative to the target.
fn verdict_for(value: i64, target: i64) -> (Comparison, bool) {
    if value == target {
        (Comparison::Equal, true)
    } else if value < target {
        (Comparison::Less, false)
    } else {
        (Comparison::Greater, false)
    }
}
