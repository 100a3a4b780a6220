//! Trace types - Core data structures for step recording

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Kind of work one step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    /// A value-vs-target comparison
    Compare,
    /// A range/pointer move without examining a value
    Move,
    /// Terminal step of a successful search
    Found,
    /// Terminal step of an exhausted search
    NotFound,
}

/// Verdict attached to a step.
///
/// For the linear and binary engines the verdict describes the observed
/// value relative to the target (`Less` = value < target). The BST
/// engine emits `Greater` to mean "descend left" and `Less` to mean
/// "descend right"; the conventions are intentionally not unified
/// because the visualization layer consumes each engine's trace on its
/// own terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Equal,
    Less,
    Greater,
    MoveLeft,
    MoveRight,
}

/// One atomic observation during a search
///
/// Immutable once created; step numbers are 1-based and monotonic
/// within a trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// 1-based position of this step in the trace
    pub step_num: usize,
    /// What this step did
    pub action: StepAction,
    /// Array/list index examined (`None` for BST steps and moves)
    pub position: Option<usize>,
    /// Value observed at that position
    pub value: Option<i64>,
    /// Comparison verdict, if the step compared or moved
    pub comparison: Option<Comparison>,
    /// Whether this step located the target
    pub found: bool,
}

impl SearchStep {
    /// A comparison against the target.
    pub fn compare(
        step_num: usize,
        position: Option<usize>,
        value: i64,
        comparison: Comparison,
        found: bool,
    ) -> Self {
        Self {
            step_num,
            action: StepAction::Compare,
            position,
            value: Some(value),
            comparison: Some(comparison),
            found,
        }
    }

    /// A range move (binary search narrowing its window).
    pub fn range_move(step_num: usize, direction: Comparison) -> Self {
        Self {
            step_num,
            action: StepAction::Move,
            position: None,
            value: None,
            comparison: Some(direction),
            found: false,
        }
    }

    /// The terminal step of an exhausted search.
    pub fn not_found(step_num: usize) -> Self {
        Self {
            step_num,
            action: StepAction::NotFound,
            position: None,
            value: None,
            comparison: None,
            found: false,
        }
    }
}

/// Outcome of one search invocation
///
/// Constructed once per call and never mutated afterwards; the caller
/// owns the step sequence exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Whether the target was located
    pub found: bool,
    /// Position of the match (`None` when not found, or for containers
    /// with no positional concept such as the BST)
    pub position: Option<usize>,
    /// Full ordered trace of the search
    pub steps: Vec<SearchStep>,
    /// Number of value-vs-target comparisons performed
    pub comparisons: usize,
    /// Elapsed wall-time
    #[serde(with = "duration_micros")]
    pub elapsed: Duration,
}

impl SearchResult {
    /// A successful search ending at `position`.
    pub fn hit(
        position: Option<usize>,
        steps: Vec<SearchStep>,
        comparisons: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            found: true,
            position,
            steps,
            comparisons,
            elapsed,
        }
    }

    /// An exhausted search.
    pub fn miss(steps: Vec<SearchStep>, comparisons: usize, elapsed: Duration) -> Self {
        Self {
            found: false,
            position: None,
            steps,
            comparisons,
            elapsed,
        }
    }
}

// Custom serialization for Duration as microseconds
mod duration_micros {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_micros() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u64::deserialize(deserializer)?;
        Ok(Duration::from_micros(micros))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_constructors() {
        let step = SearchStep::compare(1, Some(3), 7, Comparison::Equal, true);
        assert_eq!(step.action, StepAction::Compare);
        assert_eq!(step.position, Some(3));
        assert_eq!(step.value, Some(7));
        assert!(step.found);

        let step = SearchStep::range_move(2, Comparison::MoveLeft);
        assert_eq!(step.action, StepAction::Move);
        assert_eq!(step.comparison, Some(Comparison::MoveLeft));
        assert!(step.position.is_none());

        let step = SearchStep::not_found(3);
        assert_eq!(step.action, StepAction::NotFound);
        assert!(!step.found);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = SearchResult::hit(
            Some(4),
            vec![
                SearchStep::compare(1, Some(2), 5, Comparison::Less, false),
                SearchStep::compare(2, Some(4), 9, Comparison::Equal, true),
            ],
            2,
            Duration::from_micros(120),
        );

        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_elapsed_serializes_as_integer_micros() {
        let result = SearchResult::miss(vec![], 0, Duration::from_micros(250));
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["elapsed"], serde_json::json!(250));

        let back: SearchResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.elapsed, Duration::from_micros(250));
    }

    #[test]
    fn test_action_wire_names() {
        let json = serde_json::to_string(&StepAction::NotFound).unwrap();
        assert_eq!(json, "\"not_found\"");
        let json = serde_json::to_string(&Comparison::MoveRight).unwrap();
        assert_eq!(json, "\"move_right\"");
    }
}
