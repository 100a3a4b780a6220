//! Step/trace model
//!
//! One `SearchStep` per observable unit of algorithmic work, collected
//! into a `SearchResult` that downstream consumers (visualization,
//! benchmarking) replay one step at a time.

mod types;

pub use types::{Comparison, SearchResult, SearchStep, StepAction};
