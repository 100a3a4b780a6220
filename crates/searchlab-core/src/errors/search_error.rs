//! Search dispatch errors.

use super::container_error::ContainerError;
use crate::containers::ContainerKind;
use crate::engines::Algorithm;

/// Errors raised by the dispatcher and the search engines.
///
/// An `Incompatible` error is produced before any traversal begins, so
/// no partial step sequence ever escapes a failed dispatch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("algorithm `{algorithm}` is not compatible with container kind `{kind}`")]
    Incompatible {
        algorithm: Algorithm,
        kind: ContainerKind,
    },

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Container(#[from] ContainerError),
}
