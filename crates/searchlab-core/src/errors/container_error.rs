//! Container errors.

/// Errors raised by the container access layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    #[error("index {index} out of range for container of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unsupported container kind: {0}")]
    UnsupportedKind(String),
}
