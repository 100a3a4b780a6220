//! Error handling for SearchLab.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod container_error;
pub mod search_error;

pub use container_error::ContainerError;
pub use search_error::SearchError;
