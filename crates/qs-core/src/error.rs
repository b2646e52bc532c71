//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `QsError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `qs-core`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QsError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `qs-core`.
pub type QsResult<T> = Result<T, QsError>;
