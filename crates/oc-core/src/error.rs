//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `oc-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
