//! Model error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `ShoalError` via `From` impls, or keep them separate and wrap `ShoalError`
//! as one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

use crate::FishId;

/// The top-level error type for `shoal-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum ShoalError {
    #[error("fish {0} not found")]
    FishNotFound(FishId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `shoal-*` crates.
pub type ShoalResult<T> = Result<T, ShoalError>;
