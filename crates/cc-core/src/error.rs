//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CcError` as one variant.

use thiserror::Error;

/// The top-level error type for `cc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CcError {
    /// Malformed tunables or catalog data rejected at the boundary instead of
    /// being allowed to propagate NaN coordinates through the simulation.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `cc-*` crates.
pub type CcResult<T> = Result<T, CcError>;
