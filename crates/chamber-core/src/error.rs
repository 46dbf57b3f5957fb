//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `ChamberError` via `From` impls or wrap it as one variant.  Runtime
//! simulation inputs never error — out-of-range values are clamped — so the
//! surface here is small: configuration problems and I/O from callers that
//! choose to persist something.

use thiserror::Error;

/// The top-level error type for `chamber-core` and a common base for
/// sub-crates.
#[derive(Debug, Error)]
pub enum ChamberError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `chamber-*` crates.
pub type ChamberResult<T> = Result<T, ChamberError>;
