//! Session error type.

use chamber_core::ChamberError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(#[from] ChamberError),
}

pub type SessionResult<T> = Result<T, SessionError>;
