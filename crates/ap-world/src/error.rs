//! World-subsystem error type.

use thiserror::Error;

/// Errors produced by `ap-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world parse error: {0}")]
    Parse(String),

    #[error("unknown block kind {0:?}")]
    UnknownBlockKind(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
