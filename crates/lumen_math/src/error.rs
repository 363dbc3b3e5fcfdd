use thiserror::Error;

/// Errors raised by degenerate algebra operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Cannot normalize a zero-length vector")]
    ZeroVector,
}

pub type MathResult<T> = Result<T, MathError>;
