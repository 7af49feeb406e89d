//! Error types shared by the done box and the reduction drivers.

use thiserror::Error;

/// Result alias for operations on a [`Done`](crate::functional::done::Done) box.
pub type DoneResult<T> = Result<T, DoneError>;

/// Result alias for the reduce/accumulate drivers.
pub type ReduceResult<T> = Result<T, ReduceError>;

/// Errors raised when reading a done box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DoneError {
    #[error("cannot unwrap an empty done box")]
    EmptyBox,
}

/// Errors raised by the reduce/accumulate drivers before any step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReduceError {
    #[error("an initial value is required when the input is empty")]
    EmptyInput,
    #[error("second input has length {actual}, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors raised while building a driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid fold direction: {0:?} (expected \"forward\" or \"backward\")")]
    InvalidDirection(String),
}
