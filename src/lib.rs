//! Early-termination done boxes and the reduce/accumulate drivers that honour
//! them.

pub mod error;
pub mod functional;

pub use error::{ConfigError, DoneError, ReduceError};
