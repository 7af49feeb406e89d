//! Prelude for the done box and its drivers
//!
//! This module re-exports the commonly used types and functions so callers
//! can `use donebox::functional::prelude::*;`.

pub use crate::error::{ConfigError, DoneError, DoneResult, ReduceError, ReduceResult};
pub use crate::functional::accumulate::{
    accumulate, accumulate2, accumulate2_with, accumulate_config, accumulate_with,
    accumulate_with_config,
};
pub use crate::functional::done::{done, done_empty, Done};
pub use crate::functional::driver::{FoldMetrics, FoldResult, Termination};
pub use crate::functional::iter_ext::DoneIteratorExt;
pub use crate::functional::reduce::{
    reduce, reduce2, reduce2_with, reduce_config, reduce_with, reduce_with_config, Direction,
    ReduceConfig,
};
pub use crate::functional::signal::{is_done, DoneFilter, DoneState, Signal};
pub use crate::functional::step::Step;
