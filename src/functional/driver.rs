//! Short-circuiting Fold Engine
//!
//! Every reduce/accumulate variant funnels through [`drive`], which runs a
//! step callback over an iterator and stops at the first done box. The
//! accumulator stays owned by the engine; the callback only borrows it, so an
//! empty done box can hand the previous accumulator back without cloning.

use std::fmt;
use std::time::{Duration, Instant};

use itertools::{FoldWhile, Itertools};

use super::done::Done;
use super::step::Step;

/// How a fold finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Termination {
    /// The input ran out.
    #[default]
    Exhausted,
    /// A done box carrying a payload stopped the fold.
    Done,
    /// An empty done box stopped the fold.
    DoneEmpty,
}

impl Termination {
    pub fn is_early(&self) -> bool {
        !matches!(self, Termination::Exhausted)
    }
}

/// Bookkeeping collected while folding
#[derive(Debug, Clone, Default)]
pub struct FoldMetrics {
    /// Items handed to the step callback, including the one that stopped it
    pub consumed: usize,
    pub termination: Termination,
    pub total_time: Duration,
}

impl fmt::Display for FoldMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fold Metrics: consumed={}, termination={:?}, time={:?}",
            self.consumed, self.termination, self.total_time
        )
    }
}

/// Result wrapper for folds with their metrics
#[derive(Debug)]
pub struct FoldResult<T> {
    pub data: T,
    pub metrics: FoldMetrics,
}

impl<T> FoldResult<T> {
    /// Get the result data
    pub fn into_inner(self) -> T {
        self.data
    }

    pub fn metrics(&self) -> &FoldMetrics {
        &self.metrics
    }

    /// Check whether a done box stopped the fold
    pub fn stopped_early(&self) -> bool {
        self.metrics.termination.is_early()
    }

    pub(crate) fn map<U, F>(self, f: F) -> FoldResult<U>
    where
        F: FnOnce(T) -> U,
    {
        FoldResult {
            data: f(self.data),
            metrics: self.metrics,
        }
    }
}

/// Folds `iter` from `init`, stopping at the first done box.
///
/// `observe` sees every accumulator the fold adopts after `init`: each
/// continued value and the payload of a filled done box. An empty done box
/// adopts nothing.
pub(crate) fn drive<I, A, F, O>(
    mut iter: I,
    init: A,
    mut step: F,
    mut observe: O,
) -> FoldResult<A>
where
    I: Iterator,
    F: FnMut(&A, I::Item) -> Step<A>,
    O: FnMut(&A),
{
    let start_time = Instant::now();
    let mut consumed = 0usize;
    let mut termination = Termination::Exhausted;

    let data = iter
        .fold_while(init, |acc, item| {
            consumed += 1;
            match step(&acc, item) {
                Step::Continue(next) => {
                    observe(&next);
                    FoldWhile::Continue(next)
                }
                Step::Done(Done::Value(last)) => {
                    observe(&last);
                    termination = Termination::Done;
                    FoldWhile::Done(last)
                }
                Step::Done(Done::Empty) => {
                    termination = Termination::DoneEmpty;
                    FoldWhile::Done(acc)
                }
            }
        })
        .into_inner();

    if termination.is_early() {
        log::debug!(
            "Fold stopped early after {} item(s) ({:?})",
            consumed,
            termination
        );
    } else {
        log::trace!("Fold exhausted its input after {} item(s)", consumed);
    }

    FoldResult {
        data,
        metrics: FoldMetrics {
            consumed,
            termination,
            total_time: start_time.elapsed(),
        },
    }
}
