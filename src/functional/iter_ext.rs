//! Iterator extension exposing the short-circuiting drivers as methods.

use crate::error::{ReduceError, ReduceResult};

use super::accumulate::scan;
use super::driver::{drive, FoldResult};
use super::step::Step;

/// Done-box aware folding for any iterator
pub trait DoneIteratorExt: Iterator + Sized {
    /// Folds from `init` until the input runs out or `step` returns a done
    /// box, reporting how the fold ended.
    ///
    /// # Examples
    ///
    /// ```
    /// let result = vec![1, 2, 3, 4, 5].into_iter().fold_until_done(0, |acc, x| {
    ///     if x > 3 { Step::done(*acc) } else { Step::next(acc + x) }
    /// });
    /// assert_eq!(result.data, 6);
    /// assert_eq!(result.metrics.consumed, 4);
    /// ```
    fn fold_until_done<A, F>(self, init: A, step: F) -> FoldResult<A>
    where
        F: FnMut(&A, Self::Item) -> Step<A>,
    {
        drive(self, init, step, |_| {})
    }

    /// Like [`fold_until_done`](Self::fold_until_done), seeded with the first
    /// element.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::EmptyInput`] when the iterator is empty.
    fn reduce_until_done<F>(mut self, step: F) -> ReduceResult<FoldResult<Self::Item>>
    where
        F: FnMut(&Self::Item, Self::Item) -> Step<Self::Item>,
    {
        let first = self.next().ok_or(ReduceError::EmptyInput)?;
        Ok(drive(self, first, step, |_| {}))
    }

    /// Collects every accumulator of a fold from `init`, stopping at the
    /// first done box.
    fn scan_until_done<A, F>(self, init: A, step: F) -> FoldResult<Vec<A>>
    where
        A: Clone,
        F: FnMut(&A, Self::Item) -> Step<A>,
    {
        scan(self, init, step)
    }
}

impl<I: Iterator> DoneIteratorExt for I {}
