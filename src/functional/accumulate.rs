//! Accumulate Drivers
//!
//! Like the reduce drivers, but every intermediate accumulator is kept. The
//! output starts with the initial accumulator. A filled done box appends its
//! payload and stops; an empty done box stops without appending.

use crate::error::{ReduceError, ReduceResult};

use super::driver::{drive, FoldResult};
use super::reduce::{check_len, drive_directed, Direction, ReduceConfig};
use super::step::Step;

/// Runs a directed fold that records every adopted accumulator.
pub(crate) fn scan_directed<I, A, F>(
    input: I,
    init: A,
    config: &ReduceConfig,
    step: F,
) -> FoldResult<Vec<A>>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    A: Clone,
    F: FnMut(&A, I::Item) -> Step<A>,
{
    let mut out = vec![init.clone()];
    let result = drive_directed(input, init, config, step, |acc| out.push(acc.clone()));
    if config.direction == Direction::Backward {
        out.reverse();
    }
    result.map(|_| out)
}

/// Runs a forward fold that records every adopted accumulator.
pub(crate) fn scan<I, A, F>(iter: I, init: A, step: F) -> FoldResult<Vec<A>>
where
    I: Iterator,
    A: Clone,
    F: FnMut(&A, I::Item) -> Step<A>,
{
    let mut out = vec![init.clone()];
    let result = drive(iter, init, step, |acc| out.push(acc.clone()));
    result.map(|_| out)
}

/// Returns every accumulator of a fold over `input` from `init`.
///
/// # Examples
///
/// ```
/// let sums = accumulate_with(vec![1, 2, 3, 4], 0, |acc, x| {
///     if x == 3 { Step::done_empty() } else { Step::next(acc + x) }
/// });
/// assert_eq!(sums, vec![0, 1, 3]);
/// ```
pub fn accumulate_with<I, A, F>(input: I, init: A, step: F) -> Vec<A>
where
    I: IntoIterator,
    A: Clone,
    F: FnMut(&A, I::Item) -> Step<A>,
{
    scan(input.into_iter(), init, step).into_inner()
}

/// [`accumulate_with`] honouring `config`. A backward accumulation is
/// returned reversed, so its final accumulator comes first.
pub fn accumulate_with_config<I, A, F>(
    input: I,
    init: A,
    config: &ReduceConfig,
    step: F,
) -> Vec<A>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    A: Clone,
    F: FnMut(&A, I::Item) -> Step<A>,
{
    scan_directed(input, init, config, step).into_inner()
}

/// Returns every accumulator of a fold seeded with the first element.
///
/// # Errors
///
/// Returns [`ReduceError::EmptyInput`] when `input` yields nothing.
pub fn accumulate<I, F>(input: I, step: F) -> ReduceResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, I::Item) -> Step<I::Item>,
{
    let mut iter = input.into_iter();
    let first = iter.next().ok_or(ReduceError::EmptyInput)?;
    Ok(scan(iter, first, step).into_inner())
}

/// [`accumulate`] honouring `config`.
///
/// # Errors
///
/// Returns [`ReduceError::EmptyInput`] when `input` yields nothing.
pub fn accumulate_config<I, F>(
    input: I,
    config: &ReduceConfig,
    step: F,
) -> ReduceResult<Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    I::Item: Clone,
    F: FnMut(&I::Item, I::Item) -> Step<I::Item>,
{
    let mut iter = input.into_iter();
    let first = match config.direction {
        Direction::Forward => iter.next(),
        Direction::Backward => iter.next_back(),
    }
    .ok_or(ReduceError::EmptyInput)?;
    Ok(scan_directed(iter, first, config, step).into_inner())
}

/// Two-input [`accumulate_with`]; `ys` must be as long as `xs`.
///
/// # Errors
///
/// Returns [`ReduceError::LengthMismatch`] before any step runs when the
/// lengths differ.
pub fn accumulate2_with<X, Y, A, F>(xs: X, ys: Y, init: A, mut step: F) -> ReduceResult<Vec<A>>
where
    X: IntoIterator,
    X::IntoIter: ExactSizeIterator,
    Y: IntoIterator,
    Y::IntoIter: ExactSizeIterator,
    A: Clone,
    F: FnMut(&A, X::Item, Y::Item) -> Step<A>,
{
    let (xs, ys) = (xs.into_iter(), ys.into_iter());
    check_len(xs.len(), ys.len())?;
    Ok(scan(xs.zip(ys), init, |acc, (x, y)| step(acc, x, y)).into_inner())
}

/// Two-input [`accumulate`]; `ys` must have one element fewer than `xs`.
///
/// # Errors
///
/// Returns [`ReduceError::EmptyInput`] when `xs` is empty, or
/// [`ReduceError::LengthMismatch`] when the lengths do not line up.
pub fn accumulate2<X, Y, F>(xs: X, ys: Y, mut step: F) -> ReduceResult<Vec<X::Item>>
where
    X: IntoIterator,
    X::IntoIter: ExactSizeIterator,
    X::Item: Clone,
    Y: IntoIterator,
    Y::IntoIter: ExactSizeIterator,
    F: FnMut(&X::Item, X::Item, Y::Item) -> Step<X::Item>,
{
    let (mut xs, ys) = (xs.into_iter(), ys.into_iter());
    let first = xs.next().ok_or(ReduceError::EmptyInput)?;
    check_len(xs.len(), ys.len())?;
    Ok(scan(xs.zip(ys), first, |acc, (x, y)| step(acc, x, y)).into_inner())
}
