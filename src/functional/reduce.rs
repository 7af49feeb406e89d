//! Reduce Drivers
//!
//! Left folds that honour done boxes returned by their step callback. Each
//! driver comes in two shapes: `*_with` takes an explicit initial
//! accumulator, the bare form seeds the accumulator from the first element
//! and fails on empty input.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, ReduceError, ReduceResult};

use super::driver::{drive, FoldResult};
use super::step::Step;

/// Order in which a driver consumes its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// First element to last.
    #[default]
    Forward,
    /// Last element to first.
    Backward,
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" => Ok(Direction::Forward),
            "backward" => Ok(Direction::Backward),
            _ => Err(ConfigError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => f.write_str("forward"),
            Direction::Backward => f.write_str("backward"),
        }
    }
}

/// Reduction configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReduceConfig {
    /// Order in which input elements reach the step callback
    pub direction: Direction,
}

impl ReduceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn backward() -> Self {
        Self::new().with_direction(Direction::Backward)
    }
}

/// Runs [`drive`] over `input` in the configured direction.
pub(crate) fn drive_directed<I, A, F, O>(
    input: I,
    init: A,
    config: &ReduceConfig,
    step: F,
    observe: O,
) -> FoldResult<A>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&A, I::Item) -> Step<A>,
    O: FnMut(&A),
{
    match config.direction {
        Direction::Forward => drive(input.into_iter(), init, step, observe),
        Direction::Backward => drive(input.into_iter().rev(), init, step, observe),
    }
}

/// Folds `input` from `init`, stopping early when `step` returns a done box.
///
/// A filled done box becomes the result; an empty one leaves the accumulator
/// as it was before the stopping element.
///
/// # Examples
///
/// ```
/// let total = reduce_with(vec![1, 2, 3, 4, 5], 0, |acc, x| {
///     if x > 3 { Step::done(*acc) } else { Step::next(acc + x) }
/// });
/// assert_eq!(total, 6);
/// ```
pub fn reduce_with<I, A, F>(input: I, init: A, step: F) -> A
where
    I: IntoIterator,
    F: FnMut(&A, I::Item) -> Step<A>,
{
    drive(input.into_iter(), init, step, |_| {}).into_inner()
}

/// [`reduce_with`] honouring `config`.
pub fn reduce_with_config<I, A, F>(input: I, init: A, config: &ReduceConfig, step: F) -> A
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&A, I::Item) -> Step<A>,
{
    drive_directed(input, init, config, step, |_| {}).into_inner()
}

/// Folds `input` using its first element as the initial accumulator.
///
/// A single element is returned without calling `step`.
///
/// # Errors
///
/// Returns [`ReduceError::EmptyInput`] when `input` yields nothing.
pub fn reduce<I, F>(input: I, step: F) -> ReduceResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, I::Item) -> Step<I::Item>,
{
    let mut iter = input.into_iter();
    let first = iter.next().ok_or(ReduceError::EmptyInput)?;
    Ok(drive(iter, first, step, |_| {}).into_inner())
}

/// [`reduce`] honouring `config`; a backward reduce is seeded from the last
/// element.
///
/// # Errors
///
/// Returns [`ReduceError::EmptyInput`] when `input` yields nothing.
pub fn reduce_config<I, F>(input: I, config: &ReduceConfig, step: F) -> ReduceResult<I::Item>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&I::Item, I::Item) -> Step<I::Item>,
{
    let mut iter = input.into_iter();
    let first = match config.direction {
        Direction::Forward => iter.next(),
        Direction::Backward => iter.next_back(),
    }
    .ok_or(ReduceError::EmptyInput)?;
    Ok(drive_directed(iter, first, config, step, |_| {}).into_inner())
}

/// Checks that `ys` has exactly `expected` elements.
pub(crate) fn check_len(expected: usize, actual: usize) -> ReduceResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ReduceError::LengthMismatch { expected, actual })
    }
}

/// Folds two equal-length inputs in lockstep from `init`.
///
/// `step` receives the accumulator and one element of each input.
///
/// # Errors
///
/// Returns [`ReduceError::LengthMismatch`] when `ys` is not as long as `xs`.
/// No step runs in that case.
pub fn reduce2_with<X, Y, A, F>(xs: X, ys: Y, init: A, mut step: F) -> ReduceResult<A>
where
    X: IntoIterator,
    X::IntoIter: ExactSizeIterator,
    Y: IntoIterator,
    Y::IntoIter: ExactSizeIterator,
    F: FnMut(&A, X::Item, Y::Item) -> Step<A>,
{
    let (xs, ys) = (xs.into_iter(), ys.into_iter());
    check_len(xs.len(), ys.len())?;
    Ok(drive(xs.zip(ys), init, |acc, (x, y)| step(acc, x, y), |_| {}).into_inner())
}

/// Folds two inputs in lockstep, using the first `x` as the initial
/// accumulator and pairing the remaining `xs` with `ys`.
///
/// # Errors
///
/// Returns [`ReduceError::EmptyInput`] when `xs` is empty, or
/// [`ReduceError::LengthMismatch`] when `ys` does not have exactly one element
/// fewer than `xs`.
pub fn reduce2<X, Y, F>(xs: X, ys: Y, mut step: F) -> ReduceResult<X::Item>
where
    X: IntoIterator,
    X::IntoIter: ExactSizeIterator,
    Y: IntoIterator,
    Y::IntoIter: ExactSizeIterator,
    F: FnMut(&X::Item, X::Item, Y::Item) -> Step<X::Item>,
{
    let (mut xs, ys) = (xs.into_iter(), ys.into_iter());
    let first = xs.next().ok_or(ReduceError::EmptyInput)?;
    check_len(xs.len(), ys.len())?;
    Ok(drive(xs.zip(ys), first, |acc, (x, y)| step(acc, x, y), |_| {}).into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::done::{done, done_empty};

    #[test]
    fn test_reduce_with_filled_done() {
        let total = reduce_with(vec![1, 2, 3, 4, 5], 0, |acc, x| {
            if x > 3 {
                done(*acc).into()
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(total, 6);
    }

    #[test]
    fn test_reduce_with_empty_done() {
        let total = reduce_with(vec![1, 2, 3], 0, |acc, x| {
            if x == 2 {
                done_empty().into()
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(total, 1);
    }

    #[test]
    fn test_reduce_with_replacement_value() {
        let result = reduce_with(["a", "b", "stop", "c"], String::new(), |acc, x| {
            if x == "stop" {
                Step::done(format!("{}!", acc))
            } else {
                Step::next(format!("{}{}", acc, x))
            }
        });
        assert_eq!(result, "ab!");
    }

    #[test]
    fn test_reduce_with_empty_input_returns_init() {
        let total = reduce_with(Vec::<i32>::new(), 10, |acc, x| Step::next(acc + x));
        assert_eq!(total, 10);
    }

    #[test]
    fn test_reduce_without_init() {
        assert_eq!(reduce(vec![1, 2, 3], |acc, x| Step::next(acc + x)), Ok(6));
        assert_eq!(
            reduce(Vec::<i32>::new(), |acc, x| Step::next(acc + x)),
            Err(ReduceError::EmptyInput)
        );
    }

    #[test]
    fn test_reduce_single_element_skips_step() {
        let mut calls = 0;
        let result = reduce(vec![42], |acc, x| {
            calls += 1;
            Step::next(acc + x)
        });
        assert_eq!(result, Ok(42));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reduce_backward() {
        let config = ReduceConfig::backward();
        let joined = reduce_with_config(vec!["a", "b", "c"], String::new(), &config, |acc, x| {
            Step::next(format!("{}{}", acc, x))
        });
        assert_eq!(joined, "cba");

        let seeded = reduce_config(vec![1, 2, 3, 10], &config, |acc, x| {
            if x == 1 {
                Step::done_empty()
            } else {
                Step::next(acc - x)
            }
        });
        assert_eq!(seeded, Ok(5));
    }

    #[test]
    fn test_reduce_config_forward_matches_reduce() {
        let config = ReduceConfig::default();
        assert_eq!(
            reduce_config(1..=5, &config, |acc, x| Step::next(acc * x)),
            reduce(1..=5, |acc, x| Step::next(acc * x))
        );
    }

    #[test]
    fn test_reduce2_with() {
        let dot = reduce2_with(vec![1, 2, 3], vec![4, 5, 6], 0, |acc, x, y| {
            Step::next(acc + x * y)
        });
        assert_eq!(dot, Ok(32));

        let stopped = reduce2_with(vec![1, 2, 3], vec![4, 0, 6], 0, |acc, x, y| {
            if y == 0 {
                Step::done_empty()
            } else {
                Step::next(acc + x * y)
            }
        });
        assert_eq!(stopped, Ok(4));
    }

    #[test]
    fn test_reduce2_with_length_mismatch() {
        let mut calls = 0;
        let result = reduce2_with(vec![1, 2, 3], vec![1, 2], 0, |acc, x, y| {
            calls += 1;
            Step::next(acc + x + y)
        });
        assert_eq!(
            result,
            Err(ReduceError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reduce2_without_init() {
        let result = reduce2(vec![1, 2, 3], vec![10, 100], |acc, x, y| {
            Step::next(acc + x * y)
        });
        assert_eq!(result, Ok(1 + 20 + 300));

        assert_eq!(
            reduce2(vec![1, 2, 3], vec![10, 100, 1000], |acc, x, y| Step::next(acc + x * y)),
            Err(ReduceError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(
            reduce2(Vec::<i32>::new(), Vec::<i32>::new(), |acc, x, y| Step::next(
                acc + x + y
            )),
            Err(ReduceError::EmptyInput)
        );
    }

    #[test]
    fn test_reduce2_filled_done() {
        let result = reduce2_with(vec![1, 2, 3, 4], vec![10, 20, 30, 40], 0, |acc, x, y| {
            if x == 3 {
                Step::done(acc + y)
            } else {
                Step::next(acc + x * y)
            }
        });
        assert_eq!(result, Ok(10 + 40 + 30));

        let seeded = reduce2(vec![5, 6, 7], vec![1, 0], |acc, x, y| {
            if y == 0 {
                Step::done(acc * x)
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(seeded, Ok((5 + 6) * 7));
    }

    #[test]
    fn test_reduce_backward_filled_done() {
        let config = ReduceConfig::backward();
        let mut seen = Vec::new();
        let result = reduce_with_config(vec![1, 2, 3, 4], 0, &config, |acc, x| {
            seen.push(x);
            if x == 2 {
                Step::done(acc * 10)
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(result, 70);
        assert_eq!(seen, vec![4, 3, 2]);

        let seeded = reduce_config(vec![1, 2, 3, 4], &config, |acc, x| {
            if x == 3 {
                Step::done(-acc)
            } else {
                Step::next(acc + x)
            }
        });
        assert_eq!(seeded, Ok(-4));
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("forward".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!(" Backward ".parse::<Direction>(), Ok(Direction::Backward));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(ConfigError::InvalidDirection("sideways".to_string()))
        );
        assert_eq!(Direction::Backward.to_string(), "backward");
    }
}
