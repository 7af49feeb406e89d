//! The value a step callback returns to a driver.

use super::done::Done;

/// Outcome of one step of a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<A> {
    /// Keep going with this accumulator.
    Continue(A),
    /// Stop now.
    Done(Done<A>),
}

impl<A> Step<A> {
    pub fn next(acc: A) -> Self {
        Step::Continue(acc)
    }

    /// Stop, finishing with `acc`.
    pub fn done(acc: A) -> Self {
        Step::Done(Done::Value(acc))
    }

    /// Stop, keeping the accumulator the driver already holds.
    pub fn done_empty() -> Self {
        Step::Done(Done::Empty)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_))
    }
}

impl<A> From<Done<A>> for Step<A> {
    fn from(signal: Done<A>) -> Self {
        Step::Done(signal)
    }
}
