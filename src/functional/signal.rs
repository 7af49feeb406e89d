//! Termination Signal Detection
//!
//! [`is_done`] answers "is this value a done box?" for any value implementing
//! [`Signal`], optionally narrowed to empty or non-empty boxes. Ordinary
//! values implement the trait with the default method and are never boxes.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use super::done::Done;
use super::step::Step;

/// Whether a done box carries a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DoneState {
    Empty,
    Filled,
}

/// Narrows [`is_done`] by emptiness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DoneFilter {
    /// Any done box.
    #[default]
    Any,
    /// Only empty done boxes.
    Empty,
    /// Only done boxes carrying a payload.
    Filled,
}

impl DoneFilter {
    pub fn matches(self, state: DoneState) -> bool {
        match self {
            DoneFilter::Any => true,
            DoneFilter::Empty => state == DoneState::Empty,
            DoneFilter::Filled => state == DoneState::Filled,
        }
    }
}

/// `None` is unfiltered, `Some(true)` selects empty boxes and `Some(false)`
/// selects filled ones.
impl From<Option<bool>> for DoneFilter {
    fn from(empty: Option<bool>) -> Self {
        match empty {
            None => DoneFilter::Any,
            Some(true) => DoneFilter::Empty,
            Some(false) => DoneFilter::Filled,
        }
    }
}

impl From<bool> for DoneFilter {
    fn from(empty: bool) -> Self {
        Some(empty).into()
    }
}

/// Values that may be a done box.
pub trait Signal {
    /// The box state, or `None` when the value is not a done box.
    fn done_state(&self) -> Option<DoneState> {
        None
    }
}

impl<T> Signal for Done<T> {
    fn done_state(&self) -> Option<DoneState> {
        Some(match self {
            Done::Empty => DoneState::Empty,
            Done::Value(_) => DoneState::Filled,
        })
    }
}

impl<A> Signal for Step<A> {
    fn done_state(&self) -> Option<DoneState> {
        match self {
            Step::Continue(_) => None,
            Step::Done(signal) => signal.done_state(),
        }
    }
}

impl<S: Signal + ?Sized> Signal for &S {
    fn done_state(&self) -> Option<DoneState> {
        (**self).done_state()
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn done_state(&self) -> Option<DoneState> {
        (**self).done_state()
    }
}

macro_rules! impl_plain_signal {
    ($($ty:ty),* $(,)?) => {
        $(impl Signal for $ty {})*
    };
}

impl_plain_signal!(
    (), bool, char, str, String,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

// Containers are ordinary values even when they hold a done box.
impl<T> Signal for Option<T> {}
impl<T, E> Signal for Result<T, E> {}
impl<T> Signal for [T] {}
impl<T, const N: usize> Signal for [T; N] {}
impl<T> Signal for Vec<T> {}
impl<T> Signal for VecDeque<T> {}
impl<K, V, S> Signal for HashMap<K, V, S> {}
impl<K, V> Signal for BTreeMap<K, V> {}
impl<T: ?Sized> Signal for Rc<T> {}
impl<T: ?Sized> Signal for Arc<T> {}
impl<B: ?Sized + ToOwned> Signal for Cow<'_, B> {}

/// Returns true when `value` is a done box accepted by `filter`.
///
/// # Examples
///
/// ```
/// assert!(is_done(&done(1), DoneFilter::Any));
/// assert!(is_done(&done_empty::<i32>(), Some(true)));
/// assert!(!is_done(&done(1), Some(true)));
/// assert!(!is_done(&5, DoneFilter::Any));
/// ```
pub fn is_done<S, F>(value: &S, filter: F) -> bool
where
    S: Signal + ?Sized,
    F: Into<DoneFilter>,
{
    value
        .done_state()
        .is_some_and(|state| filter.into().matches(state))
}
