//! Done Boxes
//!
//! A done box is the value a step callback hands back to its driver when it
//! wants iteration to stop. The box is either empty, meaning "stop and keep
//! the accumulator you already have", or carries the accumulator to finish
//! with.

use std::fmt;
use std::io::{self, Write};

use crate::error::{DoneError, DoneResult};

/// Early-termination signal carrying zero or one payload value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a done box only has an effect when returned to a driver"]
pub enum Done<T> {
    /// Stop, keeping the driver's current accumulator.
    Empty,
    /// Stop, replacing the driver's accumulator with this value.
    Value(T),
}

/// Creates a done box carrying `value`.
///
/// # Examples
///
/// ```
/// let signal = done(42);
/// assert_eq!(signal.into_value(), Ok(42));
/// ```
pub fn done<T>(value: T) -> Done<T> {
    Done::Value(value)
}

/// Creates an empty done box.
pub fn done_empty<T>() -> Done<T> {
    Done::Empty
}

impl<T> Done<T> {
    /// Always true: every value of this type is a termination request.
    pub fn is_done(&self) -> bool {
        true
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Done::Empty)
    }

    /// Consumes the box and returns its payload.
    ///
    /// # Errors
    ///
    /// Returns [`DoneError::EmptyBox`] when the box carries no payload.
    pub fn into_value(self) -> DoneResult<T> {
        match self {
            Done::Value(value) => Ok(value),
            Done::Empty => Err(DoneError::EmptyBox),
        }
    }

    /// Borrows the payload.
    ///
    /// # Errors
    ///
    /// Returns [`DoneError::EmptyBox`] when the box carries no payload.
    pub fn value(&self) -> DoneResult<&T> {
        match self {
            Done::Value(value) => Ok(value),
            Done::Empty => Err(DoneError::EmptyBox),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Done::Value(value) => Some(value),
            Done::Empty => None,
        }
    }

    /// Maps the payload, leaving an empty box empty.
    pub fn map<U, F>(self, f: F) -> Done<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Done::Value(value) => Done::Value(f(value)),
            Done::Empty => Done::Empty,
        }
    }
}

impl<T: fmt::Debug> Done<T> {
    /// Writes the box's display form, followed by a newline, to stdout.
    pub fn print(&self) -> &Self {
        let stdout = io::stdout();
        if let Err(e) = self.print_to(&mut stdout.lock()) {
            log::warn!("Failed to print done box: {}", e);
        }
        self
    }

    /// Writes the box's display form, followed by a newline, to `writer`.
    pub fn print_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", self)
    }
}

impl<T> Default for Done<T> {
    fn default() -> Self {
        Done::Empty
    }
}

impl<T> From<Option<T>> for Done<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Done::Value(value),
            None => Done::Empty,
        }
    }
}

/// The `<done>` marker line, then the payload's debug form or `<empty>`.
impl<T: fmt::Debug> fmt::Display for Done<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Done::Value(value) => write!(f, "<done>\n{:?}", value),
            Done::Empty => write!(f, "<done>\n<empty>"),
        }
    }
}
