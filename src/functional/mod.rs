//! Done boxes and short-circuiting drivers
//!
//! A step callback stops its driver by returning a [`done::Done`] box; the
//! drivers in [`reduce`], [`accumulate`] and [`iter_ext`] watch for it.

pub mod accumulate;
pub mod done;
pub mod driver;
pub mod iter_ext;
pub mod prelude;
pub mod reduce;
pub mod signal;
pub mod step;

#[cfg(test)]
mod test_reduce;
