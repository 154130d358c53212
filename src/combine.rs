//! Aggregate independent outcomes into one.
//!
//! `combine` folds its inputs left to right. When every input is a success the
//! result holds all success payloads in input order; otherwise it holds the
//! failure payload of the **first failing input by position**. Combining never
//! runs or skips any producer: the inputs are already outcomes, and the fold
//! only decides which payload surfaces.
//!
//! Entry points are split by input shape rather than sniffed at runtime:
//!
//! | Input | Function | Success payload |
//! |-------|----------|-----------------|
//! | tuple of outcomes | [`combine`] | tuple |
//! | tuple of outcomes + combiner | [`combine_with`] | combiner's return value |
//! | iterator of outcomes | [`combine_all`] | `Vec` |
//! | `BTreeMap` of outcomes | [`combine_map`] | `BTreeMap` with the same keys |
//! | tuple of one-argument functions | [`combine_fns`] | tuple |
//! | tuple of zero-argument functions | [`combine_thunks`] | tuple |
//! | `BTreeMap` of functions | [`combine_fn_map`] | `BTreeMap` |
//!
//! # Example
//!
//! ```rust
//! use twotrack::combine::{combine, combine_with};
//! use twotrack::Outcome;
//!
//! let all_ok = combine((
//!     Outcome::<i32, &str>::success(1),
//!     Outcome::<&str, &str>::success("x"),
//! ));
//! assert_eq!(all_ok, Outcome::Success((1, "x")));
//!
//! let first_failure = combine((
//!     Outcome::<i32, &str>::success(1),
//!     Outcome::<i32, &str>::failure("a"),
//!     Outcome::<i32, &str>::failure("b"),
//! ));
//! assert_eq!(first_failure, Outcome::Failure("a"));
//!
//! let summed = combine_with(
//!     |a: i32, b: &str| a + b.len() as i32,
//!     (Outcome::<_, ()>::success(1), Outcome::<_, ()>::success("abc")),
//! );
//! assert_eq!(summed, Outcome::Success(4));
//! ```

mod collection;
mod functions;
mod tuple;

pub use collection::{combine_all, combine_map, traverse};
pub use functions::{combine_fn_map, combine_fns, combine_thunks, CombineFns, CombineThunks};
pub use tuple::{combine, combine_with, Combine, Spread};

use crate::outcome::Outcome;

/// Surface the failure found at `position` of a combine fold.
#[inline]
pub(crate) fn short_circuit<S, F>(position: usize, failure: F) -> Outcome<S, F> {
    #[cfg(feature = "tracing")]
    tracing::trace!(position, "combine surfaced a failure");
    #[cfg(not(feature = "tracing"))]
    let _ = position;
    Outcome::Failure(failure)
}
