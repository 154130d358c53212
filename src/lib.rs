//! # Twotrack
//!
//! Railway-style outcome combinators: one algebra over a two-channel value,
//! usable the same way on plain values and on futures.
//!
//! Every computation ends up on exactly one of two tracks. Transforms run on
//! the success track and are skipped once a computation has switched to the
//! failure track; the failure-channel operators are the exact mirror.
//!
//! ## Modules
//!
//! - [`outcome`]: the [`Outcome`] type, its transforms, and free and curried
//!   function forms
//! - [`matcher`]: the [`Matcher`] builder for extracting a value from either
//!   channel
//! - [`combine`]: fold tuples, collections, maps and functions of outcomes
//!   into one, surfacing the first failure by position
//! - [`async_outcome`]: the same operators over pending outcomes
//! - [`testing`]: assertion macros and property-test support
//!
//! ## Quick Example
//!
//! ```rust
//! use twotrack::combine::combine_with;
//! use twotrack::{Matcher, Outcome};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, String> {
//!     if b == 0 {
//!         Outcome::failure("division by zero".to_string())
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! let ratio = divide(10, 2)
//!     .map(|q| q * 3)
//!     .flat_map(|q| divide(q, 5));
//! assert_eq!(ratio, Outcome::Success(3));
//!
//! let sum = combine_with(|a: i32, b: i32| a + b, (divide(8, 2), divide(9, 3)));
//! assert_eq!(sum, Outcome::Success(7));
//!
//! let label = divide(1, 0).match_with(Matcher::new(
//!     |q: i32| format!("quotient {q}"),
//!     |e: String| format!("error: {e}"),
//! ));
//! assert_eq!(label, "error: division by zero");
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug events for outcomes and trace events from combine
//! - `serde`: tagged `Serialize`/`Deserialize` for [`Outcome`]
//! - `proptest`: `Arbitrary` for [`Outcome`] and strategy helpers
//! - `try_trait` (nightly): the `?` operator on [`Outcome`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2, try_trait_v2_residual))]

pub mod async_outcome;
pub mod combine;
pub mod matcher;
pub mod outcome;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod tracing;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-exports
pub use matcher::Matcher;
pub use outcome::{failure, success, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::async_outcome::{CombineAsync, OutcomeFutureExt};
    pub use crate::combine::{combine, combine_all, combine_with, Combine};
    pub use crate::matcher::Matcher;
    pub use crate::outcome::{failure, success, Outcome};
    #[cfg(feature = "tracing")]
    pub use crate::tracing::{OutcomeFutureTracingExt, OutcomeTracingExt};
}
