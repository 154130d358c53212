//! The asynchronous outcome family.
//!
//! An *async outcome* is anything that can be awaited to obtain an
//! [`Outcome`](crate::Outcome): every `Future<Output = Outcome<S, F>>`, and,
//! through [`IntoFuture`](std::future::IntoFuture), every plain outcome. All
//! operators here accept either interchangeably and return a pending
//! computation.
//!
//! # Scheduling
//!
//! Nothing in this module spawns work. Operators suspend only where they
//! await their input (and, for `flat_map`-style operators, the transform's
//! result). The failure channel short-circuits exactly as in the synchronous
//! family: a failing input never triggers a success-channel transform.
//!
//! The combine family polls its inputs concurrently on the caller's task and
//! drives every one of them to completion, then folds in input order. The
//! surfaced failure is therefore the first by position, independent of which
//! input resolved first, and no input is cancelled.
//!
//! # Call Shapes
//!
//! - free functions, transform first: [`map(f, pending)`](map)
//! - curried, boxed: [`curried::map(f)`](curried::map)
//! - method chaining on futures: [`OutcomeFutureExt`]
//!
//! # Example
//!
//! ```rust
//! use twotrack::async_outcome::{self, OutcomeFutureExt};
//! use twotrack::Outcome;
//!
//! async fn fetch_port() -> Outcome<u16, String> {
//!     Outcome::success(8080)
//! }
//!
//! # tokio_test::block_on(async {
//! // Plain outcomes and futures are accepted interchangeably
//! let plain = async_outcome::map(|p: u16| p + 1, Outcome::<u16, String>::success(1)).await;
//! assert_eq!(plain, Outcome::Success(2));
//!
//! let chained = fetch_port()
//!     .map_success(|p| p.to_string())
//!     .map_failure(|e| format!("config: {e}"))
//!     .await;
//! assert_eq!(chained, Outcome::Success("8080".to_string()));
//! # });
//! ```

mod combine;
pub mod curried;
mod ext;
mod ops;

pub use combine::{
    combine, combine_all, combine_fn_map, combine_fns, combine_map, combine_thunks, combine_with,
    traverse, CombineAsync, CombineFnsAsync, CombineThunksAsync,
};
pub use ext::OutcomeFutureExt;
pub use ops::{
    flat_map, flat_map_failure, fold, map, map_async, map_failure, map_failure_async, match_with,
    merge,
};
