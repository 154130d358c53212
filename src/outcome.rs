//! The synchronous outcome type and its combinator family.
//!
//! An [`Outcome<S, F>`] is either a `Success(S)` or a `Failure(F)`. Every
//! operator in this module is a pure value transformation: it consumes an
//! outcome and returns a new one, and it never inspects the payloads it
//! threads through.
//!
//! # Success-Biased Convention
//!
//! `map` and `flat_map` work on the success channel and short-circuit on the
//! failure channel. `map_failure` and `flat_map_failure` are the mirror image,
//! derived from the success-channel operators by swapping the channels before
//! and after.
//!
//! # Two Call Shapes
//!
//! Every operator is available as
//! - an inherent method: `outcome.map(f)`,
//! - an immediate free function, transform first: [`map(f, outcome)`](map),
//! - a curried free function returning a reusable closure:
//!   [`curried::map(f)`](curried::map).
//!
//! All three produce identical results for identical inputs.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::outcome::{self, Outcome};
//!
//! fn divide(a: i32, b: i32) -> Outcome<i32, &'static str> {
//!     if b == 0 {
//!         Outcome::failure("div-by-zero")
//!     } else {
//!         Outcome::success(a / b)
//!     }
//! }
//!
//! assert_eq!(outcome::map(|x| x * 2, divide(10, 5)), Outcome::Success(4));
//! assert_eq!(outcome::map(|x| x * 2, divide(10, 0)), Outcome::Failure("div-by-zero"));
//!
//! let double = outcome::curried::map(|x: i32| x * 2);
//! assert_eq!(double(divide(10, 5)), Outcome::Success(4));
//! ```

pub mod curried;
mod functions;
#[cfg(feature = "try_trait")]
mod try_impl;

pub use functions::{flat_map, flat_map_failure, map, map_failure, match_with, swap};

use std::convert::Infallible;
use std::future::{self, IntoFuture, Ready};

use crate::matcher::Matcher;

/// A value that is either a `Success(S)` or a `Failure(F)`.
///
/// Exactly one channel is populated. Outcomes are never mutated by the
/// combinators in this crate: each operator returns a fresh outcome.
///
/// # Example
///
/// ```rust
/// use twotrack::Outcome;
///
/// let ok: Outcome<i32, String> = Outcome::success(21);
/// let doubled = ok.map(|x| x * 2);
/// assert_eq!(doubled, Outcome::Success(42));
///
/// let err: Outcome<i32, String> = Outcome::failure("boom".to_string());
/// assert_eq!(err.map(|x| x * 2), Outcome::Failure("boom".to_string()));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome<S, F> {
    /// The success channel
    Success(S),
    /// The failure channel
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    // ========== Constructors ==========

    /// Create a successful outcome.
    ///
    /// The failure type is left to inference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, String> = Outcome::success(1);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Create a failed outcome.
    ///
    /// The success type is left to inference.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("nope");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: F) -> Self {
        Outcome::Failure(error)
    }

    /// Convert a `Result` into an outcome: `Ok` becomes `Success`, `Err`
    /// becomes `Failure`.
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a `Result`: `Success` becomes `Ok`, `Failure` becomes `Err`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::success(3);
    /// assert_eq!(o.into_result(), Ok(3));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Extractors ==========

    /// Returns the success payload if present, consuming self.
    #[inline]
    pub fn success_value(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the failure payload if present, consuming self.
    #[inline]
    pub fn failure_value(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Convert to `Outcome<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert to `Outcome<&mut S, &mut F>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Iterate over the success payload (zero or one item).
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.as_ref().success_value().into_iter()
    }

    /// Extract the success payload, panicking on a failure.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> S
    where
        F: std::fmt::Debug,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value: {error:?}")
            }
        }
    }

    /// Extract the failure payload, panicking on a success.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> F
    where
        S: std::fmt::Debug,
    {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value: {value:?}")
            }
            Outcome::Failure(error) => error,
        }
    }

    /// Returns the success payload or the provided default.
    #[inline]
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<usize, &str> = Outcome::failure("four");
    /// assert_eq!(o.unwrap_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<G>(self, recover: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => recover(error),
        }
    }

    // ========== Transformations ==========

    /// Transform the success payload, passing failures through untouched.
    ///
    /// The transform is never invoked for a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(o.map(|v| v.to_string()), Outcome::Success("5".to_string()));
    /// ```
    #[inline]
    pub fn map<S2, T>(self, transform: T) -> Outcome<S2, F>
    where
        T: FnOnce(S) -> S2,
    {
        self.flat_map(|value| Outcome::Success(transform(value)))
    }

    /// Chain a transform that itself produces an outcome, flattening one level.
    ///
    /// Short-circuits on `Failure`: the transform is not invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::success(n / 2)
    ///     } else {
    ///         Outcome::failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(8).flat_map(half), Outcome::Success(4));
    /// assert_eq!(
    ///     Outcome::success(3).flat_map(half),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<S2, T>(self, transform: T) -> Outcome<S2, F>
    where
        T: FnOnce(S) -> Outcome<S2, F>,
    {
        match self {
            Outcome::Success(value) => transform(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure payload, passing successes through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("disk");
    /// assert_eq!(
    ///     o.map_failure(|e| format!("io: {e}")),
    ///     Outcome::Failure("io: disk".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map_failure<F2, T>(self, transform: T) -> Outcome<S, F2>
    where
        T: FnOnce(F) -> F2,
    {
        self.swap().map(transform).swap()
    }

    /// Chain a recovery that produces an outcome from the failure payload.
    ///
    /// Successes pass through untouched. A recovery may turn a failure back
    /// into a success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("missing");
    /// let recovered: Outcome<i32, String> = o.flat_map_failure(|_| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn flat_map_failure<F2, T>(self, transform: T) -> Outcome<S, F2>
    where
        T: FnOnce(F) -> Outcome<S, F2>,
    {
        self.swap()
            .flat_map(|error| transform(error).swap())
            .swap()
    }

    /// Exchange the channels: `Success(v)` becomes `Failure(v)` and vice versa.
    #[inline]
    pub fn swap(self) -> Outcome<F, S> {
        match self {
            Outcome::Success(value) => Outcome::Failure(value),
            Outcome::Failure(error) => Outcome::Success(error),
        }
    }

    // ========== Folding ==========

    /// Collapse both channels into one value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("bad");
    /// assert_eq!(o.fold(|v| v.to_string(), |e| e.to_uppercase()), "BAD");
    /// ```
    #[inline]
    pub fn fold<T, OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure) -> T
    where
        OnSuccess: FnOnce(S) -> T,
        OnFailure: FnOnce(F) -> T,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Extract a value through a [`Matcher`].
    ///
    /// See [`Matcher`] for the resolution order between handlers and the
    /// default value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::{Matcher, Outcome};
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("bad");
    /// let label = o.match_with(Matcher::with_default("fallback").on_success(|_: i32| "ok"));
    /// assert_eq!(label, "fallback");
    /// ```
    #[inline]
    pub fn match_with<M, OnSuccess, OnFailure>(
        self,
        matcher: Matcher<S, F, M, OnSuccess, OnFailure>,
    ) -> M
    where
        OnSuccess: FnOnce(S) -> M,
        OnFailure: FnOnce(F) -> M,
    {
        matcher.run(self)
    }
}

impl<S, F> Outcome<Outcome<S, F>, F> {
    /// Remove one level of nesting from the success channel.
    #[inline]
    pub fn flatten(self) -> Outcome<S, F> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Outcome<T, T> {
    /// Return whichever payload is present when both channels share a type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::Outcome;
    ///
    /// let o: Outcome<&str, &str> = Outcome::failure("either way");
    /// assert_eq!(o.merge(), "either way");
    /// ```
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Outcome::Success(value) | Outcome::Failure(value) => value,
        }
    }
}

impl<S> Outcome<S, Infallible> {
    /// Extract the payload of an outcome that cannot fail.
    #[inline]
    pub fn into_success_value(self) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(never) => match never {},
        }
    }

    /// Give an infallible outcome an arbitrary failure type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::convert::Infallible;
    /// use twotrack::Outcome;
    ///
    /// let sure: Outcome<i32, Infallible> = Outcome::success(1);
    /// let widened: Outcome<i32, String> = sure.widen_failure();
    /// assert_eq!(widened, Outcome::Success(1));
    /// ```
    #[inline]
    pub fn widen_failure<F>(self) -> Outcome<S, F> {
        Outcome::Success(self.into_success_value())
    }
}

impl<F> Outcome<Infallible, F> {
    /// Extract the payload of an outcome that cannot succeed.
    #[inline]
    pub fn into_failure_value(self) -> F {
        match self {
            Outcome::Success(never) => match never {},
            Outcome::Failure(error) => error,
        }
    }

    /// Give an always-failing outcome an arbitrary success type.
    #[inline]
    pub fn widen_success<S>(self) -> Outcome<S, F> {
        Outcome::Failure(self.into_failure_value())
    }
}

// ========== Trait Implementations ==========

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Outcome::from_result(result)
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

/// A resolved outcome is also a pending one, ready on the first poll.
///
/// This lets every operator in [`async_outcome`](crate::async_outcome) accept
/// plain outcomes and futures of outcomes interchangeably.
impl<S, F> IntoFuture for Outcome<S, F> {
    type Output = Outcome<S, F>;
    type IntoFuture = Ready<Outcome<S, F>>;

    fn into_future(self) -> Self::IntoFuture {
        future::ready(self)
    }
}

impl<S, F> IntoIterator for Outcome<S, F> {
    type Item = S;
    type IntoIter = std::option::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.success_value().into_iter()
    }
}

// ========== Helper Functions ==========

/// Create a successful outcome. Shorthand for [`Outcome::success`].
#[inline]
pub fn success<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Success(value)
}

/// Create a failed outcome. Shorthand for [`Outcome::failure`].
#[inline]
pub fn failure<S, F>(error: F) -> Outcome<S, F> {
    Outcome::Failure(error)
}

/// Split a collection of outcomes into success payloads and failure payloads,
/// each in input order.
///
/// # Example
///
/// ```rust
/// use twotrack::outcome::{partition, Outcome};
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![
///     Outcome::success(1),
///     Outcome::failure("a"),
///     Outcome::success(2),
/// ];
/// let (ok, bad) = partition(outcomes);
/// assert_eq!(ok, vec![1, 2]);
/// assert_eq!(bad, vec!["a"]);
/// ```
pub fn partition<S, F, I>(iter: I) -> (Vec<S>, Vec<F>)
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    let mut successes = Vec::new();
    let mut failures = Vec::new();
    for outcome in iter {
        match outcome {
            Outcome::Success(value) => successes.push(value),
            Outcome::Failure(error) => failures.push(error),
        }
    }
    (successes, failures)
}

/// Keep only the success payloads.
pub fn successes<S, F, I>(iter: I) -> impl Iterator<Item = S>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    iter.into_iter().filter_map(Outcome::success_value)
}

/// Keep only the failure payloads.
pub fn failures<S, F, I>(iter: I) -> impl Iterator<Item = F>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    iter.into_iter().filter_map(Outcome::failure_value)
}
