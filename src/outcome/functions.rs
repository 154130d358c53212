//! Free-function forms of the outcome operators, transform first.
//!
//! These mirror the inherent methods one for one and exist so that the
//! operator reads the same way in both call shapes: `map(f, outcome)` here,
//! `curried::map(f)(outcome)` in [`curried`](super::curried).

use super::Outcome;
use crate::matcher::Matcher;

/// Map the success payload. See [`Outcome::map`].
///
/// # Example
///
/// ```rust
/// use twotrack::outcome::{self, Outcome};
///
/// let o: Outcome<i32, ()> = Outcome::success(2);
/// assert_eq!(outcome::map(|x| x + 1, o), Outcome::Success(3));
/// ```
#[inline]
pub fn map<S, F, S2, T>(transform: T, outcome: Outcome<S, F>) -> Outcome<S2, F>
where
    T: FnOnce(S) -> S2,
{
    outcome.map(transform)
}

/// Chain an outcome-producing transform. See [`Outcome::flat_map`].
#[inline]
pub fn flat_map<S, F, S2, T>(transform: T, outcome: Outcome<S, F>) -> Outcome<S2, F>
where
    T: FnOnce(S) -> Outcome<S2, F>,
{
    outcome.flat_map(transform)
}

/// Map the failure payload. See [`Outcome::map_failure`].
#[inline]
pub fn map_failure<S, F, F2, T>(transform: T, outcome: Outcome<S, F>) -> Outcome<S, F2>
where
    T: FnOnce(F) -> F2,
{
    outcome.map_failure(transform)
}

/// Chain an outcome-producing recovery. See [`Outcome::flat_map_failure`].
#[inline]
pub fn flat_map_failure<S, F, F2, T>(transform: T, outcome: Outcome<S, F>) -> Outcome<S, F2>
where
    T: FnOnce(F) -> Outcome<S, F2>,
{
    outcome.flat_map_failure(transform)
}

/// Exchange the channels. See [`Outcome::swap`].
#[inline]
pub fn swap<S, F>(outcome: Outcome<S, F>) -> Outcome<F, S> {
    outcome.swap()
}

/// Extract a value through a [`Matcher`]. See [`Outcome::match_with`].
///
/// # Example
///
/// ```rust
/// use twotrack::outcome::{self, Outcome};
/// use twotrack::Matcher;
///
/// let o: Outcome<i32, String> = Outcome::success(2);
/// let text = outcome::match_with(Matcher::new(|v: i32| v * 10, |e: String| e.len() as i32), o);
/// assert_eq!(text, 20);
/// ```
#[inline]
pub fn match_with<S, F, M, OnSuccess, OnFailure>(
    matcher: Matcher<S, F, M, OnSuccess, OnFailure>,
    outcome: Outcome<S, F>,
) -> M
where
    OnSuccess: FnOnce(S) -> M,
    OnFailure: FnOnce(F) -> M,
{
    matcher.run(outcome)
}
