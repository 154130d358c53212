//! Curried operators for left-to-right pipelines.
//!
//! Each function takes only the transform (or matcher) and returns a reusable
//! closure over it. Applying the closure to an outcome gives exactly what the
//! immediate form gives for the same inputs.
//!
//! # Example
//!
//! ```rust
//! use twotrack::outcome::{curried, Outcome};
//!
//! let to_text = curried::map(|x: i32| x.to_string());
//! let tag_error = curried::map_failure(|e: &str| format!("bad input: {e}"));
//!
//! let ok: Outcome<i32, &str> = Outcome::success(7);
//! let bad: Outcome<i32, &str> = Outcome::failure("empty");
//!
//! assert_eq!(tag_error(to_text(ok)), Outcome::Success("7".to_string()));
//! assert_eq!(
//!     tag_error(to_text(bad)),
//!     Outcome::Failure("bad input: empty".to_string())
//! );
//! ```

use super::Outcome;
use crate::matcher::Matcher;

/// Curried [`Outcome::map`].
pub fn map<S, F, S2, T>(transform: T) -> impl Fn(Outcome<S, F>) -> Outcome<S2, F>
where
    T: Fn(S) -> S2,
{
    move |outcome| outcome.map(&transform)
}

/// Curried [`Outcome::flat_map`].
pub fn flat_map<S, F, S2, T>(transform: T) -> impl Fn(Outcome<S, F>) -> Outcome<S2, F>
where
    T: Fn(S) -> Outcome<S2, F>,
{
    move |outcome| outcome.flat_map(&transform)
}

/// Curried [`Outcome::map_failure`].
pub fn map_failure<S, F, F2, T>(transform: T) -> impl Fn(Outcome<S, F>) -> Outcome<S, F2>
where
    T: Fn(F) -> F2,
{
    move |outcome| outcome.map_failure(&transform)
}

/// Curried [`Outcome::flat_map_failure`].
pub fn flat_map_failure<S, F, F2, T>(transform: T) -> impl Fn(Outcome<S, F>) -> Outcome<S, F2>
where
    T: Fn(F) -> Outcome<S, F2>,
{
    move |outcome| outcome.flat_map_failure(&transform)
}

/// Curried [`Outcome::match_with`].
///
/// The closure can be applied many times, so handlers must be `Fn` and the
/// default value is cloned whenever it is returned.
///
/// # Example
///
/// ```rust
/// use twotrack::outcome::{curried, Outcome};
/// use twotrack::Matcher;
///
/// let describe = curried::match_with(
///     Matcher::with_default("unknown".to_string()).on_failure(|e: u8| format!("code {e}")),
/// );
///
/// assert_eq!(describe(Outcome::<&str, u8>::success("ok")), "unknown");
/// assert_eq!(describe(Outcome::<&str, u8>::failure(4)), "code 4");
/// ```
pub fn match_with<S, F, M, OnSuccess, OnFailure>(
    matcher: Matcher<S, F, M, OnSuccess, OnFailure>,
) -> impl Fn(Outcome<S, F>) -> M
where
    OnSuccess: Fn(S) -> M,
    OnFailure: Fn(F) -> M,
    M: Clone,
{
    move |outcome| matcher.apply(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome;

    fn sample(ok: bool) -> Outcome<i32, &'static str> {
        if ok {
            Outcome::success(4)
        } else {
            Outcome::failure("broken")
        }
    }

    #[test]
    fn curried_map_matches_immediate_form() {
        let double = map(|x: i32| x * 2);
        for ok in [true, false] {
            assert_eq!(double(sample(ok)), outcome::map(|x| x * 2, sample(ok)));
        }
    }

    #[test]
    fn curried_closures_are_reusable() {
        let half = flat_map(|x: i32| {
            if x % 2 == 0 {
                Outcome::success(x / 2)
            } else {
                Outcome::failure("odd")
            }
        });
        assert_eq!(half(sample(true)), Outcome::Success(2));
        assert_eq!(half(half(sample(true))), Outcome::Success(1));
        assert_eq!(half(half(half(sample(true)))), Outcome::Failure("odd"));
    }

    #[test]
    fn curried_failure_channel() {
        let shout = map_failure(|e: &str| e.to_uppercase());
        assert_eq!(shout(sample(false)), Outcome::Failure("BROKEN".to_string()));
        assert_eq!(shout(sample(true)), Outcome::Success(4));

        let recover = flat_map_failure(|e: &str| Outcome::<i32, usize>::failure(e.len()));
        assert_eq!(recover(sample(false)), Outcome::Failure(6));
        assert_eq!(recover(sample(true)), Outcome::Success(4));
    }

    #[test]
    fn curried_pipeline_left_to_right() {
        let steps = (
            map_failure(|e: &str| format!("div error: {e}")),
            map(|x: i32| x * 2),
            map(|x: i32| x + 234),
            map(|x: i32| x.to_string()),
            map(|s: String| s.chars().rev().collect::<String>()),
        );
        let start: Outcome<i32, &str> = Outcome::success(500);
        let result = (steps.4)((steps.3)((steps.2)((steps.1)((steps.0)(start)))));
        assert_eq!(result, Outcome::Success("4321".to_string()));
    }

    #[test]
    fn curried_match_reuses_default() {
        let describe = match_with(Matcher::with_default(0).on_success(|v: i32| v + 1));
        assert_eq!(describe(sample(true)), 5);
        assert_eq!(describe(sample(false)), 0);
        assert_eq!(describe(sample(false)), 0);
    }
}
