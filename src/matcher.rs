//! Matchers: handler sets for extracting a value from an outcome.
//!
//! A [`Matcher`] holds a success handler, a failure handler and/or a default
//! value. The constructors only build matchers that cover every reachable
//! channel, so extracting through a matcher never needs a runtime check:
//!
//! | Constructor | Success | Failure | Default |
//! |-------------|---------|---------|---------|
//! | [`Matcher::new`] | handler | handler | unused |
//! | [`Matcher::with_default`] | optional | optional | required |
//! | [`Matcher::success_only`] (failure is `Infallible`) | handler | unreachable | unused |
//! | [`Matcher::failure_only`] (success is `Infallible`) | unreachable | handler | unused |
//!
//! # Resolution Order
//!
//! 1. A success with a success handler runs the success handler.
//! 2. A failure with a failure handler runs the failure handler.
//! 3. Anything else returns the default.
//!
//! The default is permissive: it covers a missing handler for the actual
//! channel even when the other channel has one. A present handler always runs
//! for its channel and its return value is used as is.
//!
//! # Example
//!
//! ```rust
//! use twotrack::{Matcher, Outcome};
//!
//! let ok: Outcome<u32, String> = Outcome::success(3);
//! let bad: Outcome<u32, String> = Outcome::failure("timeout".to_string());
//!
//! let both = Matcher::new(|n: u32| n * 2, |e: String| e.len() as u32);
//! assert_eq!(ok.clone().match_with(both), 6);
//!
//! let partial = Matcher::with_default(0).on_success(|n: u32| n * 2);
//! assert_eq!(bad.match_with(partial), 0);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

use crate::outcome::Outcome;

enum Arms<OnSuccess, OnFailure, M> {
    Total {
        on_success: OnSuccess,
        on_failure: OnFailure,
    },
    Partial {
        on_success: Option<OnSuccess>,
        on_failure: Option<OnFailure>,
        default: M,
    },
}

/// Handlers and/or a default value consumed by `match_with`.
///
/// `S` and `F` are the channel types of the outcomes this matcher accepts and
/// `M` is the extracted type. The handler types default to plain function
/// pointers, which is what an absent handler is typed as.
///
/// Building a matcher places no bound on the handlers, so a closure keeps the
/// most general kind its body allows. [`run`](Matcher::run) asks for `FnOnce`
/// handlers and [`apply`](Matcher::apply) for `Fn` handlers.
pub struct Matcher<S, F, M, OnSuccess = fn(S) -> M, OnFailure = fn(F) -> M> {
    arms: Arms<OnSuccess, OnFailure, M>,
    _channels: PhantomData<fn(S, F)>,
}

impl<S, F, M, OnSuccess, OnFailure> Matcher<S, F, M, OnSuccess, OnFailure> {
    /// Build a matcher with a handler for each channel.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::{Matcher, Outcome};
    ///
    /// let o: Outcome<i32, &str> = Outcome::failure("bad");
    /// let n = o.match_with(Matcher::new(|v: i32| v, |e: &str| e.len() as i32));
    /// assert_eq!(n, 3);
    /// ```
    pub fn new(on_success: OnSuccess, on_failure: OnFailure) -> Self {
        Matcher {
            arms: Arms::Total {
                on_success,
                on_failure,
            },
            _channels: PhantomData,
        }
    }

    /// Set (or replace) the success handler.
    pub fn on_success<G>(self, handler: G) -> Matcher<S, F, M, G, OnFailure> {
        let arms = match self.arms {
            Arms::Total { on_failure, .. } => Arms::Total {
                on_success: handler,
                on_failure,
            },
            Arms::Partial {
                on_failure,
                default,
                ..
            } => Arms::Partial {
                on_success: Some(handler),
                on_failure,
                default,
            },
        };
        Matcher {
            arms,
            _channels: PhantomData,
        }
    }

    /// Set (or replace) the failure handler.
    pub fn on_failure<G>(self, handler: G) -> Matcher<S, F, M, OnSuccess, G> {
        let arms = match self.arms {
            Arms::Total { on_success, .. } => Arms::Total {
                on_success,
                on_failure: handler,
            },
            Arms::Partial {
                on_success,
                default,
                ..
            } => Arms::Partial {
                on_success,
                on_failure: Some(handler),
                default,
            },
        };
        Matcher {
            arms,
            _channels: PhantomData,
        }
    }

    /// Returns `true` if a success handler is present.
    pub fn handles_success(&self) -> bool {
        match &self.arms {
            Arms::Total { .. } => true,
            Arms::Partial { on_success, .. } => on_success.is_some(),
        }
    }

    /// Returns `true` if a failure handler is present.
    pub fn handles_failure(&self) -> bool {
        match &self.arms {
            Arms::Total { .. } => true,
            Arms::Partial { on_failure, .. } => on_failure.is_some(),
        }
    }

    /// Extract a value from `outcome`, consuming the matcher.
    pub fn run(self, outcome: Outcome<S, F>) -> M
    where
        OnSuccess: FnOnce(S) -> M,
        OnFailure: FnOnce(F) -> M,
    {
        match (self.arms, outcome) {
            (Arms::Total { on_success, .. }, Outcome::Success(value)) => on_success(value),
            (Arms::Total { on_failure, .. }, Outcome::Failure(error)) => on_failure(error),
            (
                Arms::Partial {
                    on_success: Some(handler),
                    ..
                },
                Outcome::Success(value),
            ) => handler(value),
            (
                Arms::Partial {
                    on_failure: Some(handler),
                    ..
                },
                Outcome::Failure(error),
            ) => handler(error),
            (Arms::Partial { default, .. }, _) => default,
        }
    }

    /// Extract a value from `outcome`, keeping the matcher for reuse.
    ///
    /// The default value is cloned when it is returned.
    pub fn apply(&self, outcome: Outcome<S, F>) -> M
    where
        OnSuccess: Fn(S) -> M,
        OnFailure: Fn(F) -> M,
        M: Clone,
    {
        match (&self.arms, outcome) {
            (Arms::Total { on_success, .. }, Outcome::Success(value)) => on_success(value),
            (Arms::Total { on_failure, .. }, Outcome::Failure(error)) => on_failure(error),
            (
                Arms::Partial {
                    on_success: Some(handler),
                    ..
                },
                Outcome::Success(value),
            ) => handler(value),
            (
                Arms::Partial {
                    on_failure: Some(handler),
                    ..
                },
                Outcome::Failure(error),
            ) => handler(error),
            (Arms::Partial { default, .. }, _) => default.clone(),
        }
    }
}

impl<S, F, M> Matcher<S, F, M> {
    /// Build a matcher that falls back to `default`.
    ///
    /// Add handlers with [`on_success`](Matcher::on_success) and
    /// [`on_failure`](Matcher::on_failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::{Matcher, Outcome};
    ///
    /// let o: Outcome<i32, &str> = Outcome::success(5);
    /// assert_eq!(o.match_with(Matcher::with_default(-1)), -1);
    /// ```
    pub fn with_default(default: M) -> Matcher<S, F, M> {
        Matcher {
            arms: Arms::Partial {
                on_success: None,
                on_failure: None,
                default,
            },
            _channels: PhantomData,
        }
    }
}

impl<S, M, OnSuccess> Matcher<S, Infallible, M, OnSuccess> {
    /// Build a matcher for outcomes that cannot fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::convert::Infallible;
    /// use twotrack::{Matcher, Outcome};
    ///
    /// let sure: Outcome<i32, Infallible> = Outcome::success(2);
    /// assert_eq!(sure.match_with(Matcher::success_only(|v: i32| v + 1)), 3);
    /// ```
    pub fn success_only(on_success: OnSuccess) -> Self {
        Matcher::new(on_success, unreachable_channel as fn(Infallible) -> M)
    }
}

impl<F, M, OnFailure> Matcher<Infallible, F, M, fn(Infallible) -> M, OnFailure> {
    /// Build a matcher for outcomes that cannot succeed.
    pub fn failure_only(on_failure: OnFailure) -> Self {
        Matcher::new(unreachable_channel as fn(Infallible) -> M, on_failure)
    }
}

fn unreachable_channel<M>(never: Infallible) -> M {
    match never {}
}

impl<S, F, M, OnSuccess, OnFailure> fmt::Debug for Matcher<S, F, M, OnSuccess, OnFailure>
where
    M: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arms {
            Arms::Total { .. } => f
                .debug_struct("Matcher")
                .field("on_success", &"<function>")
                .field("on_failure", &"<function>")
                .finish(),
            Arms::Partial {
                on_success,
                on_failure,
                default,
            } => f
                .debug_struct("Matcher")
                .field("on_success", &on_success.as_ref().map(|_| "<function>"))
                .field("on_failure", &on_failure.as_ref().map(|_| "<function>"))
                .field("default", default)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ok() -> Outcome<i32, String> {
        Outcome::success(7)
    }

    fn bad() -> Outcome<i32, String> {
        Outcome::failure("broken".to_string())
    }

    #[test]
    fn total_matcher_runs_the_channel_handler() {
        let m = || Matcher::new(|v: i32| v * 2, |e: String| e.len() as i32);
        assert_eq!(m().run(ok()), 14);
        assert_eq!(m().run(bad()), 6);
    }

    #[test]
    fn default_covers_missing_handlers() {
        let m = || Matcher::with_default(-1);
        assert_eq!(ok().match_with(m()), -1);
        assert_eq!(bad().match_with(m()), -1);
    }

    #[test]
    fn default_is_permissive_for_the_other_channel() {
        let success_only = Matcher::with_default(-1).on_success(|v: i32| v);
        assert_eq!(bad().match_with(success_only), -1);

        let failure_only = Matcher::with_default(-1).on_failure(|e: String| e.len() as i32);
        assert_eq!(ok().match_with(failure_only), -1);
    }

    #[test]
    fn present_handler_wins_over_default() {
        let m = Matcher::with_default(Some(0)).on_success(|_: i32| None::<i32>);
        assert_eq!(ok().match_with(m), None);
    }

    #[test]
    fn only_one_path_executes() {
        let success_calls = Cell::new(0);
        let failure_calls = Cell::new(0);
        let m = Matcher::new(
            |_: i32| success_calls.set(success_calls.get() + 1),
            |_: String| failure_calls.set(failure_calls.get() + 1),
        );
        m.apply(ok());
        m.apply(ok());
        m.apply(bad());
        assert_eq!(success_calls.get(), 2);
        assert_eq!(failure_calls.get(), 1);
    }

    #[test]
    fn replacing_a_handler() {
        let m = Matcher::new(|v: i32| v, |_: String| 0).on_success(|v: i32| v * 100);
        assert_eq!(m.run(ok()), 700);
    }

    #[test]
    fn handles_reports_coverage() {
        let m: Matcher<i32, String, i32> = Matcher::with_default(0);
        assert!(!m.handles_success());
        assert!(!m.handles_failure());
        let m = m.on_failure(|_: String| 1);
        assert!(!m.handles_success());
        assert!(m.handles_failure());
        let total = Matcher::<i32, String, i32, _, _>::new(|v: i32| v, |_: String| 0);
        assert!(total.handles_success() && total.handles_failure());
    }

    #[test]
    fn infallible_channels_need_one_handler() {
        let sure: Outcome<i32, Infallible> = Outcome::success(1);
        assert_eq!(sure.match_with(Matcher::success_only(|v: i32| v + 1)), 2);

        let doomed: Outcome<Infallible, &str> = Outcome::failure("no");
        assert_eq!(doomed.match_with(Matcher::failure_only(|e: &str| e.len())), 2);
    }

    #[test]
    fn debug_output_hides_functions() {
        let m: Matcher<i32, String, i32> = Matcher::with_default(3);
        let rendered = format!("{:?}", m.on_success(|v: i32| v));
        assert!(rendered.contains("default: 3"));
        assert!(rendered.contains("<function>"));
    }
}
