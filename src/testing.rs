//! Testing utilities for code built on outcomes.
//!
//! Assertion macros that print the unexpected payload on failure, and
//! (behind the `proptest` feature) an [`Arbitrary`](proptest::arbitrary::Arbitrary)
//! implementation plus a strategy constructor for property-based tests.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::{assert_failure, assert_success, assert_success_eq, Outcome};
//!
//! let parsed = Outcome::<i32, String>::success(42);
//! assert_success!(parsed.clone());
//! assert_success_eq!(parsed, 42);
//!
//! let rejected = Outcome::<i32, String>::failure("negative".to_string());
//! assert_failure!(rejected);
//! ```

/// Assert that an outcome is on the success channel.
///
/// Evaluates to the success payload, so it can be used to unwrap in tests.
///
/// # Example
///
/// ```rust
/// use twotrack::{assert_success, Outcome};
///
/// let value = assert_success!(Outcome::<_, String>::success(42));
/// assert_eq!(value, 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(failure) => {
                panic!("Expected Success, got Failure: {:?}", failure);
            }
        }
    };
}

/// Assert that an outcome is on the failure channel.
///
/// Evaluates to the failure payload.
///
/// # Example
///
/// ```rust
/// use twotrack::{assert_failure, Outcome};
///
/// let error = assert_failure!(Outcome::<i32, _>::failure("nope"));
/// assert_eq!(error, "nope");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(failure) => failure,
            $crate::Outcome::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

/// Assert that an outcome succeeded with a specific payload.
///
/// # Example
///
/// ```rust
/// use twotrack::{assert_success_eq, Outcome};
///
/// assert_success_eq!(Outcome::<_, ()>::success("ready"), "ready");
/// ```
#[macro_export]
macro_rules! assert_success_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Outcome::Failure(failure) => {
                panic!(
                    "Expected Success({:?}), got Failure: {:?}",
                    $expected, failure
                );
            }
        }
    };
}

/// Assert that an outcome failed with a specific payload.
///
/// # Example
///
/// ```rust
/// use twotrack::{assert_failure_eq, Outcome};
///
/// assert_failure_eq!(Outcome::<i32, _>::failure("division by zero"), "division by zero");
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(failure) => {
                assert_eq!(failure, $expected);
            }
            $crate::Outcome::Success(value) => {
                panic!(
                    "Expected Failure({:?}), got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::outcome::Outcome;

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for Outcome<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((success, failure): Self::Parameters) -> Self::Strategy {
        outcome_strategy(any_with::<S>(success), any_with::<F>(failure)).boxed()
    }
}

/// Strategy producing outcomes from a success strategy and a failure strategy.
///
/// Both channels are generated with equal weight.
///
/// # Example
///
/// ```rust
/// use proptest::prelude::*;
/// use twotrack::testing::outcome_strategy;
///
/// proptest! {
///     #[test]
///     fn small_successes(o in outcome_strategy(0..10u8, "[a-z]{1,4}")) {
///         if let Some(n) = o.success_value() {
///             prop_assert!(n < 10);
///         }
///     }
/// }
/// ```
#[cfg(feature = "proptest")]
pub fn outcome_strategy<SS, FS>(
    success: SS,
    failure: FS,
) -> impl Strategy<Value = Outcome<SS::Value, FS::Value>>
where
    SS: Strategy,
    FS: Strategy,
    SS::Value: std::fmt::Debug,
    FS::Value: std::fmt::Debug,
{
    prop_oneof![
        success.prop_map(Outcome::Success),
        failure.prop_map(Outcome::Failure),
    ]
}

#[cfg(test)]
mod tests {
    use crate::Outcome;

    #[test]
    fn assert_success_yields_payload() {
        let value = assert_success!(Outcome::<_, String>::success(vec![1, 2]));
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn assert_failure_yields_payload() {
        let error = assert_failure!(Outcome::<i32, _>::failure("bad input"));
        assert_eq!(error, "bad input");
    }

    #[test]
    fn assert_eq_variants() {
        assert_success_eq!(Outcome::<_, ()>::success(3), 3);
        assert_failure_eq!(Outcome::<(), _>::failure('x'), 'x');
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let _ = assert_success!(Outcome::<i32, _>::failure("error"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let _ = assert_failure!(Outcome::<_, String>::success(42));
    }

    #[test]
    #[should_panic(expected = "Expected Success(1), got Failure")]
    fn assert_success_eq_panics_on_failure() {
        assert_success_eq!(Outcome::<i32, _>::failure("error"), 1);
    }

    #[test]
    #[should_panic(expected = "Expected Failure(\"late\"), got Success")]
    fn assert_failure_eq_panics_on_success() {
        assert_failure_eq!(Outcome::<_, &str>::success(0), "late");
    }

    #[test]
    #[should_panic]
    fn assert_success_eq_panics_on_mismatch() {
        assert_success_eq!(Outcome::<_, ()>::success(1), 2);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use crate::testing::outcome_strategy;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_outcome_is_exactly_one_channel(o in any::<Outcome<i32, String>>()) {
                prop_assert_ne!(o.is_success(), o.is_failure());
            }

            #[test]
            fn arbitrary_nested_payloads(o in any::<Outcome<Vec<u8>, Option<String>>>()) {
                let flipped = o.clone().swap();
                prop_assert_eq!(flipped.swap(), o);
            }

            #[test]
            fn strategy_respects_component_strategies(
                o in outcome_strategy(100..200i32, Just("fixed"))
            ) {
                match o {
                    Outcome::Success(n) => prop_assert!((100..200).contains(&n)),
                    Outcome::Failure(e) => prop_assert_eq!(e, "fixed"),
                }
            }
        }

        #[test]
        fn arbitrary_reaches_both_channels() {
            use proptest::strategy::ValueTree;
            use proptest::test_runner::TestRunner;

            let mut runner = TestRunner::deterministic();
            let strategy = any::<Outcome<u8, char>>();
            let (mut successes, mut failures) = (0, 0);
            for _ in 0..256 {
                match strategy.new_tree(&mut runner).unwrap().current() {
                    Outcome::Success(_) => successes += 1,
                    Outcome::Failure(_) => failures += 1,
                }
            }
            assert!(successes > 0 && failures > 0);
        }
    }
}
