//! Tuple combine and positional combiners.

use super::short_circuit;
use crate::outcome::Outcome;

/// Combine a fixed-size group of outcomes that share a failure type.
///
/// Implemented for tuples of 1 to 12 outcomes. Success types may differ per
/// slot.
///
/// # Example
///
/// ```rust
/// use twotrack::combine::Combine;
/// use twotrack::Outcome;
///
/// let combined = (
///     Outcome::<u8, String>::success(1),
///     Outcome::<bool, String>::success(true),
/// )
///     .combine();
/// assert_eq!(combined, Outcome::Success((1, true)));
/// ```
pub trait Combine {
    /// Tuple of success payloads, one per slot.
    type Successes;
    /// Shared failure payload.
    type Failure;

    /// Fold the group left to right, surfacing the first failure by position.
    fn combine(self) -> Outcome<Self::Successes, Self::Failure>;
}

/// A combiner callable with a tuple's elements as positional arguments.
///
/// Implemented for every `FnOnce(A1, .., An) -> R` with `n` from 1 to 12, so
/// a plain closure can receive the successes of [`combine_with`] spread out.
pub trait Spread<Args> {
    /// Value produced by the combiner.
    type Output;

    /// Call the combiner with `args` spread into positional arguments.
    fn spread(self, args: Args) -> Self::Output;
}

macro_rules! impl_combine_tuple {
    ($($idx:tt => $S:ident),+) => {
        impl<F, $($S),+> Combine for ($(Outcome<$S, F>,)+) {
            type Successes = ($($S,)+);
            type Failure = F;

            fn combine(self) -> Outcome<Self::Successes, F> {
                let successes = ($(
                    match self.$idx {
                        Outcome::Success(value) => value,
                        Outcome::Failure(failure) => return short_circuit($idx, failure),
                    },
                )+);
                Outcome::Success(successes)
            }
        }

        impl<G, R, $($S),+> Spread<($($S,)+)> for G
        where
            G: FnOnce($($S),+) -> R,
        {
            type Output = R;

            #[allow(non_snake_case)]
            fn spread(self, ($($S,)+): ($($S,)+)) -> R {
                self($($S),+)
            }
        }
    };
}

// Generate implementations for tuples of size 1 through 12
impl_combine_tuple!(0 => S1);
impl_combine_tuple!(0 => S1, 1 => S2);
impl_combine_tuple!(0 => S1, 1 => S2, 2 => S3);
impl_combine_tuple!(0 => S1, 1 => S2, 2 => S3, 3 => S4);
impl_combine_tuple!(0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5);
impl_combine_tuple!(0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6);
impl_combine_tuple!(0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6, 6 => S7);
impl_combine_tuple!(0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6, 6 => S7, 7 => S8);
impl_combine_tuple!(
    0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6, 6 => S7, 7 => S8, 8 => S9
);
impl_combine_tuple!(
    0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6, 6 => S7, 7 => S8, 8 => S9,
    9 => S10
);
impl_combine_tuple!(
    0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6, 6 => S7, 7 => S8, 8 => S9,
    9 => S10, 10 => S11
);
impl_combine_tuple!(
    0 => S1, 1 => S2, 2 => S3, 3 => S4, 4 => S5, 5 => S6, 6 => S7, 7 => S8, 8 => S9,
    9 => S10, 10 => S11, 11 => S12
);

/// Combine a tuple of outcomes into an outcome of a tuple.
///
/// See the [module documentation](crate::combine) for the fold semantics.
#[inline]
pub fn combine<T>(outcomes: T) -> Outcome<T::Successes, T::Failure>
where
    T: Combine,
{
    outcomes.combine()
}

/// Combine a tuple of outcomes and hand the successes to `combiner` as
/// positional arguments.
///
/// The combiner runs only when every input succeeded; its return value
/// becomes the success payload.
///
/// # Example
///
/// ```rust
/// use twotrack::combine::combine_with;
/// use twotrack::Outcome;
///
/// let full_name = combine_with(
///     |first: &str, last: &str| format!("{first} {last}"),
///     (
///         Outcome::<_, String>::success("Ada"),
///         Outcome::<_, String>::success("Lovelace"),
///     ),
/// );
/// assert_eq!(full_name, Outcome::Success("Ada Lovelace".to_string()));
/// ```
#[inline]
pub fn combine_with<T, G>(combiner: G, outcomes: T) -> Outcome<G::Output, T::Failure>
where
    T: Combine,
    G: Spread<T::Successes>,
{
    outcomes.combine().map(|successes| combiner.spread(successes))
}
