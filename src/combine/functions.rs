//! Combine for functions that produce outcomes.
//!
//! Each entry point returns a new function. Calling it invokes every wrapped
//! function with its own argument, in slot order, and then combines the
//! produced outcomes exactly as the value forms do.

use std::collections::BTreeMap;

use super::collection::combine_map;
use super::tuple::Combine;
use crate::outcome::Outcome;

/// A tuple of one-argument functions producing outcomes.
///
/// `Args` is the tuple of arguments, one per function.
pub trait CombineFns<Args> {
    /// Tuple of success payloads, one per function.
    type Successes;
    /// Shared failure payload.
    type Failure;

    /// Call every function with its argument and combine the outcomes.
    fn call_with(&self, args: Args) -> Outcome<Self::Successes, Self::Failure>;
}

/// A tuple of zero-argument functions producing outcomes.
pub trait CombineThunks {
    /// Tuple of success payloads, one per function.
    type Successes;
    /// Shared failure payload.
    type Failure;

    /// Call every function and combine the outcomes.
    fn call_all(&self) -> Outcome<Self::Successes, Self::Failure>;
}

macro_rules! impl_combine_fns {
    ($($idx:tt => $G:ident, $A:ident, $S:ident),+) => {
        impl<F, $($G, $A, $S),+> CombineFns<($($A,)+)> for ($($G,)+)
        where
            $($G: Fn($A) -> Outcome<$S, F>,)+
        {
            type Successes = ($($S,)+);
            type Failure = F;

            fn call_with(&self, args: ($($A,)+)) -> Outcome<Self::Successes, F> {
                let produced = ($((self.$idx)(args.$idx),)+);
                produced.combine()
            }
        }

        impl<F, $($G, $S),+> CombineThunks for ($($G,)+)
        where
            $($G: Fn() -> Outcome<$S, F>,)+
        {
            type Successes = ($($S,)+);
            type Failure = F;

            fn call_all(&self) -> Outcome<Self::Successes, F> {
                let produced = ($((self.$idx)(),)+);
                produced.combine()
            }
        }
    };
}

impl_combine_fns!(0 => G1, A1, S1);
impl_combine_fns!(0 => G1, A1, S1, 1 => G2, A2, S2);
impl_combine_fns!(0 => G1, A1, S1, 1 => G2, A2, S2, 2 => G3, A3, S3);
impl_combine_fns!(0 => G1, A1, S1, 1 => G2, A2, S2, 2 => G3, A3, S3, 3 => G4, A4, S4);
impl_combine_fns!(
    0 => G1, A1, S1, 1 => G2, A2, S2, 2 => G3, A3, S3, 3 => G4, A4, S4, 4 => G5, A5, S5
);
impl_combine_fns!(
    0 => G1, A1, S1, 1 => G2, A2, S2, 2 => G3, A3, S3, 3 => G4, A4, S4, 4 => G5, A5, S5,
    5 => G6, A6, S6
);
impl_combine_fns!(
    0 => G1, A1, S1, 1 => G2, A2, S2, 2 => G3, A3, S3, 3 => G4, A4, S4, 4 => G5, A5, S5,
    5 => G6, A6, S6, 6 => G7, A7, S7
);
impl_combine_fns!(
    0 => G1, A1, S1, 1 => G2, A2, S2, 2 => G3, A3, S3, 3 => G4, A4, S4, 4 => G5, A5, S5,
    5 => G6, A6, S6, 6 => G7, A7, S7, 7 => G8, A8, S8
);

/// Wrap a tuple of one-argument functions into one function taking a tuple of
/// arguments.
///
/// # Example
///
/// ```rust
/// use twotrack::combine::combine_fns;
/// use twotrack::Outcome;
///
/// let parse_pair = combine_fns((
///     |s: &str| Outcome::<i32, String>::from(s.parse::<i32>().map_err(|e| e.to_string())),
///     |s: &str| Outcome::<bool, String>::from(s.parse::<bool>().map_err(|e| e.to_string())),
/// ));
///
/// assert_eq!(parse_pair(("12", "true")), Outcome::Success((12, true)));
/// assert!(parse_pair(("x", "true")).is_failure());
/// ```
pub fn combine_fns<T, Args>(functions: T) -> impl Fn(Args) -> Outcome<T::Successes, T::Failure>
where
    T: CombineFns<Args>,
{
    move |args| functions.call_with(args)
}

/// Wrap a tuple of zero-argument functions into one zero-argument function.
///
/// # Example
///
/// ```rust
/// use twotrack::combine::combine_thunks;
/// use twotrack::Outcome;
///
/// let load = combine_thunks((
///     || Outcome::<_, String>::success("config"),
///     || Outcome::<_, String>::success(8080),
/// ));
/// assert_eq!(load(), Outcome::Success(("config", 8080)));
/// ```
pub fn combine_thunks<T>(functions: T) -> impl Fn() -> Outcome<T::Successes, T::Failure>
where
    T: CombineThunks,
{
    move || functions.call_all()
}

/// Wrap a named map of one-argument functions into one function taking a map
/// of arguments.
///
/// Every function is called with the argument stored under its key. A key
/// without an argument is called with `A::default()`. Arguments under keys
/// with no function are ignored.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use twotrack::combine::combine_fn_map;
/// use twotrack::Outcome;
///
/// fn positive(n: i32) -> Outcome<i32, String> {
///     if n > 0 {
///         Outcome::success(n)
///     } else {
///         Outcome::failure(format!("{n} is not positive"))
///     }
/// }
///
/// let mut checks: BTreeMap<&str, fn(i32) -> Outcome<i32, String>> = BTreeMap::new();
/// checks.insert("width", positive);
/// checks.insert("height", positive);
/// let validate = combine_fn_map(checks);
///
/// let args: BTreeMap<&str, i32> = [("width", 3), ("height", 4)].into_iter().collect();
/// assert!(validate(args).is_success());
///
/// let missing: BTreeMap<&str, i32> = [("width", 3)].into_iter().collect();
/// assert_eq!(validate(missing), Outcome::Failure("0 is not positive".to_string()));
/// ```
pub fn combine_fn_map<K, A, S, F, G>(
    functions: BTreeMap<K, G>,
) -> impl Fn(BTreeMap<K, A>) -> Outcome<BTreeMap<K, S>, F>
where
    K: Ord + Clone,
    A: Default,
    G: Fn(A) -> Outcome<S, F>,
{
    move |mut args| {
        let produced: BTreeMap<K, Outcome<S, F>> = functions
            .iter()
            .map(|(key, function)| {
                let arg = args.remove(key).unwrap_or_default();
                (key.clone(), function(arg))
            })
            .collect();
        combine_map(produced)
    }
}
