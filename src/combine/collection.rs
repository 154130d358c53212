//! Combine for homogeneous collections and named maps.

use std::collections::BTreeMap;

use super::short_circuit;
use crate::outcome::Outcome;

/// Combine any number of outcomes with the same success type.
///
/// Returns `Success(vec)` holding every success in input order, or the first
/// failure by position. An empty input yields `Success(vec![])`.
///
/// # Example
///
/// ```rust
/// use twotrack::combine::combine_all;
/// use twotrack::Outcome;
///
/// let ok: Vec<Outcome<i32, &str>> = vec![Outcome::success(1), Outcome::success(2)];
/// assert_eq!(combine_all(ok), Outcome::Success(vec![1, 2]));
///
/// let mixed: Vec<Outcome<i32, &str>> = vec![
///     Outcome::success(1),
///     Outcome::failure("first"),
///     Outcome::failure("second"),
/// ];
/// assert_eq!(combine_all(mixed), Outcome::Failure("first"));
/// ```
pub fn combine_all<S, F, I>(outcomes: I) -> Outcome<Vec<S>, F>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    let outcomes = outcomes.into_iter();
    let mut successes = Vec::with_capacity(outcomes.size_hint().0);

    for (position, outcome) in outcomes.enumerate() {
        match outcome {
            Outcome::Success(value) => successes.push(value),
            Outcome::Failure(failure) => return short_circuit(position, failure),
        }
    }

    Outcome::Success(successes)
}

/// Apply `f` to every element and combine the produced outcomes.
///
/// All elements are mapped before the fold, matching [`combine_all`] over a
/// fully produced collection.
///
/// # Example
///
/// ```rust
/// use twotrack::combine::traverse;
/// use twotrack::Outcome;
///
/// fn parse(s: &str) -> Outcome<i32, String> {
///     s.parse::<i32>().map_err(|_| format!("not a number: {s}")).into()
/// }
///
/// assert_eq!(traverse(["1", "2"], parse), Outcome::Success(vec![1, 2]));
/// assert_eq!(
///     traverse(["1", "x", "y"], parse),
///     Outcome::Failure("not a number: x".to_string())
/// );
/// ```
pub fn traverse<T, S, F, I, G>(iter: I, f: G) -> Outcome<Vec<S>, F>
where
    I: IntoIterator<Item = T>,
    G: FnMut(T) -> Outcome<S, F>,
{
    let produced: Vec<_> = iter.into_iter().map(f).collect();
    combine_all(produced)
}

/// Combine a named map of outcomes into an outcome of a map with the same keys.
///
/// The fold runs in key order, so "first failure" is the failure under the
/// smallest key.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use twotrack::combine::combine_map;
/// use twotrack::Outcome;
///
/// let mut fields: BTreeMap<&str, Outcome<i32, String>> = BTreeMap::new();
/// fields.insert("width", Outcome::success(3));
/// fields.insert("height", Outcome::success(4));
///
/// let combined = combine_map(fields).success_value().unwrap();
/// assert_eq!(combined["width"], 3);
/// assert_eq!(combined["height"], 4);
/// ```
pub fn combine_map<K, S, F>(outcomes: BTreeMap<K, Outcome<S, F>>) -> Outcome<BTreeMap<K, S>, F>
where
    K: Ord,
{
    let mut successes = BTreeMap::new();

    for (position, (key, outcome)) in outcomes.into_iter().enumerate() {
        match outcome {
            Outcome::Success(value) => {
                successes.insert(key, value);
            }
            Outcome::Failure(failure) => return short_circuit(position, failure),
        }
    }

    Outcome::Success(successes)
}
