//! Async combine: the same algebra as [`crate::combine`] over pending inputs.
//!
//! Inputs are polled concurrently on the caller's task and every one runs to
//! completion. The resolved outcomes are then folded by the synchronous
//! combine, so the surfaced failure is the first by position regardless of
//! resolution order.

use std::collections::BTreeMap;
use std::future::{Future, IntoFuture};

use futures::future::{join_all, BoxFuture, FutureExt};

use crate::combine::{Combine, Spread};
use crate::outcome::Outcome;

/// Combine a fixed-size group of async outcomes that share a failure type.
///
/// Implemented for tuples of 1 to 12 elements, each either a plain outcome or
/// a future resolving to one.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome::CombineAsync;
/// use twotrack::Outcome;
///
/// # tokio_test::block_on(async {
/// let combined = (
///     async { Outcome::<u8, String>::success(1) },
///     Outcome::<bool, String>::success(true),
/// )
///     .combine_async()
///     .await;
/// assert_eq!(combined, Outcome::Success((1, true)));
/// # });
/// ```
pub trait CombineAsync {
    /// Tuple of success payloads, one per slot.
    type Successes;
    /// Shared failure payload.
    type Failure;

    /// Await every slot concurrently, then fold in slot order.
    fn combine_async(
        self,
    ) -> impl Future<Output = Outcome<Self::Successes, Self::Failure>> + Send;
}

macro_rules! impl_combine_async {
    ($($idx:tt => $R:ident, $S:ident),+) => {
        impl<F, $($R, $S),+> CombineAsync for ($($R,)+)
        where
            F: Send,
            $(
                $R: IntoFuture<Output = Outcome<$S, F>>,
                <$R as IntoFuture>::IntoFuture: Send,
                $S: Send,
            )+
        {
            type Successes = ($($S,)+);
            type Failure = F;

            fn combine_async(self) -> impl Future<Output = Outcome<Self::Successes, F>> + Send {
                let pending = ($(self.$idx.into_future(),)+);
                async move {
                    let resolved = futures::join!($(pending.$idx),+);
                    resolved.combine()
                }
            }
        }
    };
}

impl_combine_async!(0 => R1, S1);
impl_combine_async!(0 => R1, S1, 1 => R2, S2);
impl_combine_async!(0 => R1, S1, 1 => R2, S2, 2 => R3, S3);
impl_combine_async!(0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4);
impl_combine_async!(0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6
);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6,
    6 => R7, S7
);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6,
    6 => R7, S7, 7 => R8, S8
);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6,
    6 => R7, S7, 7 => R8, S8, 8 => R9, S9
);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6,
    6 => R7, S7, 7 => R8, S8, 8 => R9, S9, 9 => R10, S10
);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6,
    6 => R7, S7, 7 => R8, S8, 8 => R9, S9, 9 => R10, S10, 10 => R11, S11
);
impl_combine_async!(
    0 => R1, S1, 1 => R2, S2, 2 => R3, S3, 3 => R4, S4, 4 => R5, S5, 5 => R6, S6,
    6 => R7, S7, 7 => R8, S8, 8 => R9, S9, 9 => R10, S10, 10 => R11, S11, 11 => R12, S12
);

/// Combine a tuple of async outcomes into a pending outcome of a tuple.
pub fn combine<T>(outcomes: T) -> impl Future<Output = Outcome<T::Successes, T::Failure>> + Send
where
    T: CombineAsync,
{
    outcomes.combine_async()
}

/// Combine a tuple of async outcomes and hand the successes to `combiner` as
/// positional arguments.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome;
/// use twotrack::Outcome;
///
/// # tokio_test::block_on(async {
/// let area = async_outcome::combine_with(
///     |w: u32, h: u32| w * h,
///     (
///         async { Outcome::<u32, String>::success(3) },
///         async { Outcome::<u32, String>::success(4) },
///     ),
/// )
/// .await;
/// assert_eq!(area, Outcome::Success(12));
/// # });
/// ```
pub fn combine_with<T, G>(
    combiner: G,
    outcomes: T,
) -> impl Future<Output = Outcome<G::Output, T::Failure>>
where
    T: CombineAsync,
    G: Spread<T::Successes>,
{
    let pending = outcomes.combine_async();
    async move {
        pending
            .await
            .map(|successes| combiner.spread(successes))
    }
}

/// Combine any number of async outcomes with the same success type.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome;
/// use twotrack::Outcome;
///
/// async fn square(n: i32) -> Outcome<i32, String> {
///     Outcome::success(n * n)
/// }
///
/// # tokio_test::block_on(async {
/// let squares = async_outcome::combine_all((1..=3).map(square)).await;
/// assert_eq!(squares, Outcome::Success(vec![1, 4, 9]));
/// # });
/// ```
pub fn combine_all<S, F, I, R>(outcomes: I) -> impl Future<Output = Outcome<Vec<S>, F>>
where
    I: IntoIterator<Item = R>,
    R: IntoFuture<Output = Outcome<S, F>>,
{
    let pending = join_all(outcomes.into_iter().map(IntoFuture::into_future));
    async move { crate::combine::combine_all(pending.await) }
}

/// Apply `f` to every element and combine the produced async outcomes.
///
/// `f` is called for every element before anything is awaited.
pub fn traverse<T, S, F, I, G, R>(iter: I, f: G) -> impl Future<Output = Outcome<Vec<S>, F>>
where
    I: IntoIterator<Item = T>,
    G: FnMut(T) -> R,
    R: IntoFuture<Output = Outcome<S, F>>,
{
    let produced: Vec<R> = iter.into_iter().map(f).collect();
    combine_all(produced)
}

/// Combine a named map of async outcomes into a pending outcome of a map.
///
/// The fold runs in key order once every entry has resolved.
pub fn combine_map<K, S, F, R>(
    outcomes: BTreeMap<K, R>,
) -> impl Future<Output = Outcome<BTreeMap<K, S>, F>>
where
    K: Ord,
    R: IntoFuture<Output = Outcome<S, F>>,
{
    let (keys, pending): (Vec<K>, Vec<_>) = outcomes
        .into_iter()
        .map(|(key, outcome)| (key, outcome.into_future()))
        .unzip();
    let joined = join_all(pending);

    async move {
        let resolved = joined.await;
        crate::combine::combine_map(keys.into_iter().zip(resolved).collect())
    }
}

/// A tuple of one-argument functions producing async outcomes.
pub trait CombineFnsAsync<Args> {
    /// Tuple of the values the functions return.
    type Pending;

    /// Call every function with its argument, in slot order.
    fn start_with(&self, args: Args) -> Self::Pending;
}

/// A tuple of zero-argument functions producing async outcomes.
pub trait CombineThunksAsync {
    /// Tuple of the values the functions return.
    type Pending;

    /// Call every function, in slot order.
    fn start_all(&self) -> Self::Pending;
}

macro_rules! impl_combine_fns_async {
    ($($idx:tt => $G:ident, $A:ident, $R:ident),+) => {
        impl<$($G, $A, $R),+> CombineFnsAsync<($($A,)+)> for ($($G,)+)
        where
            $($G: Fn($A) -> $R,)+
        {
            type Pending = ($($R,)+);

            fn start_with(&self, args: ($($A,)+)) -> Self::Pending {
                ($((self.$idx)(args.$idx),)+)
            }
        }

        impl<$($G, $R),+> CombineThunksAsync for ($($G,)+)
        where
            $($G: Fn() -> $R,)+
        {
            type Pending = ($($R,)+);

            fn start_all(&self) -> Self::Pending {
                ($((self.$idx)(),)+)
            }
        }
    };
}

impl_combine_fns_async!(0 => G1, A1, R1);
impl_combine_fns_async!(0 => G1, A1, R1, 1 => G2, A2, R2);
impl_combine_fns_async!(0 => G1, A1, R1, 1 => G2, A2, R2, 2 => G3, A3, R3);
impl_combine_fns_async!(0 => G1, A1, R1, 1 => G2, A2, R2, 2 => G3, A3, R3, 3 => G4, A4, R4);
impl_combine_fns_async!(
    0 => G1, A1, R1, 1 => G2, A2, R2, 2 => G3, A3, R3, 3 => G4, A4, R4, 4 => G5, A5, R5
);
impl_combine_fns_async!(
    0 => G1, A1, R1, 1 => G2, A2, R2, 2 => G3, A3, R3, 3 => G4, A4, R4, 4 => G5, A5, R5,
    5 => G6, A6, R6
);
impl_combine_fns_async!(
    0 => G1, A1, R1, 1 => G2, A2, R2, 2 => G3, A3, R3, 3 => G4, A4, R4, 4 => G5, A5, R5,
    5 => G6, A6, R6, 6 => G7, A7, R7
);
impl_combine_fns_async!(
    0 => G1, A1, R1, 1 => G2, A2, R2, 2 => G3, A3, R3, 3 => G4, A4, R4, 4 => G5, A5, R5,
    5 => G6, A6, R6, 6 => G7, A7, R7, 7 => G8, A8, R8
);

/// Outcome produced by combining the pending values of `T`.
type Combined<T> = Outcome<<T as CombineAsync>::Successes, <T as CombineAsync>::Failure>;

/// Wrap a tuple of one-argument async functions into one function taking a
/// tuple of arguments.
///
/// Every function is called synchronously when the wrapper is called; the
/// returned future then awaits and combines their results.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome;
/// use twotrack::Outcome;
///
/// async fn user(id: u32) -> Outcome<String, String> {
///     Outcome::success(format!("user-{id}"))
/// }
///
/// async fn quota(id: u32) -> Outcome<u64, String> {
///     Outcome::success(u64::from(id) * 100)
/// }
///
/// # tokio_test::block_on(async {
/// let load = async_outcome::combine_fns((user, quota));
/// assert_eq!(load((7, 7)).await, Outcome::Success(("user-7".to_string(), 700)));
/// # });
/// ```
pub fn combine_fns<T, Args>(
    functions: T,
) -> impl Fn(Args) -> BoxFuture<'static, Combined<T::Pending>>
where
    T: CombineFnsAsync<Args>,
    T::Pending: CombineAsync + 'static,
{
    move |args| functions.start_with(args).combine_async().boxed()
}

/// Wrap a tuple of zero-argument async functions into one zero-argument
/// function.
pub fn combine_thunks<T>(functions: T) -> impl Fn() -> BoxFuture<'static, Combined<T::Pending>>
where
    T: CombineThunksAsync,
    T::Pending: CombineAsync + 'static,
{
    move || functions.start_all().combine_async().boxed()
}

/// Wrap a named map of one-argument async functions into one function taking
/// a map of arguments.
///
/// Missing arguments default to `A::default()`, as in
/// [`crate::combine::combine_fn_map`].
pub fn combine_fn_map<K, A, S, F, G, R>(
    functions: BTreeMap<K, G>,
) -> impl Fn(BTreeMap<K, A>) -> BoxFuture<'static, Outcome<BTreeMap<K, S>, F>>
where
    K: Ord + Clone + Send + 'static,
    A: Default,
    G: Fn(A) -> R,
    R: IntoFuture<Output = Outcome<S, F>>,
    R::IntoFuture: Send + 'static,
    S: Send + 'static,
    F: Send + 'static,
{
    move |mut args| {
        let pending: BTreeMap<K, R::IntoFuture> = functions
            .iter()
            .map(|(key, function)| {
                let arg = args.remove(key).unwrap_or_default();
                (key.clone(), function(arg).into_future())
            })
            .collect();
        combine_map(pending).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::oneshot;

    async fn after<S>(ms: u64, outcome: Outcome<S, &'static str>) -> Outcome<S, &'static str> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        outcome
    }

    #[tokio::test]
    async fn tuple_accepts_plain_and_pending_slots() {
        let combined = combine((
            Outcome::<i32, &str>::success(1),
            after(5, Outcome::success("two")),
            async { Outcome::<f64, &str>::success(3.0) },
        ))
        .await;
        assert_eq!(combined, Outcome::Success((1, "two", 3.0)));
    }

    #[tokio::test]
    async fn first_failure_by_position_not_by_resolution() {
        let combined = combine((
            after::<i32>(30, Outcome::failure("slow but first")),
            after::<i32>(1, Outcome::failure("fast but second")),
        ))
        .await;
        assert_eq!(combined, Outcome::Failure("slow but first"));
    }

    #[tokio::test]
    async fn inputs_are_polled_concurrently() {
        let (tx, rx) = oneshot::channel::<i32>();
        let waits = async move {
            match rx.await {
                Ok(n) => Outcome::<i32, &str>::success(n),
                Err(_) => Outcome::failure("sender dropped"),
            }
        };
        let sends = async move {
            let _ = tx.send(5);
            Outcome::<i32, &str>::success(1)
        };
        assert_eq!(combine((waits, sends)).await, Outcome::Success((5, 1)));
    }

    #[tokio::test]
    async fn every_input_runs_to_completion() {
        let finished = Arc::new(AtomicUsize::new(0));
        let tracked = |ms: u64, outcome: Outcome<i32, &'static str>| {
            let finished = Arc::clone(&finished);
            async move {
                tokio::time::sleep(Duration::from_millis(ms)).await;
                finished.fetch_add(1, Ordering::SeqCst);
                outcome
            }
        };

        let combined = combine_all(vec![
            tracked(1, Outcome::failure("early")),
            tracked(10, Outcome::success(2)),
            tracked(20, Outcome::success(3)),
        ])
        .await;

        assert_eq!(combined, Outcome::Failure("early"));
        assert_eq!(finished.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn combine_with_spreads_successes() {
        let sum = combine_with(
            |a: i32, b: i32, c: i32| a + b + c,
            (after(3, Outcome::success(1)), Outcome::success(2), after(1, Outcome::success(3))),
        )
        .await;
        assert_eq!(sum, Outcome::Success(6));
    }

    #[tokio::test]
    async fn combine_all_keeps_input_order() {
        let combined = combine_all(vec![
            after(20, Outcome::success(1)),
            after(1, Outcome::success(2)),
            after(10, Outcome::success(3)),
        ])
        .await;
        assert_eq!(combined, Outcome::Success(vec![1, 2, 3]));

        let empty: Vec<Outcome<i32, ()>> = Vec::new();
        assert_eq!(combine_all(empty).await, Outcome::Success(vec![]));
    }

    #[tokio::test]
    async fn traverse_maps_then_awaits() {
        let result = traverse(vec![3u64, 1, 2], |ms| after(ms, Outcome::success(ms * 10))).await;
        assert_eq!(result, Outcome::Success(vec![30, 10, 20]));
    }

    #[tokio::test]
    async fn combine_map_folds_in_key_order() {
        let mut outcomes = BTreeMap::new();
        outcomes.insert("b", after::<i32>(1, Outcome::failure("b failed")));
        outcomes.insert("a", after::<i32>(20, Outcome::failure("a failed")));
        assert_eq!(combine_map(outcomes).await, Outcome::Failure("a failed"));

        let mut fine = BTreeMap::new();
        fine.insert("x", Outcome::<i32, ()>::success(1));
        fine.insert("y", Outcome::<i32, ()>::success(2));
        let expected: BTreeMap<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(combine_map(fine).await, Outcome::Success(expected));
    }

    #[tokio::test]
    async fn combine_fns_calls_with_each_argument() {
        let combined = combine_fns((
            |ms: u64| after(ms, Outcome::success(ms)),
            |s: &'static str| Outcome::<usize, &'static str>::success(s.len()),
        ));
        assert_eq!(combined((2, "abc")).await, Outcome::Success((2, 3)));
        assert_eq!(combined((1, "")).await, Outcome::Success((1, 0)));
    }

    #[tokio::test]
    async fn combine_thunks_calls_each_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                after(1, Outcome::success(1))
            }
        };
        let combined = combine_thunks((counted, || after::<i32>(2, Outcome::failure("no"))));

        assert_eq!(combined().await, Outcome::Failure("no"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn combine_fn_map_defaults_missing_arguments() {
        let mut functions: BTreeMap<&str, fn(u64) -> Outcome<u64, String>> = BTreeMap::new();
        functions.insert("id", Outcome::success);
        functions.insert("double", |n| Outcome::success(n * 2));
        let combined = combine_fn_map(functions);

        let args: BTreeMap<&str, u64> = [("double", 4)].into_iter().collect();
        let expected: BTreeMap<&str, u64> = [("double", 8), ("id", 0)].into_iter().collect();
        assert_eq!(combined(args).await, Outcome::Success(expected));
    }
}
