//! Async operators, transform first.
//!
//! `map` is `flat_map` composed with `Outcome::Success`, and every
//! failure-channel operator is its success-channel twin applied between two
//! swaps.

use std::future::IntoFuture;

use crate::matcher::Matcher;
use crate::outcome::Outcome;

/// Await an outcome and exchange its channels.
async fn swapped<S, F, R>(outcome: R) -> Outcome<F, S>
where
    R: IntoFuture<Output = Outcome<S, F>>,
{
    outcome.await.swap()
}

/// Chain a transform producing a plain or pending outcome.
///
/// The transform runs only after `outcome` resolves to a success; its result
/// is awaited and returned without re-wrapping.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome;
/// use twotrack::Outcome;
///
/// async fn lookup(id: u32) -> Outcome<String, String> {
///     if id == 1 {
///         Outcome::success("root".to_string())
///     } else {
///         Outcome::failure(format!("no user {id}"))
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let found = async_outcome::flat_map(lookup, Outcome::<u32, String>::success(1)).await;
/// assert_eq!(found, Outcome::Success("root".to_string()));
/// # });
/// ```
pub async fn flat_map<S, F, S2, R, T, N>(transform: T, outcome: R) -> Outcome<S2, F>
where
    R: IntoFuture<Output = Outcome<S, F>>,
    T: FnOnce(S) -> N,
    N: IntoFuture<Output = Outcome<S2, F>>,
{
    match outcome.await {
        Outcome::Success(value) => transform(value).await,
        Outcome::Failure(failure) => Outcome::Failure(failure),
    }
}

/// Map the success payload once `outcome` resolves.
pub async fn map<S, F, S2, R, T>(transform: T, outcome: R) -> Outcome<S2, F>
where
    R: IntoFuture<Output = Outcome<S, F>>,
    T: FnOnce(S) -> S2,
{
    flat_map(|value| Outcome::Success(transform(value)), outcome).await
}

/// Map the success payload with an asynchronous transform.
///
/// The pending value returned by `transform` is awaited before being wrapped
/// as the new success. A failing `outcome` never calls `transform`.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome;
/// use twotrack::Outcome;
///
/// # tokio_test::block_on(async {
/// let doubled = async_outcome::map_async(
///     |x: i32| async move { x * 2 },
///     Outcome::<i32, ()>::success(21),
/// )
/// .await;
/// assert_eq!(doubled, Outcome::Success(42));
/// # });
/// ```
pub async fn map_async<S, F, S2, R, T, P>(transform: T, outcome: R) -> Outcome<S2, F>
where
    R: IntoFuture<Output = Outcome<S, F>>,
    T: FnOnce(S) -> P,
    P: IntoFuture<Output = S2>,
{
    flat_map(
        |value| {
            let pending = transform(value);
            async move { Outcome::Success(pending.await) }
        },
        outcome,
    )
    .await
}

/// Chain a recovery producing a plain or pending outcome from the failure.
pub async fn flat_map_failure<S, F, F2, R, T, N>(transform: T, outcome: R) -> Outcome<S, F2>
where
    R: IntoFuture<Output = Outcome<S, F>>,
    T: FnOnce(F) -> N,
    N: IntoFuture<Output = Outcome<S, F2>>,
{
    flat_map(|failure| swapped(transform(failure)), swapped(outcome))
        .await
        .swap()
}

/// Map the failure payload once `outcome` resolves.
pub async fn map_failure<S, F, F2, R, T>(transform: T, outcome: R) -> Outcome<S, F2>
where
    R: IntoFuture<Output = Outcome<S, F>>,
    T: FnOnce(F) -> F2,
{
    map(transform, swapped(outcome)).await.swap()
}

/// Map the failure payload with an asynchronous transform.
pub async fn map_failure_async<S, F, F2, R, T, P>(transform: T, outcome: R) -> Outcome<S, F2>
where
    R: IntoFuture<Output = Outcome<S, F>>,
    T: FnOnce(F) -> P,
    P: IntoFuture<Output = F2>,
{
    map_async(transform, swapped(outcome)).await.swap()
}

/// Extract a value through a [`Matcher`] once `outcome` resolves.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome;
/// use twotrack::{Matcher, Outcome};
///
/// # tokio_test::block_on(async {
/// let pending = async { Outcome::<i32, String>::failure("late".to_string()) };
/// let n = async_outcome::match_with(Matcher::with_default(0), pending).await;
/// assert_eq!(n, 0);
/// # });
/// ```
pub async fn match_with<S, F, M, R, OnSuccess, OnFailure>(
    matcher: Matcher<S, F, M, OnSuccess, OnFailure>,
    outcome: R,
) -> M
where
    R: IntoFuture<Output = Outcome<S, F>>,
    OnSuccess: FnOnce(S) -> M,
    OnFailure: FnOnce(F) -> M,
{
    matcher.run(outcome.await)
}

/// Collapse both channels into one value once `outcome` resolves.
pub async fn fold<S, F, T, R, OnSuccess, OnFailure>(
    on_success: OnSuccess,
    on_failure: OnFailure,
    outcome: R,
) -> T
where
    R: IntoFuture<Output = Outcome<S, F>>,
    OnSuccess: FnOnce(S) -> T,
    OnFailure: FnOnce(F) -> T,
{
    outcome.await.fold(on_success, on_failure)
}

/// Return whichever payload is present once `outcome` resolves.
pub async fn merge<T, R>(outcome: R) -> T
where
    R: IntoFuture<Output = Outcome<T, T>>,
{
    outcome.await.merge()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ok() -> Outcome<i32, String> {
        Outcome::success(1)
    }

    fn bad() -> Outcome<i32, String> {
        Outcome::failure("fail".to_string())
    }

    #[tokio::test]
    async fn map_accepts_plain_and_pending() {
        assert_eq!(
            map(|v| format!("ok {v}"), ok()).await,
            Outcome::Success("ok 1".to_string())
        );
        assert_eq!(
            map(|v| format!("ok {v}"), async { ok() }).await,
            Outcome::Success("ok 1".to_string())
        );
        assert_eq!(map(|v| v + 1, bad()).await, bad());
    }

    #[tokio::test]
    async fn map_async_never_runs_on_failure() {
        let calls = AtomicUsize::new(0);
        let result = map_async(
            |v: i32| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { v + 1 }
            },
            async { bad() },
        )
        .await;
        assert_eq!(result, bad());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn flat_map_accepts_plain_or_pending_transform_results() {
        let plain = flat_map(|v| Outcome::<i32, String>::success(v * 10), ok()).await;
        assert_eq!(plain, Outcome::Success(10));

        let pending = flat_map(|v| async move { Outcome::<i32, String>::success(v * 20) }, ok()).await;
        assert_eq!(pending, Outcome::Success(20));

        let failed = flat_map(|_| async { bad() }, ok()).await;
        assert_eq!(failed, bad());
    }

    #[tokio::test]
    async fn failure_channel_operators() {
        assert_eq!(
            map_failure(|e: String| format!("err {e}"), bad()).await,
            Outcome::Failure("err fail".to_string())
        );
        assert_eq!(map_failure(|e: String| e.len(), ok()).await, Outcome::Success(1));
        assert_eq!(
            map_failure_async(|e: String| async move { e.len() }, async { bad() }).await,
            Outcome::Failure(4)
        );
        assert_eq!(
            flat_map_failure(|_: String| async { Outcome::<i32, ()>::success(0) }, bad()).await,
            Outcome::Success(0)
        );
        assert_eq!(
            flat_map_failure(|_: String| Outcome::<i32, ()>::failure(()), ok()).await,
            Outcome::Success(1)
        );
    }

    #[tokio::test]
    async fn extraction() {
        let matcher = Matcher::new(|v: i32| v * 2, |e: String| e.len() as i32);
        assert_eq!(match_with(matcher, async { ok() }).await, 2);

        assert_eq!(fold(|v: i32| v, |e: String| e.len() as i32, bad()).await, 4);

        let same: Outcome<&str, &str> = Outcome::failure("either");
        assert_eq!(merge(async move { same }).await, "either");
    }
}
