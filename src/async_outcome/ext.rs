//! Method chaining on futures that resolve to outcomes.

use std::future::{Future, IntoFuture};

use super::ops;
use crate::matcher::Matcher;
use crate::outcome::Outcome;

/// Combinators for any `Future<Output = Outcome<S, F>>`.
///
/// Every method is lazy and returns a new future; nothing runs until the
/// chain is awaited. Bounds follow the crate-wide convention that pending
/// outcomes are `Send`, so chains can be spawned onto multi-threaded
/// runtimes.
///
/// # Example
///
/// ```rust
/// use twotrack::async_outcome::OutcomeFutureExt;
/// use twotrack::Outcome;
///
/// async fn read_config() -> Outcome<String, std::io::ErrorKind> {
///     Outcome::failure(std::io::ErrorKind::NotFound)
/// }
///
/// # tokio_test::block_on(async {
/// let port = read_config()
///     .flat_map_success(|text| async move {
///         Outcome::from(text.trim().parse::<u16>().map_err(|_| std::io::ErrorKind::InvalidData))
///     })
///     .flat_map_failure(|kind| async move {
///         if kind == std::io::ErrorKind::NotFound {
///             Outcome::success(8080)
///         } else {
///             Outcome::failure(kind)
///         }
///     })
///     .await;
///
/// assert_eq!(port, Outcome::Success(8080));
/// # });
/// ```
pub trait OutcomeFutureExt<S, F>: Future<Output = Outcome<S, F>> + Send + Sized {
    /// Map the success payload.
    fn map_success<S2, T>(self, transform: T) -> impl Future<Output = Outcome<S2, F>> + Send
    where
        S: Send,
        F: Send,
        S2: Send,
        T: FnOnce(S) -> S2 + Send,
    {
        ops::map(transform, self)
    }

    /// Map the success payload with an asynchronous transform.
    fn map_success_async<S2, T, P>(
        self,
        transform: T,
    ) -> impl Future<Output = Outcome<S2, F>> + Send
    where
        S: Send,
        F: Send,
        S2: Send,
        T: FnOnce(S) -> P + Send,
        P: IntoFuture<Output = S2> + Send,
        P::IntoFuture: Send,
    {
        ops::map_async(transform, self)
    }

    /// Chain a transform producing a plain or pending outcome.
    fn flat_map_success<S2, T, N>(self, transform: T) -> impl Future<Output = Outcome<S2, F>> + Send
    where
        S: Send,
        F: Send,
        S2: Send,
        T: FnOnce(S) -> N + Send,
        N: IntoFuture<Output = Outcome<S2, F>> + Send,
        N::IntoFuture: Send,
    {
        ops::flat_map(transform, self)
    }

    /// Map the failure payload.
    fn map_failure<F2, T>(self, transform: T) -> impl Future<Output = Outcome<S, F2>> + Send
    where
        S: Send,
        F: Send,
        F2: Send,
        T: FnOnce(F) -> F2 + Send,
    {
        ops::map_failure(transform, self)
    }

    /// Map the failure payload with an asynchronous transform.
    fn map_failure_async<F2, T, P>(
        self,
        transform: T,
    ) -> impl Future<Output = Outcome<S, F2>> + Send
    where
        S: Send,
        F: Send,
        F2: Send,
        T: FnOnce(F) -> P + Send,
        P: IntoFuture<Output = F2> + Send,
        P::IntoFuture: Send,
    {
        ops::map_failure_async(transform, self)
    }

    /// Chain a recovery producing a plain or pending outcome.
    fn flat_map_failure<F2, T, N>(self, transform: T) -> impl Future<Output = Outcome<S, F2>> + Send
    where
        S: Send,
        F: Send,
        F2: Send,
        T: FnOnce(F) -> N + Send,
        N: IntoFuture<Output = Outcome<S, F2>> + Send,
        N::IntoFuture: Send,
    {
        ops::flat_map_failure(transform, self)
    }

    /// Extract a value through a [`Matcher`].
    fn match_with<M, OnSuccess, OnFailure>(
        self,
        matcher: Matcher<S, F, M, OnSuccess, OnFailure>,
    ) -> impl Future<Output = M> + Send
    where
        M: Send,
        OnSuccess: FnOnce(S) -> M + Send,
        OnFailure: FnOnce(F) -> M + Send,
    {
        ops::match_with(matcher, self)
    }

    /// Collapse both channels into one value.
    fn fold<T, OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> impl Future<Output = T> + Send
    where
        OnSuccess: FnOnce(S) -> T + Send,
        OnFailure: FnOnce(F) -> T + Send,
    {
        ops::fold(on_success, on_failure, self)
    }
}

impl<S, F, Fut> OutcomeFutureExt<S, F> for Fut where Fut: Future<Output = Outcome<S, F>> + Send {}
