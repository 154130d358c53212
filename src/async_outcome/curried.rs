//! Curried async operators for point-free pipelines.
//!
//! Each function takes only the transform and returns a reusable function of
//! the async outcome. The returned futures are boxed so the curried functions
//! have a nameable return type, which requires `Send + 'static` inputs.
//!
//! # Example
//!
//! ```rust
//! use twotrack::async_outcome::curried;
//! use twotrack::Outcome;
//!
//! # tokio_test::block_on(async {
//! let add_one = curried::map(|x: i32| x + 1);
//! let describe = curried::map(|x: i32| format!("value {x}"));
//!
//! let result = describe(add_one(async { Outcome::<i32, String>::success(41) })).await;
//! assert_eq!(result, Outcome::Success("value 42".to_string()));
//! # });
//! ```

use std::future::IntoFuture;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use super::ops;
use crate::matcher::Matcher;
use crate::outcome::Outcome;

/// Curried [`ops::map`](super::map).
pub fn map<S, F, S2, R, T>(transform: T) -> impl Fn(R) -> BoxFuture<'static, Outcome<S2, F>>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    S2: Send + 'static,
    T: Fn(S) -> S2 + Send + Sync + 'static,
{
    let transform = Arc::new(transform);
    move |outcome| {
        let transform = Arc::clone(&transform);
        ops::map(move |value| transform(value), outcome).boxed()
    }
}

/// Curried [`ops::map_async`](super::map_async).
pub fn map_async<S, F, S2, R, T, P>(
    transform: T,
) -> impl Fn(R) -> BoxFuture<'static, Outcome<S2, F>>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    S2: Send + 'static,
    T: Fn(S) -> P + Send + Sync + 'static,
    P: IntoFuture<Output = S2> + Send + 'static,
    P::IntoFuture: Send,
{
    let transform = Arc::new(transform);
    move |outcome| {
        let transform = Arc::clone(&transform);
        ops::map_async(move |value| transform(value), outcome).boxed()
    }
}

/// Curried [`ops::flat_map`](super::flat_map).
pub fn flat_map<S, F, S2, R, T, N>(
    transform: T,
) -> impl Fn(R) -> BoxFuture<'static, Outcome<S2, F>>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    S2: Send + 'static,
    T: Fn(S) -> N + Send + Sync + 'static,
    N: IntoFuture<Output = Outcome<S2, F>> + Send + 'static,
    N::IntoFuture: Send,
{
    let transform = Arc::new(transform);
    move |outcome| {
        let transform = Arc::clone(&transform);
        ops::flat_map(move |value| transform(value), outcome).boxed()
    }
}

/// Curried [`ops::map_failure`](super::map_failure).
pub fn map_failure<S, F, F2, R, T>(transform: T) -> impl Fn(R) -> BoxFuture<'static, Outcome<S, F2>>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    F2: Send + 'static,
    T: Fn(F) -> F2 + Send + Sync + 'static,
{
    let transform = Arc::new(transform);
    move |outcome| {
        let transform = Arc::clone(&transform);
        ops::map_failure(move |failure| transform(failure), outcome).boxed()
    }
}

/// Curried [`ops::map_failure_async`](super::map_failure_async).
pub fn map_failure_async<S, F, F2, R, T, P>(
    transform: T,
) -> impl Fn(R) -> BoxFuture<'static, Outcome<S, F2>>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    F2: Send + 'static,
    T: Fn(F) -> P + Send + Sync + 'static,
    P: IntoFuture<Output = F2> + Send + 'static,
    P::IntoFuture: Send,
{
    let transform = Arc::new(transform);
    move |outcome| {
        let transform = Arc::clone(&transform);
        ops::map_failure_async(move |failure| transform(failure), outcome).boxed()
    }
}

/// Curried [`ops::flat_map_failure`](super::flat_map_failure).
pub fn flat_map_failure<S, F, F2, R, T, N>(
    transform: T,
) -> impl Fn(R) -> BoxFuture<'static, Outcome<S, F2>>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    F2: Send + 'static,
    T: Fn(F) -> N + Send + Sync + 'static,
    N: IntoFuture<Output = Outcome<S, F2>> + Send + 'static,
    N::IntoFuture: Send,
{
    let transform = Arc::new(transform);
    move |outcome| {
        let transform = Arc::clone(&transform);
        ops::flat_map_failure(move |failure| transform(failure), outcome).boxed()
    }
}

/// Curried [`ops::match_with`](super::match_with).
///
/// The matcher is shared between calls, so its handlers must be `Fn` and the
/// default (if any) is cloned per call.
pub fn match_with<S, F, M, R, OnSuccess, OnFailure>(
    matcher: Matcher<S, F, M, OnSuccess, OnFailure>,
) -> impl Fn(R) -> BoxFuture<'static, M>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    M: Clone + Send + Sync + 'static,
    OnSuccess: Fn(S) -> M + Send + Sync + 'static,
    OnFailure: Fn(F) -> M + Send + Sync + 'static,
{
    let matcher = Arc::new(matcher);
    move |outcome| {
        let matcher = Arc::clone(&matcher);
        async move { matcher.apply(outcome.await) }.boxed()
    }
}

/// Curried [`ops::fold`](super::fold).
pub fn fold<S, F, T, R, OnSuccess, OnFailure>(
    on_success: OnSuccess,
    on_failure: OnFailure,
) -> impl Fn(R) -> BoxFuture<'static, T>
where
    R: IntoFuture<Output = Outcome<S, F>> + Send + 'static,
    R::IntoFuture: Send,
    S: Send + 'static,
    F: Send + 'static,
    T: Send + 'static,
    OnSuccess: Fn(S) -> T + Send + Sync + 'static,
    OnFailure: Fn(F) -> T + Send + Sync + 'static,
{
    let handlers = Arc::new((on_success, on_failure));
    move |outcome| {
        let handlers = Arc::clone(&handlers);
        async move {
            let (on_success, on_failure) = &*handlers;
            outcome.await.fold(on_success, on_failure)
        }
        .boxed()
    }
}
