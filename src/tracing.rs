//! Tracing support for outcomes.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. The library never
//! installs a subscriber; events go wherever the application routes them.

use std::fmt::Debug;
use std::future::Future;

use ::tracing::{Instrument as _, Span};

use crate::outcome::Outcome;

fn record<S: Debug, F: Debug>(label: &str, outcome: &Outcome<S, F>) {
    match outcome {
        Outcome::Success(value) => {
            ::tracing::debug!(label, success = ?value, "outcome succeeded");
        }
        Outcome::Failure(failure) => {
            ::tracing::debug!(label, failure = ?failure, "outcome failed");
        }
    }
}

/// Extension trait for recording outcomes as tracing events.
pub trait OutcomeTracingExt: Sized {
    /// Emit a `debug` event naming the channel and payload, then return the
    /// outcome unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::tracing::OutcomeTracingExt;
    /// use twotrack::Outcome;
    ///
    /// let parsed = Outcome::<i32, String>::success(7).traced("parse_port");
    /// assert_eq!(parsed, Outcome::Success(7));
    /// ```
    fn traced(self, label: &str) -> Self;
}

impl<S: Debug, F: Debug> OutcomeTracingExt for Outcome<S, F> {
    fn traced(self, label: &str) -> Self {
        record(label, &self);
        self
    }
}

/// Extension trait for running pending outcomes inside a span.
pub trait OutcomeFutureTracingExt<S, F>: Future<Output = Outcome<S, F>> + Send + Sized {
    /// Run this pending outcome inside `span`.
    ///
    /// The span is entered every time the future is polled, and a `debug`
    /// event recording the channel is emitted inside it on resolution.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twotrack::tracing::OutcomeFutureTracingExt;
    /// use twotrack::Outcome;
    ///
    /// # tokio_test::block_on(async {
    /// let fetched = async { Outcome::<u32, String>::success(1) }
    ///     .instrument_outcome(tracing::debug_span!("fetch_user", user_id = 1))
    ///     .await;
    /// assert_eq!(fetched, Outcome::Success(1));
    /// # });
    /// ```
    fn instrument_outcome(self, span: Span) -> impl Future<Output = Outcome<S, F>> + Send
    where
        S: Debug + Send,
        F: Debug + Send,
    {
        async move {
            let outcome = self.await;
            record("instrumented", &outcome);
            outcome
        }
        .instrument(span)
    }
}

impl<S, F, Fut> OutcomeFutureTracingExt<S, F> for Fut where Fut: Future<Output = Outcome<S, F>> + Send {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::combine_all;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn traced_records_success_channel() {
        let outcome = Outcome::<i32, String>::success(42).traced("answer");
        assert_eq!(outcome, Outcome::Success(42));
        assert!(logs_contain("outcome succeeded"));
        assert!(logs_contain("answer"));
    }

    #[test]
    #[traced_test]
    fn traced_records_failure_payload() {
        let outcome = Outcome::<i32, String>::failure("disk full".to_string()).traced("write");
        assert!(outcome.is_failure());
        assert!(logs_contain("outcome failed"));
        assert!(logs_contain("disk full"));
    }

    #[test]
    #[traced_test]
    fn combine_reports_failure_position() {
        let outcomes: Vec<Outcome<i32, &str>> =
            vec![Outcome::success(1), Outcome::success(2), Outcome::failure("third")];
        assert_eq!(combine_all(outcomes), Outcome::Failure("third"));
        assert!(logs_contain("combine surfaced a failure"));
        assert!(logs_contain("position=2"));
    }

    #[tokio::test]
    #[traced_test]
    async fn instrument_outcome_logs_inside_span() {
        let outcome = async { Outcome::<i32, String>::failure("timeout".to_string()) }
            .instrument_outcome(::tracing::info_span!("fetch_order", order_id = 17))
            .await;
        assert_eq!(outcome, Outcome::Failure("timeout".to_string()));
        assert!(logs_contain("fetch_order"));
        assert!(logs_contain("outcome failed"));
    }

    #[tokio::test]
    async fn instrument_outcome_without_subscriber_passes_through() {
        let outcome = async { Outcome::<i32, ()>::success(5) }
            .instrument_outcome(Span::none())
            .await;
        assert_eq!(outcome, Outcome::Success(5));
    }
}
