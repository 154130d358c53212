//! `?` support for [`Outcome`] (nightly, feature `try_trait`).
//!
//! `?` on an outcome yields the success payload or returns the failure early,
//! converting it with `From` the same way `Result` does. `?` on a `Result`
//! inside a function returning an outcome works too.

use std::convert::Infallible;
use std::ops::{ControlFlow, FromResidual, Residual, Try};

use super::Outcome;

impl<S, F> Try for Outcome<S, F> {
    type Output = S;
    type Residual = Outcome<Infallible, F>;

    #[inline]
    fn from_output(output: S) -> Self {
        Outcome::Success(output)
    }

    #[inline]
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output> {
        match self {
            Outcome::Success(value) => ControlFlow::Continue(value),
            Outcome::Failure(error) => ControlFlow::Break(Outcome::Failure(error)),
        }
    }
}

impl<S, F> Residual<S> for Outcome<Infallible, F> {
    type TryType = Outcome<S, F>;
}

impl<S, F, F2> FromResidual<Outcome<Infallible, F>> for Outcome<S, F2>
where
    F2: From<F>,
{
    #[inline]
    fn from_residual(residual: Outcome<Infallible, F>) -> Self {
        Outcome::Failure(F2::from(residual.into_failure_value()))
    }
}

impl<S, F, E> FromResidual<Result<Infallible, E>> for Outcome<S, F>
where
    F: From<E>,
{
    #[inline]
    fn from_residual(residual: Result<Infallible, E>) -> Self {
        match residual {
            Ok(never) => match never {},
            Err(error) => Outcome::Failure(F::from(error)),
        }
    }
}
