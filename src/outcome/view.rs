//! Pattern-matchable projections of an [`Outcome`].
//!
//! [`SuccessValue`] and [`FailureValue`] each know only one of the two type
//! parameters, so they double as partial constructors: the missing type is
//! supplied with [`SuccessValue::with_failure_type`] /
//! [`FailureValue::with_success_type`] or inferred through `From`.

use super::Outcome;

/// The projection of a success.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Failure, Outcome, SuccessValue};
///
/// let outcome = SuccessValue(42).with_failure_type::<Failure>();
/// assert_eq!(outcome, Outcome::success(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuccessValue<S>(pub S);

impl<S> SuccessValue<S> {
    /// Returns a reference to the payload.
    #[inline]
    pub const fn value(&self) -> &S {
        &self.0
    }

    /// Consumes the projection and returns the payload.
    #[inline]
    pub fn into_inner(self) -> S {
        self.0
    }

    /// Fixes the failure type, producing a full `Outcome`.
    #[inline]
    pub fn with_failure_type<F>(self) -> Outcome<S, F> {
        Outcome::Success(self.0)
    }
}

/// The projection of a failure.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Failure, FailureValue, Outcome};
///
/// fn load(id: u32) -> Outcome<String, Failure> {
///     if id == 0 {
///         return FailureValue(Failure::new("unknown id")).into();
///     }
///     Outcome::success(format!("record {id}"))
/// }
///
/// assert!(load(0).is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FailureValue<F>(pub F);

impl<F> FailureValue<F> {
    /// Returns a reference to the payload.
    #[inline]
    pub const fn value(&self) -> &F {
        &self.0
    }

    /// Consumes the projection and returns the payload.
    #[inline]
    pub fn into_inner(self) -> F {
        self.0
    }

    /// Fixes the success type, producing a full `Outcome`.
    #[inline]
    pub fn with_success_type<S>(self) -> Outcome<S, F> {
        Outcome::Failure(self.0)
    }
}

/// The exhaustive projection of an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeValue<S, F> {
    /// A success.
    Success(SuccessValue<S>),
    /// A failure.
    Failure(FailureValue<F>),
}

impl<S, F> Outcome<S, F> {
    /// Returns the borrowed projection of this outcome.
    #[inline]
    pub const fn as_outcome_value(&self) -> OutcomeValue<&S, &F> {
        match self {
            Self::Success(value) => OutcomeValue::Success(SuccessValue(value)),
            Self::Failure(failure) => OutcomeValue::Failure(FailureValue(failure)),
        }
    }

    /// Consumes this outcome and returns its projection.
    #[inline]
    pub fn into_outcome_value(self) -> OutcomeValue<S, F> {
        self.fold(
            |value| OutcomeValue::Success(SuccessValue(value)),
            |failure| OutcomeValue::Failure(FailureValue(failure)),
        )
    }
}

impl<S, F> From<SuccessValue<S>> for Outcome<S, F> {
    #[inline]
    fn from(value: SuccessValue<S>) -> Self {
        value.with_failure_type()
    }
}

impl<S, F> From<FailureValue<F>> for Outcome<S, F> {
    #[inline]
    fn from(failure: FailureValue<F>) -> Self {
        failure.with_success_type()
    }
}

impl<S, F> From<OutcomeValue<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(value: OutcomeValue<S, F>) -> Self {
        match value {
            OutcomeValue::Success(success) => success.into(),
            OutcomeValue::Failure(failure) => failure.into(),
        }
    }
}
