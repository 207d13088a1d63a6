//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! `Maybe` and `AggregateFailure` also have inherent methods named `combine`.
//! Inherent methods win method-call resolution, so call the type-class
//! operation as `Semigroup::combine(a, b)` on those types.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::Failure;
//! use maybe_result::typeclass::Semigroup;
//!
//! let report = Semigroup::combine(Failure::new("a"), Failure::new("b"));
//! assert_eq!(report.message(), "a; b");
//! ```

use crate::failure::{AggregateFailure, Failure};
use crate::maybe::Maybe;
use crate::unit::Unit;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    #[must_use]
    fn combine_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "combine_n requires count > 0");

        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine(self.clone());
        }
        result
    }

    /// Reduces all elements of an iterator, or returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Failure;
    /// use maybe_result::typeclass::Semigroup;
    ///
    /// let joined = Failure::reduce_all([Failure::new("a"), Failure::new("b")]);
    /// assert_eq!(joined.map(|failure| failure.message().into_owned()), Some("a; b".to_string()));
    /// assert_eq!(Failure::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for Unit {
    #[inline]
    fn combine(self, _other: Self) -> Self {
        Self
    }
}

/// Concatenates the children of both aggregates.
impl Semigroup for AggregateFailure {
    #[inline]
    fn combine(self, other: Self) -> Self {
        Self::combine(self, other)
    }
}

/// Joins two failures into a flat aggregate.
impl Semigroup for Failure {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.join(other)
    }
}

/// Present values are combined; an absent side is ignored.
impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn failure(message: &str) -> Failure {
        Failure::new(message)
    }

    #[rstest]
    fn unit_combine() {
        assert_eq!(Unit.combine(Unit), Unit);
    }

    #[rstest]
    fn failure_combine_is_associative() {
        let left = failure("a").combine(failure("b")).combine(failure("c"));
        let right = failure("a").combine(failure("b").combine(failure("c")));
        assert_eq!(left, right);
        assert_eq!(left.as_aggregate().map(AggregateFailure::len), Some(3));
    }

    #[rstest]
    fn aggregate_combine_concatenates() {
        let left = AggregateFailure::from_failures([failure("a")]);
        let right = AggregateFailure::from_failures([failure("b"), failure("c")]);
        assert_eq!(Semigroup::combine(left, right).message(), "a; b; c");
    }

    #[rstest]
    #[case(Maybe::some(Unit), Maybe::none(), Maybe::some(Unit))]
    #[case(Maybe::none(), Maybe::some(Unit), Maybe::some(Unit))]
    #[case(Maybe::none(), Maybe::none(), Maybe::none())]
    fn maybe_combine_ignores_absent_side(
        #[case] left: Maybe<Unit>,
        #[case] right: Maybe<Unit>,
        #[case] expected: Maybe<Unit>,
    ) {
        assert_eq!(Semigroup::combine(left, right), expected);
    }

    #[rstest]
    fn maybe_combine_combines_present_payloads() {
        let combined = Semigroup::combine(Maybe::some(failure("a")), Maybe::some(failure("b")));
        assert_eq!(
            combined.map(|joined| joined.message().into_owned()),
            Maybe::some("a; b".to_string())
        );
    }

    #[rstest]
    fn combine_n_repeats() {
        let repeated = failure("x").combine_n(3);
        assert_eq!(repeated.message(), "x; x; x");
    }

    #[rstest]
    #[should_panic(expected = "combine_n requires count > 0")]
    fn combine_n_zero_panics() {
        let _ = Unit.combine_n(0);
    }
}
