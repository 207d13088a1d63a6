//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! Self::empty().combine(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.combine(Self::empty()) == a
//! ```
//!
//! `Failure` is deliberately not a monoid: an empty aggregate is not a
//! failure anyone should report.

use super::semigroup::Semigroup;
use crate::failure::AggregateFailure;
use crate::maybe::Maybe;
use crate::unit::Unit;

/// A semigroup with an identity element.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{AggregateFailure, Failure};
/// use maybe_result::typeclass::Monoid;
///
/// let batches = vec![
///     AggregateFailure::from_failures([Failure::new("a")]),
///     AggregateFailure::empty(),
///     AggregateFailure::from_failures([Failure::new("b")]),
/// ];
/// assert_eq!(AggregateFailure::combine_all(batches).message(), "a; b");
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements, starting from the identity element.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for Unit {
    #[inline]
    fn empty() -> Self {
        Self
    }
}

impl Monoid for AggregateFailure {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Maybe<T> {
    #[inline]
    fn empty() -> Self {
        Self::None
    }
}
