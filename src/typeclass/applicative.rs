//! Applicative type class - combining independent computations.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! For [`Maybe`] and [`Outcome`], `map2` is the `combine` combinator of the
//! container: both must be present (successful) for the function to run.
//! When both sides of an `Outcome` failed, the first failure is kept; use
//! [`Outcome::combine_aggregate`] to keep both.

use super::functor::Functor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type class for functors that can lift values and combine independent
/// computations.
///
/// # Examples
///
/// ```rust
/// use maybe_result::Maybe;
/// use maybe_result::typeclass::Applicative;
///
/// let x: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(x, Maybe::some(42));
///
/// let sum = Maybe::some(3).map2(Maybe::some(4), |a, b| a + b);
/// assert_eq!(sum, Maybe::some(7));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    /// use maybe_result::typeclass::Applicative;
    ///
    /// let total: Outcome<i32, Failure> = Outcome::success(1).map2(Outcome::success(2), |a, b| a + b);
    /// assert_eq!(total, Outcome::success(3));
    /// ```
    fn map2<B, C, Function>(self, other: Self::WithType<B>, function: Function) -> Self::WithType<C>
    where
        Function: FnOnce(Self::Inner, B) -> C;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    /// use maybe_result::typeclass::Applicative;
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// assert_eq!(increment.apply(Maybe::some(5)), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    #[inline]
    fn map2<B, C, Function>(self, other: Maybe<B>, function: Function) -> Maybe<C>
    where
        Function: FnOnce(A, B) -> C,
    {
        self.combine(other, function)
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.combine(other, |function, value| function(value))
    }
}

// =============================================================================
// Outcome<S, F> Implementation
// =============================================================================

impl<S, F: Clone> Applicative for Outcome<S, F> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<B, F> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, Function>(self, other: Outcome<B, F>, function: Function) -> Outcome<C, F>
    where
        Function: FnOnce(S, B) -> C,
    {
        self.combine(other, function)
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<B, F>) -> Outcome<Output, F>
    where
        S: FnOnce(B) -> Output,
    {
        self.combine(other, |function, value| function(value))
    }
}
