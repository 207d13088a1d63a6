//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both laws are exercised with `proptest` in `tests/typeclass_laws.rs`.

use super::higher::TypeConstructor;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::unit::Unit;

/// A type class for types that can be mapped over.
///
/// For [`Maybe`], `fmap` is [`Maybe::map`]; for [`Outcome`] it maps the
/// success channel, like [`Outcome::map_success`].
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Maybe, Outcome};
/// use maybe_result::typeclass::Functor;
///
/// let length = Maybe::some("four").fmap(str::len);
/// assert_eq!(length, Maybe::some(4));
///
/// let doubled: Outcome<i32, &str> = Outcome::success(21).fmap(|x| x * 2);
/// assert_eq!(doubled, Outcome::success(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, Function>(self, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    /// use maybe_result::typeclass::Functor;
    ///
    /// let name = Maybe::some("ada".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Maybe::some(3));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, Function>(&self, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, keeping only its shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Outcome, Unit};
    /// use maybe_result::typeclass::Functor;
    ///
    /// let checked: Outcome<i32, &str> = Outcome::success(7);
    /// assert_eq!(checked.void(), Outcome::success(Unit));
    /// ```
    #[inline]
    fn void(self) -> Self::WithType<Unit>
    where
        Self: Sized,
    {
        self.replace(Unit)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, Function>(self, function: Function) -> Maybe<B>
    where
        Function: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, Function>(&self, function: Function) -> Maybe<B>
    where
        Function: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<S, F> Implementation
// =============================================================================

impl<S, F: Clone> Functor for Outcome<S, F> {
    #[inline]
    fn fmap<B, Function>(self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(S) -> B,
    {
        self.map_success(function)
    }

    #[inline]
    fn fmap_ref<B, Function>(&self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(&S) -> B,
    {
        self.as_ref().bimap(function, F::clone)
    }
}
