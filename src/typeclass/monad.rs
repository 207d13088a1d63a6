//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::Maybe;
//! use maybe_result::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from(text.parse::<i32>().ok()).filter(|n| *n > 0)
//! }
//!
//! let result = Maybe::some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::some(n * 2));
//! assert_eq!(result, Maybe::some(84));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A type class for types that support sequencing of computations.
///
/// For [`Maybe`] and [`Outcome`], `flat_map` is the container's `bind`.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the
    /// result.
    fn flat_map<B, Function>(self, function: Function) -> Self::WithType<B>
    where
        Function: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Monad::flat_map).
    #[inline]
    fn and_then<B, Function>(self, function: Function) -> Self::WithType<B>
    where
        Self: Sized,
        Function: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    /// use maybe_result::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::some(1).then(Maybe::some("next")), Maybe::some("next"));
    /// assert_eq!(Maybe::<i32>::none().then(Maybe::some("next")), Maybe::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, Function>(self, function: Function) -> Maybe<B>
    where
        Function: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

impl<S, F: Clone> Monad for Outcome<S, F> {
    #[inline]
    fn flat_map<B, Function>(self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(S) -> Outcome<B, F>,
    {
        self.bind(function)
    }
}
