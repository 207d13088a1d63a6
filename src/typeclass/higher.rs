//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] records, for a concrete `Maybe<A>` or `Outcome<S, F>`,
//! which parameter the type-class traits operate on and how to rebuild the
//! container around a different type.
//!
//! # Example
//!
//! ```rust
//! use maybe_result::Maybe;
//! use maybe_result::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = reset(Maybe::some(42));
//! assert!(emptied.is_none());
//! ```

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Maybe<i32>` this is `i32`; for `Outcome<i32, Failure>` it is the
    /// success type `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

/// The failure type is fixed; the constructor ranges over the success type.
impl<S, F> TypeConstructor for Outcome<S, F> {
    type Inner = S;
    type WithType<B> = Outcome<B, F>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::Failure;

    #[test]
    fn maybe_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Maybe<i32>>();
    }

    #[test]
    fn maybe_with_type_produces_correct_type() {
        fn transform<T: TypeConstructor>(_value: T) -> T::WithType<String>
        where
            T::WithType<String>: Default,
        {
            Default::default()
        }

        let result: Maybe<String> = transform(Maybe::some(42));
        assert_eq!(result, Maybe::none());
    }

    #[test]
    fn outcome_with_type_preserves_failure_type() {
        fn assert_outcome_with_type<S, F, B>()
        where
            Outcome<S, F>: TypeConstructor<Inner = S, WithType<B> = Outcome<B, F>>,
        {
        }

        assert_outcome_with_type::<i32, Failure, bool>();
        assert_outcome_with_type::<String, &str, Vec<u8>>();
    }
}
