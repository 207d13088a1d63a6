//! Bifunctor type class - mapping over two type parameters.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Parameter Order for Outcome
//!
//! `Outcome<S, F>` is implemented as `Bifunctor<S, F>`, in declaration order:
//! `first` maps the success, `second` maps the failure. This matches the
//! argument order of [`Outcome::bimap`].

use crate::outcome::Outcome;

/// A type class for types with two type parameters that can have functions
/// mapped over both.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Failure, Outcome};
/// use maybe_result::typeclass::Bifunctor;
///
/// let failed: Outcome<i32, Failure> = Outcome::failure(Failure::new("boom"));
/// let code = failed.second(|failure| failure.message().len());
/// assert_eq!(code, Outcome::failure(4));
/// ```
pub trait Bifunctor<A, B> {
    /// The resulting type constructor after applying the transformation.
    type Target<C, D>;

    /// Applies two functions to both type parameters simultaneously.
    fn bimap<C, D, First, Second>(
        self,
        first_function: First,
        second_function: Second,
    ) -> Self::Target<C, D>
    where
        First: FnOnce(A) -> C,
        Second: FnOnce(B) -> D;

    /// Maps only the first type parameter.
    #[inline]
    fn first<C, First>(self, function: First) -> Self::Target<C, B>
    where
        Self: Sized,
        First: FnOnce(A) -> C,
    {
        self.bimap(function, |b| b)
    }

    /// Maps only the second type parameter.
    #[inline]
    fn second<D, Second>(self, function: Second) -> Self::Target<A, D>
    where
        Self: Sized,
        Second: FnOnce(B) -> D,
    {
        self.bimap(|a| a, function)
    }
}

impl<S, F> Bifunctor<S, F> for Outcome<S, F> {
    type Target<C, D> = Outcome<C, D>;

    #[inline]
    fn bimap<C, D, First, Second>(
        self,
        first_function: First,
        second_function: Second,
    ) -> Outcome<C, D>
    where
        First: FnOnce(S) -> C,
        Second: FnOnce(F) -> D,
    {
        self.map_success(first_function).map_failure(second_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::success(2), Outcome::success(4))]
    #[case(Outcome::failure("ab"), Outcome::failure(2))]
    fn bimap_through_the_trait(
        #[case] outcome: Outcome<i32, &'static str>,
        #[case] expected: Outcome<i32, usize>,
    ) {
        assert_eq!(Bifunctor::bimap(outcome, |x| x * 2, str::len), expected);
    }

    #[rstest]
    fn first_and_second_are_consistent_with_bimap() {
        let outcome: Outcome<i32, &str> = Outcome::failure("abc");
        let both = Bifunctor::bimap(outcome, |x| x + 1, str::len);
        let split = outcome.first(|x| x + 1).second(str::len);
        assert_eq!(both, split);
    }
}
