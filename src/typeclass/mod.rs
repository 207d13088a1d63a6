//! Type class instances for the containers.
//!
//! This module requires the `typeclass` feature (enabled by default).
//!
//! - [`Functor`]: mapping over the value (`Maybe`, the success of `Outcome`)
//! - [`Applicative`]: lifting values and combining independent computations
//! - [`Monad`]: sequencing dependent computations
//! - [`Bifunctor`]: mapping both channels of an `Outcome`
//! - [`Semigroup`]: associative combination of `Unit`, `Failure`,
//!   `AggregateFailure` and `Maybe<T: Semigroup>`
//! - [`Monoid`]: semigroups with an identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types, so [`TypeConstructor`] uses Generic
//! Associated Types to describe "the same container around another type".
//!
//! The instances delegate to the inherent combinators (`map`, `bind`,
//! `combine`), so the type-class view and the inherent API always agree.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{Failure, Maybe, Outcome};
//! use maybe_result::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(container: M) -> M::WithType<i32>
//! where
//!     M: Functor<Inner = i32>,
//! {
//!     container.fmap(|x| x * 2)
//! }
//!
//! assert_eq!(double_all(Maybe::some(4)), Maybe::some(8));
//! assert_eq!(double_all(Outcome::<i32, Failure>::success(4)), Outcome::success(8));
//!
//! let chained = Maybe::some(3).flat_map(|x| <Maybe<()>>::pure(x + 1));
//! assert_eq!(chained, Maybe::some(4));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
