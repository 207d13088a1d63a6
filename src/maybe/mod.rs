//! The optional-value container.
//!
//! - [`Maybe`]: `Some(value)` or `None`, with `map`, `bind`, `bind_none`,
//!   `fold` and their side-effecting variants.
//! - [`MaybeValue`], [`SomeValue`], [`NoneValue`]: pattern-matchable
//!   projections.
//! - Extensions: [`Maybe::flatten`], [`Maybe::to_outcome`], [`GetMaybe`],
//!   [`somes`].
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{Maybe, MaybeIteratorExt};
//!
//! let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
//!
//! let total: i32 = ["1", "x", "3"].into_iter().map(parse).somes().sum();
//! assert_eq!(total, 4);
//! ```

mod extensions;
mod value;
mod view;

pub use extensions::{GetMaybe, MaybeIteratorExt, Somes, get_maybe, somes};
pub use value::{Maybe, none, some};
pub use view::{MaybeValue, NoneValue, SomeValue};
