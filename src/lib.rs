//! # maybe-result
//!
//! Two algebraic containers and the combinator algebra around them.
//!
//! ## Overview
//!
//! - [`Maybe<T>`]: a value that may be absent, with `map`, `bind`,
//!   `bind_none`, `fold` and their side-effecting variants.
//! - [`Outcome<S, F>`]: a computation that produced either a success or a
//!   typed failure, with `bind`, `bi_bind`, `bimap`, `fold`, and a `combine`
//!   family that can report every failure at once.
//! - [`Failure`] / [`AggregateFailure`]: the failure payload hierarchy. Two
//!   failures join into a flat aggregate whose message lists its children.
//! - Sequences: [`somes`], [`successes`], [`extract_outcome`] (first failure
//!   wins, the rest is never evaluated) and [`aggregate`] (every failure is
//!   kept).
//! - Asynchronous lifting: every combinator also works over a pending
//!   computation, see [`pending`].
//!
//! Both containers are plain immutable values. Functions handed to a
//! combinator run only on the branch they belong to, and they run exactly
//! once.
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): `Functor`/`Applicative`/`Monad`/`Bifunctor`/
//!   `Semigroup`/`Monoid` instances
//! - `async` (default): the asynchronous lifting layer
//! - `serde`: `Serialize`/`Deserialize` for the value types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe_result::prelude::*;
//!
//! fn parse_port(text: &str) -> Outcome<u16, Failure> {
//!     text.parse::<u16>()
//!         .map_err(|error| Failure::new(format!("{text}: {error}")))
//!         .into()
//! }
//!
//! let ports = extract_outcome(["80", "443"].map(parse_port));
//! assert_eq!(ports, Outcome::success(vec![80, 443]));
//!
//! let report = aggregate(["80", "x", "99999"].map(|text| parse_port(text).map_success(|_| Unit)));
//! assert_eq!(report.get_failure_unsafe().as_aggregate().map(|all| all.len()), Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use maybe_result::prelude::*;
///
/// let found: Maybe<i32> = some(1);
/// assert_eq!(found.to_outcome(Failure::new("missing")), Outcome::success(1));
/// ```
pub mod prelude {
    pub use crate::error::ContractError;
    pub use crate::failure::{AggregateFailure, Failure};
    pub use crate::maybe::{GetMaybe, Maybe, MaybeIteratorExt, get_maybe, none, some, somes};
    pub use crate::outcome::{
        Outcome, OutcomeIteratorExt, aggregate, err, extract_outcome, ok, successes,
    };
    pub use crate::unit::Unit;

    #[cfg(feature = "async")]
    pub use crate::pending::{
        MaybeFutureExt, MaybeStreamExt, OutcomeFutureExt, OutcomeStreamExt, PendingMaybe,
        PendingOutcome,
    };

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
pub mod failure;
pub mod maybe;
pub mod outcome;
pub mod unit;

#[cfg(feature = "async")]
pub mod pending;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::ContractError;
pub use failure::{AggregateFailure, Failure};
pub use maybe::{
    GetMaybe, Maybe, MaybeIteratorExt, MaybeValue, NoneValue, SomeValue, Somes, get_maybe, none,
    some, somes,
};
pub use outcome::{
    FailureValue, Failures, Outcome, OutcomeIteratorExt, OutcomeValue, SuccessValue, Successes,
    aggregate, err, extract_outcome, extract_outcome_into, failures, ok, successes,
};
pub use unit::Unit;

#[cfg(feature = "async")]
pub use pending::{
    MaybeFutureExt, MaybeStreamExt, OutcomeFutureExt, OutcomeStreamExt, PendingMaybe,
    PendingOutcome, get_maybe_async,
};
