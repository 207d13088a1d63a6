//! The success-or-typed-failure container.
//!
//! - [`Outcome`]: `Success(value)` or `Failure(failure)`, with `bind`,
//!   `bi_bind`, `bimap`, `fold` and the `combine` family.
//! - [`OutcomeValue`], [`SuccessValue`], [`FailureValue`]: pattern-matchable
//!   projections and partial constructors.
//! - Sequences: [`extract_outcome`], [`aggregate`], [`OutcomeIteratorExt`].
//!
//! `Outcome` is named so that it never shadows the standard `Result`, which
//! this crate still uses for its own contract errors.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{aggregate, Failure, Outcome, Unit};
//!
//! fn check_length(password: &str) -> Outcome<Unit, Failure> {
//!     if password.len() >= 8 { Outcome::unit() } else { Outcome::failure(Failure::new("too short")) }
//! }
//!
//! fn check_digit(password: &str) -> Outcome<Unit, Failure> {
//!     if password.chars().any(|c| c.is_ascii_digit()) {
//!         Outcome::unit()
//!     } else {
//!         Outcome::failure(Failure::new("no digit"))
//!     }
//! }
//!
//! let report = aggregate([check_length("abc"), check_digit("abc")]);
//! assert_eq!(report.get_failure_unsafe().message(), "too short; no digit");
//! ```

mod extensions;
mod value;
mod view;

pub use extensions::{
    Failures, OutcomeIteratorExt, Successes, aggregate, extract_outcome, extract_outcome_into,
    failures, successes,
};
pub use value::{Outcome, err, ok};
pub use view::{FailureValue, OutcomeValue, SuccessValue};
