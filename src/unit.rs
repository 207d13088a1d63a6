//! The `Unit` type - a success payload that carries no information.
//!
//! `Unit` replaces "no return value" in a success channel, so that an
//! operation which only succeeds or fails can still be written as
//! `Outcome<Unit, F>` and take part in the same combinator algebra.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{Outcome, Unit, Failure};
//!
//! fn validate(age: u32) -> Outcome<Unit, Failure> {
//!     if age >= 18 {
//!         Outcome::success(Unit)
//!     } else {
//!         Outcome::failure(Failure::new("must be an adult"))
//!     }
//! }
//!
//! assert!(validate(20).is_success());
//! assert_eq!(Unit, Unit::default());
//! ```

use std::fmt;

/// A single-valued type used as the payload of a successful computation
/// that has nothing more to report.
///
/// All `Unit` values compare equal. `Unit` deliberately has no ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// The canonical `Unit` value.
    pub const VALUE: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("()")
    }
}

impl From<()> for Unit {
    #[inline]
    fn from(_: ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    #[inline]
    fn from(_: Unit) -> Self {}
}
