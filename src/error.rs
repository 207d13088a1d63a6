//! Contract-violation errors.
//!
//! These errors signal misuse of the API contract (reading a payload from the
//! wrong branch, an absent payload handed to a nullable bridge, a disallowed
//! composition). They are not part of the modeled failure channel: a failed
//! computation is represented by the `F` payload of an
//! [`Outcome`](crate::Outcome), which is data.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{ContractError, Maybe};
//!
//! let none: Maybe<i32> = Maybe::none();
//! let error = none.try_get_value().unwrap_err();
//! assert_eq!(
//!     error,
//!     ContractError::InvalidState {
//!         operation: "Maybe::get_value",
//!         expected: "Some",
//!     }
//! );
//! assert_eq!(
//!     error.to_string(),
//!     "Maybe::get_value: invalid state, the container is not `Some`"
//! );
//! ```

use thiserror::Error;

/// Represents a violation of the call contract of this crate.
///
/// Each variant names the operation that detected the violation so that the
/// message points at the offending call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// A required argument was absent.
    #[error("{parameter}: a required argument was absent")]
    NullArgument {
        /// The name of the absent parameter, qualified by its operation.
        parameter: &'static str,
    },

    /// A payload was read from the wrong branch of a container.
    #[error("{operation}: invalid state, the container is not `{expected}`")]
    InvalidState {
        /// The operation that attempted the read.
        operation: &'static str,
        /// The branch the operation required.
        expected: &'static str,
    },

    /// A structurally disallowed composition was attempted.
    #[error("{operation}: invalid operation, {reason}")]
    InvalidOperation {
        /// The operation that rejected the composition.
        operation: &'static str,
        /// Why the composition is disallowed.
        reason: &'static str,
    },
}

impl ContractError {
    /// Records the violation through `tracing` and hands it back.
    pub(crate) fn traced(self) -> Self {
        tracing::debug!(error = %self, "contract violation");
        self
    }
}
