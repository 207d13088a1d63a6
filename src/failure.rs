//! The failure hierarchy carried by the failure channel of an [`Outcome`].
//!
//! - [`Failure`]: the base error value. It is either a single failure with a
//!   message or an aggregate of several failures.
//! - [`AggregateFailure`]: an ordered collection of failures whose message is
//!   derived from the messages of its children.
//!
//! Failures are data, not raised errors: they are created, combined and
//! inspected like any other value. They implement [`std::error::Error`] so
//! that they can still cross into `?`-based code through
//! [`Outcome::into_result`].
//!
//! # Combining Failures
//!
//! [`AggregateFailure::add`] appends one non-aggregate failure and rejects an
//! aggregate argument; [`AggregateFailure::combine`] joins two aggregates by
//! concatenating their children. [`Failure::join`] picks the right one of the
//! two and is associative.
//!
//! ```rust
//! use maybe_result::{AggregateFailure, Failure};
//!
//! let first = Failure::new("name is empty");
//! let second = Failure::new("age is negative");
//!
//! let joined = first.join(second);
//! assert!(joined.is_aggregate());
//! assert_eq!(joined.message(), "name is empty; age is negative");
//!
//! let nested = AggregateFailure::new().add(Failure::new("x")).unwrap();
//! assert!(nested.add(AggregateFailure::new()).is_err());
//! ```
//!
//! [`Outcome`]: crate::Outcome
//! [`Outcome::into_result`]: crate::Outcome::into_result

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::error::ContractError;

/// The base error value of the failure channel.
///
/// Two failures are equal when they are the same variant and carry the same
/// message.
///
/// # Examples
///
/// ```rust
/// use maybe_result::Failure;
///
/// let failure = Failure::new("not found");
/// assert_eq!(failure.message(), "not found");
/// assert_eq!(failure, Failure::from("not found"));
/// assert!(!failure.is_aggregate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Failure {
    /// A single failure described by its message.
    #[error("{0}")]
    Message(String),
    /// Several failures reported together.
    #[error("{0}")]
    Aggregate(AggregateFailure),
}

impl Failure {
    /// Creates a single failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Returns the message of this failure.
    ///
    /// For an aggregate the message is derived from its children.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Message(message) => Cow::Borrowed(message),
            Self::Aggregate(aggregate) => Cow::Owned(aggregate.message()),
        }
    }

    /// Returns `true` if this failure is an aggregate.
    #[inline]
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Aggregate(_))
    }

    /// Returns the aggregate view of this failure, if it is one.
    #[inline]
    pub const fn as_aggregate(&self) -> Option<&AggregateFailure> {
        match self {
            Self::Aggregate(aggregate) => Some(aggregate),
            Self::Message(_) => None,
        }
    }

    /// Joins two failures into an aggregate, preserving order.
    ///
    /// Aggregates on either side are flattened, so the result never contains
    /// a nested aggregate. The operation is associative:
    /// `a.join(b).join(c) == a.join(b.join(c))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Failure;
    ///
    /// let joined = Failure::new("a")
    ///     .join(Failure::new("b"))
    ///     .join(Failure::new("c"));
    /// let aggregate = joined.as_aggregate().unwrap();
    /// assert_eq!(aggregate.len(), 3);
    /// ```
    #[must_use]
    pub fn join(self, other: Self) -> Self {
        let joined = AggregateFailure::from(self).combine(AggregateFailure::from(other));
        tracing::debug!(children = joined.len(), "joined failures into an aggregate");
        Self::Aggregate(joined)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<AggregateFailure> for Failure {
    fn from(aggregate: AggregateFailure) -> Self {
        Self::Aggregate(aggregate)
    }
}

/// An ordered collection of failures reported together.
///
/// The message of an aggregate is always the messages of its children joined
/// with [`AggregateFailure::SEPARATOR`]; it is never set independently. An
/// empty aggregate is permitted and means "no failures yet".
///
/// An aggregate never holds another aggregate as a direct child: [`add`]
/// rejects one, and every other constructor flattens it.
///
/// Equality and hashing follow the derived message.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{AggregateFailure, Failure};
///
/// let left: AggregateFailure = [Failure::new("a"), Failure::new("b")].into_iter().collect();
/// let right = AggregateFailure::new().add(Failure::new("c")).unwrap();
///
/// let combined = left.combine(right);
/// assert_eq!(combined.message(), "a; b; c");
/// ```
///
/// [`add`]: AggregateFailure::add
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "SerializedAggregate"))]
pub struct AggregateFailure {
    failures: Vec<Failure>,
}

/// The wire shape of an [`AggregateFailure`]. Deserialized children are
/// flattened through [`AggregateFailure::from_failures`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SerializedAggregate {
    failures: Vec<Failure>,
}

#[cfg(feature = "serde")]
impl From<SerializedAggregate> for AggregateFailure {
    fn from(serialized: SerializedAggregate) -> Self {
        Self::from_failures(serialized.failures)
    }
}

impl AggregateFailure {
    /// The separator placed between the messages of the children.
    pub const SEPARATOR: &'static str = "; ";

    /// Creates an empty aggregate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Creates an aggregate from a sequence of failures, flattening any
    /// aggregate found in the sequence.
    pub fn from_failures<I>(failures: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Failure>,
    {
        failures.into_iter().map(Into::<Failure>::into).collect()
    }

    /// Returns the children of this aggregate, in order.
    #[inline]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// Returns the number of children.
    #[inline]
    pub const fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns `true` if the aggregate holds no failures.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns an iterator over the children.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Returns the derived message: the children's messages joined with
    /// [`Self::SEPARATOR`].
    pub fn message(&self) -> String {
        let mut message = String::new();
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                message.push_str(Self::SEPARATOR);
            }
            message.push_str(&failure.message());
        }
        message
    }

    /// Appends a single non-aggregate failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidOperation`] if `failure` is itself an
    /// aggregate. Two aggregates are joined with [`Self::combine`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{AggregateFailure, ContractError, Failure};
    ///
    /// let aggregate = AggregateFailure::new().add(Failure::new("x")).unwrap();
    /// assert_eq!(aggregate.len(), 1);
    ///
    /// let error = aggregate.add(AggregateFailure::new()).unwrap_err();
    /// assert!(matches!(error, ContractError::InvalidOperation { .. }));
    /// ```
    pub fn add(mut self, failure: impl Into<Failure>) -> Result<Self, ContractError> {
        match failure.into() {
            Failure::Aggregate(_) => Err(ContractError::InvalidOperation {
                operation: "AggregateFailure::add",
                reason: "an aggregate cannot be added as a single child, use `combine`",
            }
            .traced()),
            single => {
                self.failures.push(single);
                Ok(self)
            }
        }
    }

    /// Joins two aggregates by concatenating their children, preserving
    /// order.
    #[must_use]
    pub fn combine(mut self, mut other: Self) -> Self {
        self.failures.append(&mut other.failures);
        self
    }
}

impl fmt::Display for AggregateFailure {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message())
    }
}

impl std::error::Error for AggregateFailure {}

impl PartialEq for AggregateFailure {
    fn eq(&self, other: &Self) -> bool {
        self.message() == other.message()
    }
}

impl Eq for AggregateFailure {}

impl Hash for AggregateFailure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message().hash(state);
    }
}

impl From<Failure> for AggregateFailure {
    /// Wraps a single failure, or unwraps an aggregate unchanged.
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::Aggregate(aggregate) => aggregate,
            single => Self {
                failures: vec![single],
            },
        }
    }
}

impl FromIterator<Failure> for AggregateFailure {
    fn from_iter<I: IntoIterator<Item = Failure>>(iterator: I) -> Self {
        iterator
            .into_iter()
            .fold(Self::new(), |accumulator, failure| {
                accumulator.combine(Self::from(failure))
            })
    }
}

impl IntoIterator for AggregateFailure {
    type Item = Failure;
    type IntoIter = std::vec::IntoIter<Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a AggregateFailure {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn aggregate_of(messages: &[&str]) -> AggregateFailure {
        messages.iter().copied().map(Failure::new).collect()
    }

    #[rstest]
    fn failure_equality_compares_variant_and_message() {
        assert_eq!(Failure::new("a"), Failure::new("a"));
        assert_ne!(Failure::new("a"), Failure::new("b"));

        let single = Failure::new("a");
        let aggregate = Failure::from(aggregate_of(&["a"]));
        assert_eq!(single.message(), aggregate.message());
        assert_ne!(single, aggregate);
    }

    #[rstest]
    fn failure_display_is_its_message() {
        assert_eq!(Failure::new("boom").to_string(), "boom");
        assert_eq!(Failure::from(aggregate_of(&["a", "b"])).to_string(), "a; b");
    }

    #[rstest]
    fn empty_aggregate_has_an_empty_message() {
        let aggregate = AggregateFailure::new();
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.message(), "");
    }

    #[rstest]
    fn aggregate_preserves_order_and_duplicates() {
        let aggregate = aggregate_of(&["x", "y", "x"]);
        assert_eq!(aggregate.len(), 3);
        assert_eq!(aggregate.message(), "x; y; x");
    }

    #[rstest]
    fn add_appends_a_single_failure() {
        let aggregate = aggregate_of(&["a"]).add(Failure::new("b")).unwrap();
        assert_eq!(
            aggregate.failures(),
            &[Failure::new("a"), Failure::new("b")]
        );
    }

    #[rstest]
    fn add_rejects_an_aggregate() {
        let nested = aggregate_of(&["y", "z"]);
        let error = aggregate_of(&["x"]).add(nested).unwrap_err();
        assert_eq!(
            error,
            ContractError::InvalidOperation {
                operation: "AggregateFailure::add",
                reason: "an aggregate cannot be added as a single child, use `combine`",
            }
        );
    }

    #[rstest]
    fn combine_concatenates_children() {
        let combined = aggregate_of(&["a", "b"]).combine(aggregate_of(&["c"]));
        assert_eq!(combined.message(), "a; b; c");
        assert_eq!(combined.len(), 3);
    }

    #[rstest]
    fn from_failures_flattens_nested_aggregates() {
        let aggregate = AggregateFailure::from_failures([
            Failure::new("a"),
            Failure::from(aggregate_of(&["b", "c"])),
            Failure::new("d"),
        ]);
        assert_eq!(aggregate.len(), 4);
        assert!(aggregate.iter().all(|failure| !failure.is_aggregate()));
    }

    #[rstest]
    #[case(Failure::new("a"), Failure::new("b"), "a; b", 2)]
    #[case(Failure::from(aggregate_of(&["a", "b"])), Failure::new("c"), "a; b; c", 3)]
    #[case(Failure::new("a"), Failure::from(aggregate_of(&["b", "c"])), "a; b; c", 3)]
    #[case(
        Failure::from(aggregate_of(&["a"])),
        Failure::from(aggregate_of(&["b"])),
        "a; b",
        2
    )]
    fn join_flattens_either_side(
        #[case] left: Failure,
        #[case] right: Failure,
        #[case] message: &str,
        #[case] children: usize,
    ) {
        let joined = left.join(right);
        let aggregate = joined.as_aggregate().unwrap();
        assert_eq!(aggregate.message(), message);
        assert_eq!(aggregate.len(), children);
    }

    #[rstest]
    fn join_is_associative() {
        let (a, b, c) = (Failure::new("a"), Failure::new("b"), Failure::new("c"));
        let left = a.clone().join(b.clone()).join(c.clone());
        let right = a.join(b.join(c));
        assert_eq!(left, right);
    }

    #[rstest]
    fn aggregate_equality_follows_the_message() {
        assert_eq!(aggregate_of(&["a", "b"]), aggregate_of(&["a", "b"]));
        assert_ne!(aggregate_of(&["a"]), aggregate_of(&["a", "b"]));
    }
}
