//! Sequence and nesting combinators for [`Outcome`].
//!
//! - [`Outcome::flatten`]: collapses one level of nesting.
//! - [`Successes`] / [`Failures`]: lazy projections of a sequence.
//! - [`extract_outcome`]: all-or-first-failure, short-circuiting.
//! - [`aggregate`]: reports every failure of a sequence of checks.

use std::iter::FusedIterator;

use super::Outcome;
use crate::failure::Failure;
use crate::unit::Unit;

impl<S, F> Outcome<Outcome<S, F>, F> {
    /// Removes one level of nesting. An outer failure wins over anything
    /// nested.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::failure("inner"));
    /// assert_eq!(nested.flatten(), Outcome::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<S, F> {
        self.bind(|inner| inner)
    }
}

// =============================================================================
// Projections
// =============================================================================

/// A lazy iterator over the success payloads of a sequence of outcomes.
///
/// Created by [`successes`] and [`OutcomeIteratorExt::successes`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Successes<I> {
    iterator: I,
}

impl<I, S, F> Iterator for Successes<I>
where
    I: Iterator<Item = Outcome<S, F>>,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        self.iterator
            .by_ref()
            .find_map(|outcome| outcome.success_slot().into_option())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}

impl<I, S, F> FusedIterator for Successes<I> where I: FusedIterator<Item = Outcome<S, F>> {}

/// A lazy iterator over the failure payloads of a sequence of outcomes.
///
/// Created by [`failures`] and [`OutcomeIteratorExt::failures`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Failures<I> {
    iterator: I,
}

impl<I, S, F> Iterator for Failures<I>
where
    I: Iterator<Item = Outcome<S, F>>,
{
    type Item = F;

    fn next(&mut self) -> Option<F> {
        self.iterator
            .by_ref()
            .find_map(|outcome| outcome.failure_slot().into_option())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iterator.size_hint().1)
    }
}

impl<I, S, F> FusedIterator for Failures<I> where I: FusedIterator<Item = Outcome<S, F>> {}

/// Returns a lazy sequence of the success payloads, skipping failures.
pub fn successes<I, S, F>(sequence: I) -> Successes<I::IntoIter>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    Successes {
        iterator: sequence.into_iter(),
    }
}

/// Returns a lazy sequence of the failure payloads, skipping successes.
///
/// ```rust
/// use maybe_result::{failures, Outcome};
///
/// let outcomes: [Outcome<i32, &str>; 3] =
///     [Outcome::failure("a"), Outcome::success(1), Outcome::failure("b")];
/// assert_eq!(failures(outcomes).collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
pub fn failures<I, S, F>(sequence: I) -> Failures<I::IntoIter>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    Failures {
        iterator: sequence.into_iter(),
    }
}

// =============================================================================
// Extraction
// =============================================================================

/// Turns a sequence of outcomes into an outcome of a `Vec`.
///
/// Returns the first failure, in sequence order, if there is one; the
/// elements after it are never pulled from the iterator. Otherwise returns
/// every success payload, in order.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{extract_outcome, Failure, Outcome};
///
/// let all: Vec<Outcome<i32, Failure>> = vec![Outcome::success(1), Outcome::success(2)];
/// assert_eq!(extract_outcome(all), Outcome::success(vec![1, 2]));
///
/// let mixed = vec![
///     Outcome::success(1),
///     Outcome::failure(Failure::new("second")),
///     Outcome::failure(Failure::new("third")),
/// ];
/// assert_eq!(extract_outcome(mixed), Outcome::failure(Failure::new("second")));
/// ```
pub fn extract_outcome<I, S, F>(sequence: I) -> Outcome<Vec<S>, F>
where
    I: IntoIterator<Item = Outcome<S, F>>,
{
    extract_outcome_into(sequence)
}

/// Like [`extract_outcome`], collecting the success payloads into any
/// `FromIterator` container.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeSet;
/// use maybe_result::{extract_outcome_into, Outcome};
///
/// let outcomes: Vec<Outcome<i32, String>> = vec![Outcome::success(3), Outcome::success(1)];
/// let set: Outcome<BTreeSet<i32>, String> = extract_outcome_into(outcomes);
/// assert_eq!(set, Outcome::success(BTreeSet::from([1, 3])));
/// ```
pub fn extract_outcome_into<C, I, S, F>(sequence: I) -> Outcome<C, F>
where
    I: IntoIterator<Item = Outcome<S, F>>,
    C: FromIterator<S>,
{
    let mut first_failure = None;
    let collected: C = sequence
        .into_iter()
        .enumerate()
        .map_while(|(index, outcome)| match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(failure) => {
                tracing::debug!(index, "extraction stopped at the first failure");
                first_failure = Some(failure);
                None
            }
        })
        .collect();

    match first_failure {
        Some(failure) => Outcome::Failure(failure),
        None => Outcome::Success(collected),
    }
}

/// Runs every check of a sequence and reports all of their failures.
///
/// - No failure: `Success(Unit)`.
/// - Exactly one failure: that failure, unchanged.
/// - Several failures: an [`AggregateFailure`](crate::AggregateFailure)
///   holding all of them in sequence order.
///
/// Unlike [`extract_outcome`] every element is consumed.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{aggregate, Failure, Outcome, Unit};
///
/// let checks: Vec<Outcome<Unit, Failure>> = vec![
///     Outcome::unit(),
///     Outcome::failure(Failure::new("too short")),
///     Outcome::failure(Failure::new("no digit")),
/// ];
/// let report = aggregate(checks).get_failure_unsafe();
/// assert_eq!(report.message(), "too short; no digit");
/// ```
pub fn aggregate<I, F>(sequence: I) -> Outcome<Unit, Failure>
where
    I: IntoIterator<Item = Outcome<Unit, F>>,
    F: Into<Failure>,
{
    sequence
        .into_iter()
        .fold(Outcome::unit(), |running, next| {
            running.combine_aggregate(next, |_, _| Unit)
        })
}

/// Iterator adapters for sequences of [`Outcome`]s.
pub trait OutcomeIteratorExt<S, F>: Iterator<Item = Outcome<S, F>> + Sized {
    /// Yields the success payloads, in order, skipping failures.
    ///
    /// ```rust
    /// use maybe_result::{Outcome, OutcomeIteratorExt};
    ///
    /// let outcomes: Vec<Outcome<i32, &str>> =
    ///     vec![Outcome::success(1), Outcome::failure("x"), Outcome::success(3)];
    /// assert_eq!(outcomes.into_iter().successes().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    fn successes(self) -> Successes<Self> {
        Successes { iterator: self }
    }

    /// Yields the failure payloads, in order, skipping successes.
    fn failures(self) -> Failures<Self> {
        Failures { iterator: self }
    }

    /// See [`extract_outcome`].
    fn extract_outcome(self) -> Outcome<Vec<S>, F> {
        extract_outcome(self)
    }

    /// See [`extract_outcome_into`].
    fn extract_outcome_into<C>(self) -> Outcome<C, F>
    where
        C: FromIterator<S>,
    {
        extract_outcome_into(self)
    }

    /// See [`aggregate`]. Success payloads are discarded, so any sequence of
    /// checks can be aggregated, not only `Outcome<Unit, F>`.
    fn aggregate(self) -> Outcome<Unit, Failure>
    where
        F: Into<Failure>,
    {
        aggregate(self.map(|outcome| outcome.map_success(|_| Unit)))
    }
}

impl<I, S, F> OutcomeIteratorExt<S, F> for I where I: Iterator<Item = Outcome<S, F>> {}
