//! Sequence combinators over asynchronous streams.
//!
//! The stream forms keep the ordering and short-circuit rules of their
//! iterator counterparts: [`OutcomeStreamExt::extract_outcome`] stops
//! polling the stream at the first failure, while
//! [`OutcomeStreamExt::aggregate`] drains it.

use std::future::{Future, ready};
use std::pin::pin;

use futures::{Stream, StreamExt};

use super::trace_step;
use crate::failure::Failure;
use crate::maybe::Maybe;
use crate::outcome::Outcome;
use crate::unit::Unit;

/// Stream adapters for streams of [`Maybe`]s.
pub trait MaybeStreamExt<T>: Stream<Item = Maybe<T>> + Sized {
    /// Yields the payload of every present element, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::{stream, StreamExt};
    /// use maybe_result::{Maybe, MaybeStreamExt};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let values: Vec<i32> = stream::iter([Maybe::some(1), Maybe::none(), Maybe::some(3)])
    ///     .somes()
    ///     .collect()
    ///     .await;
    /// assert_eq!(values, vec![1, 3]);
    /// # }
    /// ```
    fn somes(self) -> impl Stream<Item = T> {
        self.filter_map(|maybe| ready(maybe.into_option()))
    }
}

impl<St, T> MaybeStreamExt<T> for St where St: Stream<Item = Maybe<T>> {}

/// Stream adapters for streams of [`Outcome`]s.
pub trait OutcomeStreamExt<S, F>: Stream<Item = Outcome<S, F>> + Sized {
    /// Yields the success payloads, in order, skipping failures.
    fn successes(self) -> impl Stream<Item = S> {
        self.filter_map(|outcome| ready(outcome.success_slot().into_option()))
    }

    /// Yields the failure payloads, in order, skipping successes.
    fn failures(self) -> impl Stream<Item = F> {
        self.filter_map(|outcome| ready(outcome.failure_slot().into_option()))
    }

    /// Collects every success payload, or returns the first failure without
    /// polling the stream any further.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures::stream;
    /// use maybe_result::{Failure, Outcome, OutcomeStreamExt};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcomes = stream::iter([
    ///     Outcome::success(1),
    ///     Outcome::failure(Failure::new("broken")),
    ///     Outcome::success(3),
    /// ]);
    /// assert_eq!(outcomes.extract_outcome().await, Outcome::failure(Failure::new("broken")));
    /// # }
    /// ```
    fn extract_outcome(self) -> impl Future<Output = Outcome<Vec<S>, F>> {
        self.extract_outcome_into::<Vec<S>>()
    }

    /// Like [`extract_outcome`](Self::extract_outcome), collecting the
    /// success payloads into any extendable collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    ///
    /// use futures::stream;
    /// use maybe_result::{Outcome, OutcomeStreamExt};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let outcomes = stream::iter([Outcome::<i32, String>::success(3), Outcome::success(1)]);
    /// let set: Outcome<BTreeSet<i32>, String> = outcomes.extract_outcome_into().await;
    /// assert_eq!(set, Outcome::success(BTreeSet::from([1, 3])));
    /// # }
    /// ```
    fn extract_outcome_into<C>(self) -> impl Future<Output = Outcome<C, F>>
    where
        C: Default + Extend<S>,
    {
        async move {
            let mut stream = pin!(self);
            let mut collected = C::default();
            let mut index = 0_usize;
            while let Some(outcome) = stream.next().await {
                match outcome {
                    Outcome::Success(value) => collected.extend(Some(value)),
                    Outcome::Failure(failure) => {
                        tracing::debug!(index, "stream extraction stopped at the first failure");
                        return Outcome::Failure(failure);
                    }
                }
                index += 1;
            }
            trace_step("stream", "extract_outcome");
            Outcome::Success(collected)
        }
    }

    /// Drains the stream and reports every failure, as
    /// [`aggregate`](crate::aggregate) does for iterators. Success payloads
    /// are discarded.
    fn aggregate(self) -> impl Future<Output = Outcome<Unit, Failure>>
    where
        F: Into<Failure>,
    {
        self.fold(Outcome::unit(), |running, next| {
            ready(running.combine_aggregate(next, |_, _| Unit))
        })
    }
}

impl<St, S, F> OutcomeStreamExt<S, F> for St where St: Stream<Item = Outcome<S, F>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    #[rstest]
    #[tokio::test]
    async fn somes_skips_absent_elements() {
        let values: Vec<i32> = stream::iter([Maybe::none(), Maybe::some(2), Maybe::some(4)])
            .somes()
            .collect()
            .await;
        assert_eq!(values, vec![2, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn successes_and_failures_partition_the_stream() {
        let outcomes = || stream::iter([Outcome::success(1), Outcome::failure("x"), Outcome::success(2)]);
        let successes: Vec<i32> = outcomes().successes().collect().await;
        let failures: Vec<&str> = outcomes().failures().collect().await;
        assert_eq!(successes, vec![1, 2]);
        assert_eq!(failures, vec!["x"]);
    }

    #[rstest]
    #[tokio::test]
    async fn extract_outcome_stops_polling_at_the_first_failure() {
        let pulled = Cell::new(0);
        let outcomes = stream::iter(0..5).map(|n| {
            pulled.set(pulled.get() + 1);
            if n == 2 {
                Outcome::failure(Failure::new("third"))
            } else {
                Outcome::success(n)
            }
        });
        assert_eq!(
            outcomes.extract_outcome().await,
            Outcome::failure(Failure::new("third"))
        );
        assert_eq!(pulled.get(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn extract_outcome_collects_all_successes() {
        let outcomes = stream::iter([Outcome::<i32, Failure>::success(1), Outcome::success(2)]);
        assert_eq!(outcomes.extract_outcome().await, Outcome::success(vec![1, 2]));
    }

    #[rstest]
    #[tokio::test]
    async fn aggregate_reports_every_failure() {
        let checks = stream::iter([
            Outcome::<Unit, &str>::failure("a"),
            Outcome::unit(),
            Outcome::failure("b"),
        ]);
        let report = checks.aggregate().await;
        assert_eq!(report.get_failure_unsafe().message(), "a; b");
    }

    #[rstest]
    #[tokio::test]
    async fn extract_outcome_into_collects_into_a_set() {
        let outcomes = stream::iter([
            Outcome::<i32, Failure>::success(3),
            Outcome::success(1),
            Outcome::success(3),
        ]);
        let set: Outcome<BTreeSet<i32>, Failure> = outcomes.extract_outcome_into().await;
        assert_eq!(set, Outcome::success(BTreeSet::from([1, 3])));
    }

    #[rstest]
    #[tokio::test]
    async fn extract_outcome_into_stops_polling_at_the_first_failure() {
        let pulled = Cell::new(0);
        let outcomes = stream::iter(0..4).map(|n| {
            pulled.set(pulled.get() + 1);
            if n == 1 {
                Outcome::failure(Failure::new("second"))
            } else {
                Outcome::success(n)
            }
        });
        let set: Outcome<BTreeSet<i32>, Failure> = outcomes.extract_outcome_into().await;
        assert_eq!(set, Outcome::failure(Failure::new("second")));
        assert_eq!(pulled.get(), 2);
    }
}
