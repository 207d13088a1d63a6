//! Lifting of the `Outcome` combinators over pending computations.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::maybe::PendingMaybe;
use super::trace_step;
use crate::failure::Failure;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

const FAMILY: &str = "outcome";

pin_project! {
    /// A pending computation of an [`Outcome`].
    ///
    /// The counterpart of [`PendingMaybe`](super::PendingMaybe) for the
    /// success/failure container: every combinator awaits the source, then
    /// applies the synchronous `Outcome` combinator, awaiting the function's
    /// own future for the `_async` forms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome, OutcomeFutureExt};
    ///
    /// async fn fetch(id: u32) -> Outcome<String, Failure> {
    ///     if id == 0 {
    ///         Outcome::failure(Failure::new("no such record"))
    ///     } else {
    ///         Outcome::success(format!("record {id}"))
    ///     }
    /// }
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let length = fetch(7)
    ///     .into_pending_outcome()
    ///     .map_success(|record| record.len())
    ///     .await;
    /// assert_eq!(length, Outcome::success(8));
    ///
    /// let failed = fetch(0)
    ///     .into_pending_outcome()
    ///     .bind_async(|record| fetch(record.len() as u32))
    ///     .await;
    /// assert!(failed.is_failure());
    /// # }
    /// ```
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct PendingOutcome<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> PendingOutcome<Fut> {
    /// Wraps a future whose output is an `Outcome`.
    #[inline]
    pub const fn new(future: Fut) -> Self {
        Self { future }
    }

    /// Returns the wrapped future.
    #[inline]
    pub fn into_inner(self) -> Fut {
        self.future
    }
}

impl<Fut: Future> Future for PendingOutcome<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

// =============================================================================
// Resolved Source, Asynchronous Function
// =============================================================================

impl<S, F> Outcome<S, F> {
    /// Lifts this value into an already-completed [`PendingOutcome`].
    #[inline]
    pub fn into_pending(self) -> PendingOutcome<Ready<Self>> {
        PendingOutcome::new(ready(self))
    }

    /// Like [`bi_bind`](Self::bi_bind), awaiting the future returned by
    /// whichever function runs.
    pub fn bi_bind_async<B, G, OnSuccess, OnFailure, SuccessFut, FailureFut>(
        self,
        bind_success: OnSuccess,
        bind_failure: OnFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, G>>>
    where
        OnSuccess: FnOnce(S) -> SuccessFut,
        OnFailure: FnOnce(F) -> FailureFut,
        SuccessFut: Future<Output = Outcome<B, G>>,
        FailureFut: Future<Output = Outcome<B, G>>,
    {
        PendingOutcome::new(async move {
            let bound = match self {
                Self::Success(value) => bind_success(value).await,
                Self::Failure(failure) => bind_failure(failure).await,
            };
            trace_step(FAMILY, "bi_bind_async");
            bound
        })
    }

    /// Like [`bind`](Self::bind), awaiting the future returned by `function`.
    /// A failure propagates without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let doubled = Outcome::<i32, Failure>::success(21)
    ///     .bind_async(|x| async move { Outcome::success(x * 2) })
    ///     .await;
    /// assert_eq!(doubled, Outcome::success(42));
    /// # }
    /// ```
    pub fn bind_async<B, Function, BindFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, F>>>
    where
        Function: FnOnce(S) -> BindFut,
        BindFut: Future<Output = Outcome<B, F>>,
    {
        self.bi_bind_async(function, |failure| ready(Outcome::Failure(failure)))
    }

    /// Like [`bind_failure`](Self::bind_failure), awaiting the future
    /// returned by `function`. A success passes through without invoking it.
    pub fn bind_failure_async<G, Function, BindFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, G>>>
    where
        Function: FnOnce(F) -> BindFut,
        BindFut: Future<Output = Outcome<S, G>>,
    {
        self.bi_bind_async(|value| ready(Outcome::Success(value)), function)
    }

    /// Like [`map_success`](Self::map_success), awaiting the future returned
    /// by `function`.
    pub fn map_success_async<B, Function, MapFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, F>>>
    where
        Function: FnOnce(S) -> MapFut,
        MapFut: Future<Output = B>,
    {
        self.bind_async(|value| async move { Outcome::Success(function(value).await) })
    }

    /// Like [`map_failure`](Self::map_failure), awaiting the future returned
    /// by `function`.
    pub fn map_failure_async<G, Function, MapFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, G>>>
    where
        Function: FnOnce(F) -> MapFut,
        MapFut: Future<Output = G>,
    {
        self.bind_failure_async(|failure| async move { Outcome::Failure(function(failure).await) })
    }

    /// Like [`bimap`](Self::bimap), awaiting the future returned by whichever
    /// function matches the variant.
    pub fn bimap_async<B, G, MapSuccess, MapFailure, SuccessFut, FailureFut>(
        self,
        map_success: MapSuccess,
        map_failure: MapFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, G>>>
    where
        MapSuccess: FnOnce(S) -> SuccessFut,
        MapFailure: FnOnce(F) -> FailureFut,
        SuccessFut: Future<Output = B>,
        FailureFut: Future<Output = G>,
    {
        self.bi_bind_async(
            |value| async move { Outcome::Success(map_success(value).await) },
            |failure| async move { Outcome::Failure(map_failure(failure).await) },
        )
    }

    /// Like [`fold`](Self::fold), awaiting whichever branch function runs.
    pub async fn fold_async<U, OnSuccess, OnFailure, SuccessFut, FailureFut>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> U
    where
        OnSuccess: FnOnce(S) -> SuccessFut,
        OnFailure: FnOnce(F) -> FailureFut,
        SuccessFut: Future<Output = U>,
        FailureFut: Future<Output = U>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(failure) => on_failure(failure).await,
        }
    }

    /// Like [`if_success`](Self::if_success), awaiting the side effect before
    /// handing `self` back.
    pub fn if_success_async<Action, ActionFut>(
        self,
        action: Action,
    ) -> PendingOutcome<impl Future<Output = Self>>
    where
        Action: FnOnce(&S) -> ActionFut,
        ActionFut: Future<Output = ()>,
    {
        PendingOutcome::new(async move {
            if let Self::Success(value) = &self {
                action(value).await;
            }
            trace_step(FAMILY, "if_success_async");
            self
        })
    }

    /// Like [`if_failure`](Self::if_failure), awaiting the side effect before
    /// handing `self` back.
    pub fn if_failure_async<Action, ActionFut>(
        self,
        action: Action,
    ) -> PendingOutcome<impl Future<Output = Self>>
    where
        Action: FnOnce(&F) -> ActionFut,
        ActionFut: Future<Output = ()>,
    {
        PendingOutcome::new(async move {
            if let Self::Failure(failure) = &self {
                action(failure).await;
            }
            trace_step(FAMILY, "if_failure_async");
            self
        })
    }
}

// =============================================================================
// Pending Source
// =============================================================================

impl<Fut, S, F> PendingOutcome<Fut>
where
    Fut: Future<Output = Outcome<S, F>>,
{
    /// Applies [`Outcome::bi_bind`] once the source resolves.
    pub fn bi_bind<B, G, OnSuccess, OnFailure>(
        self,
        bind_success: OnSuccess,
        bind_failure: OnFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, G>>>
    where
        OnSuccess: FnOnce(S) -> Outcome<B, G>,
        OnFailure: FnOnce(F) -> Outcome<B, G>,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let outcome = source.await;
            trace_step(FAMILY, "bi_bind");
            outcome.bi_bind(bind_success, bind_failure)
        })
    }

    /// Awaits the source, then runs [`Outcome::bi_bind_async`].
    pub fn bi_bind_async<B, G, OnSuccess, OnFailure, SuccessFut, FailureFut>(
        self,
        bind_success: OnSuccess,
        bind_failure: OnFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, G>>>
    where
        OnSuccess: FnOnce(S) -> SuccessFut,
        OnFailure: FnOnce(F) -> FailureFut,
        SuccessFut: Future<Output = Outcome<B, G>>,
        FailureFut: Future<Output = Outcome<B, G>>,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            source
                .await
                .bi_bind_async(bind_success, bind_failure)
                .await
        })
    }

    /// Applies [`Outcome::bind`] once the source resolves.
    pub fn bind<B, Function>(self, function: Function) -> PendingOutcome<impl Future<Output = Outcome<B, F>>>
    where
        Function: FnOnce(S) -> Outcome<B, F>,
    {
        self.bi_bind(function, Outcome::Failure)
    }

    /// Awaits the source, then runs [`Outcome::bind_async`].
    pub fn bind_async<B, Function, BindFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, F>>>
    where
        Function: FnOnce(S) -> BindFut,
        BindFut: Future<Output = Outcome<B, F>>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.bind_async(function).await })
    }

    /// Applies [`Outcome::bind_failure`] once the source resolves.
    pub fn bind_failure<G, Function>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, G>>>
    where
        Function: FnOnce(F) -> Outcome<S, G>,
    {
        self.bi_bind(Outcome::Success, function)
    }

    /// Awaits the source, then runs [`Outcome::bind_failure_async`].
    pub fn bind_failure_async<G, Function, BindFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, G>>>
    where
        Function: FnOnce(F) -> BindFut,
        BindFut: Future<Output = Outcome<S, G>>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.bind_failure_async(function).await })
    }

    /// Applies [`Outcome::bimap`] once the source resolves.
    pub fn bimap<B, G, MapSuccess, MapFailure>(
        self,
        map_success: MapSuccess,
        map_failure: MapFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, G>>>
    where
        MapSuccess: FnOnce(S) -> B,
        MapFailure: FnOnce(F) -> G,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let outcome = source.await;
            trace_step(FAMILY, "bimap");
            outcome.bimap(map_success, map_failure)
        })
    }

    /// Awaits the source, then runs [`Outcome::bimap_async`].
    pub fn bimap_async<B, G, MapSuccess, MapFailure, SuccessFut, FailureFut>(
        self,
        map_success: MapSuccess,
        map_failure: MapFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, G>>>
    where
        MapSuccess: FnOnce(S) -> SuccessFut,
        MapFailure: FnOnce(F) -> FailureFut,
        SuccessFut: Future<Output = B>,
        FailureFut: Future<Output = G>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.bimap_async(map_success, map_failure).await })
    }

    /// Applies [`Outcome::map_success`] once the source resolves.
    pub fn map_success<B, Function>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, F>>>
    where
        Function: FnOnce(S) -> B,
    {
        self.bimap(function, |failure| failure)
    }

    /// Awaits the source, then runs [`Outcome::map_success_async`].
    pub fn map_success_async<B, Function, MapFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<B, F>>>
    where
        Function: FnOnce(S) -> MapFut,
        MapFut: Future<Output = B>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.map_success_async(function).await })
    }

    /// Applies [`Outcome::map_failure`] once the source resolves.
    pub fn map_failure<G, Function>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, G>>>
    where
        Function: FnOnce(F) -> G,
    {
        self.bimap(|value| value, function)
    }

    /// Awaits the source, then runs [`Outcome::map_failure_async`].
    pub fn map_failure_async<G, Function, MapFut>(
        self,
        function: Function,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, G>>>
    where
        Function: FnOnce(F) -> MapFut,
        MapFut: Future<Output = G>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.map_failure_async(function).await })
    }

    /// Applies [`Outcome::fold`] once the source resolves.
    pub async fn fold<U, OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure) -> U
    where
        OnSuccess: FnOnce(S) -> U,
        OnFailure: FnOnce(F) -> U,
    {
        let outcome = self.future.await;
        trace_step(FAMILY, "fold");
        outcome.fold(on_success, on_failure)
    }

    /// Awaits the source, then runs [`Outcome::fold_async`].
    pub async fn fold_async<U, OnSuccess, OnFailure, SuccessFut, FailureFut>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> U
    where
        OnSuccess: FnOnce(S) -> SuccessFut,
        OnFailure: FnOnce(F) -> FailureFut,
        SuccessFut: Future<Output = U>,
        FailureFut: Future<Output = U>,
    {
        self.future.await.fold_async(on_success, on_failure).await
    }

    /// Applies [`Outcome::success_or_else`] once the source resolves.
    pub async fn success_or_else<Function>(self, on_failure: Function) -> S
    where
        Function: FnOnce(F) -> S,
    {
        self.future.await.success_or_else(on_failure)
    }

    /// Applies [`Outcome::success_or`] once the source resolves.
    pub async fn success_or(self, fallback: S) -> S {
        self.future.await.success_or(fallback)
    }

    /// Applies [`Outcome::failure_or_else`] once the source resolves.
    pub async fn failure_or_else<Function>(self, on_success: Function) -> F
    where
        Function: FnOnce(S) -> F,
    {
        self.future.await.failure_or_else(on_success)
    }

    /// Applies [`Outcome::failure_or`] once the source resolves.
    pub async fn failure_or(self, fallback: F) -> F {
        self.future.await.failure_or(fallback)
    }

    /// Applies [`Outcome::if_success`] once the source resolves.
    pub fn if_success<Action>(self, action: Action) -> PendingOutcome<impl Future<Output = Outcome<S, F>>>
    where
        Action: FnOnce(&S),
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let outcome = source.await;
            trace_step(FAMILY, "if_success");
            outcome.if_success(action)
        })
    }

    /// Awaits the source, then runs [`Outcome::if_success_async`].
    pub fn if_success_async<Action, ActionFut>(
        self,
        action: Action,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, F>>>
    where
        Action: FnOnce(&S) -> ActionFut,
        ActionFut: Future<Output = ()>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.if_success_async(action).await })
    }

    /// Applies [`Outcome::if_failure`] once the source resolves.
    pub fn if_failure<Action>(self, action: Action) -> PendingOutcome<impl Future<Output = Outcome<S, F>>>
    where
        Action: FnOnce(&F),
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let outcome = source.await;
            trace_step(FAMILY, "if_failure");
            outcome.if_failure(action)
        })
    }

    /// Awaits the source, then runs [`Outcome::if_failure_async`].
    pub fn if_failure_async<Action, ActionFut>(
        self,
        action: Action,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, F>>>
    where
        Action: FnOnce(&F) -> ActionFut,
        ActionFut: Future<Output = ()>,
    {
        let source = self.future;
        PendingOutcome::new(async move { source.await.if_failure_async(action).await })
    }

    /// Applies [`Outcome::execute`] once the source resolves.
    pub fn execute<OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<S, F>>>
    where
        OnSuccess: FnOnce(&S),
        OnFailure: FnOnce(&F),
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let outcome = source.await;
            trace_step(FAMILY, "execute");
            outcome.execute(on_success, on_failure)
        })
    }

    /// Applies [`Outcome::combine`] once both sources resolve, this one
    /// first.
    pub fn combine<S2, S3, Other, CombineSuccess>(
        self,
        other: Other,
        combine_success: CombineSuccess,
    ) -> PendingOutcome<impl Future<Output = Outcome<S3, F>>>
    where
        Other: Future<Output = Outcome<S2, F>>,
        CombineSuccess: FnOnce(S, S2) -> S3,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let left = source.await;
            let right = other.await;
            trace_step(FAMILY, "combine");
            left.combine(right, combine_success)
        })
    }

    /// Applies [`Outcome::combine_with`] once both sources resolve, this one
    /// first.
    pub fn combine_with<S2, F2, S3, F3, Other, CombineSuccess, ConvertThis, ConvertOther, CombineFailure>(
        self,
        other: Other,
        combine_success: CombineSuccess,
        convert_this_failure: ConvertThis,
        convert_other_failure: ConvertOther,
        combine_failure: CombineFailure,
    ) -> PendingOutcome<impl Future<Output = Outcome<S3, F3>>>
    where
        Other: Future<Output = Outcome<S2, F2>>,
        CombineSuccess: FnOnce(S, S2) -> S3,
        ConvertThis: FnOnce(F) -> F3,
        ConvertOther: FnOnce(F2) -> F3,
        CombineFailure: FnOnce(F3, F3) -> F3,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let left = source.await;
            let right = other.await;
            trace_step(FAMILY, "combine_with");
            left.combine_with(
                right,
                combine_success,
                convert_this_failure,
                convert_other_failure,
                combine_failure,
            )
        })
    }

    /// Applies [`Outcome::combine_aggregate`] once both sources resolve,
    /// this one first.
    pub fn combine_aggregate<S2, F2, S3, Other, CombineSuccess>(
        self,
        other: Other,
        combine_success: CombineSuccess,
    ) -> PendingOutcome<impl Future<Output = Outcome<S3, Failure>>>
    where
        F: Into<Failure>,
        F2: Into<Failure>,
        Other: Future<Output = Outcome<S2, F2>>,
        CombineSuccess: FnOnce(S, S2) -> S3,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let left = source.await;
            let right = other.await;
            trace_step(FAMILY, "combine_aggregate");
            left.combine_aggregate(right, combine_success)
        })
    }

    /// Projects the success slot once the source resolves.
    pub fn success_slot(self) -> PendingMaybe<impl Future<Output = Maybe<S>>> {
        let source = self.future;
        PendingMaybe::new(async move { source.await.success_slot() })
    }

    /// Projects the failure slot once the source resolves.
    pub fn failure_slot(self) -> PendingMaybe<impl Future<Output = Maybe<F>>> {
        let source = self.future;
        PendingMaybe::new(async move { source.await.failure_slot() })
    }
}

impl<Fut, S, F> PendingOutcome<Fut>
where
    Fut: Future<Output = Outcome<Outcome<S, F>, F>>,
{
    /// Applies [`Outcome::flatten`] once the source resolves.
    pub fn flatten(self) -> PendingOutcome<impl Future<Output = Outcome<S, F>>> {
        let source = self.future;
        PendingOutcome::new(async move { source.await.flatten() })
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Adapts any future of an [`Outcome`] into a [`PendingOutcome`].
pub trait OutcomeFutureExt<S, F>: Future<Output = Outcome<S, F>> + Sized {
    /// Wraps this future so the `Outcome` combinators can be chained on it.
    fn into_pending_outcome(self) -> PendingOutcome<Self> {
        PendingOutcome::new(self)
    }
}

impl<Fut, S, F> OutcomeFutureExt<S, F> for Fut where Fut: Future<Output = Outcome<S, F>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::{Cell, RefCell};

    type Checked<S> = Outcome<S, Failure>;

    fn failed<S>(message: &str) -> Checked<S> {
        Outcome::failure(Failure::new(message))
    }

    #[rstest]
    #[case(Checked::success(4))]
    #[case(failed("x"))]
    #[tokio::test]
    async fn lifted_bind_matches_synchronous_bind(#[case] outcome: Checked<i32>) {
        let half = |x: i32| Checked::success(x / 2);
        let lifted = outcome.clone().into_pending().bind(half).await;
        let lifted_async = outcome
            .clone()
            .into_pending()
            .bind_async(|x| async move { half(x) })
            .await;
        assert_eq!(lifted, outcome.clone().bind(half));
        assert_eq!(lifted_async, outcome.bind(half));
    }

    #[rstest]
    #[tokio::test]
    async fn failure_short_circuits_the_async_chain() {
        let calls = Cell::new(0);
        let result = failed::<i32>("early")
            .into_pending()
            .bind_async(|x| {
                calls.set(calls.get() + 1);
                async move { Checked::success(x) }
            })
            .map_success(|x| {
                calls.set(calls.get() + 1);
                x
            })
            .await;
        assert_eq!(result, failed("early"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn failure_channel_can_be_rescued_asynchronously() {
        let rescued: Checked<i32> = failed::<i32>("x")
            .into_pending()
            .bind_failure_async(|_| async { Outcome::success(0) })
            .await;
        assert_eq!(rescued, Outcome::success(0));
    }

    #[rstest]
    #[tokio::test]
    async fn map_failure_async_only_touches_the_failure() {
        let mapped: Outcome<i32, usize> = failed::<i32>("abc")
            .map_failure_async(|failure| async move { failure.message().len() })
            .await;
        assert_eq!(mapped, Outcome::failure(3));

        let untouched: Outcome<i32, usize> = Checked::success(1)
            .map_failure_async(|failure| async move { failure.message().len() })
            .await;
        assert_eq!(untouched, Outcome::success(1));
    }

    #[rstest]
    #[tokio::test]
    async fn bimap_async_runs_only_the_matching_function() {
        let log = RefCell::new(Vec::new());
        let calls = &log;
        let map_both = move |outcome: Checked<i32>| {
            outcome.into_pending().bimap_async(
                move |value| {
                    calls.borrow_mut().push("success");
                    async move { value * 10 }
                },
                move |failure: Failure| {
                    calls.borrow_mut().push("failure");
                    async move { failure.message().len() }
                },
            )
        };

        assert_eq!(map_both(Checked::success(2)).await, Outcome::success(20));
        assert_eq!(map_both(failed("four")).await, Outcome::failure(4));
        assert_eq!(*log.borrow(), vec!["success", "failure"]);
    }

    #[rstest]
    #[tokio::test]
    async fn steps_run_in_the_order_written() {
        let log = RefCell::new(Vec::new());
        let _ = async { Checked::success(1) }
            .into_pending_outcome()
            .if_success(|_| log.borrow_mut().push(1))
            .map_success_async(|x| {
                log.borrow_mut().push(2);
                async move { x }
            })
            .execute(|_| log.borrow_mut().push(3), |_| log.borrow_mut().push(-1))
            .await;
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[rstest]
    #[tokio::test]
    async fn combine_aggregate_joins_both_pending_failures() {
        let joined = failed::<i32>("a")
            .into_pending()
            .combine_aggregate(async { failed::<i32>("b") }, |a, b| a + b)
            .await;
        assert_eq!(joined.get_failure_unsafe().message(), "a; b");
    }

    #[rstest]
    #[tokio::test]
    async fn value_collapsing_folds() {
        assert_eq!(Checked::success(2).into_pending().success_or(0).await, 2);
        assert_eq!(failed::<i32>("x").into_pending().success_or(0).await, 0);
        let text = failed::<i32>("boom")
            .into_pending()
            .fold(|x| x.to_string(), |failure| failure.message().into_owned())
            .await;
        assert_eq!(text, "boom");
    }

    #[rstest]
    #[tokio::test]
    async fn slots_cross_into_the_maybe_family() {
        let slot = Checked::success(5).into_pending().success_slot().map(|x| x + 1).await;
        assert_eq!(slot, Maybe::some(6));
    }
}
