//! Lifting of the `Maybe` combinators over pending computations.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::outcome::PendingOutcome;
use super::trace_step;
use crate::maybe::{GetMaybe, Maybe};
use crate::outcome::Outcome;

const FAMILY: &str = "maybe";

pin_project! {
    /// A pending computation of a [`Maybe`].
    ///
    /// `PendingMaybe` is itself a [`Future`], so it can be awaited directly.
    /// Its combinators mirror the synchronous ones on `Maybe`: each returns a
    /// new `PendingMaybe` that awaits the source, then applies the synchronous
    /// combinator. Methods ending in `_async` take a function returning a
    /// future, which is awaited before the step completes.
    ///
    /// Nothing runs until the outermost future is polled, and the steps of a
    /// chain run strictly one after the other. Dropping the future cancels
    /// the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Maybe, MaybeFutureExt};
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let lookup = async { Maybe::some(20) };
    ///
    /// let answer = lookup
    ///     .into_pending_maybe()
    ///     .map(|value| value * 2)
    ///     .bind_async(|value| async move { Maybe::some(value + 2) })
    ///     .await;
    /// assert_eq!(answer, Maybe::some(42));
    /// # }
    /// ```
    #[derive(Debug)]
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct PendingMaybe<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> PendingMaybe<Fut> {
    /// Wraps a future whose output is a `Maybe`.
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

impl<Fut: Future> Future for PendingMaybe<Fut> {
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

/// Awaits the future held by a `Maybe`, if any.
async fn settle<Fut: Future>(pending: Maybe<Fut>) -> Maybe<Fut::Output> {
    match pending {
        Maybe::Some(future) => Maybe::Some(future.await),
        Maybe::None => Maybe::None,
    }
}

// =============================================================================
// Resolved Source, Asynchronous Function
// =============================================================================

impl<T> Maybe<T> {
    /// Lifts this value into an already-completed [`PendingMaybe`].
    #[inline]
    pub fn into_pending(self) -> PendingMaybe<Ready<Self>> {
        PendingMaybe::new(ready(self))
    }

    /// Like [`map`](Self::map), awaiting the future returned by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let length = Maybe::some("four").map_async(|text| async move { text.len() }).await;
    /// assert_eq!(length, Maybe::some(4));
    /// # }
    /// ```
    pub fn map_async<U, Function, Fut>(
        self,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Maybe<U>>>
    where
        Function: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        PendingMaybe::new(async move {
            let mapped = settle(self.map(function)).await;
            trace_step(FAMILY, "map_async");
            mapped
        })
    }

    /// Like [`bind`](Self::bind), awaiting the future returned by `function`.
    pub fn bind_async<U, Function, Fut>(
        self,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Maybe<U>>>
    where
        Function: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        PendingMaybe::new(async move {
            let bound = settle(self.map(function)).await.flatten();
            trace_step(FAMILY, "bind_async");
            bound
        })
    }

    /// Like [`bind_none`](Self::bind_none), awaiting the replacement
    /// computation. `function` runs only when this is `None`.
    pub fn bind_none_async<Function, Fut>(
        self,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Self>>
    where
        Function: FnOnce() -> Fut,
        Fut: Future<Output = Self>,
    {
        PendingMaybe::new(async move {
            let replaced = match self {
                Self::Some(value) => Self::Some(value),
                Self::None => function().await,
            };
            trace_step(FAMILY, "bind_none_async");
            replaced
        })
    }

    /// Like [`fold`](Self::fold), awaiting whichever branch function runs.
    pub async fn fold_async<U, OnSome, OnNone, SomeFut, NoneFut>(
        self,
        on_some: OnSome,
        on_none: OnNone,
    ) -> U
    where
        OnSome: FnOnce(T) -> SomeFut,
        OnNone: FnOnce() -> NoneFut,
        SomeFut: Future<Output = U>,
        NoneFut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => on_none().await,
        }
    }

    /// Like [`fold_or`](Self::fold_or), awaiting `on_some` when a value is
    /// present.
    pub async fn fold_or_async<U, OnSome, SomeFut>(self, on_some: OnSome, fallback: U) -> U
    where
        OnSome: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = U>,
    {
        match self {
            Self::Some(value) => on_some(value).await,
            Self::None => fallback,
        }
    }

    /// Like [`if_some`](Self::if_some), awaiting the side effect before
    /// handing `self` back.
    pub fn if_some_async<Action, Fut>(self, action: Action) -> PendingMaybe<impl Future<Output = Self>>
    where
        Action: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        PendingMaybe::new(async move {
            if let Self::Some(value) = &self {
                action(value).await;
            }
            trace_step(FAMILY, "if_some_async");
            self
        })
    }

    /// Like [`if_none`](Self::if_none), awaiting the side effect before
    /// handing `self` back.
    pub fn if_none_async<Action, Fut>(self, action: Action) -> PendingMaybe<impl Future<Output = Self>>
    where
        Action: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        PendingMaybe::new(async move {
            if self.is_none() {
                action().await;
            }
            trace_step(FAMILY, "if_none_async");
            self
        })
    }
}

// =============================================================================
// Pending Source
// =============================================================================

impl<Fut, T> PendingMaybe<Fut>
where
    Fut: Future<Output = Maybe<T>>,
{
    /// Applies [`Maybe::map`] once the source resolves.
    pub fn map<U, Function>(self, function: Function) -> PendingMaybe<impl Future<Output = Maybe<U>>>
    where
        Function: FnOnce(T) -> U,
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "map");
            maybe.map(function)
        })
    }

    /// Awaits the source, then runs [`Maybe::map_async`].
    pub fn map_async<U, Function, MapFut>(
        self,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Maybe<U>>>
    where
        Function: FnOnce(T) -> MapFut,
        MapFut: Future<Output = U>,
    {
        let source = self.future;
        PendingMaybe::new(async move { source.await.map_async(function).await })
    }

    /// Applies [`Maybe::bind`] once the source resolves.
    pub fn bind<U, Function>(self, function: Function) -> PendingMaybe<impl Future<Output = Maybe<U>>>
    where
        Function: FnOnce(T) -> Maybe<U>,
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "bind");
            maybe.bind(function)
        })
    }

    /// Awaits the source, then runs [`Maybe::bind_async`].
    pub fn bind_async<U, Function, BindFut>(
        self,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Maybe<U>>>
    where
        Function: FnOnce(T) -> BindFut,
        BindFut: Future<Output = Maybe<U>>,
    {
        let source = self.future;
        PendingMaybe::new(async move { source.await.bind_async(function).await })
    }

    /// Applies [`Maybe::bind_none`] once the source resolves.
    pub fn bind_none<Function>(self, function: Function) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        Function: FnOnce() -> Maybe<T>,
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "bind_none");
            maybe.bind_none(function)
        })
    }

    /// Awaits the source, then runs [`Maybe::bind_none_async`].
    pub fn bind_none_async<Function, NoneFut>(
        self,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        Function: FnOnce() -> NoneFut,
        NoneFut: Future<Output = Maybe<T>>,
    {
        let source = self.future;
        PendingMaybe::new(async move { source.await.bind_none_async(function).await })
    }

    /// Applies [`Maybe::bind_none_value`] once the source resolves.
    pub fn bind_none_value(self, replacement: Maybe<T>) -> PendingMaybe<impl Future<Output = Maybe<T>>> {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "bind_none_value");
            maybe.bind_none_value(replacement)
        })
    }

    /// Applies [`Maybe::filter`] once the source resolves.
    pub fn filter<Predicate>(self, predicate: Predicate) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        Predicate: FnOnce(&T) -> bool,
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "filter");
            maybe.filter(predicate)
        })
    }

    /// Applies [`Maybe::combine`] once both sources resolve.
    ///
    /// The sources are awaited one after the other, this one first. Pass
    /// [`Maybe::into_pending`] to combine with an already-resolved value.
    pub fn combine<U, V, Other, Function>(
        self,
        other: Other,
        function: Function,
    ) -> PendingMaybe<impl Future<Output = Maybe<V>>>
    where
        Other: Future<Output = Maybe<U>>,
        Function: FnOnce(T, U) -> V,
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let left = source.await;
            let right = other.await;
            trace_step(FAMILY, "combine");
            left.combine(right, function)
        })
    }

    /// Applies [`Maybe::fold`] once the source resolves.
    pub async fn fold<U, OnSome, OnNone>(self, on_some: OnSome, on_none: OnNone) -> U
    where
        OnSome: FnOnce(T) -> U,
        OnNone: FnOnce() -> U,
    {
        let maybe = self.future.await;
        trace_step(FAMILY, "fold");
        maybe.fold(on_some, on_none)
    }

    /// Awaits the source, then runs [`Maybe::fold_async`].
    pub async fn fold_async<U, OnSome, OnNone, SomeFut, NoneFut>(
        self,
        on_some: OnSome,
        on_none: OnNone,
    ) -> U
    where
        OnSome: FnOnce(T) -> SomeFut,
        OnNone: FnOnce() -> NoneFut,
        SomeFut: Future<Output = U>,
        NoneFut: Future<Output = U>,
    {
        self.future.await.fold_async(on_some, on_none).await
    }

    /// Applies [`Maybe::fold_or`] once the source resolves.
    pub async fn fold_or<U, OnSome>(self, on_some: OnSome, fallback: U) -> U
    where
        OnSome: FnOnce(T) -> U,
    {
        let maybe = self.future.await;
        trace_step(FAMILY, "fold_or");
        maybe.fold_or(on_some, fallback)
    }

    /// Awaits the source, then runs [`Maybe::fold_or_async`].
    pub async fn fold_or_async<U, OnSome, SomeFut>(self, on_some: OnSome, fallback: U) -> U
    where
        OnSome: FnOnce(T) -> SomeFut,
        SomeFut: Future<Output = U>,
    {
        self.future.await.fold_or_async(on_some, fallback).await
    }

    /// Applies [`Maybe::some_or_provided`] once the source resolves.
    pub async fn some_or_provided(self, fallback: T) -> T {
        self.future.await.some_or_provided(fallback)
    }

    /// Applies [`Maybe::some_or_provided_with`] once the source resolves.
    pub async fn some_or_provided_with<Function>(self, fallback: Function) -> T
    where
        Function: FnOnce() -> T,
    {
        self.future.await.some_or_provided_with(fallback)
    }

    /// Applies [`Maybe::if_some`] once the source resolves.
    pub fn if_some<Action>(self, action: Action) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        Action: FnOnce(&T),
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "if_some");
            maybe.if_some(action)
        })
    }

    /// Awaits the source, then runs [`Maybe::if_some_async`].
    pub fn if_some_async<Action, ActionFut>(
        self,
        action: Action,
    ) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        Action: FnOnce(&T) -> ActionFut,
        ActionFut: Future<Output = ()>,
    {
        let source = self.future;
        PendingMaybe::new(async move { source.await.if_some_async(action).await })
    }

    /// Applies [`Maybe::if_none`] once the source resolves.
    pub fn if_none<Action>(self, action: Action) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        Action: FnOnce(),
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "if_none");
            maybe.if_none(action)
        })
    }

    /// Applies [`Maybe::execute`] once the source resolves.
    pub fn execute<OnSome, OnNone>(
        self,
        on_some: OnSome,
        on_none: OnNone,
    ) -> PendingMaybe<impl Future<Output = Maybe<T>>>
    where
        OnSome: FnOnce(&T),
        OnNone: FnOnce(),
    {
        let source = self.future;
        PendingMaybe::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "execute");
            maybe.execute(on_some, on_none)
        })
    }

    /// Applies [`Maybe::to_outcome`] once the source resolves.
    pub fn to_outcome<F>(self, on_none: F) -> PendingOutcome<impl Future<Output = Outcome<T, F>>> {
        let source = self.future;
        PendingOutcome::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "to_outcome");
            maybe.to_outcome(on_none)
        })
    }

    /// Applies [`Maybe::to_outcome_with`] once the source resolves. `on_none`
    /// runs only if the source resolved to `None`.
    pub fn to_outcome_with<F, OnNone>(
        self,
        on_none: OnNone,
    ) -> PendingOutcome<impl Future<Output = Outcome<T, F>>>
    where
        OnNone: FnOnce() -> F,
    {
        let source = self.future;
        PendingOutcome::new(async move {
            let maybe = source.await;
            trace_step(FAMILY, "to_outcome_with");
            maybe.to_outcome_with(on_none)
        })
    }
}

impl<Fut, T> PendingMaybe<Fut>
where
    Fut: Future<Output = Maybe<Maybe<T>>>,
{
    /// Applies [`Maybe::flatten`] once the source resolves.
    pub fn flatten(self) -> PendingMaybe<impl Future<Output = Maybe<T>>> {
        let source = self.future;
        PendingMaybe::new(async move { source.await.flatten() })
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Adapts any future of a [`Maybe`] into a [`PendingMaybe`].
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Wraps this future so the `Maybe` combinators can be chained on it.
    fn into_pending_maybe(self) -> PendingMaybe<Self> {
        PendingMaybe::new(self)
    }
}

impl<Fut, T> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

/// Looks up `key` in a map that is still being produced.
///
/// The value is cloned out of the map, since the map itself does not outlive
/// the returned future.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use maybe_result::{get_maybe_async, Maybe};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let load = async { HashMap::from([("port", 8080)]) };
/// assert_eq!(get_maybe_async(load, "port").await, Maybe::some(8080));
/// # }
/// ```
pub fn get_maybe_async<Fut, M, V, Q>(
    pending_map: Fut,
    key: &Q,
) -> PendingMaybe<impl Future<Output = Maybe<V>>>
where
    Fut: Future<Output = M>,
    M: GetMaybe<Q, V>,
    Q: ?Sized,
    V: Clone,
{
    PendingMaybe::new(async move {
        let map = pending_map.await;
        trace_step(FAMILY, "get_maybe");
        map.get_maybe(key).map(V::clone)
    })
}
