//! Lifting of the combinators over pending (asynchronous) computations.
//!
//! This module requires the `async` feature.
//!
//! A pending computation is any [`Future`](std::future::Future). Each lifted
//! combinator awaits its source, applies the synchronous combinator of the
//! same name, and, when the function it was given returns a future, awaits
//! that too. Three shapes are available for every combinator:
//!
//! | source   | function | example                                   |
//! |----------|----------|-------------------------------------------|
//! | pending  | sync     | [`PendingMaybe::map`], [`PendingOutcome::bind`] |
//! | resolved | async    | `Maybe::map_async`, `Outcome::bind_async` |
//! | pending  | async    | [`PendingMaybe::map_async`], [`PendingOutcome::bind_async`] |
//!
//! A lifted step never changes the meaning of the synchronous combinator:
//! awaiting `maybe.into_pending().map(f)` gives exactly `maybe.map(f)`.
//!
//! The layer has no scheduler of its own. Steps of a chain run one after the
//! other on whatever executor polls the outermost future; running chains
//! concurrently (for example with `futures::join!`) is up to the caller.
//!
//! # Examples
//!
//! ```rust
//! use maybe_result::{Failure, Maybe, MaybeFutureExt, Outcome};
//!
//! async fn find_user(id: u32) -> Maybe<String> {
//!     if id == 1 { Maybe::some("ada".to_string()) } else { Maybe::none() }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let greeting = find_user(1)
//!     .into_pending_maybe()
//!     .map(|name| format!("hello, {name}"))
//!     .to_outcome(Failure::new("unknown user"))
//!     .await;
//! assert_eq!(greeting, Outcome::success("hello, ada".to_string()));
//! # }
//! ```

mod maybe;
mod outcome;
mod stream;

pub use maybe::{MaybeFutureExt, PendingMaybe, get_maybe_async};
pub use outcome::{OutcomeFutureExt, PendingOutcome};
pub use stream::{MaybeStreamExt, OutcomeStreamExt};

/// Records that a lifted step has resolved its source.
#[inline]
fn trace_step(family: &'static str, operation: &'static str) {
    tracing::trace!(family, operation, "lifted step resolved");
}
