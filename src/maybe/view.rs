//! Pattern-matchable projections of a [`Maybe`].
//!
//! [`MaybeValue`] is the exhaustive projection of a `Maybe`: it is produced
//! on demand by [`Maybe::as_maybe_value`] / [`Maybe::into_maybe_value`] and
//! converts back with `From`. [`NoneValue`] carries no element type, so a
//! function returning `Maybe<T>` can return `NoneValue.into()` without
//! repeating `T`.

use super::Maybe;

/// The projection of a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SomeValue<T>(pub T);

impl<T> SomeValue<T> {
    /// Returns a reference to the payload.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Consumes the projection and returns the payload.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// The projection of the absent state. Converts into `Maybe<T>::None` for
/// any `T`.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Maybe, NoneValue};
///
/// fn first_even(values: &[i32]) -> Maybe<i32> {
///     match values.iter().find(|value| *value % 2 == 0) {
///         Some(value) => Maybe::some(*value),
///         None => NoneValue.into(),
///     }
/// }
///
/// assert_eq!(first_even(&[1, 3]), Maybe::none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoneValue;

/// The exhaustive projection of a [`Maybe`].
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Maybe, MaybeValue, SomeValue};
///
/// let maybe = Maybe::some(4);
/// let doubled = match maybe.as_maybe_value() {
///     MaybeValue::Some(SomeValue(value)) => value * 2,
///     MaybeValue::None(_) => 0,
/// };
/// assert_eq!(doubled, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaybeValue<T> {
    /// A present value.
    Some(SomeValue<T>),
    /// The absent state.
    None(NoneValue),
}

impl<T> Maybe<T> {
    /// Returns the borrowed projection of this container.
    #[inline]
    pub const fn as_maybe_value(&self) -> MaybeValue<&T> {
        match self {
            Self::Some(value) => MaybeValue::Some(SomeValue(value)),
            Self::None => MaybeValue::None(NoneValue),
        }
    }

    /// Consumes this container and returns its projection.
    #[inline]
    pub fn into_maybe_value(self) -> MaybeValue<T> {
        match self {
            Self::Some(value) => MaybeValue::Some(SomeValue(value)),
            Self::None => MaybeValue::None(NoneValue),
        }
    }
}

impl<T> From<SomeValue<T>> for Maybe<T> {
    #[inline]
    fn from(value: SomeValue<T>) -> Self {
        Self::Some(value.0)
    }
}

impl<T> From<NoneValue> for Maybe<T> {
    #[inline]
    fn from(_: NoneValue) -> Self {
        Self::None
    }
}

impl<T> From<MaybeValue<T>> for Maybe<T> {
    #[inline]
    fn from(value: MaybeValue<T>) -> Self {
        match value {
            MaybeValue::Some(some) => some.into(),
            MaybeValue::None(none) => none.into(),
        }
    }
}
