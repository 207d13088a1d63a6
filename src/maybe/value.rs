//! The `Maybe<T>` container and its core combinators.

use crate::error::ContractError;

/// An optional value: either `Some(value)` or `None`.
///
/// `Maybe<T>` is an immutable value. Every combinator consumes the container
/// and returns a new one; a function handed to a combinator is invoked only
/// on the branch it belongs to, so no side effect happens on the absent path.
///
/// A `Some` never wraps an absent payload: the payload type `T` is a plain
/// Rust value, and the nullable bridge [`Maybe::try_some`] rejects an absent
/// one.
///
/// # Examples
///
/// ```rust
/// use maybe_result::Maybe;
///
/// let squared = Maybe::some(5)
///     .bind(|x| Maybe::some(x * x))
///     .map(|x| x.to_string());
/// assert_eq!(squared, Maybe::some("25".to_string()));
///
/// let fallback = Maybe::<i32>::none().some_or_provided(42);
/// assert_eq!(fallback, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absent state.
    None,
}

/// Creates a `Maybe` holding `value`.
///
/// ```rust
/// use maybe_result::{some, Maybe};
///
/// assert_eq!(some(1), Maybe::Some(1));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Creates an empty `Maybe`.
///
/// ```rust
/// use maybe_result::{none, Maybe};
///
/// let empty: Maybe<String> = none();
/// assert!(empty.is_none());
/// ```
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::None
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates a `Some` from a payload that may be absent.
    ///
    /// Unlike `Maybe::from(option)`, which maps an absent payload to `None`,
    /// this treats the absent payload as a contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullArgument`] if `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{ContractError, Maybe};
    ///
    /// assert_eq!(Maybe::try_some(Some(3)), Ok(Maybe::Some(3)));
    /// assert_eq!(
    ///     Maybe::<i32>::try_some(None),
    ///     Err(ContractError::NullArgument { parameter: "Maybe::try_some(value)" })
    /// );
    /// ```
    pub fn try_some(value: Option<T>) -> Result<Self, ContractError> {
        value.map(Self::Some).ok_or_else(|| {
            ContractError::NullArgument {
                parameter: "Maybe::try_some(value)",
            }
            .traced()
        })
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if this holds a value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is empty.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the payload.
    ///
    /// This is an escape hatch for callers that have already checked
    /// [`is_some`](Self::is_some). Prefer [`fold`](Self::fold) or
    /// [`try_get_value`](Self::try_get_value).
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::InvalidState`] if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// assert_eq!(Maybe::some(7).get_value_unsafe(), 7);
    /// ```
    ///
    /// ```rust,should_panic
    /// use maybe_result::Maybe;
    ///
    /// Maybe::<i32>::none().get_value_unsafe();
    /// ```
    #[track_caller]
    pub fn get_value_unsafe(self) -> T {
        match self.try_get_value() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the payload, or an error if this is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] if this is `None`.
    pub fn try_get_value(self) -> Result<T, ContractError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(ContractError::InvalidState {
                operation: "Maybe::get_value",
                expected: "Some",
            }
            .traced()),
        }
    }

    // =========================================================================
    // Mapping and Binding
    // =========================================================================

    /// Applies `function` to the payload, if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|x| x * 10), Maybe::some(20));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 10), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Sequences a dependent optional computation.
    ///
    /// `function` runs only if this holds a value; its result replaces this
    /// container without nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).bind(half).bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Supplies a fallback computation for the absent case.
    ///
    /// Returns `self` unchanged if it holds a value; otherwise evaluates
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// assert_eq!(Maybe::some(1).bind_none(|| Maybe::some(2)), Maybe::some(1));
    /// assert_eq!(Maybe::none().bind_none(|| Maybe::some(2)), Maybe::some(2));
    /// ```
    #[inline]
    pub fn bind_none<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(_) => self,
            Self::None => function(),
        }
    }

    /// Supplies a fallback container for the absent case.
    #[inline]
    pub fn bind_none_value(self, replacement: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => replacement,
        }
    }

    /// Keeps the payload only if it satisfies `predicate`.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = &self
            && predicate(value)
        {
            return self;
        }
        Self::None
    }

    /// Joins two independent `Maybe`s: the result holds a value only if both
    /// do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).combine(Maybe::some(3), |a, b| a + b), Maybe::some(5));
    /// assert_eq!(Maybe::some(2).combine(Maybe::<i32>::none(), |a, b| a + b), Maybe::none());
    /// ```
    #[inline]
    pub fn combine<U, V, F>(self, other: Maybe<U>, function: F) -> Maybe<V>
    where
        F: FnOnce(T, U) -> V,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(function(left, right)),
            _ => Maybe::None,
        }
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Eliminates the `Maybe` by applying exactly one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.fold(|x| format!("got {x}"), || "nothing".to_string());
    /// assert_eq!(describe(Maybe::some(3)), "got 3");
    /// assert_eq!(describe(Maybe::none()), "nothing");
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Like [`fold`](Self::fold), with a plain fallback value for the absent
    /// case.
    #[inline]
    pub fn fold_or<U, S>(self, on_some: S, fallback: U) -> U
    where
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => fallback,
        }
    }

    /// Returns the payload, or `fallback` if absent.
    #[inline]
    pub fn some_or_provided(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the payload, or the result of `fallback` if absent.
    #[inline]
    pub fn some_or_provided_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the payload if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn if_some<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` if this is empty, then returns `self`.
    #[inline]
    #[must_use]
    pub fn if_none<A>(self, action: A) -> Self
    where
        A: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    /// Runs exactly one of `on_some` and `on_none`, then returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::Maybe;
    ///
    /// let mut log = Vec::new();
    /// let _ = Maybe::some(1).execute(|x| log.push(format!("some {x}")), || {});
    /// assert_eq!(log, vec!["some 1".to_string()]);
    /// ```
    #[inline]
    #[must_use]
    pub fn execute<S, N>(self, on_some: S, on_none: N) -> Self
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match &self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
        self
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Yields the payload once if present, nothing otherwise.
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_ref().into_option().into_iter()
    }
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    /// Serializes exactly like `Option<T>`.
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
