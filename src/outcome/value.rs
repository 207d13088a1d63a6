//! The `Outcome<S, F>` container and its core combinators.

use crate::error::ContractError;
use crate::failure::Failure;
use crate::maybe::Maybe;
use crate::unit::Unit;

/// A computation that produced either a success of type `S` or a typed
/// failure of type `F`.
///
/// Exactly one branch is ever populated: the representation is a tagged
/// union, so the "one slot set, matching the tag" invariant holds by
/// construction and every branch dispatch is exhaustive.
///
/// The failure channel is data. It is usually a [`Failure`] (or a type that
/// converts into one), which is what the aggregating combinators require.
///
/// Every combinator is built from two primitives, [`bi_bind`](Self::bi_bind)
/// and [`fold`](Self::fold); a function handed to a combinator runs only on
/// its own branch.
///
/// # Examples
///
/// ```rust
/// use maybe_result::{Failure, Outcome};
///
/// let parse = |text: &str| -> Outcome<i32, Failure> {
///     text.parse::<i32>()
///         .map_err(|error| Failure::new(error.to_string()))
///         .into()
/// };
///
/// let sum = parse("2").combine(parse("3"), |a, b| a + b);
/// assert_eq!(sum, Outcome::success(5));
///
/// let failed = parse("2").bind(|_| parse("x"));
/// assert!(failed.is_failure());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, F> {
    /// The computation succeeded.
    Success(S),
    /// The computation failed.
    Failure(F),
}

/// Creates a successful `Outcome`.
#[inline]
pub const fn ok<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Success(value)
}

/// Creates a failed `Outcome`.
#[inline]
pub const fn err<S, F>(failure: F) -> Outcome<S, F> {
    Outcome::Failure(failure)
}

impl<F> Outcome<Unit, F> {
    /// A success that carries nothing more to report.
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome, Unit};
    ///
    /// assert_eq!(Outcome::<Unit, Failure>::unit(), Outcome::success(Unit));
    /// ```
    #[inline]
    pub const fn unit() -> Self {
        Self::Success(Unit)
    }
}

impl<S, F> Outcome<S, F> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful `Outcome`.
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed `Outcome`.
    #[inline]
    pub const fn failure(failure: F) -> Self {
        Self::Failure(failure)
    }

    /// Creates a success from a payload that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullArgument`] if `value` is `None`.
    pub fn try_success(value: Option<S>) -> Result<Self, ContractError> {
        value.map(Self::Success).ok_or_else(|| {
            ContractError::NullArgument {
                parameter: "Outcome::try_success(value)",
            }
            .traced()
        })
    }

    /// Creates a failure from a payload that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::NullArgument`] if `failure` is `None`.
    pub fn try_failure(failure: Option<F>) -> Result<Self, ContractError> {
        failure.map(Self::Failure).ok_or_else(|| {
            ContractError::NullArgument {
                parameter: "Outcome::try_failure(failure)",
            }
            .traced()
        })
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if the computation succeeded.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the computation failed.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts from `&Outcome<S, F>` to `Outcome<&S, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Returns the success slot: `Some` on success, `None` on failure.
    #[inline]
    pub fn success_slot(self) -> Maybe<S> {
        self.fold(Maybe::Some, |_| Maybe::None)
    }

    /// Returns the failure slot: `Some` on failure, `None` on success.
    #[inline]
    pub fn failure_slot(self) -> Maybe<F> {
        self.fold(|_| Maybe::None, Maybe::Some)
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::InvalidState`] if this is a failure.
    #[track_caller]
    pub fn get_success_unsafe(self) -> S {
        match self.try_get_success() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with [`ContractError::InvalidState`] if this is a success.
    #[track_caller]
    pub fn get_failure_unsafe(self) -> F {
        match self.try_get_failure() {
            Ok(failure) => failure,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success payload, or an error if this is a failure.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] if this is a failure.
    pub fn try_get_success(self) -> Result<S, ContractError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(ContractError::InvalidState {
                operation: "Outcome::get_success",
                expected: "Success",
            }
            .traced()),
        }
    }

    /// Returns the failure payload, or an error if this is a success.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidState`] if this is a success.
    pub fn try_get_failure(self) -> Result<F, ContractError> {
        match self {
            Self::Failure(failure) => Ok(failure),
            Self::Success(_) => Err(ContractError::InvalidState {
                operation: "Outcome::get_failure",
                expected: "Failure",
            }
            .traced()),
        }
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// Total bind over both channels: exactly one of the two functions runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    ///
    /// let recover = |outcome: Outcome<i32, Failure>| {
    ///     outcome.bi_bind(
    ///         |value| Outcome::<String, Failure>::success(value.to_string()),
    ///         |failure| Outcome::success(format!("recovered: {failure}")),
    ///     )
    /// };
    /// assert_eq!(recover(Outcome::success(1)), Outcome::success("1".to_string()));
    /// assert_eq!(
    ///     recover(Outcome::failure(Failure::new("x"))),
    ///     Outcome::success("recovered: x".to_string())
    /// );
    /// ```
    #[inline]
    pub fn bi_bind<B, G, OnSuccess, OnFailure>(
        self,
        bind_success: OnSuccess,
        bind_failure: OnFailure,
    ) -> Outcome<B, G>
    where
        OnSuccess: FnOnce(S) -> Outcome<B, G>,
        OnFailure: FnOnce(F) -> Outcome<B, G>,
    {
        match self {
            Self::Success(value) => bind_success(value),
            Self::Failure(failure) => bind_failure(failure),
        }
    }

    /// Eliminates the `Outcome` by applying exactly one of two functions.
    #[inline]
    pub fn fold<U, OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure) -> U
    where
        OnSuccess: FnOnce(S) -> U,
        OnFailure: FnOnce(F) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    // =========================================================================
    // Binding
    // =========================================================================

    /// Sequences a dependent computation on success; a failure propagates
    /// unchanged and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    ///
    /// let positive = |x: i32| {
    ///     if x > 0 { Outcome::success(x) } else { Outcome::failure(Failure::new("not positive")) }
    /// };
    /// assert_eq!(Outcome::success(3).bind(positive), Outcome::success(3));
    /// assert!(Outcome::success(-3).bind(positive).is_failure());
    /// ```
    #[inline]
    pub fn bind<B, Function>(self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(S) -> Outcome<B, F>,
    {
        self.bi_bind(function, Outcome::Failure)
    }

    /// Transforms or rescues the failure channel; a success passes through
    /// unchanged.
    #[inline]
    pub fn bind_failure<G, Function>(self, function: Function) -> Outcome<S, G>
    where
        Function: FnOnce(F) -> Outcome<S, G>,
    {
        self.bi_bind(Outcome::Success, function)
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies exactly one of two mappers, depending on the branch.
    #[inline]
    pub fn bimap<B, G, MapSuccess, MapFailure>(
        self,
        map_success: MapSuccess,
        map_failure: MapFailure,
    ) -> Outcome<B, G>
    where
        MapSuccess: FnOnce(S) -> B,
        MapFailure: FnOnce(F) -> G,
    {
        self.bi_bind(
            |value| Outcome::Success(map_success(value)),
            |failure| Outcome::Failure(map_failure(failure)),
        )
    }

    /// Maps the success payload, leaving a failure untouched.
    #[inline]
    pub fn map_success<B, Function>(self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(S) -> B,
    {
        self.bimap(function, |failure| failure)
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_failure<G, Function>(self, function: Function) -> Outcome<S, G>
    where
        Function: FnOnce(F) -> G,
    {
        self.bimap(|value| value, function)
    }

    // =========================================================================
    // Matching
    // =========================================================================

    /// Returns the success payload, converting a failure with `on_failure`.
    #[inline]
    pub fn success_or_else<Function>(self, on_failure: Function) -> S
    where
        Function: FnOnce(F) -> S,
    {
        self.fold(|value| value, on_failure)
    }

    /// Returns the success payload, or `fallback` on failure.
    #[inline]
    pub fn success_or(self, fallback: S) -> S {
        self.fold(|value| value, |_| fallback)
    }

    /// Returns the failure payload, converting a success with `on_success`.
    #[inline]
    pub fn failure_or_else<Function>(self, on_success: Function) -> F
    where
        Function: FnOnce(S) -> F,
    {
        self.fold(on_success, |failure| failure)
    }

    /// Returns the failure payload, or `fallback` on success.
    #[inline]
    pub fn failure_or(self, fallback: F) -> F {
        self.fold(|_| fallback, |failure| failure)
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `action` on the success payload, then returns `self`.
    #[inline]
    #[must_use]
    pub fn if_success<Action>(self, action: Action) -> Self
    where
        Action: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the failure payload, then returns `self`.
    #[inline]
    #[must_use]
    pub fn if_failure<Action>(self, action: Action) -> Self
    where
        Action: FnOnce(&F),
    {
        if let Self::Failure(failure) = &self {
            action(failure);
        }
        self
    }

    /// Runs exactly one of `on_success` and `on_failure`, then returns
    /// `self`.
    #[inline]
    #[must_use]
    pub fn execute<OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure) -> Self
    where
        OnSuccess: FnOnce(&S),
        OnFailure: FnOnce(&F),
    {
        match &self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
        self
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Joins two independently-typed outcomes.
    ///
    /// - success and success: `combine_success` joins the payloads.
    /// - exactly one failure: that failure, converted to the new failure type.
    /// - failure and failure: both are converted, then joined with
    ///   `combine_failure`.
    ///
    /// Both outcomes are already evaluated, so nothing is skipped: every
    /// failure involved reaches `combine_failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    ///
    /// let left: Outcome<i32, &str> = Outcome::failure("a");
    /// let right: Outcome<u8, String> = Outcome::failure("b".to_string());
    ///
    /// let joined = left.combine_with(
    ///     right,
    ///     |a, b| a + i32::from(b),
    ///     Failure::new,
    ///     Failure::new,
    ///     |first, second| Failure::new(format!("{}{}", first.message(), second.message())),
    /// );
    /// assert_eq!(joined, Outcome::failure(Failure::new("ab")));
    /// ```
    pub fn combine_with<S2, F2, S3, F3, CombineSuccess, ConvertThis, ConvertOther, CombineFailure>(
        self,
        other: Outcome<S2, F2>,
        combine_success: CombineSuccess,
        convert_this_failure: ConvertThis,
        convert_other_failure: ConvertOther,
        combine_failure: CombineFailure,
    ) -> Outcome<S3, F3>
    where
        CombineSuccess: FnOnce(S, S2) -> S3,
        ConvertThis: FnOnce(F) -> F3,
        ConvertOther: FnOnce(F2) -> F3,
        CombineFailure: FnOnce(F3, F3) -> F3,
    {
        match (self, other) {
            (Self::Success(left), Outcome::Success(right)) => {
                Outcome::Success(combine_success(left, right))
            }
            (Self::Success(_), Outcome::Failure(right)) => {
                Outcome::Failure(convert_other_failure(right))
            }
            (Self::Failure(left), Outcome::Success(_)) => {
                Outcome::Failure(convert_this_failure(left))
            }
            (Self::Failure(left), Outcome::Failure(right)) => Outcome::Failure(combine_failure(
                convert_this_failure(left),
                convert_other_failure(right),
            )),
        }
    }

    /// Joins two outcomes sharing a failure type, keeping only the first
    /// failure when both failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    ///
    /// let sum = Outcome::<i32, Failure>::success(2).combine(Outcome::success(3), |a, b| a + b);
    /// assert_eq!(sum, Outcome::success(5));
    ///
    /// let first = Outcome::<i32, Failure>::failure(Failure::new("first"))
    ///     .combine(Outcome::<i32, Failure>::failure(Failure::new("second")), |a, b| a + b);
    /// assert_eq!(first, Outcome::failure(Failure::new("first")));
    /// ```
    #[inline]
    pub fn combine<S2, S3, CombineSuccess>(
        self,
        other: Outcome<S2, F>,
        combine_success: CombineSuccess,
    ) -> Outcome<S3, F>
    where
        CombineSuccess: FnOnce(S, S2) -> S3,
    {
        self.combine_joining(other, combine_success, |first, _| first)
    }

    /// Joins two outcomes sharing a failure type, joining two failures with
    /// `combine_failure`.
    #[inline]
    pub fn combine_joining<S2, S3, CombineSuccess, CombineFailure>(
        self,
        other: Outcome<S2, F>,
        combine_success: CombineSuccess,
        combine_failure: CombineFailure,
    ) -> Outcome<S3, F>
    where
        CombineSuccess: FnOnce(S, S2) -> S3,
        CombineFailure: FnOnce(F, F) -> F,
    {
        self.combine_with(
            other,
            combine_success,
            |failure| failure,
            |failure| failure,
            combine_failure,
        )
    }

    /// Joins two outcomes whose failures convert into [`Failure`], reporting
    /// both failures as an aggregate when both failed.
    ///
    /// A single failure is passed through without being wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe_result::{Failure, Outcome};
    ///
    /// let joined = Outcome::<i32, Failure>::failure(Failure::new("a"))
    ///     .combine_aggregate(Outcome::<i32, &str>::failure("b"), |a, b| a + b);
    /// let failure = joined.get_failure_unsafe();
    /// assert!(failure.is_aggregate());
    /// assert_eq!(failure.message(), "a; b");
    /// ```
    #[inline]
    pub fn combine_aggregate<S2, F2, S3, CombineSuccess>(
        self,
        other: Outcome<S2, F2>,
        combine_success: CombineSuccess,
    ) -> Outcome<S3, Failure>
    where
        F: Into<Failure>,
        F2: Into<Failure>,
        CombineSuccess: FnOnce(S, S2) -> S3,
    {
        self.combine_with(
            other,
            combine_success,
            Into::into,
            Into::into,
            Failure::join,
        )
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Converts into the standard library's `Result`.
    ///
    /// # Errors
    ///
    /// Returns the failure payload as `Err` if this is a failure.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.fold(Ok, Err)
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}
