//! The success-or-failure container.
//!
//! A [`Result`] is built once through [`Result::success_of`], [`Result::failure_of`]
//! or the validated [`Result::new`], and is only ever read afterwards.
//!
//! Misuse is reported in one of three ways. Channel construction with zero or two
//! payloads returns a [`ConstructionError`]. Reading the channel that is not
//! populated panics, or returns an [`UnwrapError`] from the `checked_*` accessors.
//! Handing a combinator something that is not callable does not compile at all,
//! because every transform, handler and producer is bounded by [`FnOnce`].

use alloc::boxed::Box;

pub use misuse::{ConstructionError, State, UnwrapError};

mod describe;
pub mod misuse;
mod ops;

/// A describable failure.
///
/// Implemented for every [`core::error::Error`], so any error type can be used as
/// the failure payload of a boxed [`Result`].
pub trait Error: core::error::Error {}

impl<T: core::error::Error> Error for T {}

#[must_use = "this `Result` may be a failure, which should be inspected"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Result<Success, Failure = Box<dyn Error>> {
    Success(Success),
    Failure(Failure),
}

impl<V, E> Result<V, E> {
    /// Builds a result holding a success value.
    ///
    /// Every value counts as present, including `false`, `0`, empty collections and `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultx::Result;
    ///
    /// let flag: Result<bool, &str> = Result::success_of(false);
    /// assert!(flag.is_success());
    /// assert!(!flag.unwrap_value());
    /// ```
    pub const fn success_of(value: V) -> Self {
        Self::Success(value)
    }

    /// Builds a result holding a failure value.
    pub const fn failure_of(error: E) -> Self {
        Self::Failure(error)
    }

    /// Builds a result from two optional channels, exactly one of which must be populated.
    ///
    /// A channel holding `Some(None)` is populated: the payload is the `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultx::{ConstructionError, Result};
    ///
    /// let empty = Result::<i32, &str>::new(None, None);
    /// assert_eq!(empty.unwrap_error(), ConstructionError::Neither);
    ///
    /// let both = Result::<i32, &str>::new(Some(1), Some("boom"));
    /// assert_eq!(both.unwrap_error(), ConstructionError::Both);
    ///
    /// let nothing = Result::<Option<i32>, &str>::new(Some(None), None).unwrap_value();
    /// assert_eq!(nothing.unwrap_value(), None);
    /// ```
    pub fn new(value: Option<V>, error: Option<E>) -> Result<Self, ConstructionError> {
        match (value, error) {
            (Some(value), None) => Result::Success(Self::Success(value)),
            (None, Some(error)) => Result::Success(Self::Failure(error)),
            (None, None) => Result::Failure(ConstructionError::Neither),
            (Some(_), Some(_)) => Result::Failure(ConstructionError::Both),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Which channel is populated.
    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::Success(_) => State::Success,
            Self::Failure(_) => State::Failure,
        }
    }

    /// Borrows both channels, so consuming accessors can be used without giving up `self`.
    pub const fn as_ref(&self) -> Result<&V, &E> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// The success value, or `None` for a failure.
    #[must_use]
    pub fn value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The failure value, or `None` for a success.
    #[must_use]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure.
    #[track_caller]
    pub fn unwrap_value(self) -> V {
        match self.checked_unwrap_value() {
            Result::Success(value) => value,
            Result::Failure(misuse) => panic!("{misuse}"),
        }
    }

    /// Returns the success value, or an [`UnwrapError`] carrying the failure.
    pub fn checked_unwrap_value(self) -> Result<V, UnwrapError<E>> {
        self.map_error(|error| UnwrapError::new(State::Success, error))
    }

    /// Returns the success value, or `default` for a failure.
    pub fn value_or(self, default: V) -> V {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Calls `transform` with the success value and returns what it produces.
    ///
    /// # Panics
    ///
    /// Panics if the result is a failure. `transform` is not called in that case.
    #[track_caller]
    pub fn map_value<R, F>(self, transform: F) -> R
    where
        F: FnOnce(V) -> R,
    {
        match self.checked_map_value(transform) {
            Result::Success(mapped) => mapped,
            Result::Failure(misuse) => panic!("{misuse}"),
        }
    }

    /// Like [`Result::map_value`], but a failure comes back as an [`UnwrapError`].
    pub fn checked_map_value<R, F>(self, transform: F) -> Result<R, UnwrapError<E>>
    where
        F: FnOnce(V) -> R,
    {
        self.checked_unwrap_value().map(transform)
    }

    /// Calls `transform` with the success value, or with `default` for a failure.
    ///
    /// The transform runs on both paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use resultx::Result;
    ///
    /// let failed: Result<i32, &str> = Result::failure_of("bad input");
    /// assert_eq!(failed.map_value_or(|n| n + 1, 21), 22);
    /// ```
    pub fn map_value_or<R, F>(self, transform: F, default: V) -> R
    where
        F: FnOnce(V) -> R,
    {
        transform(self.value_or(default))
    }

    /// Returns the success value, or hands the failure to `handler` and returns its answer.
    pub fn value_or_else<F>(self, handler: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => handler(error),
        }
    }

    /// Returns the success value, or the output of `producer` for a failure.
    ///
    /// Unlike [`Result::value_or_else`], the producer does not see the failure.
    pub fn value_or_compute<F>(self, producer: F) -> V
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => producer(),
        }
    }

    /// Returns the failure value.
    ///
    /// # Panics
    ///
    /// Panics if the result is a success.
    #[track_caller]
    pub fn unwrap_error(self) -> E {
        match self.checked_unwrap_error() {
            Result::Success(error) => error,
            Result::Failure(misuse) => panic!("{misuse}"),
        }
    }

    /// Returns the failure value, or an [`UnwrapError`] carrying the success value.
    pub fn checked_unwrap_error(self) -> Result<E, UnwrapError<V>> {
        match self {
            Self::Success(value) => Result::Failure(UnwrapError::new(State::Failure, value)),
            Self::Failure(error) => Result::Success(error),
        }
    }

    /// Returns the failure value, or `default` for a success.
    pub fn error_or(self, default: E) -> E {
        match self {
            Self::Success(_) => default,
            Self::Failure(error) => error,
        }
    }

    /// Transforms the success value, leaving a failure untouched.
    pub fn map<R, F>(self, transform: F) -> Result<R, E>
    where
        F: FnOnce(V) -> R,
    {
        match self {
            Self::Success(value) => Result::Success(transform(value)),
            Self::Failure(error) => Result::Failure(error),
        }
    }

    /// Transforms the failure value, leaving a success untouched.
    pub fn map_error<G, F>(self, transform: F) -> Result<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(transform(error)),
        }
    }
}
