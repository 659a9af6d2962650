//! `Result` - the outcome of an operation that can fail.
//!
//! This module provides [`Result<T, E>`], a container holding either a
//! successful value or an error, and the tools to build railway-style
//! pipelines on top of it:
//!
//! - [`map`](Result::map), [`bind`](Result::bind) and [`map_error`](Result::map_error)
//!   transform one track without touching the other
//! - [`ensure`](Result::ensure) validates a value, switching to the failure track
//! - [`recover_with`](Result::recover_with) switches back to the success track
//! - [`try_execute`](Result::try_execute) turns panics and raised faults into
//!   [`RuntimeError`](crate::RuntimeError)s
//! - [`aggregate_results`](crate::ResultIteratorExt::aggregate_results) folds a
//!   sequence of results into one, reporting every failure
//!
//! The error parameter defaults to [`AnyError`], so `Result<T>` accepts any
//! error of the taxonomy. Pipelines with a single concrete error type can name
//! it instead and keep it statically.
//!
//! # Examples
//!
//! ```rust
//! use bogoware_monads::{LogicError, Result};
//!
//! fn parse_quantity(input: &str) -> Result<u32, LogicError> {
//!     input
//!         .parse::<u32>()
//!         .map_err(|_| LogicError::new("quantity must be a number"))
//!         .into()
//! }
//!
//! let total = parse_quantity("3")
//!     .ensure(|quantity| *quantity > 0, LogicError::new("quantity must be positive"))
//!     .map(|quantity| quantity * 250);
//! assert_eq!(total, Result::success(750));
//!
//! let total = parse_quantity("0")
//!     .ensure(|quantity| *quantity > 0, LogicError::new("quantity must be positive"))
//!     .map(|quantity| quantity * 250);
//! assert_eq!(total, Result::failure(LogicError::new("quantity must be positive")));
//! ```

#[cfg(feature = "async")]
mod asynchronous;
mod boundary;
mod collection;
mod iter;

pub use iter::ResultIteratorExt;

use std::fmt;
use std::result::Result as StdResult;

use crate::error::{AnyError, ResultFailedError, ResultSuccessError};
use crate::maybe::Maybe;
use crate::unit::Unit;

/// The outcome of an operation: either a success carrying a `T`, or a
/// failure carrying an `E`.
///
/// A `Result` is in exactly one state and never changes: every combinator
/// consumes it and returns a new one. Combinators that act on one track leave
/// the other untouched, so the first failure of a pipeline flows unchanged to
/// its end.
///
/// The standard `Result` converts to and from this type with `From`/`Into`,
/// which lets `?`-based code and combinator pipelines interoperate.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{AnyError, LogicError, Result};
///
/// let success: Result<i32> = Result::success(1);
/// let failure: Result<i32> = Result::failure(LogicError::new("boom").into());
///
/// assert!(success.is_success());
/// assert!(failure.is_failure());
/// assert_eq!(failure.error().map(AnyError::message), Some("boom".into()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Result<T, E = AnyError> {
    inner: StdResult<T, E>,
}

impl<T, E> Result<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful result.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// Creates a failed result.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self { inner: Err(error) }
    }

    // =========================================================================
    // State and accessors
    // =========================================================================

    /// Returns `true` on success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns `true` on failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        self.inner.is_err()
    }

    /// The value, if successful.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.inner.as_ref().ok()
    }

    /// The error, if failed.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        self.inner.as_ref().err()
    }

    /// Extracts the value.
    ///
    /// # Errors
    ///
    /// Returns a [`ResultFailedError`] carrying the actual error if the
    /// result is failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result};
    ///
    /// assert_eq!(Result::<i32, LogicError>::success(1).get_value(), Ok(1));
    ///
    /// let misuse = Result::<i32, _>::failure(LogicError::new("boom")).get_value().unwrap_err();
    /// assert_eq!(misuse.error(), &LogicError::new("boom"));
    /// ```
    pub fn get_value(self) -> StdResult<T, ResultFailedError<E>> {
        self.inner.map_err(ResultFailedError::new)
    }

    /// Extracts the error.
    ///
    /// # Errors
    ///
    /// Returns [`ResultSuccessError`] if the result is successful.
    pub fn get_error(self) -> StdResult<E, ResultSuccessError> {
        match self.inner {
            Ok(_) => Err(ResultSuccessError),
            Err(error) => Ok(error),
        }
    }

    /// Converts into the standard `Result`.
    #[inline]
    pub fn into_std(self) -> StdResult<T, E> {
        self.inner
    }

    /// Borrows the value and the error.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        Result {
            inner: self.inner.as_ref(),
        }
    }

    /// Keeps the value, dropping the error.
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        self.inner.ok().into()
    }

    // =========================================================================
    // Functor / Monad
    // =========================================================================

    /// Transforms the value of a success; a failure is carried through.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Result {
            inner: self.inner.map(function),
        }
    }

    /// Replaces the value of a success with `value`.
    #[inline]
    pub fn map_to<U>(self, value: U) -> Result<U, E> {
        self.map(|_| value)
    }

    /// Discards the value of a success.
    #[inline]
    pub fn map_to_unit(self) -> Result<Unit, E> {
        self.map_to(Unit)
    }

    /// Runs `action` on the value of a success and discards the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result, Unit};
    ///
    /// let mut sent = Vec::new();
    /// let outcome = Result::<_, LogicError>::success("hello").map_action(|message| sent.push(message));
    /// assert_eq!(outcome, Result::success(Unit));
    /// assert_eq!(sent, vec!["hello"]);
    /// ```
    #[inline]
    pub fn map_action<F>(self, action: F) -> Result<Unit, E>
    where
        F: FnOnce(T),
    {
        self.map(|value| {
            action(value);
            Unit
        })
    }

    /// Transforms the error of a failure; a success is carried through.
    #[inline]
    pub fn map_error<E2, F>(self, function: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        Result {
            inner: self.inner.map_err(function),
        }
    }

    /// Chains a step that may itself fail.
    ///
    /// `function` is called exactly once on success and never on failure;
    /// its result is returned without nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result};
    ///
    /// fn reserve(quantity: u32) -> Result<u32, LogicError> {
    ///     if quantity <= 10 {
    ///         Result::success(10 - quantity)
    ///     } else {
    ///         Result::failure(LogicError::new("not enough stock"))
    ///     }
    /// }
    ///
    /// assert_eq!(Result::success(4).bind(reserve), Result::success(6));
    /// assert_eq!(
    ///     Result::success(12).bind(reserve),
    ///     Result::failure(LogicError::new("not enough stock"))
    /// );
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.inner {
            Ok(value) => function(value),
            Err(error) => Result::failure(error),
        }
    }

    // =========================================================================
    // Match
    // =========================================================================

    /// Returns `success` on success, `failure` otherwise.
    #[inline]
    pub fn match_value<R>(self, success: R, failure: R) -> R {
        if self.is_success() { success } else { failure }
    }

    /// Maps the value with `success`, or returns `failure`.
    #[inline]
    pub fn match_or<R, S>(self, success: S, failure: R) -> R
    where
        S: FnOnce(T) -> R,
    {
        self.inner.map_or(failure, success)
    }

    /// Evaluates exactly one of the branches.
    #[inline]
    pub fn match_with<R, S, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self.inner {
            Ok(value) => success(value),
            Err(error) => failure(error),
        }
    }

    // =========================================================================
    // Recovery and validation
    // =========================================================================

    /// Replaces a failure with a success holding `value`.
    #[inline]
    #[must_use]
    pub fn recover_with(self, value: T) -> Self {
        self.recover_with_else(|_| value)
    }

    /// Replaces a failure with a success computed from its error.
    ///
    /// `function` is not called on success.
    #[inline]
    #[must_use]
    pub fn recover_with_else<F>(self, function: F) -> Self
    where
        F: FnOnce(E) -> T,
    {
        Self::success(self.inner.unwrap_or_else(function))
    }

    /// Fails with `error` if the value does not satisfy `predicate`.
    ///
    /// A failure is returned unchanged and `predicate` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result};
    ///
    /// let adult = |age: &u8| *age >= 18;
    /// let too_young = LogicError::new("too young");
    ///
    /// assert_eq!(Result::success(30).ensure(adult, too_young.clone()), Result::success(30));
    /// assert_eq!(Result::success(12).ensure(adult, too_young.clone()), Result::failure(too_young.clone()));
    ///
    /// let earlier = LogicError::new("unknown person");
    /// assert_eq!(Result::failure(earlier.clone()).ensure(adult, too_young), Result::failure(earlier));
    /// ```
    #[inline]
    #[must_use]
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.ensure_else(predicate, |_| error)
    }

    /// Fails with an error computed from the value if it does not satisfy
    /// `predicate`.
    #[inline]
    #[must_use]
    pub fn ensure_else<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        match self.inner {
            Ok(value) => {
                if predicate(&value) {
                    Self::success(value)
                } else {
                    Self::failure(error(&value))
                }
            }
            Err(earlier) => Self::failure(earlier),
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Runs `action` on the value of a success, then returns the result
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn execute_if_success<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Ok(value) = &self.inner {
            action(value);
        }
        self
    }

    /// Runs `action` on the error of a failure, then returns the result
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn execute_if_failure<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Err(error) = &self.inner {
            action(error);
        }
        self
    }

    /// Runs `action` on the result in either state, then returns it
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn execute<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    // =========================================================================
    // Predicates and combination
    // =========================================================================

    /// Evaluates `predicate` on the value; `false` on failure.
    #[inline]
    pub fn satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.value().is_some_and(predicate)
    }

    /// Pairs two values; on failure returns the first error, left to right.
    #[inline]
    pub fn zip<U>(self, other: Result<U, E>) -> Result<(T, U), E> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two values with `function`; on failure returns the first
    /// error, left to right.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Result<U, E>, function: F) -> Result<R, E>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self.inner, other.inner) {
            (Ok(left), Ok(right)) => Result::success(function(left, right)),
            (Err(error), _) | (_, Err(error)) => Result::failure(error),
        }
    }
}

impl<E> Result<Unit, E> {
    /// Creates a successful result carrying [`Unit`].
    #[inline]
    pub const fn unit() -> Self {
        Self::success(Unit)
    }

    /// Creates a failed result of a void-like operation.
    #[inline]
    pub const fn unit_failure(error: E) -> Self {
        Self::failure(error)
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    #[inline]
    fn from(inner: StdResult<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.inner
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(formatter, "Success({value})"),
            Err(error) => write!(formatter, "Failure({error})"),
        }
    }
}

static_assertions::assert_impl_all!(Result<String>: Send, Sync, Clone);
static_assertions::assert_eq_size!(Result<u64, u64>, StdResult<u64, u64>);
