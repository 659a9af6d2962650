//! Composite errors.

use std::borrow::Cow;
use std::fmt;

use super::{AnyError, EmptyAggregateError, Error};

/// An error composed of an ordered, non-empty list of independent errors.
///
/// `AggregateError` is produced by [`aggregate_results`](crate::ResultIteratorExt::aggregate_results)
/// when several results fail, so that every failure is reported instead of
/// only the first one. The inner errors keep their original order.
///
/// Unless overridden with [`with_message`](AggregateError::with_message), the
/// message is the generic `"Multiple errors occurred"`.
///
/// Two aggregate errors are equal when their messages are equal and their
/// inner errors are pairwise equal, in order.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{AggregateError, Error, LogicError};
///
/// let error = AggregateError::new(LogicError::new("a"), [LogicError::new("b")]);
/// assert_eq!(error.message(), "Multiple errors occurred");
/// assert_eq!(error.errors().len(), 2);
///
/// let error = error.with_message("order rejected");
/// assert_eq!(error.message(), "order rejected");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateError {
    message: Cow<'static, str>,
    errors: Vec<AnyError>,
}

impl AggregateError {
    /// The message used when none is given.
    pub const DEFAULT_MESSAGE: &'static str = "Multiple errors occurred";

    /// Creates an aggregate from a first error followed by any number of others.
    pub fn new<I>(first: impl Into<AnyError>, rest: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AnyError>,
    {
        let errors = std::iter::once(first.into())
            .chain(rest.into_iter().map(Into::into))
            .collect();
        Self::from_non_empty(errors)
    }

    /// Creates an aggregate from a sequence of errors.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyAggregateError`] if the sequence yields no error.
    pub fn try_from_errors<I>(errors: I) -> Result<Self, EmptyAggregateError>
    where
        I: IntoIterator,
        I::Item: Into<AnyError>,
    {
        let errors: Vec<AnyError> = errors.into_iter().map(Into::into).collect();
        if errors.is_empty() {
            return Err(EmptyAggregateError);
        }
        Ok(Self::from_non_empty(errors))
    }

    /// Caller guarantees `errors` is non-empty.
    pub(crate) fn from_non_empty(errors: Vec<AnyError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
            errors,
        }
    }

    /// Replaces the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// The inner errors, in their original order.
    pub fn errors(&self) -> &[AnyError] {
        &self.errors
    }

    /// Consumes the aggregate, returning its inner errors.
    pub fn into_errors(self) -> Vec<AnyError> {
        self.errors
    }
}

impl Error for AggregateError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    fn inner_errors(&self) -> &[AnyError] {
        &self.errors
    }
}

impl TryFrom<Vec<AnyError>> for AggregateError {
    type Error = EmptyAggregateError;

    fn try_from(errors: Vec<AnyError>) -> Result<Self, Self::Error> {
        if errors.is_empty() {
            Err(EmptyAggregateError)
        } else {
            Ok(Self::from_non_empty(errors))
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: [", self.message)?;
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                formatter.write_str("; ")?;
            }
            write!(formatter, "{error}")?;
        }
        formatter.write_str("]")
    }
}

impl std::error::Error for AggregateError {}
