//! Errors reporting misuse of the containers.
//!
//! These are not domain errors: they signal that a caller asked a container
//! for something it does not hold. Pipelines built on `match_*`, `map` and
//! `bind` never produce them.

/// Returned when a `Some` is requested from a missing value or from a
/// `Maybe` that is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("The Maybe is None")]
pub struct MaybeNoneError;

/// Returned when the value of a failed [`Result`](crate::Result) is requested.
///
/// Carries the actual error of the result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Result is failed, consult the error for details: {error}")]
pub struct ResultFailedError<E> {
    error: E,
}

impl<E> ResultFailedError<E> {
    pub(crate) const fn new(error: E) -> Self {
        Self { error }
    }

    /// The error of the failed result.
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the misuse error, returning the error of the failed result.
    pub fn into_error(self) -> E {
        self.error
    }
}

/// Returned when the error of a successful [`Result`](crate::Result) is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Result is successful")]
pub struct ResultSuccessError;

/// Returned when an [`AggregateError`](crate::AggregateError) is built from
/// an empty sequence of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("An aggregate error requires at least one inner error")]
pub struct EmptyAggregateError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogicError;
    use rstest::rstest;

    #[rstest]
    fn result_failed_error_carries_the_error() {
        let misuse = ResultFailedError::new(LogicError::new("missing"));
        assert_eq!(misuse.error(), &LogicError::new("missing"));
        assert_eq!(
            misuse.to_string(),
            "Result is failed, consult the error for details: LogicError: \"missing\"."
        );
        assert_eq!(misuse.into_error(), LogicError::new("missing"));
    }

    #[rstest]
    #[case(MaybeNoneError.to_string(), "The Maybe is None")]
    #[case(ResultSuccessError.to_string(), "Result is successful")]
    #[case(
        EmptyAggregateError.to_string(),
        "An aggregate error requires at least one inner error"
    )]
    fn misuse_messages(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }
}
