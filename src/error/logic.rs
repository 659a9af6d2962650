//! Expected, application-level errors.

use std::borrow::Cow;

use super::Error;

/// An expected error caused by a logical flaw, such as invalid input or an
/// invalid state, rather than by an external factor.
///
/// Logic errors are meant to be handled programmatically. Richer domain errors
/// can embed a `LogicError` and implement [`Error`] themselves.
///
/// Two logic errors are equal when their messages are equal.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{Error, LogicError};
///
/// let error = LogicError::new("name must not be empty");
/// assert_eq!(error.message(), "name must not be empty");
/// assert_eq!(error.to_string(), "LogicError: \"name must not be empty\".");
/// assert_eq!(error, LogicError::from("name must not be empty"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("LogicError: \"{message}\".")]
pub struct LogicError {
    message: String,
}

impl LogicError {
    /// Creates a logic error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Consumes the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Error for LogicError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl From<&str> for LogicError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for LogicError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a", "a", true)]
    #[case("a", "b", false)]
    #[case("", "", true)]
    fn equality_is_by_message(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(LogicError::new(left) == LogicError::new(right), expected);
    }

    #[rstest]
    fn display_quotes_the_message() {
        assert_eq!(LogicError::new("oops").to_string(), "LogicError: \"oops\".");
    }

    #[rstest]
    fn message_is_returned_verbatim() {
        let error = LogicError::from(String::from("verbatim"));
        assert_eq!(error.message(), "verbatim");
        assert_eq!(error.into_message(), "verbatim");
    }
}
