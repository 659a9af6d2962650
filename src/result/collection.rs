//! Aggregation of many results into one.

use super::Result;
use crate::error::{AggregateError, AnyError};

/// A snapshot of a sequence of results.
///
/// The sequence is consumed eagerly and exactly once when the collection is
/// built. Successful values are kept in order until the outcome is known;
/// failing errors are erased into [`AnyError`] and kept in order as well.
pub(crate) struct ResultCollection<T> {
    values: Vec<T>,
    errors: Vec<AnyError>,
}

impl<T> ResultCollection<T> {
    pub(crate) fn new<E, I>(results: I) -> Self
    where
        E: Into<AnyError>,
        I: IntoIterator<Item = Result<T, E>>,
    {
        let mut values = Vec::new();
        let mut errors = Vec::new();
        for result in results {
            match result.into_std() {
                Ok(value) => values.push(value),
                Err(error) => errors.push(error.into()),
            }
        }
        tracing::trace!(
            successes = values.len(),
            failures = errors.len(),
            "aggregated results"
        );
        Self { values, errors }
    }

    /// `true` iff the sequence was empty or every element succeeded.
    pub(crate) const fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every value on success, otherwise one aggregate of every error.
    pub(crate) fn into_result(self) -> Result<Vec<T>, AggregateError> {
        if self.is_success() {
            Result::success(self.values)
        } else {
            Result::failure(AggregateError::from_non_empty(self.errors))
        }
    }
}

/// Aggregates a sequence of results, reporting every failure.
///
/// Equivalent to [`aggregate_results`](crate::ResultIteratorExt::aggregate_results).
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{AggregateError, LogicError, Result};
///
/// let results = vec![
///     Result::success(1),
///     Result::failure(LogicError::new("a")),
///     Result::failure(LogicError::new("b")),
/// ];
/// let aggregated: Result<Vec<i32>, AggregateError> = results.into_iter().collect();
/// assert_eq!(
///     aggregated,
///     Result::failure(AggregateError::new(LogicError::new("a"), [LogicError::new("b")]))
/// );
/// ```
impl<T, E> FromIterator<Result<T, E>> for Result<Vec<T>, AggregateError>
where
    E: Into<AnyError>,
{
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        ResultCollection::new(iter).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LogicError, RuntimeError};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn empty_input_is_a_success() {
        let collection = ResultCollection::new(Vec::<Result<i32, LogicError>>::new());
        assert!(collection.is_success());
        assert_eq!(collection.into_result(), Result::success(vec![]));
    }

    #[rstest]
    fn all_successes_keep_their_order() {
        let collection = ResultCollection::new(vec![
            Result::<_, LogicError>::success(3),
            Result::success(1),
            Result::success(2),
        ]);
        assert_eq!(collection.into_result(), Result::success(vec![3, 1, 2]));
    }

    #[rstest]
    fn failures_are_collected_in_order() {
        let collection = ResultCollection::new(vec![
            Result::success(1),
            Result::failure(LogicError::new("a")),
            Result::success(3),
            Result::failure(LogicError::new("b")),
        ]);
        assert!(!collection.is_success());

        let error = collection.into_result().get_error();
        let messages: Vec<String> = error
            .map(|error| {
                error
                    .errors()
                    .iter()
                    .map(|inner| inner.message().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[rstest]
    fn heterogeneous_errors_can_be_aggregated() {
        let results: Vec<Result<i32>> = vec![
            Result::failure(LogicError::new("logic").into()),
            Result::failure(RuntimeError::new("runtime").into()),
        ];
        let aggregated: Result<Vec<i32>, AggregateError> = results.into_iter().collect();
        let error = aggregated.get_error().map(|error| error.inner_errors().len());
        assert_eq!(error, Ok(2));
    }

    #[rstest]
    fn input_is_pulled_exactly_once() {
        let pulls = Cell::new(0);
        let source = (0..4).map(|value| {
            pulls.set(pulls.get() + 1);
            if value % 2 == 0 {
                Result::success(value)
            } else {
                Result::failure(LogicError::new(value.to_string()))
            }
        });
        let aggregated: Result<Vec<i32>, AggregateError> = source.collect();
        assert!(aggregated.is_failure());
        assert_eq!(pulls.get(), 4);
    }
}
