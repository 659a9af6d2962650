//! Iteration over `Result` and sequences of `Result`.

use super::Result;
use super::collection::ResultCollection;
use crate::error::{AggregateError, AnyError};

impl<T, E> Result<T, E> {
    /// Iterates over the value: one element on success, none on failure.
    #[inline]
    pub fn iter(&self) -> std::result::Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = std::result::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = std::result::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Extension methods for iterators of [`Result`].
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{LogicError, Result, ResultIteratorExt};
///
/// let lines = vec![
///     Result::success(2),
///     Result::failure(LogicError::new("line 2: not a number")),
///     Result::success(5),
/// ];
///
/// assert!(lines.clone().into_iter().any_failure());
/// let total: i32 = lines.clone().into_iter().select_values().sum();
/// assert_eq!(total, 7);
///
/// let report = lines.into_iter().aggregate_results();
/// assert!(report.is_failure());
/// ```
pub trait ResultIteratorExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// `true` if every element succeeded (vacuously `true` when empty).
    fn all_success(mut self) -> bool {
        self.all(|result| result.is_success())
    }

    /// `true` if every element failed (vacuously `true` when empty).
    fn all_failure(mut self) -> bool {
        self.all(|result| result.is_failure())
    }

    /// `true` if at least one element succeeded.
    fn any_success(mut self) -> bool {
        self.any(|result| result.is_success())
    }

    /// `true` if at least one element failed.
    fn any_failure(mut self) -> bool {
        self.any(|result| result.is_failure())
    }

    /// Yields the values of the successful elements, in order.
    fn select_values(self) -> impl Iterator<Item = T> {
        self.flatten()
    }

    /// Maps every element; failures are carried through in place.
    fn map_each<U, F>(self, mut function: F) -> impl Iterator<Item = Result<U, E>>
    where
        F: FnMut(T) -> U,
    {
        self.map(move |result| result.map(&mut function))
    }

    /// Binds every element; failures are carried through in place.
    fn bind_each<U, F>(self, mut function: F) -> impl Iterator<Item = Result<U, E>>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        self.map(move |result| result.bind(&mut function))
    }

    /// Matches every element, evaluating one branch per element.
    fn match_each<R, S, F>(self, mut success: S, mut failure: F) -> impl Iterator<Item = R>
    where
        S: FnMut(T) -> R,
        F: FnMut(E) -> R,
    {
        self.map(move |result| result.match_with(&mut success, &mut failure))
    }

    /// Keeps the successful elements whose value satisfies `predicate`.
    fn where_success<P>(self, predicate: P) -> impl Iterator<Item = Result<T, E>>
    where
        P: FnMut(&T) -> bool,
    {
        self.select_values().filter(predicate).map(Result::success)
    }

    /// Keeps the successful elements whose value does not satisfy `predicate`.
    fn where_not<P>(self, mut predicate: P) -> impl Iterator<Item = Result<T, E>>
    where
        P: FnMut(&T) -> bool,
    {
        self.select_values()
            .filter(move |value| !predicate(value))
            .map(Result::success)
    }

    /// Folds the sequence into one result.
    ///
    /// Succeeds with every value, in order, if every element succeeded (or
    /// the sequence is empty). Otherwise fails with one [`AggregateError`]
    /// holding exactly the errors of the failing elements, in order; the
    /// successful values are dropped.
    ///
    /// The iterator is consumed eagerly and exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{AggregateError, LogicError, Result, ResultIteratorExt};
    ///
    /// let all = vec![Result::<_, LogicError>::success(1), Result::success(2)];
    /// assert_eq!(all.into_iter().aggregate_results(), Result::success(vec![1, 2]));
    ///
    /// let mixed = vec![
    ///     Result::success(1),
    ///     Result::failure(LogicError::new("a")),
    ///     Result::success(3),
    ///     Result::failure(LogicError::new("b")),
    /// ];
    /// assert_eq!(
    ///     mixed.into_iter().aggregate_results(),
    ///     Result::failure(AggregateError::new(LogicError::new("a"), [LogicError::new("b")]))
    /// );
    /// ```
    fn aggregate_results(self) -> Result<Vec<T>, AggregateError>
    where
        E: Into<AnyError>,
    {
        ResultCollection::new(self).into_result()
    }
}

impl<T, E, I> ResultIteratorExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}
