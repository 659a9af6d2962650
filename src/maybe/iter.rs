//! Iteration over `Maybe` and sequences of `Maybe`.

use super::Maybe;

impl<T> Maybe<T> {
    /// Iterates over the value: one element on Some, none on None.
    #[inline]
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.value.iter()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects a sequence of `Maybe`s into a `Maybe` of a collection.
///
/// The result is Some only if every element is Some. Collection stops at the
/// first None.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::Maybe;
///
/// let all: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::some(2)].into_iter().collect();
/// assert_eq!(all, Maybe::some(vec![1, 2]));
///
/// let gap: Maybe<Vec<i32>> = vec![Maybe::some(1), Maybe::none()].into_iter().collect();
/// assert_eq!(gap, Maybe::none());
/// ```
impl<T, C> FromIterator<Maybe<T>> for Maybe<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<T>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<C>>()
            .into()
    }
}

/// Extension methods for iterators of [`Maybe`].
///
/// Every adapter is lazy, except the `all_*`/`any_*` queries which consume
/// the iterator.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{Maybe, MaybeIteratorExt};
///
/// let cart = vec![Maybe::some(3), Maybe::none(), Maybe::some(7)];
///
/// assert!(cart.clone().into_iter().any_none());
/// let total: i32 = cart.into_iter().select_values().sum();
/// assert_eq!(total, 10);
/// ```
pub trait MaybeIteratorExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// `true` if every element is Some (vacuously `true` when empty).
    fn all_some(mut self) -> bool {
        self.all(|maybe| maybe.is_some())
    }

    /// `true` if every element is None (vacuously `true` when empty).
    fn all_none(mut self) -> bool {
        self.all(|maybe| maybe.is_none())
    }

    /// `true` if at least one element is Some.
    fn any_some(mut self) -> bool {
        self.any(|maybe| maybe.is_some())
    }

    /// `true` if at least one element is None.
    fn any_none(mut self) -> bool {
        self.any(|maybe| maybe.is_none())
    }

    /// Yields the values of the Some elements, in order.
    fn select_values(self) -> impl Iterator<Item = T> {
        self.flatten()
    }

    /// Maps the values of the Some elements, dropping the None elements.
    fn map_each<U, F>(self, mut function: F) -> impl Iterator<Item = Maybe<U>>
    where
        F: FnMut(T) -> U,
    {
        self.select_values()
            .map(move |value| Maybe::some(function(value)))
    }

    /// Binds the values of the Some elements, dropping the None elements.
    fn bind_each<U, F>(self, function: F) -> impl Iterator<Item = Maybe<U>>
    where
        F: FnMut(T) -> Maybe<U>,
    {
        self.select_values().map(function)
    }

    /// Keeps the Some elements whose value satisfies `predicate`.
    fn where_some<P>(self, predicate: P) -> impl Iterator<Item = Maybe<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.select_values().filter(predicate).map(Maybe::some)
    }

    /// Keeps the Some elements whose value does not satisfy `predicate`.
    fn where_not<P>(self, mut predicate: P) -> impl Iterator<Item = Maybe<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.select_values()
            .filter(move |value| !predicate(value))
            .map(Maybe::some)
    }
}

impl<T, I> MaybeIteratorExt<T> for I where I: Iterator<Item = Maybe<T>> {}
