//! Applicative type class - combining independent computations.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(id).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;
use crate::result::Result;

/// A type class for functors that can lift values and combine independent
/// computations.
///
/// For [`Result`], combination keeps the first failure, left to right. Use
/// [`aggregate_results`](crate::ResultIteratorExt::aggregate_results) when
/// every failure must be reported.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{LogicError, Maybe, Result};
/// use bogoware_monads::typeclass::Applicative;
///
/// let x: Maybe<i32> = <Maybe<()>>::pure(42);
/// assert_eq!(x, Maybe::some(42));
///
/// let width = Result::<u32, LogicError>::success(3);
/// let height = Result::success(4);
/// assert_eq!(width.map2(height, |w, h| w * h), Result::success(12));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    /// use bogoware_monads::typeclass::Applicative;
    ///
    /// let total = Maybe::some(1).map3(Maybe::some(2), Maybe::some(3), |a, b, c| a + b + c);
    /// assert_eq!(total, Maybe::some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates two applicatives and returns the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates two applicatives and returns the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function inside the context to a value inside the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    /// use bogoware_monads::typeclass::Applicative;
    ///
    /// let increment: Maybe<fn(i32) -> i32> = Maybe::some(|x| x + 1);
    /// assert_eq!(increment.apply(Maybe::some(5)), Maybe::some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.zip(second)
            .zip_with(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, b| function(b))
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Result::success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        self.zip_with(other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Result<B, E>, third: Result<C, E>, function: F) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        self.zip(second)
            .zip_with(third, |(a, b), c| function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        self.zip_with(other, |function, b| function(b))
    }
}
