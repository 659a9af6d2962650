//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bogoware_monads::{LogicError, Result};
//! use bogoware_monads::typeclass::Monad;
//!
//! fn parse_positive(input: &str) -> Result<i32, LogicError> {
//!     Result::from(input.parse::<i32>().map_err(|_| LogicError::new("not a number")))
//!         .ensure(|n| *n > 0, LogicError::new("not positive"))
//! }
//!
//! let result = Result::success("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Result::success(n * 2));
//! assert_eq!(result, Result::success(84));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;
use crate::result::Result;

/// A type class for types that support sequencing of computations.
///
/// `flat_map` is the same operation as the inherent `bind` of [`Maybe`] and
/// [`Result`].
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is None or a failure, it propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    /// use bogoware_monads::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::some(5).then(Maybe::some("next")), Maybe::some("next"));
    /// assert_eq!(Maybe::<i32>::none().then(Maybe::some("next")), Maybe::none());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        self.bind(function)
    }
}
