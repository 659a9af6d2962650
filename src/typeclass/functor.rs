//! Functor type class - mapping over container values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use bogoware_monads::Maybe;
//! use bogoware_monads::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::some(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::some("5".to_string()));
//!
//! let transformed: Maybe<String> = Maybe::<i32>::none().fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::none());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;
use crate::result::Result;

/// A type class for types that can have a function mapped over their contents.
///
/// For [`Maybe`] and [`Result`], `fmap` is the same operation as the inherent
/// `map`; the trait lets generic code work over both containers.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{LogicError, Maybe, Result};
/// use bogoware_monads::typeclass::Functor;
///
/// fn describe<F: Functor<Inner = u32>>(container: F) -> F::WithType<String> {
///     container.fmap(|count| format!("{count} items"))
/// }
///
/// assert_eq!(describe(Maybe::some(3)), Maybe::some("3 items".to_string()));
/// assert_eq!(
///     describe(Result::<u32, LogicError>::success(2)),
///     Result::success("2 items".to_string())
/// );
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    /// use bogoware_monads::typeclass::Functor;
    ///
    /// let name = Maybe::some("hello".to_string());
    /// assert_eq!(name.fmap_ref(String::len), Maybe::some(5));
    /// assert!(name.is_some());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Result<B, E>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function).map_error(Clone::clone)
    }
}
