//! `Maybe` - an optional value.
//!
//! This module provides the [`Maybe<T>`] type, a container holding zero or one
//! value. It lets a pipeline express "this value may be absent" and keep
//! composing without checking for absence at every step:
//!
//! - [`map`](Maybe::map) transforms the payload when present
//! - [`bind`](Maybe::bind) chains a step that may itself produce nothing
//! - [`match_with`](Maybe::match_with) leaves the container, evaluating exactly one branch
//! - [`get_value`](Maybe::get_value) extracts the payload or a default
//!
//! A `Maybe` is immutable: every combinator consumes it and returns a new one.
//! Asynchronous counterparts of the combinators live behind the `async`
//! feature and carry an `_async` suffix.
//!
//! # Examples
//!
//! ```rust
//! use bogoware_monads::Maybe;
//!
//! fn find_discount(code: &str) -> Maybe<u32> {
//!     match code {
//!         "WELCOME" => Maybe::some(10),
//!         "VIP" => Maybe::some(25),
//!         _ => Maybe::none(),
//!     }
//! }
//!
//! let price = find_discount("VIP")
//!     .map(|percent| 200 - 200 * percent / 100)
//!     .get_value(200);
//! assert_eq!(price, 150);
//!
//! let price = find_discount("UNKNOWN")
//!     .map(|percent| 200 - 200 * percent / 100)
//!     .get_value(200);
//! assert_eq!(price, 200);
//! ```

#[cfg(feature = "async")]
mod asynchronous;
mod iter;

pub use iter::MaybeIteratorExt;

use std::any::{Any, TypeId};
use std::fmt;

use crate::error::MaybeNoneError;

/// A container holding zero or one value.
///
/// `Maybe<T>` is either *Some*, carrying a `T`, or *None*. The state is an
/// explicit tag next to the payload, so any `T` is supported, including types
/// that have no natural "empty" value.
///
/// Two `Maybe`s are equal when both are None, or both are Some with equal
/// payloads.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::Maybe;
///
/// let name = Maybe::some("Ada");
/// assert!(name.is_some());
/// assert_eq!(name.map(str::len), Maybe::some(3));
///
/// let nothing: Maybe<&str> = Maybe::none();
/// assert_eq!(nothing.map(str::len), Maybe::none());
///
/// let from_option: Maybe<i32> = Some(5).into();
/// assert_eq!(from_option, Maybe::some(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Maybe<T> {
    value: Option<T>,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding `value`.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Creates an empty `Maybe`.
    #[inline]
    pub const fn none() -> Self {
        Self { value: None }
    }

    /// Creates a `Maybe` that must hold a value.
    ///
    /// `source` may be an `Option<T>` or another `Maybe<T>`.
    ///
    /// # Errors
    ///
    /// Returns [`MaybeNoneError`] if `source` holds no value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{Maybe, MaybeNoneError};
    ///
    /// assert_eq!(Maybe::try_some(Some(1)), Ok(Maybe::some(1)));
    /// assert_eq!(Maybe::try_some(Maybe::<i32>::none()), Err(MaybeNoneError));
    /// ```
    pub fn try_some(source: impl Into<Self>) -> Result<Self, MaybeNoneError> {
        let maybe = source.into();
        if maybe.is_none() {
            return Err(MaybeNoneError);
        }
        Ok(maybe)
    }

    /// Creates a `Maybe` holding the first element of `values`, or None if
    /// there is none.
    pub fn from_first<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().next().into()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        self.value.is_none()
    }

    // =========================================================================
    // Functor / Monad
    // =========================================================================

    /// Transforms the value, if present.
    ///
    /// `function` is not called on None.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    ///
    /// assert_eq!(Maybe::some(2).map(|n| n * 10), Maybe::some(20));
    /// assert_eq!(Maybe::<i32>::none().map(|n| n * 10), Maybe::none());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        Maybe {
            value: self.value.map(function),
        }
    }

    /// Replaces the value with `value`, if present.
    #[inline]
    pub fn map_to<U>(self, value: U) -> Maybe<U> {
        self.map(|_| value)
    }

    /// Chains a step that may itself produce no value.
    ///
    /// `function` is called exactly once on Some and never on None, and its
    /// result is returned as is, without nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::some(n / 2) } else { Maybe::none() }
    /// }
    ///
    /// assert_eq!(Maybe::some(8).bind(half).bind(half), Maybe::some(2));
    /// assert_eq!(Maybe::some(6).bind(half).bind(half), Maybe::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self.value {
            Some(value) => function(value),
            None => Maybe::none(),
        }
    }

    // =========================================================================
    // Match
    // =========================================================================

    /// Returns `some` if a value is present, `none` otherwise.
    #[inline]
    pub fn match_value<R>(self, some: R, none: R) -> R {
        if self.is_some() { some } else { none }
    }

    /// Maps the value with `some`, or returns `none` if absent.
    #[inline]
    pub fn match_or<R, S>(self, some: S, none: R) -> R
    where
        S: FnOnce(T) -> R,
    {
        self.value.map_or(none, some)
    }

    /// Evaluates exactly one of the branches.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    ///
    /// let greeting = Maybe::some("Ada").match_with(|name| format!("Hello, {name}"), || "Hello".to_string());
    /// assert_eq!(greeting, "Hello, Ada");
    /// ```
    #[inline]
    pub fn match_with<R, S, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        self.value.map_or_else(none, some)
    }

    // =========================================================================
    // Extraction and defaults
    // =========================================================================

    /// Returns the value, or `default` if absent.
    #[inline]
    pub fn get_value(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    /// Returns the value, or computes a default if absent.
    ///
    /// `default` is only called on None.
    #[inline]
    pub fn get_value_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(default)
    }

    /// Replaces None with `Some(value)`; a Some is returned unchanged.
    #[inline]
    #[must_use]
    pub fn with_default(self, value: T) -> Self {
        Self::some(self.get_value(value))
    }

    /// Replaces None with a computed value; a Some is returned unchanged.
    #[inline]
    #[must_use]
    pub fn with_default_else<F>(self, value: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::some(self.get_value_else(value))
    }

    /// Converts into a `Result`, failing with `error` on None.
    #[inline]
    pub fn to_result<E>(self, error: E) -> crate::Result<T, E> {
        self.value.ok_or(error).into()
    }

    /// Converts into a `Result`, failing with a computed error on None.
    #[inline]
    pub fn to_result_else<E, F>(self, error: F) -> crate::Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(error).into()
    }

    /// Converts into the standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.value
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        Maybe {
            value: self.value.as_ref(),
        }
    }

    // =========================================================================
    // Side effects
    // =========================================================================

    /// Runs `action` on the value if present, then returns the container
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn execute_if_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    /// Runs `action` if no value is present, then returns the container
    /// unchanged.
    #[inline]
    #[must_use]
    pub fn execute_if_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    /// Runs `action` on the container in either state, then returns it
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
    // Predicates and filters
    // =========================================================================

    /// Evaluates `predicate` on the value; `false` on None.
    #[inline]
    pub fn satisfy<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        self.value.as_ref().is_some_and(predicate)
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    /// Keeps the value only if it does not satisfy `predicate`.
    #[inline]
    #[must_use]
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    // =========================================================================
    // Combination
    // =========================================================================

    /// Pairs two values; Some only if both are Some.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines two values with `function`; Some only if both are Some.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    ///
    /// let first = Maybe::some("Ada");
    /// let last = Maybe::some("Lovelace");
    /// assert_eq!(
    ///     first.zip_with(last, |first, last| format!("{first} {last}")),
    ///     Maybe::some("Ada Lovelace".to_string())
    /// );
    /// assert_eq!(first.zip_with(Maybe::<&str>::none(), |a, b| a.len() + b.len()), Maybe::none());
    /// ```
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self.value, other.value) {
            (Some(left), Some(right)) => Maybe::some(function(left, right)),
            _ => Maybe::none(),
        }
    }
}

impl<T: 'static> Maybe<T> {
    /// Narrows the payload to `U`.
    ///
    /// Returns Some only if the value is present and its type is `U`;
    /// otherwise returns None. A `Box<dyn Any>` payload is checked by the
    /// dynamic type it holds. This never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    /// use std::any::Any;
    ///
    /// assert_eq!(Maybe::some(42_i32).of_type::<i32>(), Maybe::some(42));
    /// assert_eq!(Maybe::some(42_i32).of_type::<i64>(), Maybe::none());
    ///
    /// let erased: Maybe<Box<dyn Any>> = Maybe::some(Box::new(7_u8));
    /// assert_eq!(erased.of_type::<u8>(), Maybe::some(7));
    /// ```
    pub fn of_type<U: 'static>(self) -> Maybe<U> {
        self.bind(|value| {
            let boxed: Box<dyn Any> = Box::new(value);
            match boxed.downcast::<Box<dyn Any>>() {
                // An erased payload is narrowed by the type it hides.
                Ok(erased) if TypeId::of::<U>() != TypeId::of::<Box<dyn Any>>() => {
                    Maybe::some(*erased).downcast()
                }
                Ok(erased) => Maybe::<Box<dyn Any>>::some(erased).downcast(),
                Err(boxed) => Maybe::some(boxed).downcast(),
            }
        })
    }
}

impl Maybe<Box<dyn Any>> {
    /// Narrows a type-erased payload to `U`, None if its dynamic type differs.
    pub fn downcast<U: 'static>(self) -> Maybe<U> {
        self.bind(|value| value.downcast::<U>().ok().map(|value| *value).into())
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(formatter, "Some({value})"),
            None => write!(formatter, "None<{}>()", friendly_type_name::<T>()),
        }
    }
}

/// Renders a type name without module paths, e.g. `Vec<String>` rather than
/// `alloc::vec::Vec<alloc::string::String>`.
pub(crate) fn friendly_type_name<T: ?Sized>() -> String {
    fn flush(word: &mut String, name: &mut String) {
        name.push_str(word.rsplit("::").next().unwrap_or_default());
        word.clear();
    }

    let full_name = std::any::type_name::<T>();
    let mut name = String::with_capacity(full_name.len());
    let mut word = String::new();
    for character in full_name.chars() {
        if character.is_alphanumeric() || character == '_' || character == ':' {
            word.push(character);
        } else {
            flush(&mut word, &mut name);
            name.push(character);
        }
    }
    flush(&mut word, &mut name);
    name
}

static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Default);
static_assertions::assert_eq_size!(Maybe<u64>, Option<u64>);
