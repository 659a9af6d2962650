//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Maybe<_>` or `Result<_, E>` as type
//! constructors directly. [`TypeConstructor`] works around this with a generic
//! associated type, which is what lets [`Functor`](super::Functor),
//! [`Applicative`](super::Applicative) and [`Monad`](super::Monad) be written
//! once for both containers.
//!
//! # Example
//!
//! ```rust
//! use bogoware_monads::Maybe;
//! use bogoware_monads::typeclass::TypeConstructor;
//!
//! fn empty_of<T: TypeConstructor>(_: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let some_int = Maybe::some(42);
//! let none_string: Maybe<String> = empty_of(&some_int);
//! assert_eq!(none_string, Maybe::none());
//! ```

use crate::maybe::Maybe;
use crate::result::Result;

/// A type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: the type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type, e.g. `i32` for `Maybe<i32>`.
    type Inner;

    /// The same type constructor applied to `B`.
    ///
    /// For `Result<T, E>` the error type is kept: `WithType<B>` is `Result<B, E>`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Maybe<A> / Result<T, E> Implementations
// =============================================================================

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}
