//! Type class traits for [`Maybe`](crate::Maybe) and [`Result`](crate::Result).
//!
//! The inherent combinators (`map`, `bind`, `zip_with`...) cover everyday
//! pipelines. The traits in this module expose the same operations under
//! their functional names so that generic code can be written once for both
//! containers:
//!
//! - [`Functor`]: mapping over the value
//! - [`Applicative`]: lifting values and combining independent containers
//! - [`Monad`]: sequencing dependent computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types. This module
//! uses Generic Associated Types through [`TypeConstructor`] to emulate them.
//!
//! # Examples
//!
//! ```rust
//! use bogoware_monads::{LogicError, Maybe, Result};
//! use bogoware_monads::typeclass::{Applicative, Monad};
//!
//! fn sum_all<M>(first: M, second: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     first.map2(second, |a, b| a + b)
//! }
//!
//! assert_eq!(sum_all(Maybe::some(1), Maybe::some(2)), Maybe::some(3));
//! assert_eq!(
//!     sum_all(Result::<_, LogicError>::success(1), Result::success(2)),
//!     Result::success(3)
//! );
//!
//! let chained = Maybe::some(10).flat_map(|n| Maybe::some(n / 2));
//! assert_eq!(chained, Maybe::some(5));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
