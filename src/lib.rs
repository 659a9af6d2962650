//! # bogoware-monads
//!
//! `Maybe` and `Result` containers with a typed error taxonomy, so pipelines
//! can express "maybe absent" and "maybe failed" without sentinel values or
//! panics.
//!
//! ## Overview
//!
//! - **[`Maybe<T>`]**: an optional value with `map`, `bind`, `match_with`,
//!   `get_value` and friends
//! - **[`Result<T, E>`]**: a success or an error, with `map`, `bind`,
//!   `map_error`, `ensure`, `recover_with` and side-effect hooks
//! - **Error taxonomy**: the [`Error`] trait, [`LogicError`] for expected
//!   errors, [`RuntimeError`] for captured faults, [`AggregateError`] for
//!   several independent failures, erased behind [`AnyError`]
//! - **Aggregation**: [`ResultIteratorExt::aggregate_results`] folds many
//!   results into one, reporting every failure
//! - **Fault boundary**: [`Result::try_execute`] turns raised errors and
//!   panics into [`RuntimeError`]s
//! - **[`Unit`]**: the success value of results that carry no data
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor`, `Applicative` and `Monad` for both containers
//! - `async`: `_async` counterparts of the combinators and of the fault boundary
//! - `serde`: serialization of `Maybe`, `Result`, `Unit` and `LogicError`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use bogoware_monads::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Order {
//!     sku: String,
//!     quantity: u32,
//! }
//!
//! fn validate(order: Order) -> Result<Order, LogicError> {
//!     Result::success(order)
//!         .ensure(|order| !order.sku.is_empty(), LogicError::new("sku is required"))
//!         .ensure(|order| order.quantity > 0, LogicError::new("quantity must be positive"))
//! }
//!
//! let orders = vec![
//!     Order { sku: "A-1".into(), quantity: 2 },
//!     Order { sku: String::new(), quantity: 1 },
//!     Order { sku: "B-7".into(), quantity: 0 },
//! ];
//!
//! let report = orders.into_iter().map(validate).aggregate_results();
//! let messages: Vec<_> = report
//!     .error()
//!     .map(|error| error.errors().iter().map(AnyError::message).collect())
//!     .unwrap_or_default();
//! assert_eq!(messages, ["sku is required", "quantity must be positive"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the containers, the error taxonomy and the extension traits.
/// Importing it brings this crate's `Result` into scope in place of the
/// standard one.
///
/// # Usage
///
/// ```rust
/// use bogoware_monads::prelude::*;
///
/// let greeting: Maybe<&str> = Maybe::some("hello");
/// assert_eq!(greeting.to_result(LogicError::new("missing")), Result::success("hello"));
/// ```
pub mod prelude {
    pub use crate::error::{
        AggregateError, AnyError, Error, LogicError, MaybeNoneError, ResultFailedError,
        ResultSuccessError, RuntimeError,
    };
    pub use crate::maybe::{Maybe, MaybeIteratorExt};
    pub use crate::result::{Result, ResultIteratorExt};
    pub use crate::unit::Unit;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod error;
mod maybe;
mod result;
mod unit;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use error::{
    AggregateError, AnyError, EmptyAggregateError, Error, Fault, LogicError, MaybeNoneError,
    PanicError, ResultFailedError, ResultSuccessError, RuntimeError,
};
pub use maybe::{Maybe, MaybeIteratorExt};
pub use result::{Result, ResultIteratorExt};
pub use unit::Unit;
