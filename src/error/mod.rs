//! The error taxonomy shared by every [`Result`](crate::Result).
//!
//! Errors are immutable values, constructed once and then only passed around.
//! The taxonomy distinguishes three kinds of failure:
//!
//! - [`LogicError`]: an *expected*, application-level error, for example an
//!   input that does not satisfy a business rule. It is meant to be handled
//!   programmatically and can be wrapped by richer domain error types.
//! - [`RuntimeError`]: an *unexpected* fault coming from the outside world,
//!   captured at the [`Result::try_execute`](crate::Result::try_execute) boundary.
//! - [`AggregateError`]: a composite carrying an ordered, non-empty list of
//!   independent failures, used when every failure must be reported rather
//!   than only the first one.
//!
//! All of them implement the [`Error`] trait, and any of them can be erased into
//! an [`AnyError`], which is the default error parameter of `Result`.
//!
//! The module also defines the misuse errors returned by accessors called
//! against the wrong container state ([`ResultFailedError`], [`ResultSuccessError`],
//! [`MaybeNoneError`]) and the precondition error [`EmptyAggregateError`].
//!
//! # Defining a domain error
//!
//! ```rust
//! use bogoware_monads::{AnyError, Error, LogicError};
//! use std::borrow::Cow;
//! use std::fmt;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct OutOfStock {
//!     sku: String,
//! }
//!
//! impl fmt::Display for OutOfStock {
//!     fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(formatter, "{} is out of stock", self.sku)
//!     }
//! }
//!
//! impl Error for OutOfStock {}
//!
//! let error = AnyError::new(OutOfStock { sku: "A-42".to_string() });
//! assert_eq!(error.message(), "A-42 is out of stock");
//! assert!(error.is::<OutOfStock>());
//! assert!(!error.is::<LogicError>());
//! ```

mod aggregate;
mod any;
mod logic;
mod misuse;
mod runtime;

pub use aggregate::AggregateError;
pub use any::AnyError;
pub use logic::LogicError;
pub use misuse::{EmptyAggregateError, MaybeNoneError, ResultFailedError, ResultSuccessError};
pub use runtime::{Fault, PanicError, RuntimeError};

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// The base trait of every error carried by a failed [`Result`](crate::Result).
///
/// An `Error` exposes a human readable [`message`](Error::message). Composite
/// errors additionally expose their children through
/// [`inner_errors`](Error::inner_errors).
///
/// Implementors must be `PartialEq`: two errors erased into [`AnyError`] are
/// equal when they have the same concrete type and compare equal as that type.
pub trait Error: ErrorEq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The error message.
    ///
    /// Defaults to the `Display` rendering of the error.
    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    /// The errors this error is composed of, in order.
    ///
    /// Empty for every error except [`AggregateError`].
    fn inner_errors(&self) -> &[AnyError] {
        &[]
    }
}

/// Dynamic equality support for `dyn Error`.
///
/// Implemented for every sized `PartialEq + 'static` type; there is no need
/// to implement it by hand.
#[doc(hidden)]
pub trait ErrorEq {
    /// Upcasts to `Any` so the concrete type can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// Compares with a value of unknown type.
    fn eq_dyn(&self, other: &dyn Any) -> bool;
}

impl<E: PartialEq + Any> ErrorEq for E {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn eq_dyn(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

impl PartialEq for dyn Error {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(ErrorEq::as_any(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct NotFound(u32);

    impl fmt::Display for NotFound {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "record {} not found", self.0)
        }
    }

    impl Error for NotFound {}

    #[rstest]
    fn default_message_uses_display() {
        assert_eq!(NotFound(7).message(), "record 7 not found");
    }

    #[rstest]
    fn default_inner_errors_is_empty() {
        assert!(NotFound(7).inner_errors().is_empty());
    }

    #[rstest]
    fn dyn_equality_requires_the_same_concrete_type() {
        let left: &dyn Error = &NotFound(1);
        let same: &dyn Error = &NotFound(1);
        let different: &dyn Error = &NotFound(2);
        let other_type: &dyn Error = &LogicError::new("record 1 not found");

        assert!(left == same);
        assert!(left != different);
        assert!(left != other_type);
    }
}
