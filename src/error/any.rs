//! Type-erased, shareable error handle.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use super::{Error, ErrorEq};

/// A shared handle to any [`Error`].
///
/// `AnyError` is the default error parameter of [`Result`](crate::Result). It
/// erases the concrete error type while keeping it recoverable through
/// [`downcast_ref`](AnyError::downcast_ref), and it is cheap to clone (the
/// error itself is reference counted).
///
/// Every `E: Error` converts into `AnyError` with `From`/`Into`.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{AnyError, LogicError};
///
/// let error: AnyError = LogicError::new("invalid quantity").into();
/// assert_eq!(error.message(), "invalid quantity");
/// assert_eq!(error.downcast_ref::<LogicError>(), Some(&LogicError::new("invalid quantity")));
/// assert_eq!(error, AnyError::new(LogicError::new("invalid quantity")));
/// ```
#[derive(Clone)]
pub struct AnyError(Arc<dyn Error>);

impl AnyError {
    /// Erases `error` into a shared handle.
    pub fn new<E: Error>(error: E) -> Self {
        Self(Arc::new(error))
    }

    /// The message of the wrapped error.
    pub fn message(&self) -> Cow<'_, str> {
        self.0.message()
    }

    /// The children of the wrapped error, empty unless it is composite.
    pub fn inner_errors(&self) -> &[Self] {
        self.0.inner_errors()
    }

    /// Returns `true` if the wrapped error is an `E`.
    pub fn is<E: Error>(&self) -> bool {
        self.downcast_ref::<E>().is_some()
    }

    /// Returns the wrapped error as an `E`, if it is one.
    pub fn downcast_ref<E: Error>(&self) -> Option<&E> {
        ErrorEq::as_any(&*self.0).downcast_ref::<E>()
    }

    /// Borrows the wrapped error as a trait object.
    pub fn as_error(&self) -> &dyn Error {
        &*self.0
    }
}

impl<E: Error> From<E> for AnyError {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl PartialEq for AnyError {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl fmt::Debug for AnyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, formatter)
    }
}

impl fmt::Display for AnyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, formatter)
    }
}

impl std::error::Error for AnyError {}

static_assertions::assert_impl_all!(AnyError: Send, Sync, Clone);
