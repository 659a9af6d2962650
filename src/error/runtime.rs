//! Unexpected faults captured at the fault boundary.

use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;

use super::Error;

/// Any raised fault: a boxed standard error.
///
/// `&str`, `String` and every `std::error::Error + Send + Sync` convert into a
/// `Fault` with `Into`.
pub type Fault = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An unexpected error that depends on external factors (network, file
/// system, a panicking computation...).
///
/// A `RuntimeError` wraps the fault that caused it; its message mirrors the
/// fault's message and the fault stays reachable as the error `source`.
/// Runtime errors are produced by the [`try_execute`](crate::Result::try_execute)
/// family of boundary helpers, but can also be created directly.
///
/// Equality compares messages only: two runtime errors whose faults render
/// the same are equal.
///
/// # Examples
///
/// ```rust
/// use bogoware_monads::{Error, RuntimeError};
/// use std::io;
///
/// let error = RuntimeError::new(io::Error::new(io::ErrorKind::NotFound, "config.toml"));
/// assert_eq!(error.message(), "config.toml");
/// assert!(error.downcast_fault::<io::Error>().is_some());
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeError {
    message: String,
    #[source]
    fault: Arc<dyn std::error::Error + Send + Sync + 'static>,
}

impl RuntimeError {
    /// Wraps a fault.
    pub fn new(fault: impl Into<Fault>) -> Self {
        let fault: Fault = fault.into();
        Self {
            message: fault.to_string(),
            fault: Arc::from(fault),
        }
    }

    /// The fault that caused this error.
    pub fn fault(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.fault
    }

    /// Returns the fault as an `F`, if it is one.
    pub fn downcast_fault<F>(&self) -> Option<&F>
    where
        F: std::error::Error + 'static,
    {
        self.fault.downcast_ref::<F>()
    }
}

impl Error for RuntimeError {
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl PartialEq for RuntimeError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

/// The fault recorded when a computation panics inside the fault boundary.
///
/// The message is recovered from the panic payload when it is a string, as
/// produced by `panic!` with a literal or a format string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
}

impl PanicError {
    const UNKNOWN_PAYLOAD: &'static str = "computation panicked";

    /// Builds the fault from a payload returned by `catch_unwind`.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| Self::UNKNOWN_PAYLOAD.to_string());
        Self { message }
    }

    /// The panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io;

    #[rstest]
    fn message_mirrors_the_fault() {
        let error = RuntimeError::new(io::Error::other("connection reset"));
        assert_eq!(Error::message(&error), "connection reset");
        assert_eq!(error.to_string(), "connection reset");
    }

    #[rstest]
    fn fault_is_the_error_source() {
        let error = RuntimeError::new("disk full");
        let source = std::error::Error::source(&error).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("disk full"));
        assert_eq!(error.fault().to_string(), "disk full");
    }

    #[rstest]
    fn downcast_recovers_the_fault_type() {
        let error = RuntimeError::new(io::Error::new(io::ErrorKind::TimedOut, "slow"));
        let fault = error.downcast_fault::<io::Error>();
        assert_eq!(fault.map(io::Error::kind), Some(io::ErrorKind::TimedOut));
        assert!(error.downcast_fault::<PanicError>().is_none());
    }

    #[rstest]
    fn equality_compares_messages() {
        assert_eq!(RuntimeError::new("a"), RuntimeError::new(io::Error::other("a")));
        assert_ne!(RuntimeError::new("a"), RuntimeError::new("b"));
    }

    #[rstest]
    #[case(Box::new("static message"), "static message")]
    #[case(Box::new(String::from("owned message")), "owned message")]
    #[case(Box::new(42_u8), "computation panicked")]
    fn panic_payload_message(#[case] payload: Box<dyn Any + Send>, #[case] expected: &str) {
        assert_eq!(PanicError::from_payload(payload.as_ref()).message(), expected);
    }
}
