//! The fault boundary.
//!
//! Combinators never catch faults: a panic escaping a closure passed to `map`
//! or `bind` unwinds through the pipeline. The helpers in this module are the
//! single place where faults are turned into values. A raised error or a
//! panic inside the wrapped computation becomes a failed result carrying a
//! [`RuntimeError`].

use std::any::Any;
use std::convert::Infallible;
use std::panic::{self, AssertUnwindSafe};
use std::result::Result as StdResult;

use super::Result;
use crate::error::{Fault, PanicError, RuntimeError};
use crate::unit::Unit;

impl<T> Result<T, RuntimeError> {
    /// Runs a fallible computation, capturing both its error and any panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{Error, Result};
    ///
    /// let parsed = Result::try_execute(|| "42".parse::<i32>());
    /// assert_eq!(parsed.value(), Some(&42));
    ///
    /// let parsed = Result::try_execute(|| "forty-two".parse::<i32>());
    /// assert_eq!(
    ///     parsed.error().map(|error| error.message().into_owned()),
    ///     Some("invalid digit found in string".to_string())
    /// );
    /// ```
    pub fn try_execute<F, X>(computation: F) -> Self
    where
        F: FnOnce() -> StdResult<T, X>,
        X: Into<Fault>,
    {
        Self::from_outcome(panic::catch_unwind(AssertUnwindSafe(computation)))
    }

    /// Runs an infallible computation, capturing any panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{PanicError, Result};
    ///
    /// let outcome = Result::<i32, _>::try_catch(|| panic!("index out of range"));
    /// let fault = outcome.error().and_then(|error| error.downcast_fault::<PanicError>());
    /// assert_eq!(fault.map(PanicError::message), Some("index out of range"));
    /// ```
    pub fn try_catch<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::try_execute(|| Ok::<T, Infallible>(computation()))
    }

    fn from_outcome<X>(outcome: StdResult<StdResult<T, X>, Box<dyn Any + Send>>) -> Self
    where
        X: Into<Fault>,
    {
        match outcome {
            Ok(Ok(value)) => Self::success(value),
            Ok(Err(fault)) => Self::from_fault(fault.into()),
            Err(payload) => Self::from_fault(Box::new(PanicError::from_payload(&*payload))),
        }
    }

    fn from_fault(fault: Fault) -> Self {
        let error = RuntimeError::new(fault);
        tracing::debug!(fault = %error, "computation faulted");
        Self::failure(error)
    }
}

#[cfg(feature = "async")]
impl<T> Result<T, RuntimeError> {
    /// Asynchronous [`try_execute`](Result::try_execute).
    ///
    /// A panic is captured whether it happens while building the future or
    /// while polling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{Error, Result};
    /// use std::io;
    ///
    /// async fn fetch(ok: bool) -> std::result::Result<String, io::Error> {
    ///     if ok {
    ///         Ok("payload".to_string())
    ///     } else {
    ///         Err(io::Error::other("connection refused"))
    ///     }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// let fetched = Result::try_execute_async(|| fetch(true)).await;
    /// assert_eq!(fetched.value().map(String::as_str), Some("payload"));
    ///
    /// let fetched = Result::try_execute_async(|| fetch(false)).await;
    /// assert_eq!(fetched.error().map(|e| e.message().into_owned()), Some("connection refused".into()));
    /// # });
    /// ```
    pub async fn try_execute_async<F, Fut, X>(computation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = StdResult<T, X>>,
        X: Into<Fault>,
    {
        use futures::FutureExt;

        let outcome = match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
            Err(payload) => Err(payload),
        };
        Self::from_outcome(outcome)
    }

    /// Asynchronous [`try_catch`](Result::try_catch).
    pub async fn try_catch_async<F, Fut>(computation: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        use futures::FutureExt;

        Self::try_execute_async(|| computation().map(Ok::<T, Infallible>)).await
    }
}

impl Result<Unit, RuntimeError> {
    /// Runs a side-effecting action, capturing any panic.
    ///
    /// The [`try_catch`](Result::try_catch) of actions that produce no value:
    /// the success carries [`Unit`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{Result, Unit};
    ///
    /// let mut flushed = false;
    /// assert_eq!(Result::try_catch_action(|| flushed = true), Result::success(Unit));
    /// assert!(flushed);
    ///
    /// assert!(Result::try_catch_action(|| panic!("disk detached")).is_failure());
    /// ```
    pub fn try_catch_action<F>(action: F) -> Self
    where
        F: FnOnce(),
    {
        Self::try_catch(|| {
            action();
            Unit
        })
    }

    /// Asynchronous [`try_catch_action`](Result::try_catch_action).
    #[cfg(feature = "async")]
    pub async fn try_catch_action_async<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        use futures::FutureExt;

        Self::try_catch_async(|| action().map(|()| Unit)).await
    }
}

impl<E> Result<Unit, E> {
    /// Succeeds with [`Unit`] if `condition` holds, fails with `error`
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result, Unit};
    ///
    /// let stock = 3;
    /// assert_eq!(Result::ensure_that(stock > 0, LogicError::new("sold out")), Result::success(Unit));
    /// assert_eq!(
    ///     Result::ensure_that(stock > 5, LogicError::new("not enough stock")),
    ///     Result::failure(LogicError::new("not enough stock"))
    /// );
    /// ```
    #[inline]
    pub fn ensure_that(condition: bool, error: E) -> Self {
        Self::ensure_that_else(condition, || error)
    }

    /// Succeeds with [`Unit`] if `condition` holds, fails with a computed
    /// error otherwise.
    #[inline]
    pub fn ensure_that_else<F>(condition: bool, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        if condition {
            Self::unit()
        } else {
            Self::failure(error())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, LogicError};
    use rstest::rstest;
    use std::cell::Cell;
    use std::io;

    #[rstest]
    fn try_execute_keeps_successes() {
        let outcome = Result::try_execute(|| Ok::<_, io::Error>(5));
        assert_eq!(outcome, Result::success(5));
    }

    #[rstest]
    fn try_execute_captures_raised_errors() {
        let outcome: Result<i32, RuntimeError> =
            Result::try_execute(|| Err(io::Error::new(io::ErrorKind::NotFound, "missing file")));
        let error = outcome.get_error();
        let kind = error
            .as_ref()
            .ok()
            .and_then(|error| error.downcast_fault::<io::Error>())
            .map(io::Error::kind);
        assert_eq!(kind, Some(io::ErrorKind::NotFound));
        assert_eq!(error.map(|error| error.message().into_owned()), Ok("missing file".to_string()));
    }

    #[rstest]
    fn try_catch_action_yields_unit() {
        let calls = Cell::new(0);
        let outcome = Result::try_catch_action(|| calls.set(calls.get() + 1));
        assert_eq!(outcome, Result::success(Unit));
        assert_eq!(calls.get(), 1);

        let outcome = Result::try_catch_action(|| panic!("action failed"));
        assert_eq!(
            outcome.error().map(|error| error.message().into_owned()),
            Some("action failed".to_string())
        );
    }

    #[rstest]
    fn try_execute_accepts_string_faults() {
        let outcome: Result<i32, RuntimeError> = Result::try_execute(|| Err("plain message"));
        assert_eq!(outcome, Result::failure(RuntimeError::new("plain message")));
    }

    #[rstest]
    #[case::literal(|| -> i32 { panic!("literal payload") }, "literal payload")]
    #[case::formatted(|| -> i32 { panic!("{} payload", "formatted") }, "formatted payload")]
    fn try_catch_captures_panics(#[case] computation: fn() -> i32, #[case] expected: &str) {
        let outcome = Result::try_catch(computation);
        let message = outcome
            .error()
            .and_then(|error| error.downcast_fault::<PanicError>())
            .map(|fault| fault.message().to_string());
        assert_eq!(message.as_deref(), Some(expected));
    }

    #[rstest]
    fn try_catch_runs_the_computation_once() {
        let calls = Cell::new(0);
        let outcome = Result::try_catch(|| {
            calls.set(calls.get() + 1);
            "done"
        });
        assert_eq!(outcome, Result::success("done"));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    #[case(true, Result::unit())]
    #[case(false, Result::failure(LogicError::new("condition failed")))]
    fn ensure_that(#[case] condition: bool, #[case] expected: Result<Unit, LogicError>) {
        assert_eq!(
            Result::ensure_that(condition, LogicError::new("condition failed")),
            expected
        );
    }

    #[rstest]
    fn ensure_that_else_is_lazy() {
        let calls = Cell::new(0);
        let outcome = Result::ensure_that_else(true, || {
            calls.set(calls.get() + 1);
            LogicError::new("never")
        });
        assert!(outcome.is_success());
        assert_eq!(calls.get(), 0);
    }

    #[cfg(feature = "async")]
    mod asynchronous {
        use super::*;
        use futures::executor::block_on;

        #[rstest]
        fn try_execute_async_captures_errors() {
            let outcome: Result<i32, RuntimeError> =
                block_on(Result::try_execute_async(|| async { Err("remote failure") }));
            assert_eq!(outcome, Result::failure(RuntimeError::new("remote failure")));
        }

        async fn explode() -> i32 {
            panic!("polled panic")
        }

        #[rstest]
        fn try_catch_async_captures_panics_while_polling() {
            let outcome: Result<i32, RuntimeError> = block_on(Result::try_catch_async(explode));
            assert_eq!(outcome, Result::failure(RuntimeError::new("polled panic")));
        }

        #[rstest]
        fn try_catch_action_async_yields_unit() {
            let outcome = block_on(Result::try_catch_action_async(|| async {}));
            assert_eq!(outcome, Result::success(Unit));
        }

        #[rstest]
        fn try_catch_async_captures_panics_while_building() {
            let outcome: Result<i32, RuntimeError> =
                block_on(Result::try_catch_async(|| -> std::future::Ready<i32> {
                    panic!("eager panic")
                }));
            assert_eq!(outcome, Result::failure(RuntimeError::new("eager panic")));
        }

        #[rstest]
        fn try_catch_async_keeps_successes() {
            let outcome: Result<i32, RuntimeError> = block_on(Result::try_catch_async(|| async { 8 }));
            assert_eq!(outcome, Result::success(8));
        }
    }
}
