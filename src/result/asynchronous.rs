//! Asynchronous combinators for `Result`.
//!
//! Every method awaits at most one future: the one built by the supplied
//! closure, and only when the result is in the state that needs it. Closures
//! receiving `&T` or `&E` must return a future that does not borrow the
//! argument.

use std::future::Future;

use super::Result;
use crate::unit::Unit;

impl<T, E> Result<T, E> {
    /// Asynchronous [`map`](Result::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result};
    ///
    /// async fn price_of(sku: &'static str) -> u32 {
    ///     if sku == "A-1" { 120 } else { 80 }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// let price = Result::<_, LogicError>::success("A-1").map_async(price_of).await;
    /// assert_eq!(price, Result::success(120));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.inner {
            Ok(value) => Result::success(function(value).await),
            Err(error) => Result::failure(error),
        }
    }

    /// Asynchronous [`map_action`](Result::map_action).
    pub async fn map_action_async<F, Fut>(self, action: F) -> Result<Unit, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = ()>,
    {
        self.map_async(action).await.map_to_unit()
    }

    /// Asynchronous [`map_error`](Result::map_error).
    pub async fn map_error_async<E2, F, Fut>(self, function: F) -> Result<T, E2>
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = E2>,
    {
        match self.inner {
            Ok(value) => Result::success(value),
            Err(error) => Result::failure(function(error).await),
        }
    }

    /// Asynchronous [`bind`](Result::bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::{LogicError, Result};
    ///
    /// async fn load_user(id: u32) -> Result<String, LogicError> {
    ///     match id {
    ///         1 => Result::success("ada".to_string()),
    ///         _ => Result::failure(LogicError::new("user not found")),
    ///     }
    /// }
    ///
    /// # futures::executor::block_on(async {
    /// assert_eq!(Result::success(1).bind_async(load_user).await, Result::success("ada".to_string()));
    /// assert_eq!(
    ///     Result::success(2).bind_async(load_user).await,
    ///     Result::failure(LogicError::new("user not found"))
    /// );
    /// # });
    /// ```
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self.inner {
            Ok(value) => function(value).await,
            Err(error) => Result::failure(error),
        }
    }

    /// Asynchronous [`match_with`](Result::match_with), both branches async.
    pub async fn match_async<R, S, SFut, F, FFut>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.inner {
            Ok(value) => success(value).await,
            Err(error) => failure(error).await,
        }
    }

    /// [`match_with`](Result::match_with) with an async success branch.
    pub async fn match_success_async<R, S, SFut, F>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(E) -> R,
    {
        match self.inner {
            Ok(value) => success(value).await,
            Err(error) => failure(error),
        }
    }

    /// [`match_with`](Result::match_with) with an async failure branch.
    pub async fn match_failure_async<R, S, F, FFut>(self, success: S, failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> FFut,
        FFut: Future<Output = R>,
    {
        match self.inner {
            Ok(value) => success(value),
            Err(error) => failure(error).await,
        }
    }

    /// Asynchronous [`recover_with_else`](Result::recover_with_else).
    pub async fn recover_with_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce(E) -> Fut,
        Fut: Future<Output = T>,
    {
        match self.inner {
            Ok(value) => Self::success(value),
            Err(error) => Self::success(function(error).await),
        }
    }

    /// Asynchronous [`ensure`](Result::ensure).
    ///
    /// A failure is returned unchanged and `predicate` is not called.
    pub async fn ensure_async<P, Fut>(self, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match self.inner {
            Ok(value) => {
                if predicate(&value).await {
                    Self::success(value)
                } else {
                    Self::failure(error)
                }
            }
            Err(earlier) => Self::failure(earlier),
        }
    }

    /// Asynchronous [`ensure_else`](Result::ensure_else).
    pub async fn ensure_else_async<P, Fut, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
        F: FnOnce(&T) -> E,
    {
        match self.inner {
            Ok(value) => {
                if predicate(&value).await {
                    Self::success(value)
                } else {
                    Self::failure(error(&value))
                }
            }
            Err(earlier) => Self::failure(earlier),
        }
    }

    /// Asynchronous [`execute_if_success`](Result::execute_if_success).
    pub async fn execute_if_success_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Ok(value) = &self.inner {
            action(value).await;
        }
        self
    }

    /// Asynchronous [`execute_if_failure`](Result::execute_if_failure).
    pub async fn execute_if_failure_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&E) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(error) = &self.inner {
            action(error).await;
        }
        self
    }

    /// Asynchronous [`execute`](Result::execute).
    pub async fn execute_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        action(&self).await;
        self
    }

    /// Asynchronous [`satisfy`](Result::satisfy); `false` on failure without
    /// calling `predicate`.
    pub async fn satisfy_async<P, Fut>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match &self.inner {
            Ok(value) => predicate(value).await,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogicError;
    use futures::executor::block_on;
    use rstest::rstest;
    use std::cell::Cell;

    type Outcome = Result<i32, LogicError>;

    fn boom() -> LogicError {
        LogicError::new("boom")
    }

    #[rstest]
    fn map_async_skips_failures() {
        let calls = Cell::new(0);
        let result = block_on(Outcome::failure(boom()).map_async(|value| {
            calls.set(calls.get() + 1);
            async move { value }
        }));
        assert_eq!(result, Outcome::failure(boom()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_action_async_yields_unit() {
        let result = block_on(Outcome::success(1).map_action_async(|_| async {}));
        assert_eq!(result, Result::unit());
    }

    #[rstest]
    fn map_error_async_transforms_only_failures() {
        let to_len = |error: LogicError| async move { error.into_message().len() };
        assert_eq!(block_on(Outcome::success(1).map_error_async(to_len)), Result::success(1));
        assert_eq!(block_on(Outcome::failure(boom()).map_error_async(to_len)), Result::failure(4));
    }

    #[rstest]
    #[case(Outcome::success(2), 4)]
    #[case(Outcome::failure(LogicError::new("boom")), -4)]
    fn match_variants_agree(#[case] result: Outcome, #[case] expected: i32) {
        let failure_len = |error: LogicError| -i32::try_from(error.into_message().len()).unwrap_or_default();
        let both = block_on(
            result
                .clone()
                .match_async(|v| async move { v * 2 }, |e| async move { failure_len(e) }),
        );
        let success = block_on(result.clone().match_success_async(|v| async move { v * 2 }, failure_len));
        let failure = block_on(result.match_failure_async(|v| v * 2, |e| async move { failure_len(e) }));
        assert_eq!((both, success, failure), (expected, expected, expected));
    }

    #[rstest]
    fn recover_with_async_only_runs_on_failure() {
        let calls = Cell::new(0);
        let recovered = block_on(Outcome::success(1).recover_with_async(|_| {
            calls.set(calls.get() + 1);
            async { 0 }
        }));
        assert_eq!(recovered, Outcome::success(1));
        assert_eq!(calls.get(), 0);
        assert_eq!(
            block_on(Outcome::failure(boom()).recover_with_async(|_| async { 7 })),
            Outcome::success(7)
        );
    }

    #[rstest]
    fn ensure_async_on_failure_is_a_no_op() {
        let calls = Cell::new(0);
        let result = block_on(Outcome::failure(boom()).ensure_async(
            |_| {
                calls.set(calls.get() + 1);
                async { false }
            },
            LogicError::new("never"),
        ));
        assert_eq!(result, Outcome::failure(boom()));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn ensure_else_async_builds_the_error_from_the_value() {
        let result = block_on(Outcome::success(9).ensure_else_async(
            |value| {
                let value = *value;
                async move { value < 5 }
            },
            |value| LogicError::new(format!("{value} is too large")),
        ));
        assert_eq!(result, Outcome::failure(LogicError::new("9 is too large")));
    }

    #[rstest]
    fn execute_hooks_return_the_result_unchanged() {
        let seen = Cell::new(0);
        let success = block_on(Outcome::success(3).execute_if_success_async(|value| {
            seen.set(*value);
            async {}
        }));
        let failure = block_on(Outcome::failure(boom()).execute_if_failure_async(|_| {
            seen.set(seen.get() + 10);
            async {}
        }));
        let either = block_on(Outcome::success(1).execute_async(|_| {
            seen.set(seen.get() + 100);
            async {}
        }));
        assert_eq!(success, Outcome::success(3));
        assert_eq!(failure, Outcome::failure(boom()));
        assert_eq!(either, Outcome::success(1));
        assert_eq!(seen.get(), 113);
    }

    #[rstest]
    fn satisfy_async_is_false_on_failure() {
        assert!(block_on(Outcome::success(2).satisfy_async(|v| {
            let even = v % 2 == 0;
            async move { even }
        })));
        assert!(!block_on(Outcome::failure(boom()).satisfy_async(|_| async { true })));
    }
}
