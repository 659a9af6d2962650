//! Asynchronous combinators for `Maybe`.
//!
//! Each method mirrors a synchronous combinator and awaits the supplied
//! future at most once. Closures receiving `&T` must return a future that
//! does not borrow the argument; copy or clone what the future needs first.

use std::future::Future;

use super::Maybe;

impl<T> Maybe<T> {
    /// Asynchronous [`map`](Maybe::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    ///
    /// # futures::executor::block_on(async {
    /// let doubled = Maybe::some(21).map_async(|n| async move { n * 2 }).await;
    /// assert_eq!(doubled, Maybe::some(42));
    /// # });
    /// ```
    pub async fn map_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self.value {
            Some(value) => Maybe::some(function(value).await),
            None => Maybe::none(),
        }
    }

    /// Asynchronous [`bind`](Maybe::bind).
    pub async fn bind_async<U, F, Fut>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<U>>,
    {
        match self.value {
            Some(value) => function(value).await,
            None => Maybe::none(),
        }
    }

    /// Asynchronous [`match_with`](Maybe::match_with), both branches async.
    pub async fn match_async<R, S, SFut, N, NFut>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
    {
        match self.value {
            Some(value) => some(value).await,
            None => none().await,
        }
    }

    /// [`match_with`](Maybe::match_with) with an async Some branch.
    pub async fn match_some_async<R, S, SFut, N>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        N: FnOnce() -> R,
    {
        match self.value {
            Some(value) => some(value).await,
            None => none(),
        }
    }

    /// [`match_with`](Maybe::match_with) with an async None branch.
    pub async fn match_none_async<R, S, N, NFut>(self, some: S, none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> NFut,
        NFut: Future<Output = R>,
    {
        match self.value {
            Some(value) => some(value),
            None => none().await,
        }
    }

    /// [`get_value_else`](Maybe::get_value_else) with an async default.
    pub async fn get_value_async<F, Fut>(self, default: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.value {
            Some(value) => value,
            None => default().await,
        }
    }

    /// [`with_default_else`](Maybe::with_default_else) with an async default.
    pub async fn with_default_async<F, Fut>(self, default: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        Self::some(self.get_value_async(default).await)
    }

    /// Asynchronous [`execute_if_some`](Maybe::execute_if_some).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bogoware_monads::Maybe;
    /// use std::sync::Mutex;
    ///
    /// # futures::executor::block_on(async {
    /// let audit = Mutex::new(Vec::new());
    /// let order = Maybe::some(17)
    ///     .execute_if_some_async(|id| {
    ///         let id = *id;
    ///         let audit = &audit;
    ///         async move { audit.lock().unwrap().push(id) }
    ///     })
    ///     .await;
    /// assert_eq!(order, Maybe::some(17));
    /// assert_eq!(*audit.lock().unwrap(), vec![17]);
    /// # });
    /// ```
    pub async fn execute_if_some_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Some(value) = &self.value {
            action(value).await;
        }
        self
    }

    /// Asynchronous [`execute_if_none`](Maybe::execute_if_none).
    pub async fn execute_if_none_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.is_none() {
            action().await;
        }
        self
    }

    /// Asynchronous [`execute`](Maybe::execute).
    pub async fn execute_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        action(&self).await;
        self
    }

    /// Asynchronous [`satisfy`](Maybe::satisfy); `false` on None without
    /// calling `predicate`.
    pub async fn satisfy_async<P, Fut>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> Fut,
        Fut: Future<Output = bool>,
    {
        match &self.value {
            Some(value) => predicate(value).await,
            None => false,
        }
    }
}
