#![cfg(feature = "async")]
//! Integration tests for the `_async` combinators and the async fault boundary.
//!
//! Each async combinator must behave like its synchronous counterpart, with
//! the awaited function only running in the matching state.

use bogoware_monads::{Error, LogicError, Maybe, PanicError, Result, RuntimeError, Unit};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

fn price_now(sku: &str) -> Maybe<u32> {
    match sku {
        "A-1" => Maybe::some(250),
        "B-7" => Maybe::some(1_200),
        _ => Maybe::none(),
    }
}

fn reserve_now(quantity: u32) -> Result<u32, LogicError> {
    if quantity == 0 {
        Result::failure(LogicError::new("nothing to reserve"))
    } else {
        Result::success(quantity)
    }
}

async fn fetch_price(sku: &'static str) -> Maybe<u32> {
    tokio::time::sleep(Duration::from_millis(1)).await;
    price_now(sku)
}

async fn reserve(quantity: u32) -> Result<u32, LogicError> {
    tokio::task::yield_now().await;
    reserve_now(quantity)
}

// =============================================================================
// Maybe
// =============================================================================

#[rstest]
#[case("A-1", Maybe::some(500))]
#[case("Z-0", Maybe::none())]
#[tokio::test]
async fn test_maybe_map_async_matches_map(#[case] sku: &'static str, #[case] expected: Maybe<u32>) {
    let priced = fetch_price(sku)
        .await
        .map_async(|price| async move { price * 2 })
        .await;
    assert_eq!(priced, expected);
    assert_eq!(priced, fetch_price(sku).await.map(|price| price * 2));
}

#[rstest]
#[tokio::test]
async fn test_maybe_bind_async_chains_lookups() {
    let price = Maybe::some("B-7").bind_async(fetch_price).await;
    assert_eq!(price, Maybe::some(1_200));

    let missing = Maybe::some("nope").bind_async(fetch_price).await;
    assert_eq!(missing, Maybe::none());
}

#[rstest]
#[case(Maybe::some("A-1"))]
#[case(Maybe::some("Z-0"))]
#[case(Maybe::none())]
#[tokio::test]
async fn test_maybe_bind_async_matches_bind(#[case] sku: Maybe<&'static str>) {
    assert_eq!(sku.bind_async(fetch_price).await, sku.bind(price_now));
}

#[rstest]
#[tokio::test]
async fn test_maybe_defaults_are_lazy() {
    let calls = AtomicUsize::new(0);
    let fallback = || {
        calls.fetch_add(1, Ordering::SeqCst);
        async { 99 }
    };

    assert_eq!(Maybe::some(1).get_value_async(fallback).await, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(Maybe::none().with_default_async(fallback).await, Maybe::some(99));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_maybe_match_async_selects_branch() {
    let render = |maybe: Maybe<u32>| {
        maybe.match_async(
            |price| async move { format!("{price} cents") },
            || async { "unpriced".to_string() },
        )
    };
    assert_eq!(render(fetch_price("A-1").await).await, "250 cents");
    assert_eq!(render(fetch_price("Z-0").await).await, "unpriced");
}

#[rstest]
#[tokio::test]
async fn test_maybe_hooks_async_run_in_matching_state() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);
    let missing = Arc::clone(&log);

    let price = fetch_price("A-1")
        .await
        .execute_if_some_async(|price| {
            let price = *price;
            async move { seen.lock().await.push(format!("priced {price}")) }
        })
        .await
        .execute_if_none_async(|| async move { missing.lock().await.push("missing".to_string()) })
        .await;

    assert_eq!(price, Maybe::some(250));
    assert_eq!(*log.lock().await, vec!["priced 250".to_string()]);
}

#[rstest]
#[tokio::test]
async fn test_maybe_satisfy_async() {
    let expensive = |price: &u32| {
        let price = *price;
        async move { price > 1_000 }
    };
    assert!(fetch_price("B-7").await.satisfy_async(expensive).await);
    assert!(!fetch_price("A-1").await.satisfy_async(expensive).await);
    assert!(!fetch_price("Z-0").await.satisfy_async(expensive).await);
}

// =============================================================================
// Result
// =============================================================================

#[rstest]
#[case(3, Result::success(6))]
#[case(0, Result::failure(LogicError::new("nothing to reserve")))]
#[tokio::test]
async fn test_result_bind_async_then_map_async(
    #[case] quantity: u32,
    #[case] expected: Result<u32, LogicError>,
) {
    let reserved = Result::success(quantity)
        .bind_async(reserve)
        .await
        .map_async(|reserved| async move { reserved * 2 })
        .await;
    assert_eq!(reserved, expected);
}

#[rstest]
#[tokio::test]
async fn test_result_ensure_async_validates_in_order() {
    let positive = |quantity: &u32| {
        let quantity = *quantity;
        async move { quantity > 0 }
    };
    let small = |quantity: &u32| {
        let quantity = *quantity;
        async move { quantity <= 10 }
    };

    let accepted = Result::<u32, LogicError>::success(4)
        .ensure_async(positive, LogicError::new("empty"))
        .await
        .ensure_else_async(small, |quantity| LogicError::new(format!("{quantity} is too many")))
        .await;
    assert_eq!(accepted, Result::success(4));

    let rejected = Result::<u32, LogicError>::success(40)
        .ensure_async(positive, LogicError::new("empty"))
        .await
        .ensure_else_async(small, |quantity| LogicError::new(format!("{quantity} is too many")))
        .await;
    assert_eq!(rejected, Result::failure(LogicError::new("40 is too many")));
}

#[rstest]
#[case(Result::success(4))]
#[case(Result::success(0))]
#[case(Result::failure(LogicError::new("earlier")))]
#[tokio::test]
async fn test_result_async_combinators_match_sync_forms(#[case] input: Result<u32, LogicError>) {
    assert_eq!(
        input.clone().bind_async(reserve).await,
        input.clone().bind(reserve_now)
    );

    let positive = |quantity: &u32| {
        let quantity = *quantity;
        async move { quantity > 0 }
    };
    assert_eq!(
        input.clone().ensure_async(positive, LogicError::new("empty")).await,
        input.clone().ensure(|quantity| *quantity > 0, LogicError::new("empty"))
    );

    assert_eq!(
        input.clone().recover_with_async(|_| async { 1 }).await,
        input.recover_with_else(|_| 1)
    );
}

#[rstest]
#[tokio::test]
async fn test_result_error_side_async_combinators() {
    let recovered = reserve(0)
        .await
        .recover_with_async(|error| async move { u32::try_from(error.message().len()).unwrap_or(0) })
        .await;
    assert_eq!(recovered, Result::success(18));

    let relabelled = reserve(0)
        .await
        .map_error_async(|error| async move { format!("reservation failed: {}", error.message()) })
        .await;
    assert_eq!(
        relabelled.error().map(String::as_str),
        Some("reservation failed: nothing to reserve")
    );
}

#[rstest]
#[tokio::test]
async fn test_result_map_action_async_and_hooks() {
    let reserved = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&reserved);
    let outcome = reserve(5)
        .await
        .map_action_async(|quantity| async move {
            counter.fetch_add(quantity, Ordering::SeqCst);
        })
        .await;
    assert_eq!(outcome, Result::success(Unit));
    assert_eq!(reserved.load(Ordering::SeqCst), 5);

    let failures = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&failures);
    let outcome = reserve(0)
        .await
        .execute_if_failure_async(|_| async move {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    assert!(outcome.is_failure());
    assert_eq!(failures.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test]
async fn test_result_match_async_selects_branch() {
    let describe = |result: Result<u32, LogicError>| {
        result.match_async(
            |quantity| async move { format!("reserved {quantity}") },
            |error| async move { error.into_message() },
        )
    };
    assert_eq!(describe(reserve(2).await).await, "reserved 2");
    assert_eq!(describe(reserve(0).await).await, "nothing to reserve");
}

// =============================================================================
// Async fault boundary
// =============================================================================

#[rstest]
#[tokio::test]
async fn test_try_execute_async_wraps_returned_faults() {
    let outcome = Result::try_execute_async(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
        "42x".parse::<u32>()
    })
    .await;
    let error = outcome.error();
    assert!(error.is_some_and(|error| {
        error.downcast_fault::<std::num::ParseIntError>().is_some()
    }));
}

#[rstest]
#[tokio::test]
async fn test_try_execute_async_passes_values_through() {
    let outcome = Result::try_execute_async(|| async { "42".parse::<u32>() }).await;
    assert_eq!(outcome, Result::success(42));
}

#[rstest]
#[tokio::test]
async fn test_try_catch_async_converts_panics_while_polling() {
    async fn unreachable_quota() -> u32 {
        tokio::task::yield_now().await;
        panic!("quota service unreachable")
    }

    let outcome: Result<u32, RuntimeError> = Result::try_catch_async(unreachable_quota).await;
    let error = outcome.error();
    assert_eq!(
        error.map(|error| error.message().into_owned()),
        Some("quota service unreachable".to_string())
    );
    assert!(error
        .and_then(|error| error.downcast_fault::<PanicError>())
        .is_some());
}

#[rstest]
#[tokio::test]
async fn test_async_combinators_do_not_catch_panics() {
    async fn explode(_: u32) -> u32 {
        panic!("escapes")
    }

    let handle = tokio::spawn(async {
        Result::<u32, LogicError>::success(1).map_async(explode).await
    });
    let joined: std::result::Result<Result<u32, LogicError>, _> = handle.await;
    assert!(joined.is_err_and(|error| error.is_panic()));
}
