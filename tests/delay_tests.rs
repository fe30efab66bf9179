#![cfg(feature = "async")]
//! Integration tests for `delay`.
//!
//! Tests run on a paused tokio clock, so waits complete instantly while
//! preserving their ordering.
//!
//! Tests cover:
//! - The function runs only after the wait has elapsed
//! - Arguments are forwarded
//! - Cancellation before and after firing
//! - Failure outside a runtime

use rstest::rstest;
use sequent::ToolkitError;
use sequent::function::{DelayHandle, Scheduler, TokioScheduler, delay, delay_on};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::{advance, sleep};

// =============================================================================
// Firing
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_fires_after_wait() {
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let handle = delay(
        move |(): ()| flag.store(true, Ordering::SeqCst),
        Duration::from_millis(100),
        (),
    )
    .unwrap();

    advance(Duration::from_millis(50)).await;
    tokio::task::yield_now().await;
    assert!(!fired.load(Ordering::SeqCst));
    assert!(!handle.is_finished());

    assert!(handle.completed().await);
    assert!(fired.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_forwards_arguments() {
    let total = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&total);

    let handle = delay(
        move |(base, items): (usize, Vec<usize>)| {
            sink.store(base + items.iter().sum::<usize>(), Ordering::SeqCst);
        },
        Duration::from_secs(1),
        (10, vec![1, 2, 3]),
    )
    .unwrap();

    assert!(handle.completed().await);
    assert_eq!(total.load(Ordering::SeqCst), 16);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delay_returns_before_running() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);

    let handle = delay(
        move |(): ()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::ZERO,
        (),
    )
    .unwrap();

    assert_eq!(runs.load(Ordering::SeqCst), 0);
    assert!(handle.completed().await);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn delays_fire_in_deadline_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));
    let mut handles = Vec::new();

    for (label, wait) in [("late", 300), ("early", 100), ("middle", 200)] {
        let log = Arc::clone(&order);
        handles.push(
            delay(
                move |name: &'static str| log.lock().unwrap().push(name),
                Duration::from_millis(wait),
                label,
            )
            .unwrap(),
        );
    }
    for handle in handles {
        assert!(handle.completed().await);
    }

    assert_eq!(*order.lock().unwrap(), vec!["early", "middle", "late"]);
}

// =============================================================================
// Cancellation
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn cancel_before_firing_prevents_call() {
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let handle = delay(
        move |(): ()| flag.store(true, Ordering::SeqCst),
        Duration::from_millis(100),
        (),
    )
    .unwrap();

    handle.cancel();
    sleep(Duration::from_millis(500)).await;

    assert!(!fired.load(Ordering::SeqCst));
    assert!(!handle.completed().await);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn cancel_after_firing_is_noop() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);

    let handle = delay(
        move |(): ()| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_millis(10),
        (),
    )
    .unwrap();

    sleep(Duration::from_millis(50)).await;
    assert_eq!(runs.load(Ordering::SeqCst), 1);

    handle.cancel();
    handle.cancel();

    assert!(handle.completed().await);
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn dropping_handle_does_not_cancel() {
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    drop(
        delay(
            move |(): ()| flag.store(true, Ordering::SeqCst),
            Duration::from_millis(10),
            (),
        )
        .unwrap(),
    );

    sleep(Duration::from_millis(50)).await;
    assert!(fired.load(Ordering::SeqCst));
}

// =============================================================================
// Schedulers
// =============================================================================

#[rstest]
fn delay_outside_runtime_fails() {
    let result = delay(|_: i32| {}, Duration::from_millis(1), 1);
    assert_eq!(result.unwrap_err(), ToolkitError::SchedulerUnavailable);
    assert_eq!(
        TokioScheduler::current().unwrap_err(),
        ToolkitError::SchedulerUnavailable
    );
}

#[rstest]
fn delay_on_explicit_runtime_handle() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let scheduler = TokioScheduler::from_handle(runtime.handle().clone());
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let handle = delay_on(
        &scheduler,
        move |(): ()| flag.store(true, Ordering::SeqCst),
        Duration::from_millis(1),
        (),
    );

    assert!(runtime.block_on(handle.completed()));
    assert!(fired.load(Ordering::SeqCst));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn scheduler_trait_object_dispatch() {
    let scheduler = TokioScheduler::current().unwrap();
    let dynamic: &dyn Scheduler<Handle = DelayHandle> = &scheduler;
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let handle = delay_on(
        dynamic,
        move |(): ()| flag.store(true, Ordering::SeqCst),
        Duration::from_millis(5),
        (),
    );

    assert!(handle.completed().await);
    assert!(fired.load(Ordering::SeqCst));
}
