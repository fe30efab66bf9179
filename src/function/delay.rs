//! Deferred invocation on a scheduler.
//!
//! [`delay`] runs a function once, after a wait, on the ambient tokio
//! runtime. It returns a [`DelayHandle`] straight away; the caller is never
//! blocked. [`delay_on`] does the same on any [`Scheduler`].
//!
//! # Cancellation
//!
//! Cancelling before the deadline guarantees the function never runs.
//! Cancelling after it has run does nothing.
//!
//! # Examples
//!
//! ```rust
//! use sequent::function::delay;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let total = Arc::new(AtomicUsize::new(0));
//! let sink = Arc::clone(&total);
//!
//! let handle = delay(
//!     move |(left, right): (usize, usize)| {
//!         sink.store(left + right, Ordering::SeqCst);
//!     },
//!     Duration::from_millis(5),
//!     (2, 3),
//! )
//! .unwrap();
//!
//! assert!(handle.completed().await);
//! assert_eq!(total.load(Ordering::SeqCst), 5);
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::error::ToolkitError;

/// A deferred task, as handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A deferred-execution facility.
pub trait Scheduler {
    /// The handle returned for each scheduled task.
    type Handle;

    /// Arranges for `task` to run once, no earlier than `wait` from now.
    fn schedule(&self, wait: Duration, task: Task) -> Self::Handle;
}

// =============================================================================
// TokioScheduler
// =============================================================================

/// A [`Scheduler`] backed by a tokio runtime's timer.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    /// Uses the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::SchedulerUnavailable`] when called outside a
    /// tokio runtime.
    pub fn current() -> Result<Self, ToolkitError> {
        Handle::try_current()
            .map(Self::from_handle)
            .map_err(|_| ToolkitError::SchedulerUnavailable)
    }

    /// Uses the runtime behind `runtime`.
    pub const fn from_handle(runtime: Handle) -> Self {
        Self { runtime }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = DelayHandle;

    fn schedule(&self, wait: Duration, task: Task) -> DelayHandle {
        tracing::debug!(wait_ms = wait.as_millis(), "scheduling delayed task");
        let join = self.runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            tracing::debug!(wait_ms = wait.as_millis(), "delayed task firing");
            task();
        });
        DelayHandle { join }
    }
}

// =============================================================================
// DelayHandle
// =============================================================================

/// A handle to a pending delayed invocation.
///
/// Dropping the handle does not cancel the invocation.
pub struct DelayHandle {
    join: JoinHandle<()>,
}

static_assertions::assert_impl_all!(DelayHandle: Send, Sync);

impl DelayHandle {
    /// Cancels the invocation if it has not run yet.
    pub fn cancel(&self) {
        if !self.join.is_finished() {
            tracing::debug!("cancelling delayed task");
        }
        self.join.abort();
    }

    /// Returns `true` once the invocation has run or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the invocation to settle.
    ///
    /// Returns `true` if the function ran and `false` if it was cancelled.
    ///
    /// # Panics
    ///
    /// Resumes the panic if the delayed function panicked.
    pub async fn completed(self) -> bool {
        match self.join.await {
            Ok(()) => true,
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(_) => false,
        }
    }
}

impl fmt::Debug for DelayHandle {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DelayHandle")
            .field("finished", &self.is_finished())
            .finish()
    }
}

// =============================================================================
// delay / delay_on
// =============================================================================

/// Calls `function(arguments)` once, after at least `wait`, on the current
/// tokio runtime.
///
/// Functions of several arguments take them as a tuple. The return value of
/// `function` is discarded.
///
/// # Errors
///
/// Returns [`ToolkitError::SchedulerUnavailable`] when called outside a
/// tokio runtime.
pub fn delay<F, A>(function: F, wait: Duration, arguments: A) -> Result<DelayHandle, ToolkitError>
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let scheduler = TokioScheduler::current()?;
    Ok(delay_on(&scheduler, function, wait, arguments))
}

/// Calls `function(arguments)` once, after at least `wait`, on `scheduler`.
pub fn delay_on<S, F, A>(scheduler: &S, function: F, wait: Duration, arguments: A) -> S::Handle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    scheduler.schedule(wait, Box::new(move || function(arguments)))
}
