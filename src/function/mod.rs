//! Function wrappers.
//!
//! - [`once`]: run a function at most once and remember its result
//! - [`memoize`]: cache a function's results by argument
//! - [`delay`]: run a function once after a wait (requires the `async` feature)
//!
//! Wrapped functions take a single argument. Functions of several arguments
//! take them as a tuple, and functions of none take `()`.
//!
//! # Examples
//!
//! ```rust
//! use sequent::function::{memoize, once};
//!
//! let greeting = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(greeting.call("ada"), "hello, ada");
//! assert_eq!(greeting.call("grace"), "hello, ada");
//!
//! let fibonacci = memoize(|index: u32| (1..=index).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
//! assert_eq!(fibonacci.call(40), Ok(102_334_155));
//! ```

#[cfg(feature = "async")]
mod delay;
mod memoize;
mod once;

#[cfg(feature = "async")]
pub use delay::{DelayHandle, Scheduler, Task, TokioScheduler, delay, delay_on};
pub use memoize::{MemoKey, Memoized, ValueKey, memoize};
pub use once::{Once, once};
