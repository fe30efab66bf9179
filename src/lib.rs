//! # sequent
//!
//! A toolkit of functional helpers over sequences, mappings and functions.
//!
//! ## Overview
//!
//! - **Collections**: access, filtering, aggregation, ordering and
//!   restructuring of slices, vectors and maps
//! - **Objects**: merging mappings with [`extend`](object::extend) and
//!   [`defaults`](object::defaults)
//! - **Functions**: [`once`](function::once), [`memoize`](function::memoize)
//!   and a cancellable [`delay`](function::delay)
//! - **Values**: a dynamic [`Value`](value::Value) for heterogeneous data
//!
//! Every operation is generic; [`Value`](value::Value) is only needed when a
//! sequence mixes kinds of data or is nested to arbitrary depth.
//!
//! ## Feature Flags
//!
//! - `collection`: Sequence and collection operations
//! - `object`: Mapping merges
//! - `function`: Function wrappers
//! - `async`: [`delay`](function::delay) on the tokio runtime
//! - `random`: Shuffling
//! - `serde`: Serialization of [`Value`](value::Value) and [`Nested`](value::Nested)
//! - `fxhash` / `ahash`: Faster hashers for the memoization cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sequent::prelude::*;
//!
//! let nested = Value::array([Value::from(1), Value::array([2, 3]), Value::array([Value::array([4])])]);
//! let flat = flatten(std::slice::from_ref(&nested));
//! assert_eq!(flat, vec![Value::from(1), Value::from(2), Value::from(3), Value::from(4)]);
//!
//! let sum = reduce(&flat, |value, total: f64| total + value.as_number().unwrap_or(0.0), None);
//! assert_eq!(sum, 10.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use sequent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ToolkitError;
    pub use crate::traits::*;
    pub use crate::value::{Nested, Value};

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

pub mod error;
pub mod traits;
pub mod value;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;

pub use error::ToolkitError;
