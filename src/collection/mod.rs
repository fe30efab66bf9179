//! Operations over sequences and collections.
//!
//! Sequences are slices and vectors; collections are anything implementing
//! [`Collection`](crate::traits::Collection), which includes the standard
//! maps. The functions are grouped as follows:
//!
//! - **Access**: [`first`], [`first_n`], [`last`], [`last_n`], [`index_of`], [`each`]
//! - **Transformation**: [`filter`], [`reject`], [`map`], [`pluck`], [`uniq`], [`uniq_by`]
//! - **Aggregation**: [`reduce`], [`contains`], [`every`], [`some`],
//!   [`every_truthy`], [`some_truthy`]
//! - **Invocation**: [`invoke`] with [`Method`] and [`MethodTable`]
//! - **Ordering**: [`sort_by`], [`sorted_by`], `shuffle`, `shuffle_with`
//! - **Restructuring**: [`zip`], [`flatten`], [`intersection`], [`difference`]
//!
//! # In place or fresh
//!
//! Functions that take `&mut` ([`map`], [`uniq`], [`uniq_by`], [`sort_by`],
//! [`invoke`]) rewrite their argument and return the same reference. All
//! other functions leave their inputs alone and return new vectors.
//!
//! # Examples
//!
//! ```rust
//! use sequent::collection::{difference, filter, reduce, uniq};
//!
//! let mut readings = vec![4, 0, 7, 4, 9, 7];
//! let positive = filter(&readings, |reading| *reading > 3);
//! assert_eq!(positive, vec![4, 7, 4, 9, 7]);
//!
//! uniq(&mut readings);
//! assert_eq!(readings, vec![0, 4, 7, 9]);
//!
//! let total = reduce(&readings, |reading, sum: i32| sum + reading, None);
//! assert_eq!(total, 20);
//!
//! assert_eq!(difference(&readings, &[vec![0, 9]]), vec![4, 7]);
//! ```

mod access;
mod aggregate;
mod invoke;
mod order;
mod restructure;
mod transform;

pub use access::{each, first, first_n, index_of, last, last_n};
pub use aggregate::{contains, every, every_truthy, reduce, some, some_truthy};
pub use invoke::{Method, MethodFn, MethodTable, invoke};
pub use order::{Criterion, Property, sort_by, sorted_by};
#[cfg(feature = "random")]
pub use order::{shuffle, shuffle_with};
pub use restructure::{difference, flatten, intersection, zip};
pub use transform::{filter, map, pluck, reject, uniq, uniq_by};
pub(crate) use transform::sort_natural;
