//! Merging mappings.
//!
//! - [`extend`]: copy every entry, later sources win
//! - [`defaults`]: fill only the keys the target lacks, earlier sources win
//!
//! Both work on any [`Mapping`], including [`HashMap`](std::collections::HashMap)
//! and [`BTreeMap`](std::collections::BTreeMap), and return the target.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use sequent::object::{defaults, extend};
//!
//! let base = BTreeMap::from([("a", 1)]);
//! let update = BTreeMap::from([("a", 2), ("b", 3)]);
//!
//! let mut extended = base.clone();
//! extend(&mut extended, [&update]);
//! assert_eq!(extended, BTreeMap::from([("a", 2), ("b", 3)]));
//!
//! let mut defaulted = base.clone();
//! defaults(&mut defaulted, [&update]);
//! assert_eq!(defaulted, BTreeMap::from([("a", 1), ("b", 3)]));
//! ```

use crate::traits::Mapping;

/// Copies every entry of each source into `target`.
///
/// Sources are applied left to right, so later sources overwrite earlier
/// ones, and all of them overwrite keys already present in `target`.
pub fn extend<'s, M, I>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping + 's,
    M::Item: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        for key in source.keys() {
            if let Some(value) = source.entry(&key) {
                target.assign(key, value.clone());
            }
        }
    }
    target
}

/// Copies entries into `target` only for keys it does not already own.
///
/// Sources are applied left to right and the first write for a key sticks.
pub fn defaults<'s, M, I>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping + 's,
    M::Item: Clone,
    I: IntoIterator<Item = &'s M>,
{
    for source in sources {
        for key in source.keys() {
            if target.owns(&key) {
                continue;
            }
            if let Some(value) = source.entry(&key) {
                target.assign(key, value.clone());
            }
        }
    }
    target
}
