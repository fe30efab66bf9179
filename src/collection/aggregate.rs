//! Folding a collection down to a single value.
//!
//! Every function here accepts any [`Collection`]: slices, vectors, arrays,
//! and mappings, whose entries are visited in key order.

use crate::traits::{Collection, Truthy, Zero};

/// Folds the entries with `combine(entry, accumulator)`.
///
/// Note the argument order: the entry comes first. When `initial` is `None`
/// the fold starts from [`Zero::zero`] rather than from the first entry, so
/// `reduce` always calls `combine` once per entry.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::reduce;
///
/// let total = reduce(&[1, 2, 3], |number, sum: i32| sum + number, None);
/// assert_eq!(total, 6);
///
/// let product = reduce(&[2, 3], |number, product: i32| product * number, 1);
/// assert_eq!(product, 6);
/// ```
pub fn reduce<C, A, F>(collection: &C, mut combine: F, initial: impl Into<Option<A>>) -> A
where
    C: Collection + ?Sized,
    A: Zero,
    F: FnMut(&C::Item, A) -> A,
{
    collection
        .items()
        .fold(initial.into().unwrap_or_else(A::zero), |accumulator, entry| {
            combine(entry, accumulator)
        })
}

/// Returns `true` if any entry equals `target`.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    collection.items().any(|entry| entry == target)
}

/// Returns `true` if `predicate` holds for every entry.
///
/// Vacuously `true` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::every;
///
/// assert!(every(&[2, 4], |number| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_| false));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    collection.items().all(|entry| predicate(entry))
}

/// Returns `true` if `predicate` holds for at least one entry.
///
/// Always `false` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::some;
///
/// assert!(some(&[1, 4], |number| number % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_| true));
/// ```
pub fn some<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    collection.items().any(|entry| predicate(entry))
}

/// [`every`] without a predicate: every entry must be truthy.
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, Truthy::is_truthy)
}

/// [`some`] without a predicate: at least one entry must be truthy.
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, Truthy::is_truthy)
}
