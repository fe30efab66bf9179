//! Reordering: random permutation and keyed sorting.
//!
//! # Sorting with undefined keys
//!
//! [`sort_by`] derives a key per element from a [`Criterion`]. Elements whose
//! key is `None` take no part in the comparison pass; they are moved to the
//! end, in their original relative order:
//!
//! ```text
//!   input        [ {k:2}, {k:-}, {k:1} ]
//!   keyed pass   [ {k:1}, {k:2} ]        stable, ascending
//!   deferred     [ {k:-} ]               original order
//!   result       [ {k:1}, {k:2}, {k:-} ]
//! ```
//!
//! Keys that do not compare with themselves, such as `NaN`, are deferred the
//! same way and placed between the sorted elements and the undefined ones.

use crate::collection::transform::{is_self_comparable, natural_order};
use crate::traits::Properties;

// =============================================================================
// Criterion
// =============================================================================

/// Derives an optional sort key of type `K` from an element.
///
/// Implemented for closures `Fn(&T) -> Option<K>` and for [`Property`].
pub trait Criterion<T, K> {
    /// Returns the key of `element`, or `None` when it is undefined.
    fn key(&self, element: &T) -> Option<K>;
}

impl<T, K, F> Criterion<T, K> for F
where
    F: Fn(&T) -> Option<K>,
{
    #[inline]
    fn key(&self, element: &T) -> Option<K> {
        self(element)
    }
}

/// A criterion that reads the named property off each element.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::{sort_by, Property};
/// use sequent::value::Value;
///
/// let mut people = vec![
///     Value::object([("name", Value::from("Mo"))]),
///     Value::object([("name", Value::from("Al"))]),
/// ];
/// sort_by(&mut people, Property("name"));
/// assert_eq!(people[0].get("name"), Some(&Value::from("Al")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a>(pub &'a str);

impl<T> Criterion<T, T::Property> for Property<'_>
where
    T: Properties,
    T::Property: Clone,
{
    #[inline]
    fn key(&self, element: &T) -> Option<T::Property> {
        element.property(self.0).cloned()
    }
}

// =============================================================================
// Sorting
// =============================================================================

/// Sorts the sequence in place, ascending by the criterion's key.
///
/// The sort is stable. Each key is computed once. Elements whose key does
/// not compare with itself (such as `NaN`) follow the sorted ones, and
/// elements with an undefined key come last. Both groups keep their original
/// order.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::sort_by;
///
/// let mut words = vec!["pear", "fig", "apple", "kiwi"];
/// sort_by(&mut words, |word: &&str| Some(word.len()));
/// assert_eq!(words, vec!["fig", "pear", "kiwi", "apple"]);
/// ```
pub fn sort_by<T, K, C>(sequence: &mut Vec<T>, criterion: C) -> &mut Vec<T>
where
    K: PartialOrd,
    C: Criterion<T, K>,
{
    let mut keyed = Vec::with_capacity(sequence.len());
    let mut incomparable = Vec::new();
    let mut undefined = Vec::new();
    for element in sequence.drain(..) {
        match criterion.key(&element) {
            Some(key) if is_self_comparable(&key) => keyed.push((key, element)),
            Some(_) => incomparable.push(element),
            None => undefined.push(element),
        }
    }

    keyed.sort_by(|(left, _), (right, _)| natural_order(left, right));

    sequence.extend(keyed.into_iter().map(|(_, element)| element));
    sequence.extend(incomparable);
    sequence.extend(undefined);
    sequence
}

/// Copying form of [`sort_by`]: returns a sorted vector, input untouched.
pub fn sorted_by<T, K, C>(sequence: &[T], criterion: C) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    C: Criterion<T, K>,
{
    let mut copy = sequence.to_vec();
    sort_by(&mut copy, criterion);
    copy
}

// =============================================================================
// Shuffling
// =============================================================================

/// Returns a uniformly random permutation, leaving the input untouched.
///
/// Uses the thread-local random generator. See [`shuffle_with`] to supply
/// one.
#[cfg(feature = "random")]
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns a uniformly random permutation drawn from `random`.
///
/// Fisher-Yates over a working copy: for each index from the last down to 1,
/// swap it with a uniformly chosen index in `0..=index`.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use sequent::collection::shuffle_with;
///
/// let mut random = StdRng::seed_from_u64(7);
/// let mut shuffled = shuffle_with(&[1, 2, 3, 4], &mut random);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, vec![1, 2, 3, 4]);
/// ```
#[cfg(feature = "random")]
pub fn shuffle_with<T, R>(sequence: &[T], random: &mut R) -> Vec<T>
where
    T: Clone,
    R: rand::Rng,
{
    let mut working = sequence.to_vec();
    for index in (1..working.len()).rev() {
        let chosen = random.gen_range(0..=index);
        working.swap(index, chosen);
    }
    working
}
