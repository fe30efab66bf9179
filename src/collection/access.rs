//! Read-only access to sequences and keyed traversal of collections.

use crate::traits::Collection;

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::first;
///
/// assert_eq!(first(&[3, 4, 5]), Some(&3));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns a new vector holding the first `count` elements.
///
/// When `count` exceeds the length, the whole sequence is copied.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::first_n;
///
/// assert_eq!(first_n(&[3, 4, 5], 2), vec![3, 4]);
/// assert_eq!(first_n(&[3, 4, 5], 0), Vec::<i32>::new());
/// assert_eq!(first_n(&[3, 4, 5], 9), vec![3, 4, 5]);
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element, or `None` for an empty sequence.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns a new vector holding the last `count` elements.
///
/// When `count` is at least the length, the whole sequence is copied.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::last_n;
///
/// assert_eq!(last_n(&[3, 4, 5], 2), vec![4, 5]);
/// assert_eq!(last_n(&[3, 4, 5], 3), vec![3, 4, 5]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    sequence.iter().position(|element| element == target)
}

/// Calls `visit(value, key, collection)` once for every entry.
///
/// Keys are snapshotted before the first call. Sequences are visited by
/// ascending index, mappings in their own key order.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::each;
///
/// let mut seen = Vec::new();
/// each(&["a", "b"], |value, index, _| seen.push(format!("{index}:{value}")));
/// assert_eq!(seen, vec!["0:a", "1:b"]);
/// ```
pub fn each<C, F>(collection: &C, mut visit: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, &C::Key, &C),
{
    for key in collection.keys() {
        if let Some(value) = collection.entry(&key) {
            visit(value, &key, collection);
        }
    }
}
