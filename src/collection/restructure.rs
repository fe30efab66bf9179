//! Building new sequences out of one or several inputs.
//!
//! None of these functions modify their inputs. The set-like operations
//! compare with `PartialEq` and run in quadratic time, which keeps them
//! usable for element types that are neither hashable nor ordered.

use smallvec::SmallVec;

use crate::traits::Nestable;

/// Nesting depth kept inline on the work stack before spilling to the heap.
const FLATTEN_INLINE_DEPTH: usize = 16;

/// Groups the `i`-th elements of every input together.
///
/// The result is as long as the longest input; shorter inputs contribute
/// `None` for missing positions.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::zip;
///
/// let zipped = zip(&[vec![1, 2, 3], vec![10, 20]]);
/// assert_eq!(
///     zipped,
///     vec![
///         vec![Some(1), Some(10)],
///         vec![Some(2), Some(20)],
///         vec![Some(3), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let longest = sequences
        .iter()
        .map(|sequence| sequence.as_ref().len())
        .max()
        .unwrap_or(0);

    (0..longest)
        .map(|index| {
            sequences
                .iter()
                .map(|sequence| sequence.as_ref().get(index).cloned())
                .collect()
        })
        .collect()
}

/// Returns every non-sequence leaf, depth-first and left to right.
///
/// Descends with an explicit work stack rather than recursion, so the depth
/// of nesting is bounded by memory, not by the call stack.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::flatten;
/// use sequent::value::Value;
///
/// let nested = [
///     Value::from(1),
///     Value::array([Value::from(2), Value::array([3, 4])]),
///     Value::array(Vec::<Value>::new()),
///     Value::from(5),
/// ];
/// assert_eq!(flatten(&nested), vec![
///     Value::from(1),
///     Value::from(2),
///     Value::from(3),
///     Value::from(4),
///     Value::from(5),
/// ]);
/// ```
pub fn flatten<T: Nestable + Clone>(nested: &[T]) -> Vec<T> {
    let mut leaves = Vec::new();
    let mut pending: SmallVec<[std::slice::Iter<'_, T>; FLATTEN_INLINE_DEPTH]> = SmallVec::new();
    pending.push(nested.iter());

    while let Some(current) = pending.last_mut() {
        match current.next() {
            Some(element) => match element.as_sequence() {
                Some(children) => pending.push(children.iter()),
                None => leaves.push(element.clone()),
            },
            None => {
                pending.pop();
            }
        }
    }
    leaves
}

/// Returns the distinct values present in every input.
///
/// Values appear in the order they first occur in the first input. With no
/// inputs, the result is empty.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::intersection;
///
/// assert_eq!(intersection(&[vec![1, 2, 3], vec![2, 3, 4]]), vec![2, 3]);
/// assert_eq!(intersection(&[vec![2, 1, 2], vec![1, 2]]), vec![2, 1]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let Some((head, rest)) = sequences.split_first() else {
        return Vec::new();
    };

    let mut shared: Vec<T> = Vec::new();
    for element in head.as_ref() {
        if !shared.contains(element)
            && rest
                .iter()
                .all(|sequence| sequence.as_ref().contains(element))
        {
            shared.push(element.clone());
        }
    }
    shared
}

/// Returns the elements of `first` that appear in none of `others`.
///
/// Order and duplicates of `first` are preserved.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[vec![2, 4]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 1, 2], &[vec![3], vec![2]]), vec![1, 1]);
/// ```
pub fn difference<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    first
        .iter()
        .filter(|element| !others.iter().any(|other| other.as_ref().contains(element)))
        .cloned()
        .collect()
}
