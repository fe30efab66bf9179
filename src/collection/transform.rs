//! Filtering and element-wise transformation.
//!
//! `filter` and `reject` return fresh vectors. `map` and `uniq` rewrite their
//! argument in place and hand the same reference back, which is why they
//! take `&mut`.

use std::cmp::Ordering;

use crate::traits::{IsZero, Properties};

/// Returns the elements for which `predicate` holds.
///
/// Numeric zero elements are never included, whatever the predicate says.
/// Pre-map the data if zeros must survive.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::filter;
///
/// let evens = filter(&[0, 1, 2, 3, 4], |number| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: IsZero + Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| predicate(element) && !element.is_zero())
        .cloned()
        .collect()
}

/// Returns the elements for which `predicate` does not hold.
///
/// Numeric zero elements are excluded here too, so `filter` and `reject`
/// are not exact complements on sequences containing zero.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::reject;
///
/// let odds = reject(&[0, 1, 2, 3, 4], |number| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3]);
///
/// let non_positive = reject(&[-1, 0, 1], |number| *number > 0);
/// assert_eq!(non_positive, vec![-1]);
/// ```
pub fn reject<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: IsZero + Clone,
    P: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|element| !predicate(element) && !element.is_zero())
        .cloned()
        .collect()
}

/// Replaces every element with `transform(element)`, in index order.
///
/// Each call sees only the original element. Returns the same slice.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::map;
///
/// let mut numbers = vec![1, 2, 3];
/// map(&mut numbers, |number| number * 10);
/// assert_eq!(numbers, vec![10, 20, 30]);
/// ```
pub fn map<T, F>(sequence: &mut [T], mut transform: F) -> &mut [T]
where
    F: FnMut(&T) -> T,
{
    for element in sequence.iter_mut() {
        *element = transform(element);
    }
    sequence
}

/// Returns the value of the named property of every element.
///
/// Elements lacking the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::pluck;
/// use sequent::value::Value;
///
/// let people = [
///     Value::object([("age", Value::from(30))]),
///     Value::object([("name", Value::from("Lin"))]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(Value::from(30)), None]);
/// ```
pub fn pluck<T>(sequence: &[T], property_name: &str) -> Vec<Option<T::Property>>
where
    T: Properties,
    T::Property: Clone,
{
    sequence
        .iter()
        .map(|element| element.property(property_name).cloned())
        .collect()
}

/// Sorts the sequence in place and removes adjacent duplicates.
///
/// Uses the natural `PartialOrd` ordering. The result is in sorted order,
/// not first-occurrence order. Elements that do not compare with themselves,
/// such as `NaN`, are never duplicates of anything; they are moved to the end
/// in their original order.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::uniq;
///
/// let mut numbers = vec![3, 1, 2, 1, 3];
/// uniq(&mut numbers);
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub fn uniq<T: PartialOrd>(sequence: &mut Vec<T>) -> &mut Vec<T> {
    sort_natural(sequence);
    sequence.dedup();
    sequence
}

/// Like [`uniq`], with a caller-supplied ordering.
///
/// After sorting with `compare`, adjacent elements equal by `==` are
/// removed. `compare` must be a total order.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::uniq_by;
///
/// let mut words = vec!["b", "a", "b", "c"];
/// uniq_by(&mut words, |left, right| right.cmp(left));
/// assert_eq!(words, vec!["c", "b", "a"]);
/// ```
pub fn uniq_by<T, F>(sequence: &mut Vec<T>, mut compare: F) -> &mut Vec<T>
where
    T: PartialEq,
    F: FnMut(&T, &T) -> Ordering,
{
    sequence.sort_by(&mut compare);
    sequence.dedup();
    sequence
}

/// Sorts ascending by `PartialOrd`, stably.
///
/// Only elements that compare with themselves take part in the sort; among
/// those `partial_cmp` is a total order for floats and [`Value`]s. The others
/// (`NaN`, or a [`Value`] holding one) follow in their original order.
///
/// [`Value`]: crate::value::Value
pub(crate) fn sort_natural<T: PartialOrd>(sequence: &mut Vec<T>) {
    let (mut ordered, unordered): (Vec<T>, Vec<T>) =
        sequence.drain(..).partition(|element| is_self_comparable(element));
    ordered.sort_by(natural_order);
    sequence.append(&mut ordered);
    sequence.extend(unordered);
}

pub(crate) fn is_self_comparable<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_some()
}

/// Compares two self-comparable values.
pub(crate) fn natural_order<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use rstest::rstest;

    #[rstest]
    fn test_filter_requires_predicate_and_nonzero() {
        let kept = filter(&[0.0, 1.5, -0.0, 2.5], |_| true);
        assert_eq!(kept, vec![1.5, 2.5]);
    }

    #[rstest]
    fn test_filter_keeps_non_numeric_values() {
        let kept = filter(&["", "a"], |_| true);
        assert_eq!(kept, vec!["", "a"]);
    }

    #[rstest]
    fn test_filter_and_reject_on_empty() {
        assert!(filter(&Vec::<i32>::new(), |_| true).is_empty());
        assert!(reject(&Vec::<i32>::new(), |_| false).is_empty());
    }

    #[rstest]
    fn test_reject_excludes_zero_values() {
        let values = [Value::from(0), Value::from("x"), Value::Null];
        let rejected = reject(&values, |_| false);
        assert_eq!(rejected, vec![Value::from("x"), Value::Null]);
    }

    #[rstest]
    fn test_map_returns_same_slice() {
        let mut numbers = vec![1, 2];
        let address = numbers.as_ptr();
        let mapped = map(&mut numbers, |number| number + 1);
        assert_eq!(mapped.as_ptr(), address);
        assert_eq!(mapped, &[2, 3]);
    }

    #[rstest]
    fn test_uniq_on_text_values() {
        let mut words = vec![Value::from("b"), Value::from("a"), Value::from("b")];
        uniq(&mut words);
        assert_eq!(words, vec![Value::from("a"), Value::from("b")]);
    }

    #[rstest]
    fn test_uniq_keeps_nan_entries() {
        let mut numbers = vec![f64::NAN, 1.0, 1.0];
        uniq(&mut numbers);
        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers[0], 1.0);
        assert!(numbers[1].is_nan());
    }

    #[rstest]
    fn test_uniq_with_many_nan_sorts_the_rest() {
        let mut numbers: Vec<f64> = (0..40)
            .map(|index| {
                if index % 3 == 0 {
                    f64::NAN
                } else {
                    f64::from((index * 37) % 23) - 11.0
                }
            })
            .collect();
        let nan_count = numbers.iter().filter(|number| number.is_nan()).count();

        uniq(&mut numbers);

        let split = numbers.iter().position(|number| number.is_nan()).unwrap_or(numbers.len());
        let (ordered, unordered) = numbers.split_at(split);
        assert!(ordered.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(unordered.iter().all(|number| number.is_nan()));
        assert_eq!(unordered.len(), nan_count);
    }

    #[rstest]
    fn test_uniq_values_holding_nan() {
        let mut values: Vec<Value> = (0..30)
            .map(|index| {
                if index % 4 == 0 {
                    Value::from(f64::NAN)
                } else if index % 7 == 0 {
                    Value::array([Value::from(f64::NAN)])
                } else {
                    Value::from(index % 6)
                }
            })
            .collect();

        uniq(&mut values);

        let numbers: Vec<f64> = values
            .iter()
            .take_while(|value| is_self_comparable(*value))
            .filter_map(Value::as_number)
            .collect();
        assert_eq!(numbers, (0..6).map(f64::from).collect::<Vec<_>>());
        assert_eq!(values.len(), 6 + 8 + 3);
    }
}
