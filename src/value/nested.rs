//! Typed nested sequences.

use crate::traits::Nestable;

/// A sequence nested to arbitrary depth with leaves of a single type.
///
/// # Examples
///
/// ```rust
/// use sequent::collection::flatten;
/// use sequent::value::Nested;
///
/// let nested = vec![
///     Nested::leaf(1),
///     Nested::sequence([Nested::leaf(2), Nested::sequence([Nested::leaf(3)])]),
/// ];
/// let leaves: Vec<i32> = flatten(&nested).into_iter().filter_map(Nested::into_leaf).collect();
/// assert_eq!(leaves, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A sequence of further nested values.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Creates a sequence from its children.
    pub fn sequence<I: IntoIterator<Item = Self>>(children: I) -> Self {
        Self::Sequence(children.into_iter().collect())
    }

    /// Returns the leaf value, or `None` for a sequence.
    #[inline]
    pub fn into_leaf(self) -> Option<T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns a reference to the leaf value, or `None` for a sequence.
    #[inline]
    pub const fn as_leaf(&self) -> Option<&T> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Sequence(_) => None,
        }
    }

    /// Returns the nesting depth: 0 for a leaf, 1 for a flat sequence.
    ///
    /// Computed with an explicit stack, so very deep values are fine.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0_usize)];
        while let Some((node, level)) = pending.pop() {
            if let Self::Sequence(children) = node {
                deepest = deepest.max(level + 1);
                pending.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

impl<T> Nestable for Nested<T> {
    fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Leaf(_) => None,
            Self::Sequence(children) => Some(children),
        }
    }
}
