//! Capability traits shared by the toolkit's operations.
//!
//! Each operation asks only for the capability it needs:
//!
//! - [`Collection`]: keyed, ordered traversal over sequences and mappings
//! - [`Mapping`]: a [`Collection`] whose entries can be assigned by key
//! - [`Properties`]: read a named property off a record
//! - [`Nestable`]: values that may themselves be sequences of values
//! - [`IsZero`] / [`Zero`]: the numeric zero value
//! - [`Truthy`]: coercion to a boolean when no predicate is supplied
//!
//! Implementations are provided for the standard containers and for
//! [`Value`](crate::value::Value).

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

// =============================================================================
// Collection / Mapping
// =============================================================================

/// A collection whose entries can be visited in a stable key order.
///
/// Sequences use their indices as keys; mappings use their own keys.
///
/// # Examples
///
/// ```rust
/// use sequent::traits::Collection;
///
/// let values = vec!["a", "b"];
/// assert_eq!(values.keys(), vec![0, 1]);
/// assert_eq!(values.entry(&1), Some(&"b"));
/// ```
pub trait Collection {
    /// The key type: `usize` for sequences, the map key for mappings.
    type Key: Clone;
    /// The entry type.
    type Item;

    /// Returns a snapshot of the keys in iteration order.
    fn keys(&self) -> Vec<Self::Key>;

    /// Returns the entry stored under `key`.
    fn entry(&self, key: &Self::Key) -> Option<&Self::Item>;

    /// Returns an iterator over the entries in iteration order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Returns the number of entries.
    fn size(&self) -> usize;
}

/// A [`Collection`] whose entries can be written by key.
pub trait Mapping: Collection {
    /// Returns `true` if `key` is directly present in the mapping.
    fn owns(&self, key: &Self::Key) -> bool;

    /// Stores `value` under `key`, replacing any existing entry.
    fn assign(&mut self, key: Self::Key, value: Self::Item);
}

impl<T> Collection for [T] {
    type Key = usize;
    type Item = T;

    fn keys(&self) -> Vec<usize> {
        (0..self.len()).collect()
    }

    #[inline]
    fn entry(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key = usize;
    type Item = T;

    fn keys(&self) -> Vec<usize> {
        (0..N).collect()
    }

    #[inline]
    fn entry(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Key = usize;
    type Item = T;

    fn keys(&self) -> Vec<usize> {
        self.as_slice().keys()
    }

    #[inline]
    fn entry(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    type Key = K;
    type Item = V;

    fn keys(&self) -> Vec<K> {
        HashMap::keys(self).cloned().collect()
    }

    #[inline]
    fn entry(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn items(&self) -> impl Iterator<Item = &V> {
        self.values()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher,
{
    #[inline]
    fn owns(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord + Clone, V> Collection for BTreeMap<K, V> {
    type Key = K;
    type Item = V;

    fn keys(&self) -> Vec<K> {
        BTreeMap::keys(self).cloned().collect()
    }

    #[inline]
    fn entry(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn items(&self) -> impl Iterator<Item = &V> {
        self.values()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K: Ord + Clone, V> Mapping for BTreeMap<K, V> {
    #[inline]
    fn owns(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

// =============================================================================
// Properties
// =============================================================================

/// Records whose fields can be read by name.
///
/// A missing property is `None`, never an error.
pub trait Properties {
    /// The type of a property value.
    type Property;

    /// Returns the property called `name`, or `None` if it is absent.
    fn property(&self, name: &str) -> Option<&Self::Property>;
}

impl<V, S: BuildHasher> Properties for HashMap<String, V, S> {
    type Property = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Properties for BTreeMap<String, V> {
    type Property = V;

    #[inline]
    fn property(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<T: Properties + ?Sized> Properties for &T {
    type Property = T::Property;

    #[inline]
    fn property(&self, name: &str) -> Option<&T::Property> {
        (**self).property(name)
    }
}

// =============================================================================
// Nestable
// =============================================================================

/// Values that are either a leaf or a sequence of further values.
///
/// Used by [`flatten`](crate::collection::flatten) to descend into nested
/// sequences.
pub trait Nestable: Sized {
    /// Returns the children if this value is a sequence, `None` for a leaf.
    fn as_sequence(&self) -> Option<&[Self]>;
}

// =============================================================================
// Zero / Truthy
// =============================================================================

/// Detects the numeric zero value.
///
/// Non-numeric types keep the default implementation, which never reports
/// zero. Implement it with an empty body for your own element types:
///
/// ```rust
/// use sequent::traits::IsZero;
///
/// struct Point(i32, i32);
/// impl IsZero for Point {}
///
/// assert!(!Point(0, 0).is_zero());
/// assert!(0_i32.is_zero());
/// ```
pub trait IsZero {
    /// Returns `true` if this value is the numeric zero.
    fn is_zero(&self) -> bool {
        false
    }
}

/// Types with a zero value, used as the default accumulator of
/// [`reduce`](crate::collection::reduce).
///
/// For numbers this is `0`; for strings and vectors it is the empty value.
pub trait Zero: Sized {
    /// Returns the zero value.
    fn zero() -> Self;
}

/// Boolean coercion used when `every`/`some` are called without a predicate.
pub trait Truthy {
    /// Returns the value coerced to a boolean.
    fn is_truthy(&self) -> bool;
}

macro_rules! impl_integer_capabilities {
    ($($integer:ty),* $(,)?) => {
        $(
            impl IsZero for $integer {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }

            impl Zero for $integer {
                #[inline]
                fn zero() -> Self {
                    0
                }
            }

            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

macro_rules! impl_float_capabilities {
    ($($float:ty),* $(,)?) => {
        $(
            impl IsZero for $float {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_zero(&self) -> bool {
                    *self == 0.0
                }
            }

            impl Zero for $float {
                #[inline]
                fn zero() -> Self {
                    0.0
                }
            }

            impl Truthy for $float {
                #[inline]
                #[allow(clippy::float_cmp)]
                fn is_truthy(&self) -> bool {
                    !(self.is_nan() || *self == 0.0)
                }
            }
        )*
    };
}

impl_integer_capabilities!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_capabilities!(f32, f64);

impl IsZero for bool {}
impl IsZero for char {}
impl IsZero for str {}
impl IsZero for String {}
impl IsZero for () {}
impl<T> IsZero for Vec<T> {}

impl Zero for String {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }
}

impl<T> Zero for Vec<T> {
    #[inline]
    fn zero() -> Self {
        Self::new()
    }
}

impl<T: IsZero + ?Sized> IsZero for &T {
    #[inline]
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}

impl<T: IsZero> IsZero for Option<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.as_ref().is_some_and(IsZero::is_zero)
    }
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}
