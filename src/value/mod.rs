//! Dynamic values for heterogeneous data.
//!
//! Most toolkit operations are generic over the element type. When the data
//! itself is heterogeneous (arrays nested at arbitrary depth, records with
//! optional fields, elements of mixed type) it can be modelled with [`Value`],
//! which implements every capability trait in [`crate::traits`].
//!
//! [`Nested`] is the typed alternative for nested sequences of a single leaf
//! type.
//!
//! # Examples
//!
//! ```rust
//! use sequent::value::Value;
//!
//! let person = Value::object([("name", Value::from("Ada")), ("age", Value::from(36))]);
//! assert_eq!(person.get("name"), Some(&Value::from("Ada")));
//! assert_eq!(person.get("email"), None);
//! ```

#[cfg(feature = "collection")]
mod methods;
mod nested;

pub use nested::Nested;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::traits::{IsZero, Nestable, Properties, Truthy, Zero};

/// A dynamically typed value.
///
/// `Undefined` is the absent sentinel: it is what a missing index or property
/// reads as. Equality is strict: numbers compare by IEEE equality, so `NaN`
/// is never equal to itself.
///
/// # Ordering
///
/// Values of different kinds order by kind:
/// `Undefined < Null < Bool < Number < Text < Array < Object`.
/// Numbers order numerically, text by code point, arrays and objects
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// An explicit null.
    Null,
    /// The absent sentinel.
    #[default]
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    Text(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A string-keyed record.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Creates an object from key/value pairs.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Creates an array from anything convertible into values.
    pub fn array<T, I>(elements: I) -> Self
    where
        T: Into<Self>,
        I: IntoIterator<Item = T>,
    {
        Self::Array(elements.into_iter().map(Into::into).collect())
    }

    /// Returns a short name for the kind of this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Returns `true` for the absent sentinel.
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns the number, if this is one.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the text, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    pub fn as_array(&self) -> Option<&Vec<Self>> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the elements mutably, if this is an array.
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the fields, if this is an object.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the fields mutably, if this is an object.
    pub fn as_object_mut(&mut self) -> Option<&mut BTreeMap<String, Self>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Reads a property.
    ///
    /// Objects are read by field name, arrays by decimal index. A missing
    /// property, or one holding `Undefined`, reads as `None`.
    pub fn get(&self, name: &str) -> Option<&Self> {
        let found = match self {
            Self::Object(fields) => fields.get(name),
            Self::Array(elements) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| elements.get(index)),
            _ => None,
        };
        found.filter(|value| !value.is_undefined())
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Undefined => 0,
            Self::Null => 1,
            Self::Bool(_) => 2,
            Self::Number(_) => 3,
            Self::Text(_) => 4,
            Self::Array(_) => 5,
            Self::Object(_) => 6,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => Some(Ordering::Equal),
            (Self::Bool(left), Self::Bool(right)) => left.partial_cmp(right),
            (Self::Number(left), Self::Number(right)) => left.partial_cmp(right),
            (Self::Text(left), Self::Text(right)) => left.partial_cmp(right),
            (Self::Array(left), Self::Array(right)) => left.partial_cmp(right),
            (Self::Object(left), Self::Object(right)) => left.partial_cmp(right),
            _ => self.rank().partial_cmp(&other.rank()),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::array(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Object(value)
    }
}

// =============================================================================
// Capabilities
// =============================================================================

impl IsZero for Value {
    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        matches!(self, Self::Number(number) if *number == 0.0)
    }
}

impl Zero for Value {
    fn zero() -> Self {
        Self::Number(0.0)
    }
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.is_truthy(),
            Self::Text(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Properties for Value {
    type Property = Self;

    fn property(&self, name: &str) -> Option<&Self> {
        self.get(name)
    }
}

impl Nestable for Value {
    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }
}
