//! Argument-keyed result caching.
//!
//! [`memoize`] wraps a single-argument function and remembers the result for
//! every argument it has seen. Arguments are turned into cache keys through
//! [`MemoKey`]; primitive types always produce a key, while a
//! [`Value`](crate::value::Value) only does when it holds a primitive.
//!
//! The cache is never evicted. It grows by one entry per distinct argument
//! for as long as the wrapper lives.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::ToolkitError;
use crate::value::Value;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type CacheHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type CacheHasher = std::collections::hash_map::RandomState;

// =============================================================================
// MemoKey
// =============================================================================

/// Arguments that can key a memoization cache.
///
/// Two arguments share a cache entry exactly when their keys are equal.
pub trait MemoKey {
    /// The cache key type.
    type Key: Eq + Hash;

    /// Returns the cache key for this argument.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidArgument`] if the argument is not a
    /// primitive value.
    fn memo_key(&self) -> Result<Self::Key, ToolkitError>;
}

macro_rules! impl_primitive_memo_key {
    ($($primitive:ty),* $(,)?) => {
        $(
            impl MemoKey for $primitive {
                type Key = Self;

                #[inline]
                #[allow(clippy::clone_on_copy)]
                fn memo_key(&self) -> Result<Self, ToolkitError> {
                    Ok(self.clone())
                }
            }
        )*
    };
}

impl_primitive_memo_key!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, (), String,
);

impl MemoKey for &str {
    type Key = String;

    #[inline]
    fn memo_key(&self) -> Result<String, ToolkitError> {
        Ok((*self).to_string())
    }
}

/// The cache key of a primitive [`Value`].
///
/// Numbers are keyed by their bit pattern after folding `-0.0` into `0.0`
/// and every `NaN` into one canonical `NaN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    /// Key of [`Value::Undefined`].
    Undefined,
    /// Key of [`Value::Null`].
    Null,
    /// Key of a boolean.
    Bool(bool),
    /// Key of a number.
    Number(u64),
    /// Key of a string.
    Text(String),
}

impl MemoKey for Value {
    type Key = ValueKey;

    fn memo_key(&self) -> Result<ValueKey, ToolkitError> {
        match self {
            Self::Undefined => Ok(ValueKey::Undefined),
            Self::Null => Ok(ValueKey::Null),
            Self::Bool(flag) => Ok(ValueKey::Bool(*flag)),
            Self::Number(number) => Ok(ValueKey::Number(number_bits(*number))),
            Self::Text(text) => Ok(ValueKey::Text(text.clone())),
            Self::Array(_) | Self::Object(_) => Err(ToolkitError::invalid_argument(
                "memoize",
                format!("{} is not a primitive value", self.type_name()),
            )),
        }
    }
}

#[allow(clippy::float_cmp)]
fn number_bits(number: f64) -> u64 {
    if number.is_nan() {
        f64::NAN.to_bits()
    } else if number == 0.0 {
        0.0_f64.to_bits()
    } else {
        number.to_bits()
    }
}

// =============================================================================
// Memoized
// =============================================================================

/// A single-argument function with a result cache.
///
/// # Thread Safety
///
/// This type is NOT thread-safe.
///
/// # Examples
///
/// ```rust
/// use sequent::function::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let square = memoize(|number: u64| {
///     calls.set(calls.get() + 1);
///     number * number
/// });
///
/// assert_eq!(square.call(12), Ok(144));
/// assert_eq!(square.call(12), Ok(144));
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Memoized<F, A: MemoKey, R> {
    function: F,
    cache: RefCell<HashMap<A::Key, R, CacheHasher>>,
    _arguments: PhantomData<fn(A)>,
}

static_assertions::assert_not_impl_any!(Memoized<fn(i32) -> i32, i32, i32>: Sync);

/// Wraps `function` with a cache keyed by its argument.
///
/// See [`Memoized`].
#[inline]
pub fn memoize<F, A, R>(function: F) -> Memoized<F, A, R>
where
    F: Fn(A) -> R,
    A: MemoKey,
    R: Clone,
{
    Memoized::new(function)
}

impl<F, A, R> Memoized<F, A, R>
where
    F: Fn(A) -> R,
    A: MemoKey,
    R: Clone,
{
    /// Creates a wrapper with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::with_hasher(CacheHasher::default())),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result for `argument`, computing and caching it on
    /// a miss.
    ///
    /// # Errors
    ///
    /// Returns [`ToolkitError::InvalidArgument`] if `argument` cannot be used
    /// as a cache key. The function is not called in that case.
    pub fn call(&self, argument: A) -> Result<R, ToolkitError> {
        let key = argument.memo_key()?;
        if let Some(cached) = self.cache.borrow().get(&key) {
            return Ok(cached.clone());
        }

        let result = (self.function)(argument);
        self.cache.borrow_mut().insert(key, result.clone());
        Ok(result)
    }
}

impl<F, A: MemoKey, R> Memoized<F, A, R> {
    /// Returns the number of cached results.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, A: MemoKey, R> fmt::Debug for Memoized<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cache_len", &self.cache_len())
            .finish_non_exhaustive()
    }
}
