//! Applying a named or supplied operation to every element.
//!
//! A named operation is looked up in a [`MethodTable`], a registry of
//! operations keyed by name. The lookup happens per element at call time, so
//! a table entry may accept some receivers and refuse others.
//!
//! # Examples
//!
//! ```rust
//! use sequent::collection::{invoke, Method, MethodTable};
//!
//! let table = MethodTable::new().with("add", |number: &mut i32, amount: &i32| {
//!     *number += amount;
//!     Ok(())
//! });
//!
//! let mut numbers = vec![1, 2, 3];
//! invoke(&mut numbers, Method::Named("add"), &10, &table).unwrap();
//! assert_eq!(numbers, vec![11, 12, 13]);
//!
//! let double: &dyn Fn(&mut i32, &i32) = &|number, _| *number *= 2;
//! invoke(&mut numbers, Method::Callable(double), &0, &table).unwrap();
//! assert_eq!(numbers, vec![22, 24, 26]);
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::error::ToolkitError;

/// An operation stored in a [`MethodTable`].
///
/// Receives the element mutably and the shared arguments. Returns
/// [`ToolkitError::InvalidOperation`] when it does not apply to the element.
pub type MethodFn<T, A> = Box<dyn Fn(&mut T, &A) -> Result<(), ToolkitError>>;

/// What [`invoke`] should apply to each element.
pub enum Method<'a, T, A> {
    /// Resolve this name in the method table for each element.
    Named(&'a str),
    /// Call this function with the element as receiver.
    Callable(&'a dyn Fn(&mut T, &A)),
}

impl<T, A> fmt::Debug for Method<'_, T, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => formatter.debug_tuple("Named").field(name).finish(),
            Self::Callable(_) => formatter.debug_tuple("Callable").field(&"<fn>").finish(),
        }
    }
}

/// A registry of named operations over receivers of type `T`.
pub struct MethodTable<T, A> {
    methods: HashMap<String, MethodFn<T, A>>,
}

impl<T, A> MethodTable<T, A> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Registers `method` under `name` and returns the table.
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut T, &A) -> Result<(), ToolkitError> + 'static,
    {
        self.register(name, method);
        self
    }

    /// Registers `method` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F)
    where
        F: Fn(&mut T, &A) -> Result<(), ToolkitError> + 'static,
    {
        self.methods.insert(name.into(), Box::new(method));
    }

    /// Looks up the operation registered under `name`.
    pub fn resolve(&self, name: &str) -> Option<&MethodFn<T, A>> {
        self.methods.get(name)
    }

    /// Returns `true` if an operation is registered under `name`.
    pub fn supports(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<T, A> Default for MethodTable<T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A> fmt::Debug for MethodTable<T, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MethodTable")
            .field("names", &self.names())
            .finish()
    }
}

/// Applies `method` to every element, passing `arguments` along.
///
/// Return values are not collected; the elements are changed only if the
/// operation mutates them. Returns the same slice.
///
/// # Errors
///
/// Returns [`ToolkitError::InvalidOperation`] if a named method is not in
/// `table`, naming the element type and index as the receiver, or if its
/// entry refuses an element. Elements before the failing one keep their
/// changes.
pub fn invoke<'s, T, A>(
    sequence: &'s mut [T],
    method: Method<'_, T, A>,
    arguments: &A,
    table: &MethodTable<T, A>,
) -> Result<&'s mut [T], ToolkitError> {
    for (index, element) in sequence.iter_mut().enumerate() {
        match method {
            Method::Named(name) => {
                let Some(operation) = table.resolve(name) else {
                    tracing::trace!(method = name, index, "method not registered");
                    return Err(ToolkitError::invalid_operation(
                        name,
                        format!("{} at index {index}", std::any::type_name::<T>()),
                    ));
                };
                operation(element, arguments)?;
            }
            Method::Callable(function) => function(element, arguments),
        }
    }
    Ok(sequence)
}
