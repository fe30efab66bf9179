//! Call-at-most-once wrappers.

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] wrapper.
enum OnceState<F, R> {
    /// Not called yet. Holds the wrapped function.
    Pending(F),
    /// Called. Holds the cached result.
    Done(R),
    /// The wrapped function panicked, or the wrapper was re-entered while the
    /// function was running.
    Poisoned,
}

/// A wrapper that invokes its function at most once.
///
/// The first [`call`](Once::call) runs the function with the supplied
/// arguments and caches the result. Every later call returns a clone of that
/// result and ignores its arguments; the function is never run again.
///
/// Functions of several arguments take them as a tuple; functions of none
/// take `()`.
///
/// # Thread Safety
///
/// This type is NOT thread-safe.
///
/// # Examples
///
/// ```rust
/// use sequent::function::once;
/// use std::cell::Cell;
///
/// let runs = Cell::new(0);
/// let initialize = once(|seed: u32| {
///     runs.set(runs.get() + 1);
///     seed * 2
/// });
///
/// assert_eq!(initialize.call(21), 42);
/// assert_eq!(initialize.call(99), 42);
/// assert_eq!(runs.get(), 1);
/// ```
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    _arguments: PhantomData<fn(A)>,
}

static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32, i32>: Sync);

/// Wraps `function` so that it runs at most once.
///
/// See [`Once`].
#[inline]
pub fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    Once::new(function)
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Creates a wrapper around `function`. Nothing runs yet.
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            _arguments: PhantomData,
        }
    }

    /// Returns the cached result, running the function on the first call.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics; the wrapper is then poisoned.
    /// - If the wrapper is poisoned from an earlier panic or is called again
    ///   from inside the wrapped function.
    pub fn call(&self, arguments: A) -> R {
        let function = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, OnceState::Poisoned) {
                OnceState::Done(result) => {
                    let cached = result.clone();
                    *state = OnceState::Done(result);
                    return cached;
                }
                OnceState::Pending(function) => function,
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
            }
        };
        // The state stays Poisoned while the function runs, so a panic or a
        // re-entrant call cannot run it twice.
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        result
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns `true` once the function has run to completion.
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns `true` if the wrapped function panicked.
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}
