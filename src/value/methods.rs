//! Built-in methods for [`Value`] receivers.

use super::Value;
use crate::collection::{MethodTable, sort_natural, uniq};
use crate::error::ToolkitError;

type Arguments = Vec<Value>;

impl Value {
    /// Returns a method table of array methods: `push`, `pop`, `shift`,
    /// `unshift`, `reverse`, `sort`, `uniq` and `clear`.
    ///
    /// Every method rejects non-array receivers with
    /// [`ToolkitError::InvalidOperation`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequent::collection::{invoke, Method};
    /// use sequent::value::Value;
    ///
    /// let table = Value::builtin_methods();
    /// let mut lists = vec![Value::array([3, 1]), Value::array([2])];
    /// invoke(&mut lists, Method::Named("push"), &vec![Value::from(0)], &table).unwrap();
    /// assert_eq!(lists, vec![Value::array([3, 1, 0]), Value::array([2, 0])]);
    /// ```
    pub fn builtin_methods() -> MethodTable<Self, Arguments> {
        MethodTable::new()
            .with("push", |receiver: &mut Self, arguments: &Arguments| {
                elements_of(receiver, "push")?.extend(arguments.iter().cloned());
                Ok(())
            })
            .with("pop", |receiver: &mut Self, _: &Arguments| {
                elements_of(receiver, "pop")?.pop();
                Ok(())
            })
            .with("shift", |receiver: &mut Self, _: &Arguments| {
                let elements = elements_of(receiver, "shift")?;
                if !elements.is_empty() {
                    elements.remove(0);
                }
                Ok(())
            })
            .with("unshift", |receiver: &mut Self, arguments: &Arguments| {
                elements_of(receiver, "unshift")?.splice(0..0, arguments.iter().cloned());
                Ok(())
            })
            .with("reverse", |receiver: &mut Self, _: &Arguments| {
                elements_of(receiver, "reverse")?.reverse();
                Ok(())
            })
            .with("sort", |receiver: &mut Self, _: &Arguments| {
                sort_natural(elements_of(receiver, "sort")?);
                Ok(())
            })
            .with("uniq", |receiver: &mut Self, _: &Arguments| {
                uniq(elements_of(receiver, "uniq")?);
                Ok(())
            })
            .with("clear", |receiver: &mut Self, _: &Arguments| {
                elements_of(receiver, "clear")?.clear();
                Ok(())
            })
    }
}

fn elements_of<'a>(
    receiver: &'a mut Value,
    method: &str,
) -> Result<&'a mut Vec<Value>, ToolkitError> {
    let receiver_kind = receiver.type_name();
    receiver
        .as_array_mut()
        .ok_or_else(|| ToolkitError::invalid_operation(method, receiver_kind))
}
