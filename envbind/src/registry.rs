//! Type registry for binding targets only known at runtime
//!
//! Statically typed callers use [`crate::bind`]. The registry serves callers
//! holding a `&mut dyn Any`: record types are registered up front, and binding
//! dispatches on the target's `TypeId`.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::error::BindError;
use crate::source::EnvSource;
use crate::EnvBind;

type BindFn = fn(&mut dyn Any, &dyn EnvSource) -> Result<(), BindError>;

/// Registry of record types that can be bound through `dyn Any`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    binders: HashMap<TypeId, BindFn>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the record type `T`.
    ///
    /// Registering the same type twice is a no-op.
    pub fn register<T: EnvBind + 'static>(&mut self) -> &mut Self {
        self.binders.insert(TypeId::of::<T>(), bind_erased::<T>);
        self
    }

    /// Whether `T` has been registered.
    pub fn contains<T: 'static>(&self) -> bool {
        self.binders.contains_key(&TypeId::of::<T>())
    }

    /// Bind `target` from `env`.
    ///
    /// # Errors
    ///
    /// - [`BindError::NotAPointer`] if `target` is `None`
    /// - [`BindError::NotAStruct`] if the referenced value is not a
    ///   registered record type
    /// - any structural error raised while binding nested records
    pub fn bind(
        &self,
        target: Option<&mut dyn Any>,
        env: &dyn EnvSource,
    ) -> Result<(), BindError> {
        let target = target.ok_or(BindError::NotAPointer)?;
        let type_id = (*target).type_id();
        let bind = self.binders.get(&type_id).ok_or(BindError::NotAStruct)?;
        bind(target, env)
    }
}

fn bind_erased<T: EnvBind + 'static>(
    target: &mut dyn Any,
    env: &dyn EnvSource,
) -> Result<(), BindError> {
    target
        .downcast_mut::<T>()
        .ok_or(BindError::NotAStruct)?
        .bind_from(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, EnvBind)]
    struct Number {
        #[env(name = "one", default = "101")]
        one: i32,
        #[env(name = "flag")]
        flag: bool,
    }

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_target_is_not_a_pointer() {
        let registry = Registry::new();
        let result = registry.bind(None, &env(&[]));
        assert_eq!(result, Err(BindError::NotAPointer));
    }

    #[test]
    fn test_non_record_is_not_a_struct() {
        let mut registry = Registry::new();
        registry.register::<Number>();

        let mut value = String::new();
        let result = registry.bind(Some(&mut value), &env(&[]));
        assert_eq!(result, Err(BindError::NotAStruct));

        let mut value = 5_i32;
        let result = registry.bind(Some(&mut value), &env(&[]));
        assert_eq!(result, Err(BindError::NotAStruct));
    }

    #[test]
    fn test_unregistered_record_is_not_a_struct() {
        let registry = Registry::new();
        let mut number = Number::default();
        let result = registry.bind(Some(&mut number), &env(&[]));
        assert_eq!(result, Err(BindError::NotAStruct));
        assert_eq!(number.one, 0);
    }

    #[test]
    fn test_registered_record_is_bound() {
        let mut registry = Registry::new();
        registry.register::<Number>().register::<Number>();
        assert!(registry.contains::<Number>());
        assert!(!registry.contains::<String>());

        let mut number = Number::default();
        registry
            .bind(Some(&mut number), &env(&[("flag", "0")]))
            .unwrap();
        assert_eq!(number.one, 101);
        assert!(number.flag);
    }
}
