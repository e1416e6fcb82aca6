//! Built-in function registry for the VM
//!
//! Builtins are looked up by name when a CALL executes. Their arities seed
//! the VM's arity table, which is why a builtin can never be redefined.

use crate::error::RuntimeError;
use std::collections::HashMap;
use std::io::Write;

/// Type signature for native VM functions
///
/// Receives the VM's output sink and the popped arguments (first argument
/// first). Returns `Some(result)` for value-producing builtins and `None`
/// for side-effect-only ones.
pub type NativeFn = fn(&mut dyn Write, &[i64]) -> Result<Option<i64>, RuntimeError>;

/// Metadata for a single built-in function
#[derive(Clone)]
pub struct BuiltinMetadata {
    /// Function name
    pub name: String,
    /// Function pointer
    pub func: NativeFn,
    /// Exact argument count
    pub arity: usize,
}

impl std::fmt::Debug for BuiltinMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinMetadata")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Registry of all built-in functions
#[derive(Debug, Default)]
pub struct BuiltinRegistry {
    /// Name to index mapping
    by_name: HashMap<String, usize>,
    /// Index to function mapping
    functions: Vec<BuiltinMetadata>,
}

impl BuiltinRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a built-in function
    ///
    /// # Panics
    /// Panics if the name is already registered.
    pub fn register(&mut self, name: &str, func: NativeFn, arity: usize) {
        if self.by_name.contains_key(name) {
            panic!("Built-in function '{}' already registered", name);
        }

        self.by_name.insert(name.to_string(), self.functions.len());
        self.functions.push(BuiltinMetadata {
            name: name.to_string(),
            func,
            arity,
        });
    }

    /// Get function metadata by name
    pub fn lookup(&self, name: &str) -> Option<&BuiltinMetadata> {
        self.by_name.get(name).and_then(|&index| self.functions.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuiltinMetadata> {
        self.functions.iter()
    }

    /// Get number of registered functions
    #[inline]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if registry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_fn(_out: &mut dyn Write, _args: &[i64]) -> Result<Option<i64>, RuntimeError> {
        Ok(None)
    }

    #[test]
    fn test_registry_basic() {
        let mut registry = BuiltinRegistry::new();
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());

        registry.register("test", dummy_fn, 1);
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());

        assert_eq!(registry.lookup("test").map(|m| m.name.as_str()), Some("test"));
        assert!(registry.lookup("nonexistent").is_none());
        assert_eq!(registry.lookup("test").map(|m| m.arity), Some(1));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_registration() {
        let mut registry = BuiltinRegistry::new();
        registry.register("test", dummy_fn, 1);
        registry.register("test", dummy_fn, 1); // Should panic
    }
}
