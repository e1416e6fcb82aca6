//! Built-in functions module
//!
//! The builtins are fixed and always present:
//! - Comparison: `> < = >= <=` (arity 2, result 1 or 0)
//! - Arithmetic: `+ - * /` (arity 2)
//! - Output: `nl` (arity 0), `print`, `println`, `write` (arity 1)

pub mod arithmetic;
pub mod comparison;
pub mod io;
pub mod registry;

use registry::BuiltinRegistry;

/// Create and populate the built-in function registry
pub fn create_builtin_registry() -> BuiltinRegistry {
    let mut registry = BuiltinRegistry::new();

    // Comparison
    registry.register(">", comparison::vm_gt, 2);
    registry.register("<", comparison::vm_lt, 2);
    registry.register("=", comparison::vm_eq, 2);
    registry.register(">=", comparison::vm_ge, 2);
    registry.register("<=", comparison::vm_le, 2);

    // Arithmetic
    registry.register("+", arithmetic::vm_add, 2);
    registry.register("-", arithmetic::vm_sub, 2);
    registry.register("*", arithmetic::vm_mul, 2);
    registry.register("/", arithmetic::vm_div, 2);

    // Output
    registry.register("nl", io::vm_nl, 0);
    registry.register("print", io::vm_print, 1);
    registry.register("println", io::vm_println, 1);
    registry.register("write", io::vm_write, 1);

    registry
}
