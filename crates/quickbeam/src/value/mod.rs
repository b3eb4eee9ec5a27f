//! Value representation for runtime values

mod callable;
mod display;
mod impls;
mod symbol;

pub use callable::{formals_to_symbols, Arity, BuiltinFn, BuiltinFnPtr, FunctionValue};
pub use symbol::Symbol;

use std::sync::Arc;

/// Runtime value for the Quickbeam interpreter.
///
/// Code and data share this one representation. Lists are flat,
/// reference-counted vectors rather than cons cells: no primitive ever
/// rewrites a list in place, so sub-lists are shared freely between values.
///
/// A function is not a separate kind. Both `defun` and `lambda` produce a
/// list shaped `(formals body...)`; see [`FunctionValue`].
#[derive(Clone)]
pub enum Value {
    /// The unique false/empty value
    Nil,

    /// Case-insensitive identifier, also the only "string" kind
    Symbol(Symbol),

    /// Signed 64-bit integer
    Integer(i64),

    /// Ordered sequence of values
    List(Arc<Vec<Value>>),
}

impl Drop for Value {
    fn drop(&mut self) {
        // Uniquely owned sub-lists are flattened onto a work list; nesting
        // depth must not translate into native stack depth.
        let Value::List(items) = self else { return };
        let Some(children) = Arc::get_mut(items) else { return };
        if children.iter().all(Value::is_atom) {
            return;
        }
        let mut pending = std::mem::take(children);
        while let Some(mut child) = pending.pop() {
            if let Value::List(grandchildren) = &mut child {
                if let Some(vec) = Arc::get_mut(grandchildren) {
                    pending.append(vec);
                }
            }
        }
    }
}
