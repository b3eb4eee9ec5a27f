//! Primitive library
//!
//! Every primitive receives its arguments already evaluated and returns a
//! fresh value; none of them mutates a list it was given. Registration
//! lives in the environment prelude.

pub mod io;
pub mod list;
pub mod numeric;
pub mod predicate;

use crate::error::EvalError;
use crate::value::{Arity, Value};

/// Build an `ArityError` for a primitive called with `got` arguments.
pub(crate) fn arity_error(name: &str, expected: Arity, got: usize) -> EvalError {
    EvalError::ArityError {
        name: name.to_string(),
        expected: expected.to_string(),
        got,
    }
}

/// Extract an integer operand or fail with `TypeError`.
pub(crate) fn integer(name: &str, value: &Value) -> Result<i64, EvalError> {
    value
        .as_integer()
        .ok_or_else(|| EvalError::type_error(name, "integer", value))
}
