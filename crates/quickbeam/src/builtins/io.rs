//! Output primitive

use super::arity_error;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::value::{Arity, Value};

/// `(print x)`: write the printed form of `x` to the context's output
/// sink and return `x`.
pub fn print(args: &[Value], ctx: &EvalContext) -> Result<Value, EvalError> {
    match args {
        [value] => {
            ctx.output.emit(&value.to_string());
            Ok(value.clone())
        }
        _ => Err(arity_error("print", Arity::Exact(1), args.len())),
    }
}
