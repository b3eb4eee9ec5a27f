//! Function definition: defun and lambda

use super::check_arity;
use crate::builtins;
use crate::error::EvalError;
use crate::value::{formals_to_symbols, Arity, FunctionValue, Value};
use crate::{Environment, EvalContext};

/// `(defun name formals body...)`
///
/// Stores the designator `(formals body...)` under `name` in the global
/// tier, replacing any earlier definition, and returns `name`. Nothing is
/// written unless the whole form is well shaped.
pub fn eval_defun(operands: &[Value], env: &mut Environment) -> Result<Value, EvalError> {
    check_arity("defun", operands, Arity::AtLeast(3))?;

    let name = operands[0]
        .as_symbol()
        .filter(|sym| !sym.is_reserved())
        .ok_or_else(|| EvalError::malformed("defun", "function name must be a symbol other than T or NIL"))?;

    let params = formals_to_symbols(&operands[1])
        .ok_or_else(|| EvalError::malformed("defun", "formals must be a list of symbols"))?;

    let func = FunctionValue::new(name.name(), params, operands[2..].to_vec());
    tracing::debug!(name = name.name(), arity = func.arity(), "defun");
    env.define(name.clone(), func.to_designator());

    Ok(Value::Symbol(name.clone()))
}

/// `(lambda formals body...)`
///
/// Returns the operands, unevaluated, as a designator list. No
/// environment is captured.
pub fn eval_lambda(operands: &[Value], ctx: &EvalContext) -> Result<Value, EvalError> {
    check_arity("lambda", operands, Arity::AtLeast(1))?;

    if formals_to_symbols(&operands[0]).is_none() {
        return Err(EvalError::malformed("lambda", "formals must be a list of symbols"));
    }

    builtins::list::lambda(operands, ctx)
}
