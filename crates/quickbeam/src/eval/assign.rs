//! Global assignment: setq

use super::{check_arity, Evaluate};
use crate::error::EvalError;
use crate::value::{Arity, Value};
use crate::{Environment, EvalContext};

/// `(setq name expr)`
///
/// `expr` is evaluated against the global tier alone, not the caller's
/// frame, and the result is stored globally. The caller's own frame is a
/// snapshot and keeps showing the old binding.
pub fn eval_setq(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("setq", operands, Arity::Exact(2))?;

    let name = operands[0]
        .as_symbol()
        .filter(|sym| !sym.is_reserved())
        .ok_or_else(|| EvalError::malformed("setq", "variable must be a symbol other than T or NIL"))?;

    let value = {
        let mut global = env.global_scope();
        operands[1].eval(&mut global, ctx)?
    };

    tracing::debug!(name = name.name(), "setq");
    env.define(name.clone(), value.clone());
    Ok(value)
}
