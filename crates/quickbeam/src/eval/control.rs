//! Conditional and boolean forms: cond, if, and, or, not

use super::{check_arity, eval_body, Evaluate};
use crate::error::EvalError;
use crate::value::{Arity, Value};
use crate::{Environment, EvalContext};

/// `(cond (test body...)...)`
///
/// Tests run left to right; the first non-nil one has its body evaluated
/// and the last body value returned (nil for an empty body). No match
/// gives nil.
pub fn eval_cond(
    clauses: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    for clause in clauses {
        let (test, body) = clause
            .as_list()
            .and_then(|items| items.split_first())
            .ok_or_else(|| EvalError::malformed("cond", "each clause must be a non-empty list"))?;

        if test.eval(env, ctx)?.truthy() {
            return eval_body(body, env, ctx);
        }
    }
    Ok(Value::Nil)
}

/// `(if test then [else])`
pub fn eval_if(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("if", operands, Arity::Range(2, 3))?;

    if operands[0].eval(env, ctx)?.truthy() {
        operands[1].eval(env, ctx)
    } else if let Some(else_branch) = operands.get(2) {
        else_branch.eval(env, ctx)
    } else {
        Ok(Value::Nil)
    }
}

/// `(and x...)`: nil at the first nil operand, otherwise `T`.
pub fn eval_and(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    for operand in operands {
        if operand.eval(env, ctx)?.is_nil() {
            return Ok(Value::Nil);
        }
    }
    Ok(Value::t())
}

/// `(or x...)`: `T` at the first non-nil operand, otherwise nil.
pub fn eval_or(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    for operand in operands {
        if operand.eval(env, ctx)?.truthy() {
            return Ok(Value::t());
        }
    }
    Ok(Value::Nil)
}

/// `(not x)`
pub fn eval_not(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("not", operands, Arity::Exact(1))?;
    Ok(Value::bool(operands[0].eval(env, ctx)?.is_nil()))
}
