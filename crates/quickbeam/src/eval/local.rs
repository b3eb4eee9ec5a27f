//! Local binding forms: let and let*

use super::{check_arity, eval_body, Evaluate};
use crate::error::EvalError;
use crate::value::{Arity, Symbol, Value};
use crate::{Environment, EvalContext};

/// Split a bindings list into `(name, init)` pairs.
fn parse_bindings<'a>(form: &str, bindings: &'a Value) -> Result<Vec<(Symbol, &'a Value)>, EvalError> {
    let items = bindings
        .as_seq()
        .ok_or_else(|| EvalError::malformed(form, "bindings must be a list"))?;

    items
        .iter()
        .map(|binding| match binding.as_list() {
            Some([Value::Symbol(name), init]) if !name.is_reserved() => Ok((name.clone(), init)),
            _ => Err(EvalError::malformed(
                form,
                format!("each binding must be (name value), got {}", binding),
            )),
        })
        .collect()
}

/// `(let ((name init)...) body...)`
///
/// Every init is evaluated in the caller's environment before any name is
/// bound; the body then runs in one frame holding all the new bindings.
pub fn eval_let(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("let", operands, Arity::AtLeast(2))?;
    let bindings = parse_bindings("let", &operands[0])?;

    let mut values = Vec::with_capacity(bindings.len());
    for (_, init) in &bindings {
        values.push(init.eval(env, ctx)?);
    }

    let mut frame = env.snapshot_current();
    for ((name, _), value) in bindings.into_iter().zip(values) {
        frame.bind(name, value);
    }

    let mut guard = env.scope_guard(frame);
    eval_body(&operands[1..], &mut guard, ctx)
}

/// `(let* ((name init)...) body...)`
///
/// Each init sees the bindings made before it in the same form.
pub fn eval_let_star(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("let*", operands, Arity::AtLeast(2))?;
    let bindings = parse_bindings("let*", &operands[0])?;

    let mut frame = env.snapshot_current();
    for (name, init) in bindings {
        let value = {
            let mut guard = env.scope_guard(frame.clone());
            init.eval(&mut guard, ctx)?
        };
        frame.bind(name, value);
    }

    let mut guard = env.scope_guard(frame);
    eval_body(&operands[1..], &mut guard, ctx)
}
