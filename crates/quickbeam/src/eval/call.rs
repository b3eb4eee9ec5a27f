//! Function application: the eager call path plus the eval and apply forms

use super::{check_arity, eval_body, Evaluate};
use crate::error::EvalError;
use crate::value::{Arity, BuiltinFn, FunctionValue, Symbol, Value};
use crate::{Environment, EvalContext};

/// Apply the function named `name` to already-evaluated `args`.
///
/// Primitives win over globals of the same name. Otherwise the global tier
/// must hold a `(formals body...)` designator under `name`.
///
/// # Errors
///
/// Returns `UnknownFunction` if nothing callable is bound to `name`.
/// Returns `ArityError` if the argument count doesn't match.
pub fn apply_function(
    name: &Symbol,
    args: Vec<Value>,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    if ctx.trace {
        tracing::trace!(function = name.name(), argc = args.len(), depth = env.call_depth(), "apply");
    }

    if let Some(builtin) = env.builtin(name.key()) {
        return call_builtin(builtin, &args, ctx);
    }

    let func = env
        .get_global(name.key())
        .and_then(|designator| FunctionValue::from_designator(name.name(), designator))
        .ok_or_else(|| EvalError::UnknownFunction {
            name: name.name().to_string(),
        })?;

    call_function(&func, args, env, ctx)
}

/// Call a built-in function.
fn call_builtin(func: &BuiltinFn, args: &[Value], ctx: &EvalContext) -> Result<Value, EvalError> {
    // Check arity before the native code sees the arguments
    if !func.arity.accepts(args.len()) {
        return Err(EvalError::ArityError {
            name: func.name.clone(),
            expected: func.arity.to_string(),
            got: args.len(),
        });
    }

    (func.func)(args, ctx)
}

/// Call a user-defined function.
///
/// The body runs in a fresh snapshot of the global tier overlaid with the
/// parameters; the caller's frame is never visible.
fn call_function(
    func: &FunctionValue,
    args: Vec<Value>,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    // Check arity
    if args.len() != func.params.len() {
        return Err(EvalError::ArityError {
            name: func.name.clone(),
            expected: func.params.len().to_string(),
            got: args.len(),
        });
    }

    let mut frame = env.snapshot_global();
    for (param, arg) in func.params.iter().zip(args) {
        frame.bind(param.clone(), arg);
    }

    let mut guard = env.scope_guard(frame);
    eval_body(&func.body, &mut guard, ctx)
}

/// `(eval expr)`
///
/// Evaluates `expr`, then evaluates the result again as code in the same
/// environment. Forms built at runtime nest under the `eval` form's own
/// level, so they share the evaluation depth limit.
pub fn eval_eval(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("eval", operands, Arity::Exact(1))?;
    let code = operands[0].eval(env, ctx)?;
    code.eval(env, ctx)
}

/// `(apply fn args)`
///
/// `fn` must evaluate to a symbol naming a primitive or a global function;
/// a designator list such as a `lambda` value is rejected. The elements of
/// `args` are passed as they are, without further evaluation.
pub fn eval_apply(
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    check_arity("apply", operands, Arity::Exact(2))?;

    let callee = operands[0].eval(env, ctx)?;
    let name = match &callee {
        Value::Symbol(sym) if !sym.is_nil() => sym.clone(),
        other => {
            return Err(EvalError::NotCallable {
                got: other.to_string(),
            })
        }
    };

    // A non-list argument list is a type error, never wrapped into a list
    let arg_list = operands[1].eval(env, ctx)?;
    let args = arg_list
        .as_seq()
        .ok_or_else(|| EvalError::type_error("apply", "list", &arg_list))?
        .to_vec();

    apply_function(&name, args, env, ctx)
}
