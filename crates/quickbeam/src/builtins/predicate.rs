//! Equality and type predicates

use super::{arity_error, integer};
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::value::{Arity, Value};

fn one<'a>(name: &str, args: &'a [Value]) -> Result<&'a Value, EvalError> {
    match args {
        [v] => Ok(v),
        _ => Err(arity_error(name, Arity::Exact(1), args.len())),
    }
}

fn two<'a>(name: &str, args: &'a [Value]) -> Result<(&'a Value, &'a Value), EvalError> {
    match args {
        [a, b] => Ok((a, b)),
        _ => Err(arity_error(name, Arity::Exact(2), args.len())),
    }
}

/// `(eq a b)`: atom identity; lists are never `eq`.
pub fn eq(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let (a, b) = two("eq", args)?;
    Ok(Value::bool(a.eq_atom(b)))
}

/// `(equal a b)`: deep structural equality.
pub fn equal(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let (a, b) = two("equal", args)?;
    Ok(Value::bool(a.equal(b)))
}

/// `(atom x)`
pub fn atom(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::bool(one("atom", args)?.is_atom()))
}

/// `(null x)`
pub fn null(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::bool(one("null", args)?.is_nil()))
}

/// `(listp x)`
pub fn listp(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::bool(one("listp", args)?.is_list()))
}

/// `(symbolp x)`, also registered as `stringp`
pub fn symbolp(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::bool(one("symbolp", args)?.is_symbol()))
}

/// `(numberp x)`
pub fn numberp(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::bool(one("numberp", args)?.is_integer()))
}

/// `(zerop n)`
pub fn zerop(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::bool(integer("zerop", one("zerop", args)?)? == 0))
}
