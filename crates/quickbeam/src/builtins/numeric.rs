//! Integer arithmetic and comparison
//!
//! All arithmetic wraps on overflow. Division and remainder truncate
//! toward zero, including the two-argument form of `floor`.

use super::{arity_error, integer};
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::value::{Arity, Value};

fn integers(name: &str, args: &[Value]) -> Result<Vec<i64>, EvalError> {
    args.iter().map(|v| integer(name, v)).collect()
}

fn pair(name: &str, args: &[Value]) -> Result<(i64, i64), EvalError> {
    match args {
        [a, b] => Ok((integer(name, a)?, integer(name, b)?)),
        _ => Err(arity_error(name, Arity::Exact(2), args.len())),
    }
}

fn single(name: &str, args: &[Value]) -> Result<i64, EvalError> {
    match args {
        [a] => integer(name, a),
        _ => Err(arity_error(name, Arity::Exact(1), args.len())),
    }
}

fn nonzero(name: &str, divisor: i64) -> Result<i64, EvalError> {
    if divisor == 0 {
        return Err(EvalError::DivisionByZero {
            name: name.to_string(),
        });
    }
    Ok(divisor)
}

/// `(+ n...)`
pub fn add(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let nums = integers("+", args)?;
    Ok(Value::Integer(nums.into_iter().fold(0i64, i64::wrapping_add)))
}

/// `(- n...)`, negation when given one argument
pub fn sub(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let nums = integers("-", args)?;
    match nums.split_first() {
        None => Err(arity_error("-", Arity::AtLeast(1), 0)),
        Some((first, [])) => Ok(Value::Integer(first.wrapping_neg())),
        Some((first, rest)) => Ok(Value::Integer(
            rest.iter().fold(*first, |acc, n| acc.wrapping_sub(*n)),
        )),
    }
}

/// `(* n...)`
pub fn mul(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let nums = integers("*", args)?;
    Ok(Value::Integer(nums.into_iter().fold(1i64, i64::wrapping_mul)))
}

/// `(/ n d...)`, truncating left fold
pub fn div(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    if args.len() < 2 {
        return Err(arity_error("/", Arity::AtLeast(2), args.len()));
    }
    let nums = integers("/", args)?;
    let mut acc = nums[0];
    for n in &nums[1..] {
        acc = acc.wrapping_div(nonzero("/", *n)?);
    }
    Ok(Value::Integer(acc))
}

/// `(< a b)`
pub fn lt(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let (a, b) = pair("<", args)?;
    Ok(Value::bool(a < b))
}

/// `(> a b)`
pub fn gt(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let (a, b) = pair(">", args)?;
    Ok(Value::bool(a > b))
}

/// `(= a b)`
pub fn num_eq(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let (a, b) = pair("=", args)?;
    Ok(Value::bool(a == b))
}

/// `(1+ n)`
pub fn inc(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Integer(single("1+", args)?.wrapping_add(1)))
}

/// `(1- n)`
pub fn dec(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::Integer(single("1-", args)?.wrapping_sub(1)))
}

/// `(mod a b)`, remainder with the sign of `a`
pub fn modulo(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    let (a, b) = pair("mod", args)?;
    Ok(Value::Integer(a.wrapping_rem(nonzero("mod", b)?)))
}

/// `(floor n)` passes integers through; `(floor a b)` truncates `a / b`.
pub fn floor(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    match args {
        [n] => Ok(Value::Integer(integer("floor", n)?)),
        [_, _] => {
            let (a, b) = pair("floor", args)?;
            Ok(Value::Integer(a.wrapping_div(nonzero("floor", b)?)))
        }
        _ => Err(arity_error("floor", Arity::Range(1, 2), args.len())),
    }
}
