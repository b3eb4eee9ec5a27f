//! List construction and access: car, cdr, cons, list, elem, lambda

use super::arity_error;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::value::{Arity, Value};

/// `(car l)`: first element; nil or the empty list give nil.
pub fn car(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    match args {
        [l] if l.is_nil() => Ok(Value::Nil),
        [Value::List(items)] => Ok(items.first().cloned().unwrap_or(Value::Nil)),
        [other] => Err(EvalError::type_error("car", "list", other)),
        _ => Err(arity_error("car", Arity::Exact(1), args.len())),
    }
}

/// `(cdr l)`: everything after the first element, or nil when nothing is left.
pub fn cdr(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    match args {
        [l] if l.is_nil() => Ok(Value::Nil),
        [Value::List(items)] if items.len() <= 1 => Ok(Value::Nil),
        [Value::List(items)] => Ok(Value::list(items[1..].to_vec())),
        [other] => Err(EvalError::type_error("cdr", "list", other)),
        _ => Err(arity_error("cdr", Arity::Exact(1), args.len())),
    }
}

/// `(cons x l)`: new list with `x` in front.
///
/// A non-list tail gives the two-element list `(x tail)`; there is no
/// separate pair type.
pub fn cons(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    match args {
        // Nil and the symbol nil are both the empty list here, as in `equal`
        [head, tail] if tail.is_nil() => Ok(Value::list(vec![head.clone()])),
        [head, Value::List(items)] => {
            let mut out = Vec::with_capacity(items.len() + 1);
            out.push(head.clone());
            out.extend(items.iter().cloned());
            Ok(Value::list(out))
        }
        [head, tail] => Ok(Value::list(vec![head.clone(), tail.clone()])),
        _ => Err(arity_error("cons", Arity::Exact(2), args.len())),
    }
}

/// `(list x...)`: the arguments as a list.
pub fn list(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    Ok(Value::list(args.to_vec()))
}

/// `(elem x l)`: `T` if some element of `l` is `equal` to `x`.
pub fn elem(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    match args {
        [item, seq] => {
            let items = seq
                .as_seq()
                .ok_or_else(|| EvalError::type_error("elem", "list", seq))?;
            Ok(Value::bool(items.iter().any(|v| v.equal(item))))
        }
        _ => Err(arity_error("elem", Arity::Exact(2), args.len())),
    }
}

/// `(lambda formals body...)`: the designator list, unchanged.
pub fn lambda(args: &[Value], _ctx: &EvalContext) -> Result<Value, EvalError> {
    if args.is_empty() {
        return Err(arity_error("lambda", Arity::AtLeast(1), 0));
    }
    Ok(Value::list(args.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Value {
        Value::symbol(s)
    }

    fn ctx() -> EvalContext {
        EvalContext::default()
    }

    #[test]
    fn test_car_of_nil_and_empty() {
        assert_eq!(car(&[Value::Nil], &ctx()).unwrap(), Value::Nil);
        assert_eq!(car(&[Value::list(vec![])], &ctx()).unwrap(), Value::Nil);
        assert_eq!(car(&[sym("nil")], &ctx()).unwrap(), Value::Nil);
    }

    #[test]
    fn test_cdr_single_element_is_nil() {
        let single = Value::list(vec![sym("a")]);
        assert!(matches!(cdr(&[single], &ctx()).unwrap(), Value::Nil));
    }

    #[test]
    fn test_cons_does_not_touch_tail() {
        let tail = Value::list(vec![sym("b"), sym("c")]);
        let out = cons(&[sym("a"), tail.clone()], &ctx()).unwrap();
        assert_eq!(out.to_string(), "(a b c)");
        assert_eq!(tail.to_string(), "(b c)");
    }

    #[test]
    fn test_cons_onto_atom_makes_two_element_list() {
        let out = cons(&[sym("a"), sym("b")], &ctx()).unwrap();
        assert_eq!(out.to_string(), "(a b)");
    }

    #[test]
    fn test_car_of_atom_is_type_error() {
        let err = car(&[Value::Integer(3)], &ctx()).unwrap_err();
        assert!(matches!(err, EvalError::TypeError { .. }));
    }
}
