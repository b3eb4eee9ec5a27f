//! Expression evaluation

pub mod assign;
pub mod call;
pub mod control;
pub mod function;
pub mod local;

use crate::error::EvalError;
use crate::value::{Arity, Symbol, Value};
use crate::{Environment, EvalContext};

/// Trait for evaluating values as code.
///
/// This is the core abstraction for the tree-walking interpreter:
/// code is data, so the only thing ever evaluated is a [`Value`].
pub trait Evaluate {
    /// Evaluate this value in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Value {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
        // Check for interruption before each expression
        if ctx.is_interrupted() {
            return Err(EvalError::Interrupted);
        }

        match self {
            Value::Nil => Ok(Value::Nil),
            Value::Integer(_) => Ok(self.clone()),
            Value::Symbol(sym) => Ok(eval_symbol(sym, env)),
            Value::List(items) => eval_form(items, env, ctx),
        }
    }
}

/// `T` and `NIL` are constants; anything else is looked up and an unbound
/// symbol evaluates to itself.
fn eval_symbol(sym: &Symbol, env: &Environment) -> Value {
    if sym.is_t() {
        return Value::t();
    }
    if sym.is_nil() {
        return Value::Nil;
    }
    env.get(sym.key())
        .cloned()
        .unwrap_or_else(|| Value::Symbol(sym.clone()))
}

fn eval_form(items: &[Value], env: &mut Environment, ctx: &EvalContext) -> Result<Value, EvalError> {
    // `()` on its own is nil
    let Some((head, operands)) = items.split_first() else {
        return Ok(Value::Nil);
    };

    let op = match head {
        Value::Symbol(sym) => sym,
        other => {
            return Err(EvalError::InvalidOperator {
                got: other.to_string(),
            })
        }
    };

    // Each form under evaluation holds one level until it returns
    enter_level(env, op)?;
    let result = eval_operation(op, operands, env, ctx);
    env.exit_call();
    result
}

fn eval_operation(
    op: &Symbol,
    operands: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    if let Some(form) = SpecialForm::from_symbol(op) {
        return form.eval(operands, env, ctx);
    }

    let args = operands
        .iter()
        .map(|arg| arg.eval(env, ctx))
        .collect::<Result<Vec<_>, _>>()?;

    call::apply_function(op, args, env, ctx)
}

fn enter_level(env: &mut Environment, op: &Symbol) -> Result<(), EvalError> {
    env.enter_call().map_err(|err| {
        tracing::warn!(operator = op.name(), max = env.max_call_depth(), "evaluation depth exceeded");
        EvalError::from(err)
    })
}

// ═══════════════════════════════════════════════════════════════════════
// Special Forms
// ═══════════════════════════════════════════════════════════════════════

/// Operators whose operands are not evaluated eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialForm {
    /// `(quote x)`
    Quote,
    /// `(cond (test body...)...)`
    Cond,
    /// `(defun name formals body...)`
    Defun,
    /// `(setq name expr)`
    Setq,
    /// `(eval expr)`
    Eval,
    /// `(apply fn args)`
    Apply,
    /// `(and x...)`
    And,
    /// `(or x...)`
    Or,
    /// `(not x)`
    Not,
    /// `(if test then [else])`
    If,
    /// `(let ((name init)...) body...)`
    Let,
    /// `(let* ((name init)...) body...)`
    LetStar,
    /// `(lambda formals body...)`
    Lambda,
}

impl SpecialForm {
    /// Recognise a special form by name, case-insensitively.
    pub fn from_symbol(sym: &Symbol) -> Option<Self> {
        let form = match sym.key() {
            "QUOTE" => SpecialForm::Quote,
            "COND" => SpecialForm::Cond,
            "DEFUN" => SpecialForm::Defun,
            "SETQ" => SpecialForm::Setq,
            "EVAL" => SpecialForm::Eval,
            "APPLY" => SpecialForm::Apply,
            "AND" => SpecialForm::And,
            "OR" => SpecialForm::Or,
            "NOT" => SpecialForm::Not,
            "IF" => SpecialForm::If,
            "LET" => SpecialForm::Let,
            "LET*" => SpecialForm::LetStar,
            "LAMBDA" => SpecialForm::Lambda,
            _ => return None,
        };
        Some(form)
    }

    /// Lower-case name, as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SpecialForm::Quote => "quote",
            SpecialForm::Cond => "cond",
            SpecialForm::Defun => "defun",
            SpecialForm::Setq => "setq",
            SpecialForm::Eval => "eval",
            SpecialForm::Apply => "apply",
            SpecialForm::And => "and",
            SpecialForm::Or => "or",
            SpecialForm::Not => "not",
            SpecialForm::If => "if",
            SpecialForm::Let => "let",
            SpecialForm::LetStar => "let*",
            SpecialForm::Lambda => "lambda",
        }
    }

    /// Evaluate this form with its unevaluated operands.
    pub fn eval(
        &self,
        operands: &[Value],
        env: &mut Environment,
        ctx: &EvalContext,
    ) -> Result<Value, EvalError> {
        match self {
            SpecialForm::Quote => {
                check_arity(self.name(), operands, Arity::Exact(1))?;
                Ok(operands[0].clone())
            }
            SpecialForm::Cond => control::eval_cond(operands, env, ctx),
            SpecialForm::If => control::eval_if(operands, env, ctx),
            SpecialForm::And => control::eval_and(operands, env, ctx),
            SpecialForm::Or => control::eval_or(operands, env, ctx),
            SpecialForm::Not => control::eval_not(operands, env, ctx),
            SpecialForm::Defun => function::eval_defun(operands, env),
            SpecialForm::Lambda => function::eval_lambda(operands, ctx),
            SpecialForm::Setq => assign::eval_setq(operands, env, ctx),
            SpecialForm::Let => local::eval_let(operands, env, ctx),
            SpecialForm::LetStar => local::eval_let_star(operands, env, ctx),
            SpecialForm::Eval => call::eval_eval(operands, env, ctx),
            SpecialForm::Apply => call::eval_apply(operands, env, ctx),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════

/// Fail with `ArityError` unless `operands` fits `arity`.
pub(crate) fn check_arity(name: &str, operands: &[Value], arity: Arity) -> Result<(), EvalError> {
    if arity.accepts(operands.len()) {
        Ok(())
    } else {
        Err(EvalError::ArityError {
            name: name.to_string(),
            expected: arity.to_string(),
            got: operands.len(),
        })
    }
}

/// Evaluate forms in order and return the last value (nil when empty).
pub fn eval_body(
    forms: &[Value],
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    let mut last_value = Value::Nil;
    for form in forms {
        last_value = form.eval(env, ctx)?;
    }
    Ok(last_value)
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(
    expr: &Value,
    env: &mut Environment,
    ctx: &EvalContext,
) -> Result<Value, EvalError> {
    expr.eval(env, ctx)
}

pub use call::apply_function;
