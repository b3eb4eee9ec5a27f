//! Callable value types: user functions and builtins

use std::fmt;
use std::sync::Arc;

use super::{Symbol, Value};
use crate::context::EvalContext;
use crate::error::EvalError;

/// Type alias for builtin function pointers to reduce complexity
pub type BuiltinFnPtr =
    Arc<dyn Fn(&[Value], &EvalContext) -> Result<Value, EvalError> + Send + Sync>;

/// A user-defined function, decoded from its designator list.
///
/// The designator is the `(formals body...)` list that `defun` stores in
/// the global tier and that `lambda` returns. Decoding it does not copy
/// any environment: a function sees only its parameters and the globals.
#[derive(Debug, Clone)]
pub struct FunctionValue {
    /// Function name (for error messages)
    pub name: String,

    /// Formal parameters, in order
    pub params: Vec<Symbol>,

    /// Body forms, evaluated in sequence
    pub body: Vec<Value>,
}

impl FunctionValue {
    /// Create a new function value
    pub fn new(name: impl Into<String>, params: Vec<Symbol>, body: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            params,
            body,
        }
    }

    /// Decode a `(formals body...)` list.
    ///
    /// Returns `None` unless the value is a list of at least two elements
    /// whose head is a list (or nil) of symbols.
    pub fn from_designator(name: impl Into<String>, value: &Value) -> Option<Self> {
        let items = value.as_list()?;
        let (formals, body) = items.split_first()?;
        if body.is_empty() {
            return None;
        }
        let params = formals_to_symbols(formals)?;
        Some(Self::new(name, params, body.to_vec()))
    }

    /// Encode back into the `(formals body...)` list shape.
    pub fn to_designator(&self) -> Value {
        let formals = Value::list(self.params.iter().cloned().map(Value::Symbol).collect());
        let mut items = Vec::with_capacity(self.body.len() + 1);
        items.push(formals);
        items.extend(self.body.iter().cloned());
        Value::list(items)
    }

    /// Number of formal parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Read a formals list, accepting nil as "no parameters".
pub fn formals_to_symbols(formals: &Value) -> Option<Vec<Symbol>> {
    formals
        .as_seq()?
        .iter()
        .map(|f| f.as_symbol().cloned())
        .collect()
}

/// Accepted argument count for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many
    Exact(usize),

    /// This many or more
    AtLeast(usize),

    /// Inclusive range
    Range(usize, usize),
}

impl Arity {
    /// Check whether `n` arguments are accepted.
    pub fn accepts(&self, n: usize) -> bool {
        match *self {
            Arity::Exact(k) => n == k,
            Arity::AtLeast(k) => n >= k,
            Arity::Range(lo, hi) => (lo..=hi).contains(&n),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(k) => write!(f, "{}", k),
            Arity::AtLeast(k) => write!(f, "at least {}", k),
            Arity::Range(lo, hi) => write!(f, "{} to {}", lo, hi),
        }
    }
}

/// A built-in native function.
///
/// These are Rust functions exposed to the interpreter. They receive
/// already-evaluated arguments; the arity is checked before the call.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Function name (for display/debugging)
    pub name: String,

    /// Accepted argument count
    pub arity: Arity,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl BuiltinFn {
    /// Wrap a native function.
    pub fn new<F>(name: impl Into<String>, arity: Arity, func: F) -> Self
    where
        F: Fn(&[Value], &EvalContext) -> Result<Value, EvalError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}
