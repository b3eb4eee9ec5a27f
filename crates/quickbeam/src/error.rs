//! Error types for reading and evaluation

use thiserror::Error;

use crate::value::Value;

/// Errors raised by the reader while turning text into a [`Value`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// End of input reached inside an open list
    #[error("unmatched parenthesis: input ended inside a list")]
    UnmatchedParenthesis,

    /// A `)` appeared with no open list
    #[error("unexpected `)`")]
    UnexpectedCloseParen,

    /// Tokens left over after one complete expression
    #[error("extra tokens after expression ({count} left over)")]
    TrailingTokens {
        /// Number of unconsumed tokens
        count: usize,
    },

    /// The input (or the operand of a `'`) contained no expression
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// Lists nested deeper than the reader allows
    #[error("expression too deeply nested (max depth: {max})")]
    TooDeeplyNested {
        /// Maximum nesting depth
        max: usize,
    },
}

/// Errors raised while evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Wrong number of operands for a special form, primitive or function
    #[error("{name}: expected {expected} argument(s), got {got}")]
    ArityError {
        /// Operator name
        name: String,
        /// Accepted argument count, human readable
        expected: String,
        /// Number of arguments supplied
        got: usize,
    },

    /// A special form whose operands have the wrong shape
    #[error("{form}: {message}")]
    MalformedForm {
        /// Special form name
        form: String,
        /// What was wrong
        message: String,
    },

    /// Operand of the wrong kind
    #[error("{name}: expected {expected}, got {got}")]
    TypeError {
        /// Operator name
        name: String,
        /// Expected kind
        expected: String,
        /// Actual kind received
        got: String,
    },

    /// Integer division or remainder by zero
    #[error("{name}: division by zero")]
    DivisionByZero {
        /// Operator name
        name: String,
    },

    /// Function position names nothing callable
    #[error("unknown function: {name}")]
    UnknownFunction {
        /// The symbol as written
        name: String,
    },

    /// `apply` was handed something other than a function name
    #[error("not callable: {got}")]
    NotCallable {
        /// Printed form of the rejected value
        got: String,
    },

    /// A list whose head cannot name an operator
    #[error("invalid operator: {got}")]
    InvalidOperator {
        /// Printed form of the offending head
        got: String,
    },

    /// Nested evaluation reached the configured depth limit
    #[error("stack overflow: evaluation depth {depth} reached maximum {max}")]
    StackOverflow {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Evaluation aborted through the context's interrupt flag
    #[error("evaluation interrupted")]
    Interrupted,
}

/// Errors raised by the environment's bookkeeping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// Evaluation depth limit reached
    #[error("stack overflow: evaluation depth {depth} reached maximum {max}")]
    StackOverflow {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max: usize,
    },
}

impl From<EnvironmentError> for EvalError {
    fn from(err: EnvironmentError) -> Self {
        match err {
            EnvironmentError::StackOverflow { depth, max } => EvalError::StackOverflow { depth, max },
        }
    }
}

/// Main error type for Quickbeam operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuickbeamError {
    /// Failure while reading text
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Failure while evaluating a value
    #[error("eval error: {0}")]
    Eval(#[from] EvalError),
}

/// Result type alias for Quickbeam operations
pub type Result<T> = std::result::Result<T, QuickbeamError>;

/// Human-readable kind of a value, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Nil => "nil",
        Value::Symbol(_) => "symbol",
        Value::Integer(_) => "integer",
        Value::List(_) => "list",
    }
}

impl EvalError {
    /// Build a `TypeError` for `name` receiving `got` where `expected` was wanted.
    pub fn type_error(name: &str, expected: &str, got: &Value) -> Self {
        EvalError::TypeError {
            name: name.to_string(),
            expected: expected.to_string(),
            got: type_name(got).to_string(),
        }
    }

    /// Build a `MalformedForm` error.
    pub fn malformed(form: &str, message: impl Into<String>) -> Self {
        EvalError::MalformedForm {
            form: form.to_string(),
            message: message.into(),
        }
    }
}
