//! # Quickbeam
//!
//! A small dynamically typed Lisp.
//!
//! Text is read into [`Value`] trees, which are evaluated by a tree-walking
//! interpreter against a two-tier [`Environment`]: a global tier written
//! only by `setq` and `defun`, and immutable local snapshots pushed by
//! `let`, `let*` and function calls.
//!
//! ## Architecture
//!
//! - **Reader**: tokenizer and recursive-descent parser ([`reader`])
//! - **Evaluator**: special forms and eager application ([`eval`])
//! - **Primitives**: arithmetic, list and predicate builtins ([`builtins`])
//! - **Printer**: the `Display` impl of [`Value`]
//! - **Session**: the per-line read-eval-print driver ([`repl`])
//!
//! ```
//! use quickbeam::Session;
//!
//! let mut session = Session::new();
//! session.eval_str("(defun sq (x) (* x x))").unwrap();
//! assert_eq!(session.eval_str("(sq 12)").unwrap().to_string(), "144");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod context;
pub mod environment;
pub mod error;
pub mod eval;
pub mod reader;
pub mod repl;
pub mod value;

// Re-export main types
pub use context::{BufferSink, EvalContext, OutputSink, StdoutSink};
pub use environment::{Binding, Environment, Frame, GlobalScopeGuard, ScopeGuard};
pub use error::{EnvironmentError, EvalError, QuickbeamError, ReadError, Result};
pub use eval::{apply_function, eval_body, eval_expr, Evaluate, SpecialForm};
pub use reader::read;
pub use repl::{Outcome, Session};
pub use value::{Arity, BuiltinFn, BuiltinFnPtr, FunctionValue, Symbol, Value};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
