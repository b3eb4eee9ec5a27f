//! Read-eval-print session
//!
//! A [`Session`] is the per-line driver used by the `quickbeam` binary:
//! it reads one expression from a line, evaluates it against the global
//! tier and hands back the value for printing. Failures are returned, not
//! raised, so the caller can report them and carry on with the next line.

use crate::error::Result;
use crate::eval::Evaluate;
use crate::reader;
use crate::value::Value;
use crate::{Environment, EvalContext};

/// Keyword that ends a session.
pub const EXIT_COMMAND: &str = "exit";

/// What a single input line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was evaluated; print this
    Value(Value),

    /// Blank line, nothing to do
    Empty,

    /// The exit keyword
    Exit,
}

/// One global environment plus the context every line is evaluated with.
#[derive(Debug)]
pub struct Session {
    env: Environment,
    ctx: EvalContext,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Session with the full primitive library and default settings.
    pub fn new() -> Self {
        Self::with_parts(Environment::with_prelude(), EvalContext::default())
    }

    /// Session over a caller-supplied environment and context.
    pub fn with_parts(env: Environment, ctx: EvalContext) -> Self {
        Self { env, ctx }
    }

    /// The global environment.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the global environment.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// The evaluation context.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Read and evaluate exactly one expression.
    pub fn eval_str(&mut self, source: &str) -> Result<Value> {
        let expr = reader::read(source)?;
        self.ctx.reset_interrupt();
        Ok(expr.eval(&mut self.env, &self.ctx)?)
    }

    /// Handle one input line: blank lines and the exit keyword are
    /// recognised before reading.
    pub fn eval_line(&mut self, line: &str) -> Result<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Outcome::Empty);
        }
        if line == EXIT_COMMAND {
            return Ok(Outcome::Exit);
        }
        self.eval_str(line).map(Outcome::Value)
    }
}
