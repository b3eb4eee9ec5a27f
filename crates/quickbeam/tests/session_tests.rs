//! Read-eval-print session tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;
use quickbeam::repl::EXIT_COMMAND;
use quickbeam::*;

// ═══════════════════════════════════════════════════════════════════════
// Line handling
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_blank_lines_are_empty() {
    let mut session = Session::new();
    assert_eq!(session.eval_line(""), Ok(Outcome::Empty));
    assert_eq!(session.eval_line("   \t  "), Ok(Outcome::Empty));
}

#[test]
fn test_exit_keyword() {
    let mut session = Session::new();
    assert_eq!(session.eval_line(EXIT_COMMAND), Ok(Outcome::Exit));
    assert_eq!(session.eval_line("  exit  "), Ok(Outcome::Exit));
}

#[test]
fn test_exit_only_as_whole_line() {
    let mut session = Session::new();
    assert_eq!(
        session.eval_line("'exit"),
        Ok(Outcome::Value(Value::symbol("exit")))
    );
    assert_eq!(
        session.eval_line("(list 'exit)").unwrap(),
        Outcome::Value(read("(exit)").unwrap())
    );
}

#[test]
fn test_line_value() {
    let mut session = Session::new();
    match session.eval_line("(+ 1 2)") {
        Ok(Outcome::Value(value)) => assert_eq!(value.to_string(), "3"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Continuation after errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_session_survives_errors() {
    let mut session = Session::new();
    session.eval_line("(setq kept 'yes)").unwrap();

    assert!(session.eval_line("(car 'x)").is_err());
    assert!(session.eval_line("(unclosed").is_err());
    assert!(session.eval_line(")").is_err());
    assert!(session.eval_line("(nosuch 1)").is_err());

    assert_eq!(
        session.eval_line("kept"),
        Ok(Outcome::Value(Value::symbol("yes")))
    );
}

#[test]
fn test_definitions_persist_across_lines() {
    let mut session = Session::new();
    session.eval_line("(defun greet (who) (list 'hello who))").unwrap();
    session.eval_line("(setq name 'world)").unwrap();
    assert_eq!(
        session.eval_line("(greet name)").unwrap(),
        Outcome::Value(read("(hello world)").unwrap())
    );
}

#[test]
fn test_interrupt_is_cleared_for_each_line() {
    let mut session = Session::new();
    session.context().interrupt();
    assert_eq!(
        session.eval_line("(+ 1 1)"),
        Ok(Outcome::Value(Value::Integer(2)))
    );
}

/// Raises the interrupt flag as soon as anything is printed.
struct InterruptOnPrint(Arc<AtomicBool>);

impl OutputSink for InterruptOnPrint {
    fn emit(&self, _line: &str) {
        self.0.store(true, Ordering::Relaxed);
    }
}

#[test]
fn test_interrupt_raised_mid_evaluation_stops_the_line() {
    let mut ctx = EvalContext::new();
    ctx.output = Arc::new(InterruptOnPrint(ctx.interrupt_handle()));
    let mut session = Session::with_parts(Environment::with_prelude(), ctx);

    assert_eq!(
        session.eval_line("(list (print 1) (setq after 2))"),
        Err(QuickbeamError::Eval(EvalError::Interrupted))
    );
    assert!(session.env().get("after").is_none());

    // the next line starts with the flag cleared
    assert_eq!(
        session.eval_line("(+ 1 1)"),
        Ok(Outcome::Value(Value::Integer(2)))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_session_over_custom_environment() {
    let mut env = Environment::with_prelude();
    env.define("answer", Value::Integer(42));
    let sink = Arc::new(BufferSink::new());
    let mut session = Session::with_parts(env, EvalContext::with_output(sink.clone()));

    session.eval_line("(print answer)").unwrap();
    assert_eq!(sink.take(), vec!["42".to_string()]);
}

#[test]
fn test_env_mut_allows_reset() {
    let mut session = Session::new();
    session.eval_line("(setq a 1)").unwrap();
    session.env_mut().clear();
    assert!(session.env().is_empty());
    assert_eq!(
        session.eval_line("(car '(a))"),
        Ok(Outcome::Value(Value::symbol("a")))
    );
}

#[test]
fn test_default_session_has_prelude() {
    let session = Session::default();
    assert!(session.env().builtin("car").is_some());
    assert!(session.env().is_empty());
    assert!(!session.context().trace);
}
