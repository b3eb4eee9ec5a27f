//! `quickbeam` command-line interpreter

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use quickbeam::{Environment, EvalContext, Outcome, Session, VERSION};

/// Evaluation depth limit of the command-line interpreter. Larger than the
/// library default because the evaluator thread sizes its own stack.
const CLI_MAX_CALL_DEPTH: usize = 10_000;

/// Smallest native stack for the evaluator thread.
const EVAL_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Native stack reserved per evaluation level, with headroom for unoptimised
/// builds.
const STACK_PER_LEVEL: usize = 16 * 1024;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "QUICKBEAM_LOG";

#[derive(Parser, Debug)]
#[command(name = "quickbeam", version, about = "A small Lisp interpreter")]
struct Cli {
    /// Maximum depth of nested evaluation; the evaluator stack grows to match
    #[arg(long, default_value_t = CLI_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Log every function application
    #[arg(long)]
    trace: bool,

    /// Don't print the banner
    #[arg(short, long)]
    quiet: bool,

    /// Evaluate the lines of this file instead of reading the terminal
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.trace);

    let stack_size = eval_stack_size(cli.max_call_depth);
    tracing::debug!(max_call_depth = cli.max_call_depth, stack_size, "starting evaluator");

    let handle = std::thread::Builder::new()
        .name("quickbeam-eval".to_string())
        .stack_size(stack_size)
        .spawn(move || run(cli))
        .context("failed to spawn evaluator thread")?;

    match handle.join() {
        Ok(result) => result,
        Err(_) => anyhow::bail!("evaluator thread panicked"),
    }
}

fn eval_stack_size(max_call_depth: usize) -> usize {
    max_call_depth
        .saturating_mul(STACK_PER_LEVEL)
        .max(EVAL_STACK_SIZE)
}

fn init_tracing(trace: bool) {
    let default = if trace { "quickbeam=trace" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let env = Environment::with_prelude_and_max_call_depth(cli.max_call_depth);
    let ctx = EvalContext::new().with_trace(cli.trace);
    let mut session = Session::with_parts(env, ctx);

    match &cli.file {
        Some(path) => run_file(&mut session, path),
        None => run_repl(&mut session, cli.quiet),
    }
}

fn run_file(session: &mut Session, path: &Path) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    for line in source.lines() {
        if !step(session, line) {
            break;
        }
    }
    Ok(())
}

fn run_repl(session: &mut Session, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Simple LISP Interpreter (quickbeam {})", VERSION);
        println!("Type 'exit' to quit.");
    }

    let mut rl = DefaultEditor::new().context("failed to initialise line editor")?;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if !step(session, &line) {
                    break;
                }
            }
            // Ctrl-C at the prompt abandons the current line only. No signal
            // handler is installed, so Ctrl-C during evaluation ends the
            // process; the context's interrupt flag is for embedders.
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(anyhow::Error::new(err).context("failed to read line")),
        }
    }
    Ok(())
}

/// Evaluate one line and print the outcome. Returns false once the
/// session should end.
fn step(session: &mut Session, line: &str) -> bool {
    match session.eval_line(line) {
        Ok(Outcome::Value(value)) => {
            println!("{}", value);
            true
        }
        Ok(Outcome::Empty) => true,
        Ok(Outcome::Exit) => false,
        Err(err) => {
            tracing::debug!(%err, line, "line failed");
            eprintln!("error: {}", err);
            true
        }
    }
}
