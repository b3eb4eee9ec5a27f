//! Evaluation context configuration

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Destination for text written by the `print` primitive.
pub trait OutputSink: Send + Sync {
    /// Emit one printed line (without trailing newline).
    fn emit(&self, line: &str);
}

/// Writes printed lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not abort evaluation
        let _ = writeln!(out, "{}", line);
    }
}

/// Collects printed lines in memory.
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Mutex<Vec<String>>,
}

impl BufferSink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every line emitted so far.
    pub fn take(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(mut lines) => std::mem::take(&mut *lines),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl OutputSink for BufferSink {
    fn emit(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and controls
/// tracing, interruption and where `print` writes.
#[derive(Clone)]
pub struct EvalContext {
    /// Interrupt flag - set to true to abort evaluation.
    ///
    /// Checked before every expression. Nothing in this crate sets it during
    /// evaluation; an embedder sets it from a signal handler, another thread
    /// or an [`OutputSink`] via [`interrupt_handle`](Self::interrupt_handle).
    pub interrupt: Arc<AtomicBool>,

    /// Whether to trace function application (for debugging)
    pub trace: bool,

    /// Where `print` sends its output
    pub output: Arc<dyn OutputSink>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: false,
            output: Arc::new(StdoutSink),
        }
    }
}

impl fmt::Debug for EvalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalContext")
            .field("interrupt", &self.is_interrupted())
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context whose `print` output goes to `output`.
    pub fn with_output(output: Arc<dyn OutputSink>) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    /// Enable or disable application tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }

    /// Shared handle to the interrupt flag, for setting it from elsewhere.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }
}
