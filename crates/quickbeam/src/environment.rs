//! Runtime environment: the global tier, the primitive table and
//! the stack of local snapshot frames

mod frame;
mod prelude;

pub use frame::{Frame, GlobalScopeGuard, ScopeGuard};

use indexmap::IndexMap;

use crate::error::EnvironmentError;
use crate::value::{BuiltinFn, Symbol, Value};

/// A single variable or function binding.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The binding's name, as written when it was bound
    pub name: Symbol,

    /// The bound value
    pub value: Value,
}

/// The runtime environment managing global and local bindings.
///
/// Two tiers are kept apart:
///
/// - the *global* tier lives as long as the environment, is written only by
///   `setq` and `defun`, and is visible to every evaluation;
/// - *local* frames are immutable snapshots pushed by `let`, `let*` and
///   function calls. A frame already contains everything visible from where
///   it was built, so lookup checks only the innermost frame, then globals.
///
/// Function calls always build their frame from the global tier, never from
/// the caller's frame, so function bodies cannot see the caller's locals.
///
/// # Example
///
/// ```
/// use quickbeam::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Integer(1));
///
/// let mut frame = env.snapshot_current();
/// frame.bind("X", Value::Integer(10)); // names are case-insensitive
/// env.push_frame(frame);
///
/// assert_eq!(env.get("x"), Some(&Value::Integer(10)));
///
/// env.pop_frame();
/// assert_eq!(env.get("x"), Some(&Value::Integer(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Global bindings keyed by canonical (upper-case) name
    globals: IndexMap<String, Binding>,

    /// Primitive table keyed by canonical name
    builtins: IndexMap<String, BuiltinFn>,

    /// Local snapshot frames, innermost last
    frames: Vec<Frame>,

    /// Current nesting of list forms under evaluation
    call_depth: usize,

    /// Maximum allowed nesting
    max_call_depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Default limit on nested evaluation.
    ///
    /// Every list form under evaluation holds one level, so a recursive
    /// function spends two or three levels per call. The default fits an
    /// 8 MiB native stack; hosts with more stack can raise it through
    /// [`with_max_call_depth`](Self::with_max_call_depth).
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 600;

    /// Create a new empty environment without primitives.
    pub fn new() -> Self {
        Self::with_max_call_depth(Self::DEFAULT_MAX_CALL_DEPTH)
    }

    /// Create an environment with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            globals: IndexMap::new(),
            builtins: IndexMap::new(),
            frames: Vec::new(),
            call_depth: 0,
            max_call_depth: max_depth,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Frame Management (Scope Entry/Exit)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a local scope.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Exit the innermost local scope.
    ///
    /// Does nothing at global scope.
    pub fn pop_frame(&mut self) {
        self.frames.pop();
    }

    /// Number of local frames currently pushed.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if no local frame is active.
    pub fn is_global_scope(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the global tier alone, the base of every function call.
    pub fn snapshot_global(&self) -> Frame {
        Frame::from_bindings(self.globals.clone())
    }

    /// Snapshot of whatever is visible right now, the base of `let`/`let*`.
    pub fn snapshot_current(&self) -> Frame {
        match self.frames.last() {
            Some(frame) => frame.clone(),
            None => self.snapshot_global(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Evaluation Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter one level of nested evaluation. Returns error if max depth exceeded.
    pub fn enter_call(&mut self) -> Result<(), EnvironmentError> {
        if self.call_depth >= self.max_call_depth {
            return Err(EnvironmentError::StackOverflow {
                depth: self.call_depth,
                max: self.max_call_depth,
            });
        }
        self.call_depth += 1;
        Ok(())
    }

    /// Leave a level entered with [`enter_call`](Self::enter_call).
    pub fn exit_call(&mut self) {
        self.call_depth = self.call_depth.saturating_sub(1);
    }

    /// Current evaluation depth.
    pub fn call_depth(&self) -> usize {
        self.call_depth
    }

    /// The configured evaluation depth limit.
    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in the global tier, replacing any previous binding.
    pub fn define(&mut self, name: impl Into<Symbol>, value: Value) {
        let name = name.into();
        self.globals
            .insert(name.key().to_string(), Binding { name, value });
    }

    /// Register a built-in function.
    pub fn define_builtin(&mut self, builtin: BuiltinFn) {
        let key = builtin.name.to_uppercase();
        self.builtins.insert(key, builtin);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding: innermost frame first, then the global tier.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let key = name.to_uppercase();
        if let Some(value) = self.frames.last().and_then(|frame| frame.get_key(&key)) {
            return Some(value);
        }
        self.globals.get(&key).map(|b| &b.value)
    }

    /// Look up a binding in the global tier only.
    pub fn get_global(&self, name: &str) -> Option<&Value> {
        self.get_global_binding(name).map(|b| &b.value)
    }

    /// Look up a global binding and return the full Binding struct.
    pub fn get_global_binding(&self, name: &str) -> Option<&Binding> {
        self.globals.get(&name.to_uppercase())
    }

    /// Look up a primitive by name.
    pub fn builtin(&self, name: &str) -> Option<&BuiltinFn> {
        self.builtins.get(&name.to_uppercase())
    }

    /// Check if a binding is visible.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over global bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.globals.values()
    }

    /// All global names, as written (for completion).
    pub fn global_names(&self) -> Vec<&str> {
        self.globals.values().map(|b| b.name.name()).collect()
    }

    /// All primitive names.
    pub fn builtin_names(&self) -> Vec<&str> {
        self.builtins.values().map(|b| b.name.as_str()).collect()
    }

    /// Number of global bindings.
    pub fn len(&self) -> usize {
        self.globals.len()
    }

    /// Check if the global tier is empty.
    pub fn is_empty(&self) -> bool {
        self.globals.is_empty()
    }

    /// Clear all global bindings and frames, keeping primitives.
    pub fn clear(&mut self) {
        self.globals.clear();
        self.frames.clear();
        self.call_depth = 0;
    }
}
