//! Local snapshot frames and the RAII scope guard that pops them

use std::sync::Arc;

use indexmap::IndexMap;

use super::{Binding, Environment};
use crate::value::{Symbol, Value};

/// An immutable-once-pushed snapshot of bindings.
///
/// Built by copying a base (the global tier or the current frame) and
/// overlaying new bindings; shadowing overwrites. Cloning a frame is cheap,
/// the map is shared until someone binds into a clone.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    bindings: Arc<IndexMap<String, Binding>>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_bindings(bindings: IndexMap<String, Binding>) -> Self {
        Self {
            bindings: Arc::new(bindings),
        }
    }

    /// Overlay a binding, replacing any binding of the same name.
    pub fn bind(&mut self, name: impl Into<Symbol>, value: Value) {
        let name = name.into();
        Arc::make_mut(&mut self.bindings).insert(name.key().to_string(), Binding { name, value });
    }

    /// Look up a name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.get_key(&name.to_uppercase())
    }

    pub(super) fn get_key(&self, key: &str) -> Option<&Value> {
        self.bindings.get(key).map(|b| &b.value)
    }

    /// Names bound in this frame, as written.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.values().map(|b| b.name.name()).collect()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the frame has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// RAII guard that automatically pops a frame when dropped.
///
/// # Example
///
/// ```
/// use quickbeam::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Integer(1));
///
/// {
///     let mut frame = env.snapshot_current();
///     frame.bind("y", Value::Integer(2));
///     let guard = env.scope_guard(frame);
///     assert!(guard.contains("y"));
/// }
/// // guard dropped, frame popped, y is gone
/// assert!(!env.contains("y"));
/// assert!(env.contains("x"));
/// ```
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Environment {
    /// Push `frame` now and pop it when the guard drops.
    pub fn scope_guard(&mut self, frame: Frame) -> ScopeGuard<'_> {
        self.push_frame(frame);
        ScopeGuard { env: self }
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        self.env.pop_frame();
    }
}

impl<'a> std::ops::Deref for ScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

/// RAII guard that hides every local frame until dropped.
///
/// Used by `setq`, whose value expression sees only the global tier.
pub struct GlobalScopeGuard<'a> {
    env: &'a mut Environment,
    saved: Vec<Frame>,
}

impl Environment {
    /// Detach all local frames now and restore them when the guard drops.
    pub fn global_scope(&mut self) -> GlobalScopeGuard<'_> {
        let saved = std::mem::take(&mut self.frames);
        GlobalScopeGuard { env: self, saved }
    }
}

impl<'a> Drop for GlobalScopeGuard<'a> {
    fn drop(&mut self) {
        self.env.frames = std::mem::take(&mut self.saved);
    }
}

impl<'a> std::ops::Deref for GlobalScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for GlobalScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}
