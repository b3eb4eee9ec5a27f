//! Case-insensitive symbols

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An identifier that compares case-insensitively.
///
/// Keeps the spelling it was read with for printing, plus an upper-case key
/// used for every comparison, hash and environment lookup.
#[derive(Clone)]
pub struct Symbol {
    name: Arc<str>,
    key: Arc<str>,
}

impl Symbol {
    /// Create a symbol from its written spelling.
    pub fn new(name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        Self {
            name: Arc::from(name),
            key: Arc::from(name.to_uppercase()),
        }
    }

    /// The spelling as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical upper-case form.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True for `t` in any case.
    pub fn is_t(&self) -> bool {
        &*self.key == "T"
    }

    /// True for `nil` in any case.
    pub fn is_nil(&self) -> bool {
        &*self.key == "NIL"
    }

    /// Reserved names that can never be bound.
    pub fn is_reserved(&self) -> bool {
        self.is_t() || self.is_nil()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}", self.name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_t() {
            write!(f, "T")
        } else if self.is_nil() {
            write!(f, "NIL")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Symbol::new(name)
    }
}
