//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a symbol value
    pub fn symbol(name: impl AsRef<str>) -> Self {
        Value::Symbol(Symbol::new(name))
    }

    /// Create a list value
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }

    /// The truthy symbol `T`
    pub fn t() -> Self {
        Value::symbol("T")
    }

    /// Map a host boolean to `T` / `Nil`
    pub fn bool(b: bool) -> Self {
        if b {
            Value::t()
        } else {
            Value::Nil
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is false/empty.
    ///
    /// The symbol `nil` counts as well, so quoted data read from text
    /// behaves the same as the evaluated `Nil`.
    pub fn is_nil(&self) -> bool {
        match self {
            Value::Nil => true,
            Value::Symbol(sym) => sym.is_nil(),
            _ => false,
        }
    }

    /// Check if value is anything other than nil
    pub fn truthy(&self) -> bool {
        !self.is_nil()
    }

    /// Check if value is a symbol
    pub fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }

    /// Check if value is an integer
    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Check if value is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if value is an atom (anything but a list)
    pub fn is_atom(&self) -> bool {
        !self.is_list()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Borrow the symbol, if this is one
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// Extract the integer, if this is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Borrow the list elements, if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Elements of a list, treating nil as the empty list.
    ///
    /// Returns `None` for any other atom.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            other if other.is_nil() => Some(&[]),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Comparison
    // ═══════════════════════════════════════════════════════════════════

    /// Identity comparison used by `eq`.
    ///
    /// Atoms compare by value (symbols case-insensitively); lists are
    /// never `eq`, not even to themselves.
    pub fn eq_atom(&self, other: &Value) -> bool {
        if self.is_nil() && other.is_nil() {
            return true;
        }
        match (self, other) {
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            _ => false,
        }
    }

    /// Structural comparison used by `equal`.
    ///
    /// Atoms compare as in [`eq_atom`](Self::eq_atom), so `Nil` and the
    /// symbol `nil` are equal here too. Lists compare element by element.
    /// Pending pairs live on a work list, so arbitrarily deep lists compare
    /// without native recursion.
    pub fn equal(&self, other: &Value) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Value::List(xs), Value::List(ys)) => {
                    if xs.len() != ys.len() {
                        return false;
                    }
                    pending.extend(xs.iter().zip(ys.iter()));
                }
                _ => {
                    if !a.eq_atom(b) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Value::symbol(name)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::bool(b)
    }
}
