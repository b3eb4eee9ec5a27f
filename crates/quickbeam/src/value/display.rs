//! Display and Debug implementations for Value
//!
//! `Display` is the canonical printed form read back by the reader:
//! `NIL`, `T`, symbols in their written spelling, decimal integers and
//! space-separated parenthesised lists.
//!
//! Both impls walk lists with an explicit stack, so printing depth is not
//! limited by the native stack.

use std::fmt;
use std::slice;

use super::*;

/// List punctuation for one rendering style.
struct Delimiters {
    open: &'static str,
    separator: &'static str,
    close: &'static str,
}

const DISPLAY: Delimiters = Delimiters {
    open: "(",
    separator: " ",
    close: ")",
};

const DEBUG: Delimiters = Delimiters {
    open: "[",
    separator: ", ",
    close: "]",
};

fn write_nested<F>(
    value: &Value,
    f: &mut fmt::Formatter<'_>,
    delims: &Delimiters,
    mut atom: F,
) -> fmt::Result
where
    F: FnMut(&Value, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    // Open lists: remaining elements, and whether one has been written yet
    let mut stack: Vec<(slice::Iter<'_, Value>, bool)> = Vec::new();
    let mut next = Some(value);

    loop {
        if let Some(current) = next.take() {
            match current {
                Value::List(items) => {
                    f.write_str(delims.open)?;
                    stack.push((items.iter(), false));
                }
                other => atom(other, f)?,
            }
        }

        let Some((items, started)) = stack.last_mut() else {
            return Ok(());
        };
        match items.next() {
            Some(item) => {
                if *started {
                    f.write_str(delims.separator)?;
                }
                *started = true;
                next = Some(item);
            }
            None => {
                f.write_str(delims.close)?;
                stack.pop();
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(self, f, &DISPLAY, |atom, f| match atom {
            Value::Symbol(sym) => write!(f, "{}", sym),
            Value::Integer(n) => write!(f, "{}", n),
            _ => write!(f, "NIL"),
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug keeps Nil and the symbol `nil` apart, Display does not
        write_nested(self, f, &DEBUG, |atom, f| match atom {
            Value::Symbol(sym) => write!(f, "{:?}", sym),
            Value::Integer(n) => write!(f, "{}", n),
            _ => write!(f, "Nil"),
        })
    }
}
