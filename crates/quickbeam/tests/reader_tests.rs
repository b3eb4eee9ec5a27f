//! Reader tests

use pretty_assertions::assert_eq;
use quickbeam::reader::{tokenize, Token};
use quickbeam::*;

fn sym(s: &str) -> Value {
    Value::symbol(s)
}

// ═══════════════════════════════════════════════════════════════════════
// Atoms
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_integer() {
    assert_eq!(read("10").unwrap(), Value::Integer(10));
    assert_eq!(read("-42").unwrap(), Value::Integer(-42));
    assert_eq!(read("007").unwrap(), Value::Integer(7));
}

#[test]
fn test_read_symbol_keeps_spelling() {
    let value = read("Hello").unwrap();
    assert_eq!(value.as_symbol().map(|s| s.name()), Some("Hello"));
    assert_eq!(value, sym("HELLO"));
}

#[test]
fn test_read_operator_symbols() {
    assert!(read("+").unwrap().is_symbol());
    assert!(read("1+").unwrap().is_symbol());
    assert!(read("let*").unwrap().is_symbol());
    assert!(read("-").unwrap().is_symbol());
}

// ═══════════════════════════════════════════════════════════════════════
// Lists and Quote
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_nested_list() {
    let value = read("(a (b 1) ())").unwrap();
    assert_eq!(
        value,
        Value::list(vec![
            sym("a"),
            Value::list(vec![sym("b"), Value::Integer(1)]),
            Value::list(vec![]),
        ])
    );
}

#[test]
fn test_read_quote_expands() {
    assert_eq!(
        read("'x").unwrap(),
        Value::list(vec![sym("quote"), sym("x")])
    );
    assert_eq!(
        read("''(a)").unwrap().to_string(),
        "(quote (quote (a)))"
    );
}

#[test]
fn test_read_dot_is_ordinary_symbol() {
    let value = read("(A B . C)").unwrap();
    let items = value.as_list().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[2], sym("."));
    assert_eq!(value.to_string(), "(A B . C)");
}

#[test]
fn test_read_whitespace_variants() {
    assert_eq!(read("  (a\tb\n c)  ").unwrap().to_string(), "(a b c)");
    assert_eq!(read("(a(b)c)").unwrap().to_string(), "(a (b) c)");
}

#[test]
fn test_tokenize_drops_whitespace() {
    assert_eq!(
        tokenize(" ( x ) "),
        vec![Token::Open, Token::Atom("x".into()), Token::Close]
    );
    assert!(tokenize("   ").is_empty());
}

// ═══════════════════════════════════════════════════════════════════════
// Round Trip
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_print_read_round_trip() {
    for src in ["(A B C)", "(1 (2 (3 -4)) x)", "foo", "-17", "((a) (b) (c))", "()"] {
        assert_eq!(read(src).unwrap().to_string(), src);
    }
}

#[test]
fn test_reserved_symbols_canonicalise_on_print() {
    assert_eq!(read("(t nil Nil T)").unwrap().to_string(), "(T NIL NIL T)");
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_read_unmatched_parenthesis() {
    assert_eq!(read("(a (b c)"), Err(ReadError::UnmatchedParenthesis));
    assert_eq!(read("("), Err(ReadError::UnmatchedParenthesis));
}

#[test]
fn test_read_unexpected_close() {
    assert_eq!(read(")"), Err(ReadError::UnexpectedCloseParen));
    assert_eq!(read("')"), Err(ReadError::UnexpectedCloseParen));
}

#[test]
fn test_read_trailing_tokens() {
    assert_eq!(read("a b"), Err(ReadError::TrailingTokens { count: 1 }));
    assert_eq!(read("(a) (b)"), Err(ReadError::TrailingTokens { count: 3 }));
    assert_eq!(read("(a))"), Err(ReadError::TrailingTokens { count: 1 }));
}

#[test]
fn test_read_empty_input() {
    assert_eq!(read(""), Err(ReadError::UnexpectedEof));
    assert_eq!(read("'"), Err(ReadError::UnexpectedEof));
}
