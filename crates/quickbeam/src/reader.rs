//! Reader: text to [`Value`]
//!
//! ```text
//! expr := integer | symbol | "'" expr | "(" expr* ")"
//! ```
//!
//! There is no string syntax, no comments and no escaping. A `.` is an
//! ordinary symbol, so `(a . b)` reads as the three-element list
//! `(a . b)` and prints back unchanged.

use crate::error::ReadError;
use crate::value::Value;

/// Maximum list nesting accepted by the parser.
pub const MAX_PARSE_DEPTH: usize = 512;

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `(`
    Open,
    /// `)`
    Close,
    /// `'`
    Quote,
    /// Any maximal run of other non-space characters
    Atom(String),
}

/// Split `input` into tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut atom = String::new();

    for ch in input.chars() {
        let delimiter = match ch {
            '(' => Some(Token::Open),
            ')' => Some(Token::Close),
            '\'' => Some(Token::Quote),
            c if c.is_whitespace() => None,
            c => {
                atom.push(c);
                continue;
            }
        };
        if !atom.is_empty() {
            tokens.push(Token::Atom(std::mem::take(&mut atom)));
        }
        tokens.extend(delimiter);
    }
    if !atom.is_empty() {
        tokens.push(Token::Atom(atom));
    }
    tokens
}

/// Read exactly one expression from `input`.
///
/// # Errors
///
/// - `UnexpectedEof` if there is no expression at all
/// - `UnmatchedParenthesis` if a list is still open at end of input
/// - `UnexpectedCloseParen` for a `)` with no open list
/// - `TrailingTokens` if anything follows the first complete expression
pub fn read(input: &str) -> Result<Value, ReadError> {
    let mut parser = Parser::new(tokenize(input));
    let expr = parser.parse_expr()?;
    match parser.remaining() {
        0 => Ok(expr),
        count => Err(ReadError::TrailingTokens { count }),
    }
}

/// Parse a single atom token as an integer or symbol.
pub fn parse_atom(text: &str) -> Value {
    if is_integer_literal(text) {
        // Literals too large for i64 stay symbols
        if let Ok(n) = text.parse::<i64>() {
            return Value::Integer(n);
        }
    }
    Value::symbol(text)
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Recursive-descent parser over a token stream.
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    /// Create a parser positioned at the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Parse the next complete expression.
    pub fn parse_expr(&mut self) -> Result<Value, ReadError> {
        match self.next() {
            None => Err(ReadError::UnexpectedEof),
            Some(Token::Quote) => {
                let quoted = self.nested(|p| p.parse_expr())?;
                Ok(Value::list(vec![Value::symbol("quote"), quoted]))
            }
            Some(Token::Open) => self.nested(|p| p.parse_list()),
            Some(Token::Close) => Err(ReadError::UnexpectedCloseParen),
            Some(Token::Atom(text)) => Ok(parse_atom(&text)),
        }
    }

    fn parse_list(&mut self) -> Result<Value, ReadError> {
        let mut items = Vec::new();
        loop {
            match self.peek() {
                None => return Err(ReadError::UnmatchedParenthesis),
                Some(Token::Close) => {
                    self.pos += 1;
                    return Ok(Value::list(items));
                }
                Some(_) => items.push(self.parse_expr()?),
            }
        }
    }

    fn nested<F>(&mut self, f: F) -> Result<Value, ReadError>
    where
        F: FnOnce(&mut Self) -> Result<Value, ReadError>,
    {
        if self.depth >= MAX_PARSE_DEPTH {
            return Err(ReadError::TooDeeplyNested {
                max: MAX_PARSE_DEPTH,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
