use std::fmt;
use std::rc::Rc;

use jscst_miette_util::span::Span;

/// Token types of located symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Colon,
    Comma,
    Dot,
    Question,
    Equal,
    Ellipsis,
    Star,
    /// Any unary, binary or assignment operator
    Operator,
    Keyword,
    Identifier,
    Number,
    String,
    Regex,
    True,
    False,
    Null,
}

/// A token located in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: TokenKind,
    /// Inclusive range of the token
    pub span: Span,
    /// The raw token text, or the literal value. String values include
    /// their quotes.
    pub value: Rc<str>,
}

impl Symbol {
    pub fn new(kind: TokenKind, span: Span, value: Rc<str>) -> Self {
        Symbol { kind, span, value }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.span)
    }
}
