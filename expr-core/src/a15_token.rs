use crate::pos::ByteLen;
use crate::span::Span;
use std::fmt;

pub use BinOpToken::*;
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpToken {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
}

pub use TokenKind::*;
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /* Operators */
    /// Also used for prefix `+` and `-`.
    BinOp(BinOpToken),

    /* Punctuation */
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,

    /* Atoms */
    /// Run of digits and `.`, e.g. `12`, `.5`, `3.`
    Number(f64),

    /* Unprintables */
    Eof,
    /// A run of `' '`. No other character counts as whitespace.
    Whitespace,
    Invalid(InvalidToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidToken {
    pub ch: char,
}

#[derive(Clone, Copy)]
pub struct TokenLen {
    pub kind: TokenKind,
    pub len: ByteLen,
}

impl TokenLen {
    pub fn new(kind: TokenKind, len: ByteLen) -> TokenLen {
        TokenLen { kind, len }
    }
}

impl fmt::Debug for TokenLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} [len={}]", self.kind, self.len.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Token {
        Token { kind, span }
    }
}
