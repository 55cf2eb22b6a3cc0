use crate::pos::{ByteLen, BytePos};
use crate::span::span;
use crate::token::*;
use std::str::{Chars, FromStr};

/// Pulls one token at a time out of a line, skipping spaces.
/// Once the input is exhausted every call returns `Eof`.
pub(crate) struct Lexer<'a> {
    lexer: RawLexer<'a>,
    pos: BytePos,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(input: &'a str) -> Lexer<'a> {
        Lexer {
            lexer: RawLexer::new(input),
            pos: BytePos(0),
        }
    }

    pub(crate) fn next_token(&mut self) -> Token {
        loop {
            let token = self.lexer.next_raw_token();
            let lo = self.pos;
            let hi = lo + token.len;
            self.pos = hi;
            match token.kind {
                // Just update position
                Whitespace => continue,
                // Common case
                _ => return Token::new(token.kind, span(lo, hi)),
            }
        }
    }
}

/// Before any lexing, or after finishing a RawToken, `chars` points to the
/// first character that has not been in a token yet.
/// In the middle of finding the extent of a RawToken, `chars_token_start`
/// points to the first character that will be in this token.
pub(crate) struct RawLexer<'a> {
    /// Iterator pointing at the current character
    chars: Chars<'a>,
    /// Iterator pointing at the character which starts this token
    chars_token_start: Chars<'a>,
}

const EOF_CHAR: char = '\0';

impl<'a> Iterator for RawLexer<'a> {
    type Item = TokenLen;

    fn next(&mut self) -> Option<TokenLen> {
        let token = self.next_raw_token();
        match token.kind {
            // Stop the iterator
            Eof => None,
            // Common case
            _ => Some(token),
        }
    }
}

impl<'a> RawLexer<'a> {
    pub(crate) fn new(input: &'a str) -> RawLexer<'a> {
        RawLexer {
            chars: input.chars(),
            chars_token_start: input.chars(),
        }
    }

    /// Return the char that `chars` points to, and shift it along.
    #[mutants::skip] // Will loop forever if it doesn't call next()
    fn consume(&mut self) -> Option<char> {
        self.chars.next()
    }

    /// Peeks the next symbol from the input stream without consuming it.
    /// If requested position doesn't exist, `EOF_CHAR` is returned.
    /// A literal NUL in the input also peeks as `EOF_CHAR`, but none of the
    /// predicates below accept it, so it still ends up as an `Invalid` token.
    fn peek(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF_CHAR)
    }

    /// Eats symbols while predicate returns true, or until the end of input.
    /// After calling this method, `chars` will point to one after the last
    /// character satisfying the predicate.
    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        loop {
            let peek = self.peek();
            if !predicate(peek) {
                break;
            }
            if let EOF_CHAR = peek {
                break;
            }
            self.consume();
        }
    }

    /** Length of the current token, in bytes. */
    fn len(&self) -> ByteLen {
        let start = self.chars_token_start.as_str();
        ByteLen(start.len() - self.chars.as_str().len())
    }

    /** Borrowed string slice containing all chars of the current token. */
    fn slice(&self) -> &'a str {
        let start = self.chars_token_start.as_str();
        let num_bytes = start.len() - self.chars.as_str().len();
        &start[0..num_bytes]
    }

    /// Lexes one token from the input string, including whitespace.
    fn next_raw_token(&mut self) -> TokenLen {
        let first_char = match self.consume() {
            Some(c) => c,
            None => return TokenLen::new(Eof, ByteLen(0)),
        };
        let kind = match first_char {
            ' ' => {
                self.eat_while(is_whitespace);
                Whitespace
            }

            c if is_number_char(c) => self.number(),

            '+' => BinOp(Plus),
            '-' => BinOp(Minus),
            '*' => BinOp(Star),
            '/' => BinOp(Slash),
            '^' => BinOp(Caret),
            '(' => OpenParen,
            ')' => CloseParen,

            ch => Invalid(InvalidToken { ch }),
        };
        let len = self.len();
        self.chars_token_start = self.chars.clone();
        TokenLen::new(kind, len)
    }

    fn number(&mut self) -> TokenKind {
        self.eat_while(is_number_char);
        Number(number_value(self.slice()))
    }
}

/// The whole run of digits and dots is one token, but only the prefix up to
/// a second `.` contributes to the value: `1.2.3` is `1.2`, and a lone `.`
/// is `0`.
fn number_value(run: &str) -> f64 {
    let end = match run.match_indices('.').nth(1) {
        Some((i, _)) => i,
        None => run.len(),
    };
    f64::from_str(&run[..end]).unwrap_or(0.0)
}

fn is_whitespace(c: char) -> bool {
    c == ' '
}

fn is_number_char(c: char) -> bool {
    matches!(c, '0'..='9' | '.')
}
