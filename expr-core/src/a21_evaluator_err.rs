use crate::errors::{def_token_errors, Diag, Diagnostic};
use crate::evaluator::MAX_NESTING;
use crate::span::{Span, Spanned};
use crate::token;

def_token_errors! {
ExpectedConsequent => format!("Unexpected token here. A binary operator like + may be preferred."),
OpenParenMissingCloseParen => format!("Expected to see a ')' here."),
UnexpectedBinaryInitial => format!("Expected a number or '(' before this operator."),
UnmatchedCloseParen => format!("Expected a number or '(' here, found ')'."),
UnexpectedEOF => format!("Expected a number or '(' but the expression ended."),
NestedTooDeep => format!("Parentheses are nested more than {MAX_NESTING} levels deep."),
}

def_token_errors! {
pub struct InvalidToken {
    pub token: token::InvalidToken,
}
msg: self => format!("Unrecognized character {:?}.", self.token.ch);
}
