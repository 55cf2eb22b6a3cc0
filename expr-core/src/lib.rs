//! Evaluates arithmetic expressions such as `3 + 4 * 2 / (1 - 5) ^ 2`.
//!
//! The grammar, tightest binding last:
//!
//! ```text
//! Expression := Term (('+' | '-') Term)*
//! Term       := Power (('*' | '/') Power)*
//! Power      := Unary ('^' Unary)*
//! Unary      := ('+' | '-') Unary | Primary
//! Primary    := Number | '(' Expression ')'
//! ```
//!
//! Every binary operator folds left, so `2 ^ 3 ^ 2` is `64`.
//! Only `' '` is skipped between tokens.

#[path = "a10_lexer.rs"]
mod lexer;
#[path = "a15_token.rs"]
mod token;
#[path = "a20_evaluator.rs"]
mod evaluator;
#[path = "a21_evaluator_err.rs"]
mod evaluator_err;
#[path = "a25_trace.rs"]
mod trace;
#[path = "a45_display.rs"]
mod display;
#[path = "b04_pos.rs"]
mod pos;
#[path = "b05_span.rs"]
mod span;
#[path = "b10_errors.rs"]
mod errors;

pub use display::{format_number, DEFAULT_PRECISION, MAX_PRECISION};
pub use errors::Diag;
pub use evaluator::{evaluate, evaluate_traced};
pub use pos::{ByteLen, BytePos};
pub use span::Span;
pub use trace::{BinOpKind, Evaluation, Step};
