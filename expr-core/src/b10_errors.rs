use crate::span::Span;
use std::fmt;

pub trait Diagnostic {
    #[must_use]
    fn into_diag(self) -> Diag;
}

/// A syntax error, pointing at the token that could not be accepted.
#[must_use]
#[derive(Clone, PartialEq, Eq)]
pub struct Diag {
    pub message: String,
    pub span: Span,
}

impl fmt::Debug for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "At {:?}: {}", self.span, &self.message)
    }
}

impl fmt::Display for Diag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", &self.message, self.span)
    }
}

impl std::error::Error for Diag {}

/// Intended for the evaluator only.
/// Errors to pass into consume_token!
macro_rules! def_token_errors {
    ($(
        pub struct $Err:ident $def:tt
        msg: $self:ident => $msg:expr;
    )+) => {$(
        pub struct $Err $def
        impl $Err {
            pub fn span(self, span: Span) -> Spanned<$Err> {
                Spanned {node: self, span}
            }
            fn msg($self) -> String {
                $msg
            }
        }
        impl Diagnostic for Spanned<$Err> {
            fn into_diag(self) -> Diag {
                Diag {
                    span: self.span,
                    message: self.node.msg(),
                }
            }
        }
    )+};

    ($(
        $Err:ident => $msg:expr,
    )+) => {$(
        pub struct $Err;
        impl $Err {
            pub fn span(self, span: Span) -> Spanned<$Err> {
                Spanned {node: self, span}
            }
            fn msg(self) -> String {
                $msg
            }
        }
        impl Diagnostic for Spanned<$Err> {
            fn into_diag(self) -> Diag {
                Diag {
                    span: self.span,
                    message: self.node.msg(),
                }
            }
        }
    )+};
}

pub(crate) use def_token_errors;
