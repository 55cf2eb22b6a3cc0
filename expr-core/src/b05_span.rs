use crate::pos::{ByteLen, BytePos};
use std::fmt;

/// A half-open span: (lo..hi) including lo and excluding hi.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: BytePos,
    pub hi: BytePos,
}

impl Span {
    pub fn len(self) -> ByteLen {
        self.hi - self.lo
    }

    pub fn is_empty(self) -> bool {
        self.hi <= self.lo
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len() == ByteLen(1) {
            write!(f, "{}", self.lo)
        } else if self.is_empty() {
            // Zero-width, e.g. the end of input.
            write!(f, "end")
        } else {
            write!(f, "{}-{}", self.lo, self.hi - ByteLen(1))
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct Spanned<T> {
    pub(crate) node: T,
    pub(crate) span: Span,
}

impl<T: fmt::Debug> fmt::Debug for Spanned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.node, self.span)
    }
}

pub(crate) fn span(lo: BytePos, hi: BytePos) -> Span {
    Span { lo, hi }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", span(BytePos(0), BytePos(1))), "1");
        assert_eq!(format!("{:?}", span(BytePos(2), BytePos(5))), "3-5");
        assert_eq!(format!("{:?}", span(BytePos(4), BytePos(4))), "end");
    }
}
