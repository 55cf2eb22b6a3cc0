use std::fmt;
use std::ops::{Add, Sub};

/// Byte offset into the input line, counted from zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct BytePos(pub usize);

impl BytePos {
    /// 1-indexed column, as shown to users.
    pub fn column(self) -> usize {
        self.0 + 1
    }
}

impl Sub for BytePos {
    type Output = ByteLen;

    #[inline(always)]
    fn sub(self, rhs: BytePos) -> ByteLen {
        ByteLen(self.0 - rhs.0)
    }
}

impl Sub<ByteLen> for BytePos {
    type Output = BytePos;

    #[inline(always)]
    fn sub(self, rhs: ByteLen) -> BytePos {
        BytePos(self.0 - rhs.0)
    }
}

impl Add<ByteLen> for BytePos {
    type Output = BytePos;

    #[inline(always)]
    fn add(self, rhs: ByteLen) -> BytePos {
        BytePos(self.0 + rhs.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ByteLen(pub usize);

impl fmt::Display for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

#[cfg(test)]
mod pos_tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let lo = BytePos(2);
        let hi = lo + ByteLen(3);
        assert_eq!(hi, BytePos(5));
        assert_eq!(hi - lo, ByteLen(3));
        assert_eq!(hi - ByteLen(1), BytePos(4));
    }

    #[test]
    fn display_is_one_indexed() {
        assert_eq!(format!("{}", BytePos(0)), "1");
        assert_eq!(BytePos(7).column(), 8);
    }
}
