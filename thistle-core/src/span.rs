//! Source ranges for tokens, AST nodes and diagnostics.

use core::fmt;

/// Half-open byte range `[lo, hi)` into the source buffer.
///
/// Every token and AST node carries a `Range`. Parent nodes widen
/// their range with [`Range::union`] so that it always covers every
/// child's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    pub lo: usize,
    pub hi: usize,
}

impl Range {
    pub fn new(lo: usize, hi: usize) -> Range {
        Range { lo, hi }
    }

    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.hi == self.lo
    }

    /// Widen this range so it also covers `other`.
    pub fn union(self, other: Range) -> Range {
        Range {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}
