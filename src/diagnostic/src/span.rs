//! Spans - selections in source code
//!
//! Each piece of input takes up some space, it's not just a point like a
//! [`Caret`], but a selection with a beginning and end.

use std::cmp::{max, min};
use std::fmt;
use std::ops::Range;

use crate::caret::Caret;

/// A contiguous span between two carets in a source document. The span of
/// "the" is between the `|`s in "|the|", i.e. it's between byte 0 and byte
/// _3_, even though `e` is character _2_.
#[derive(Clone, Debug, Default, Copy, Eq, Hash, PartialEq)]
pub struct Span {
    start: Caret,
    end: Caret,
}

impl Span {
    /// Return a new span over the two carets.
    ///
    /// The carets do not need to be sorted.
    pub fn new(l1: Caret, l2: Caret) -> Self {
        let start = min(l1, l2);
        let end = max(l1, l2);
        Self { start, end }
    }

    /// Where the span starts.
    pub fn start(&self) -> Caret {
        self.start
    }

    /// Where the span ends.
    pub fn end(&self) -> Caret {
        self.end
    }

    /// The bytes of the input this span selects, usable as a slice index.
    pub fn byte_range(&self) -> Range<usize> {
        self.start.offset()..self.end.offset()
    }

    /// The length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end.offset() - self.start.offset()
    }

    /// Is this span empty, i.e. a single caret position?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Both ends of the span moved by [`Caret::relocate`].
    pub fn relocate(self, base: Caret) -> Span {
        Span::new(self.start.relocate(base), self.end.relocate(base))
    }
}

impl ::std::ops::Add for Span {
    type Output = Self;

    /// Adding spans returns a new span which covers all of each of the spans
    /// given (and any characters in between.)
    ///
    /// This operation commutes, but has no identity.
    fn add(self, other: Self) -> Self {
        let start = min(self.start, other.start);
        let end = max(self.end, other.end);
        Self::new(start, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn span_caret_order() {
        let l = Caret::new(2, 0, 2);
        let r = Caret::new(10, 0, 10);
        assert_eq!(Span::new(l, r), Span::new(r, l));
    }

    #[test]
    fn span_over() {
        let l = Span::new(Caret::new(2, 0, 2), Caret::new(10, 0, 10));
        let r = Span::new(Caret::new(0, 0, 0), Caret::new(4, 0, 4));
        assert_eq!(
            l + r,
            Span::new(Caret::new(0, 0, 0), Caret::new(10, 0, 10))
        );
    }

    #[test]
    fn byte_range() {
        let span = Span::new(Caret::new(2, 0, 2), Caret::new(5, 0, 5));
        assert_eq!(&"abcdefgh"[span.byte_range()], "cde");
    }
}
