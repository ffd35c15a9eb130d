//! Caret
//!
//! A [`Caret`] is a position in plain text, i.e. where a caret is in the
//! source text.

use std::fmt;

/// A location in some input stream or document.
///
/// Carets are zero-indexed, with the cursor before the first character. So
/// `Caret::default()` is at the beginning of the document, 0 bytes into some
/// input.
///
/// A caret keeps both the line and column (for presenting to a human) and the
/// byte offset into the input (for slicing it back out).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    offset: u32,
    line: u32,
    column: u32,
}

impl Caret {
    /// Create a new [`Caret`] from a byte offset and 0-indexed line and column
    /// numbers.
    pub fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// The byte offset of the caret into the input.
    pub fn offset(self) -> usize {
        self.offset as usize
    }

    /// The line the caret is on.
    pub fn line(self) -> u32 {
        self.line
    }

    /// The column of the caret.
    pub fn column(self) -> u32 {
        self.column
    }

    /// Reinterpret this caret, measured from the start of some slice, as a
    /// caret in the buffer that slice came from. `base` is where the slice
    /// begins in that buffer.
    ///
    /// The column only shifts when the caret is still on the slice's first
    /// line; after a newline inside the slice, columns already count from
    /// zero.
    pub fn relocate(self, base: Caret) -> Caret {
        Caret {
            offset: base.offset + self.offset,
            line: base.line + self.line,
            column: if self.line == 0 {
                base.column + self.column
            } else {
                self.column
            },
        }
    }

    /// Increment a caret by a character. The only character that increments
    /// the line count is `\n`, which should work on Windows as the `\r\n`
    /// return sequence ends with the `\n` byte.
    ///
    /// This counts [`char`]s i.e. unicode code points, which means some things
    /// which span multiple code points might increment the column by more than
    /// one. That matches the behaviour of most editors.
    pub fn increment(&mut self, c: char) {
        self.offset += c.len_utf8() as u32;
        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn caret_order() {
        let l = Caret::new(2, 0, 2);
        let r = Caret::new(10, 1, 3);
        assert!(l < r);
    }

    #[test]
    fn caret_newline() {
        let mut caret = Caret::default();

        for c in "a\nb".chars() {
            caret.increment(c);
        }

        assert_eq!(caret.line(), 1);
        assert_eq!(caret.column(), 1);
        assert_eq!(caret.offset(), 3);
    }

    #[test]
    fn caret_relocate() {
        let base = Caret::new(6, 1, 0);

        let same_line = Caret::new(2, 0, 2).relocate(base);
        assert_eq!(same_line, Caret::new(8, 1, 2));

        let later_line = Caret::new(4, 1, 1).relocate(base);
        assert_eq!(later_line, Caret::new(10, 2, 1));
    }

    #[test]
    fn caret_multibyte() {
        let mut caret = Caret::default();

        for c in "é".chars() {
            caret.increment(c);
        }

        assert_eq!(caret.column(), 1);
        assert_eq!(caret.offset(), 2);
    }
}
