//! A highlight is a reference to a span in the source code with some note
//! about that span.
//!
//! Exactly how this is presented to the user depends on the emitter.

use crate::{Caret, Span};

/// A section of the code which will be presented to the user, with a note
/// shown alongside the highlighted region.
#[derive(Debug)]
pub struct Highlight {
    span: Span,
    note: Option<String>,
}

impl Highlight {
    /// Create a new highlighted span of source code.
    pub fn new(span: Span, note: impl Into<String>) -> Highlight {
        Highlight {
            span,
            note: Some(note.into()),
        }
    }

    /// Get the highlight's span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the highlight's note.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Move the highlighted span by [`Caret::relocate`], for highlights
    /// created against a slice of a larger buffer.
    pub(crate) fn relocate(&mut self, base: Caret) {
        self.span = self.span.relocate(base);
    }
}
