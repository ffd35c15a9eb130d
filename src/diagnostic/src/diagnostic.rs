//! Diagnostic messages, with a lot of trimmings.
//!
//! The ultimate purpose of these is to be shown to the programmer at some
//! point. The [`Display`][std::fmt::Display] implementation here just dumps
//! un-wrapped plain text; the emitters do a nicer job.

use std::fmt;

use crate::caret::Caret;
use crate::highlight::Highlight;
use crate::input_coordinator::InputId;
use crate::message::{Level, Message};
use crate::Span;

/// A user-facing description of a problem, anchored in some input.
///
/// The interface is a little odd. Some information is typically added when the
/// [`Diagnostic`] is first created and uses builder-style methods which
/// consume `self`, other information (like which input it belongs to) is often
/// only known later and uses `set` methods.
#[derive(Debug)]
pub struct Diagnostic {
    /// The input this diagnostic refers to, if known.
    input_id: Option<InputId>,

    /// Where in the input the issue begins.
    ///
    /// Not all issues have a location, for instance "file not found" can't.
    location: Option<Caret>,

    /// The highlighted regions relevant to this diagnostic.
    highlights: Vec<Highlight>,

    /// This is the primary message of the diagnostic.
    message: Message,
}

impl Diagnostic {
    /// Create a new diagnostic message with only a simple description.
    ///
    /// Ideally this text would be sufficient for a familiar user to correct
    /// the issue, when combined with the input name and location.
    ///
    /// The [`Level`]'s [`Default`] is used.
    pub fn new(text: impl Into<String>) -> Self {
        Diagnostic {
            input_id: None,
            location: None,
            message: Message::new(Level::default(), text.into()),
            highlights: Vec::new(),
        }
    }

    /// Add the location where the issue started.
    ///
    /// Giving the issue a concrete starting location makes it easier for
    /// users to navigate their editor to a reasonable place to start
    /// investigating.
    pub fn location(mut self, location: Caret) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a highlight to this diagnostic message.
    pub fn highlight(mut self, span: Span, note: impl Into<String>) -> Self {
        self.highlights.push(Highlight::new(span, note));
        self
    }

    /// Move a diagnostic produced against a slice of a larger buffer into
    /// that buffer's coordinates. `base` is the position of the slice's
    /// first character within the buffer.
    ///
    /// This is what lets a script run each line as its own expression while
    /// still reporting errors against the whole file.
    pub fn relocate(mut self, base: Caret) -> Self {
        self.location = self.location.map(|l| l.relocate(base));

        for highlight in &mut self.highlights {
            highlight.relocate(base);
        }

        self
    }

    /// Set the id of the input that caused this issue.
    pub fn set_input(&mut self, id: Option<InputId>) {
        self.input_id = id;
    }

    /// The id of the input that produced this issue.
    pub fn input_id(&self) -> Option<InputId> {
        self.input_id
    }

    /// Get the location where the issue arose. This may be `None` if it's not
    /// known, or wouldn't be meaningful.
    pub fn get_location(&self) -> Option<Caret> {
        self.location
    }

    /// View the list of highlights.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Get the main diagnostic message.
    pub fn text(&self) -> &str {
        self.message.text()
    }

    /// Set the main message of this diagnostic message.
    pub fn set_text(&mut self, text: String) {
        self.message.set_text(text);
    }

    /// The severity of the diagnostic.
    pub fn level(&self) -> Level {
        self.message.level()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.location {
            Some(location) => {
                write!(f, "{}: {}: {}", self.level(), location, self.text())
            }
            None => write!(f, "{}: {}", self.level(), self.text()),
        }
    }
}
