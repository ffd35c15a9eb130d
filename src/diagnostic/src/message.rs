//! Messages and their severity.

use std::fmt;

/// How severe a message is.
///
/// Everything the calculator reports today is an error; the distinction
/// exists so emitters can style a secondary note differently when a
/// diagnostic grows one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Note,
}

impl Level {
    /// The name of the level ready to be shown to users.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Note => "note",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug)]
pub(crate) struct Message {
    level: Level,
    text: String,
}

impl Message {
    pub(crate) fn new(level: Level, text: String) -> Message {
        Message { level, text }
    }

    pub(crate) fn level(&self) -> Level {
        self.level
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(Level::default(), Level::Error);
    }
}
