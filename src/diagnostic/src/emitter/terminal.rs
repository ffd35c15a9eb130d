//! A colored emitter for terminals.
//!
//! On top of the header line the [`AsciiEmitter`][super::AsciiEmitter] also
//! prints, this draws a little window into the offending input with carets
//! under each highlighted span, in the style most compilers use:
//!
//! ```text
//! error: <eval>:1:5 - expected an expression
//!
//!   1 | 2 + (3 *
//!     |     ^~~~ this parenthesis is never closed
//! ```

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use unicode_width::UnicodeWidthStr;

use super::Emitter;
use crate::input_coordinator::InputCoordinator;
use crate::{Diagnostic, Highlight, Level};

pub struct TerminalEmitter {
    stream: StandardStream,
    width: usize,
}

impl Default for TerminalEmitter {
    fn default() -> Self {
        let width = term_size::dimensions().map(|(w, _)| w).unwrap_or(80);

        TerminalEmitter {
            stream: StandardStream::stderr(ColorChoice::Auto),
            width: width.max(40),
        }
    }
}

impl Emitter for TerminalEmitter {
    fn emit(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()> {
        self.header(d, inputs)?;

        if let Some(buffer) = d.input_id().map(|id| inputs.get_input_buffer(id))
        {
            for highlight in d.highlights() {
                self.code_window(buffer, highlight)?;
            }
        }

        self.stream.reset()?;
        self.stream.flush()
    }
}

impl TerminalEmitter {
    /// The `error: <name>:1:5 - message` line, with the level in color and
    /// the message wrapped to the terminal width.
    fn header(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()> {
        self.stream.set_color(
            ColorSpec::new()
                .set_fg(Some(level_color(d.level())))
                .set_bold(true),
        )?;
        write!(self.stream, "{}", d.level())?;
        self.stream.reset()?;

        let mut prefix = String::new();

        let name = d.input_id().map(|id| inputs.get_input_name(id));
        match (name, d.get_location()) {
            (None, None) => prefix.push_str(": "),
            (None, Some(l)) => prefix.push_str(&format!(" {l}: ")),
            (Some(n), None) => prefix.push_str(&format!(": {n} - ")),
            (Some(n), Some(l)) => prefix.push_str(&format!(": {n}:{l} - ")),
        }

        let wrapped = textwrap::fill(d.text(), self.width - prefix.width());
        let mut lines = wrapped.lines();

        write!(self.stream, "{}", prefix)?;
        writeln!(self.stream, "{}", lines.next().unwrap_or(""))?;

        for line in lines {
            writeln!(self.stream, "{:width$}{}", "", line, width = prefix.width())?;
        }

        Ok(())
    }

    /// A window into the input showing the highlighted span, with carets
    /// drawn underneath and the highlight's note after them.
    fn code_window(
        &mut self,
        buffer: &str,
        highlight: &Highlight,
    ) -> io::Result<()> {
        let span = highlight.span();
        let start = span.start();

        let line = match buffer.lines().nth(start.line() as usize) {
            Some(line) => line,
            // An empty span at the very end of input lands one past the last
            // line once a trailing newline is involved.
            None => "",
        };

        let number = format!("{}", start.line() + 1);
        let gutter_width = number.len() + 1;

        self.gutter(&number, gutter_width)?;
        writeln!(self.stream, "{}", line)?;

        self.gutter("", gutter_width)?;

        let prefix: String =
            line.chars().take(start.column() as usize).collect();
        write!(self.stream, "{:width$}", "", width = prefix.width())?;

        // The span may continue past this line; never draw past it.
        let remaining = line.chars().count() - prefix.chars().count();
        let carets = if span.end().line() == start.line() {
            (span.end().column() - start.column()) as usize
        } else {
            remaining
        };

        self.stream.set_color(
            ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true),
        )?;
        write!(self.stream, "^")?;
        for _ in 1..carets.max(1) {
            write!(self.stream, "~")?;
        }
        self.stream.reset()?;

        match highlight.note() {
            Some(note) => writeln!(self.stream, " {}", note),
            None => writeln!(self.stream),
        }
    }

    /// The `  1 | ` margin at the start of each code window line.
    fn gutter(&mut self, number: &str, width: usize) -> io::Result<()> {
        self.stream
            .set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
        write!(self.stream, "  {:>width$}| ", format!("{number} "))?;
        self.stream.reset()
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Note => Color::Blue,
    }
}
