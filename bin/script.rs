//! Evaluate each line of a file.

use std::{fs::File, io::Read, path::PathBuf};

use diagnostic::{
    Caret, Diagnostic, DiagnosticCoordinator, InputCoordinator, InputId,
};

use crate::Args;

/// Evaluate each non-empty line of a file as an expression.
#[derive(clap::Parser)]
pub struct Script {
    filename: PathBuf,
}

impl Script {
    pub(crate) fn run(&self, args: &Args) {
        let mut input = String::new();

        if let Err(e) = File::open(&self.filename)
            .and_then(|mut file| file.read_to_string(&mut input))
        {
            eprintln!(
                "Error: cannot read '{}': {}",
                &self.filename.display(),
                e
            );
            std::process::exit(1);
        }

        let mut inputs = InputCoordinator::default();
        let mut diagnostics = DiagnosticCoordinator::default();

        // The whole file is one input, so diagnostics name it once and point
        // at real line numbers within it.
        let id = inputs.file_input(input.clone(), self.filename.clone());

        let mut failed = false;

        // Each line stands alone, so one bad line doesn't stop the rest.
        for (line, start) in lines_with_carets(&input) {
            if line.trim().is_empty() {
                continue;
            }

            if let Err(d) = run_line(line, start, args, id) {
                diagnostics.register(d);
                failed = true;
            }
        }

        diagnostics.emit(&inputs);

        if failed {
            std::process::exit(1);
        }
    }
}

/// Each line of the buffer, paired with the caret of its first character.
fn lines_with_carets(input: &str) -> Vec<(&str, Caret)> {
    let mut lines = Vec::new();
    let mut caret = Caret::default();

    for line in input.split('\n') {
        lines.push((line, caret));

        for c in line.chars() {
            caret.increment(c);
        }
        caret.increment('\n');
    }

    lines
}

/// Parse and evaluate one line. Errors come back as diagnostics already
/// moved into whole-file coordinates.
fn run_line(
    line: &str,
    start: Caret,
    args: &Args,
    id: InputId,
) -> Result<(), Diagnostic> {
    let tree =
        syntax::parse(line).map_err(|e| relocated(e.into(), start, id))?;

    if args.dump {
        println!("{:#?}", tree);
        return Ok(());
    }

    let value = runtime::evaluate(&tree)
        .map_err(|e| relocated(e.into(), start, id))?;

    println!("{}", value);
    Ok(())
}

fn relocated(d: Diagnostic, start: Caret, id: InputId) -> Diagnostic {
    let mut d = d.relocate(start);
    d.set_input(Some(id));
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carets_track_lines_and_offsets() {
        let lines = lines_with_carets("1 + 1\n\n3 + +\n");

        assert_eq!(lines.len(), 4);

        let (line, start) = lines[2];
        assert_eq!(line, "3 + +");
        assert_eq!(start.line(), 2);
        assert_eq!(start.offset(), 7);
    }

    #[test]
    fn errors_report_the_line_they_came_from() {
        let buffer = "1 + 1\n2 * 2\n3 + +\n";
        let (line, start) = lines_with_carets(buffer)[2];

        let error = syntax::parse(line).unwrap_err();
        let diagnostic = Diagnostic::from(error).relocate(start);

        let location = diagnostic.get_location().unwrap();
        assert_eq!(location.line(), 2);
        assert_eq!(format!("{}", location), "3:4");

        // The highlight lands on the second `+` within the whole buffer.
        let span = diagnostic.highlights()[0].span();
        assert_eq!(span.byte_range(), 16..17);
    }
}
