//! An interactive mode.

use diagnostic::{
    Diagnostic, DiagnosticCoordinator, InputCoordinator, InputId,
};
use rustyline::{error::ReadlineError, Editor};
use syntax::Expression;

use crate::Args;

/// Start an interactive session
#[derive(clap::Parser, Default)]
pub struct ReplArgs; // For now there are no repl settings.

impl ReplArgs {
    /// Run a repl with the given settings.
    pub fn run(&self, args: &Args) {
        let repl = Repl::new(args.dump);
        repl.start()
    }
}

struct Repl {
    editor: Editor<()>,

    /// Each line entered becomes an input here, so diagnostics can point back
    /// into earlier lines by name.
    inputs: InputCoordinator,

    /// Print the tree for each line instead of evaluating it.
    dump: bool,
}

impl Repl {
    /// The prompt used to ask for more input.
    const PROMPT: &'static str = ">>> ";

    /// Lines which are the result of execution begin with this.
    const RESULT_PROMPT: &'static str = "//> ";

    fn new(dump: bool) -> Self {
        let editor = Editor::<()>::new();
        // TODO: Read history here.
        let inputs = InputCoordinator::default();

        Repl {
            editor,
            inputs,
            dump,
        }
    }

    fn start(mut self) {
        loop {
            match self.step() {
                Ok(()) => continue,
                Err(ReplError::Clear) => continue,
                Err(ReplError::Exit) => break,
                Err(ReplError::Readline(e)) => {
                    println!("{}", e);
                    println!("  (press control-d to exit)");
                }
            }
        }
    }

    fn step(&mut self) -> Result<(), ReplError> {
        let input = self.read()?;

        if input.trim().is_empty() {
            return Ok(());
        }

        let id = self.inputs.repl_input(input.clone());

        let tree = match syntax::parse(&input) {
            Ok(tree) => tree,
            Err(e) => {
                self.report(e.into(), id);
                return Ok(());
            }
        };

        match respond(&tree, self.dump) {
            Ok(output) => println!("{}", output),
            Err(e) => self.report(e.into(), id),
        }

        Ok(())
    }

    fn read(&mut self) -> Result<String, ReplError> {
        let line = self.editor.readline(Repl::PROMPT);
        match line {
            Ok(line) => {
                self.editor.add_history_entry(&line);
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                // User hit Control-C
                Err(ReplError::Clear)
            }

            Err(ReadlineError::Eof) => {
                // User hit Control-D at end of line, to exit.
                Err(ReplError::Exit)
            }

            Err(e) => Err(ReplError::Readline(e)),
        }
    }

    fn report(&mut self, mut diagnostic: Diagnostic, id: InputId) {
        diagnostic.set_input(Some(id));

        let mut coordinator = DiagnosticCoordinator::default();
        coordinator.register(diagnostic);
        coordinator.emit(&self.inputs);
    }
}

/// What to print for a successfully parsed line: the result of evaluating
/// it, or the tree itself when dumping.
fn respond(tree: &Expression, dump: bool) -> Result<String, runtime::Error> {
    if dump {
        return Ok(format!("{:#?}", tree));
    }

    let value = runtime::evaluate(tree)?;
    Ok(format!("{}{}", Repl::RESULT_PROMPT, value))
}

#[derive(Debug)]
enum ReplError {
    Clear,
    Exit,

    Readline(ReadlineError),
}

impl std::error::Error for ReplError {}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplError::Clear => write!(f, "^C"),
            ReplError::Exit => write!(f, "^D"),
            ReplError::Readline(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respond_evaluates_by_default() {
        let tree = syntax::parse("2 + 3").unwrap();
        assert_eq!(respond(&tree, false).unwrap(), "//> 5");
    }

    #[test]
    fn respond_dumps_the_tree_when_asked() {
        let tree = syntax::parse("2 + 3").unwrap();
        let dumped = respond(&tree, true).unwrap();

        assert!(dumped.contains("Binary"));
        assert!(!dumped.contains(Repl::RESULT_PROMPT));
    }
}
