//! Run an expression taken from the command line, printing the result.

use diagnostic::{Diagnostic, DiagnosticCoordinator, InputCoordinator};

use crate::Args;

/// Evaluate the command line argument as an expression and print the result
#[derive(clap::Parser)]
pub struct Evaluate {
    /// The expression to evaluate
    input: String,
}

impl Evaluate {
    /// Run the subcommand, evaluating the expression and printing its result.
    pub(crate) fn run(&self, args: &Args) {
        let mut inputs = InputCoordinator::default();
        let mut diagnostics = DiagnosticCoordinator::default();

        let id = inputs.eval_input(self.input.clone());

        let tree = match syntax::parse(&self.input) {
            Ok(tree) => tree,
            Err(e) => {
                let mut d = Diagnostic::from(e);
                d.set_input(Some(id));
                diagnostics.register(d);
                diagnostics.emit(&inputs);
                std::process::exit(1);
            }
        };

        if args.dump {
            println!("{:#?}", tree);
            return;
        }

        match runtime::evaluate(&tree) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                let mut d = Diagnostic::from(e);
                d.set_input(Some(id));
                diagnostics.register(d);
                diagnostics.emit(&inputs);
                std::process::exit(1);
            }
        }
    }
}
