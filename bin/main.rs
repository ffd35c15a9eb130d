//! Abacus - a little arithmetic language

use clap::Parser;

mod eval;
mod repl;
mod script;

use eval::Evaluate;
use repl::ReplArgs;
use script::Script;

/// A calculator for simple arithmetic expressions
#[derive(clap::Parser)]
#[clap(version, about)]
pub struct Args {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Print the syntax tree instead of evaluating
    #[clap(long, global = true)]
    dump: bool,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Start an interactive session
    Repl(ReplArgs),
    /// Evaluate an expression given on the command line
    Eval(Evaluate),
    /// Evaluate each line of a file
    Script(Script),
}

fn main() {
    let args = Args::parse();

    match &args.command {
        Some(Command::Repl(r)) => r.run(&args),
        Some(Command::Eval(e)) => e.run(&args),
        Some(Command::Script(s)) => s.run(&args),
        None => ReplArgs::default().run(&args),
    }
}
