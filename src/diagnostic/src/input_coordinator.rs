//! Tracking the source text diagnostics point into.
//!
//! The calculator takes input three ways: lines typed at the repl, a single
//! expression given on the command line, and files run as scripts. Each
//! registered piece of input gets an [`InputId`], which a diagnostic can
//! carry so an emitter can slice the offending source back out and name it.

use std::path::PathBuf;

/// A handle to one piece of registered input.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InputId(usize);

#[derive(Default)]
pub struct InputCoordinator {
    /// Registered inputs, indexed by [`InputId`].
    inputs: Vec<Input>,

    /// How many repl lines have been registered so far, for numbering them.
    repl_lines: usize,
}

impl InputCoordinator {
    /// Register a line entered at the repl. These are named `<repl 1>`,
    /// `<repl 2>`, and so on, in the order they were entered.
    pub fn repl_input(&mut self, buffer: String) -> InputId {
        self.repl_lines += 1;
        self.push(format!("<repl {}>", self.repl_lines), buffer)
    }

    /// Register the expression passed on the command line, named `<eval>`.
    pub fn eval_input(&mut self, buffer: String) -> InputId {
        self.push(String::from("<eval>"), buffer)
    }

    /// Register the contents of a file, named by its path.
    pub fn file_input(&mut self, buffer: String, path: PathBuf) -> InputId {
        self.push(path.display().to_string(), buffer)
    }

    /// The source text registered under an id.
    pub fn get_input_buffer(&self, id: InputId) -> &str {
        self.inputs[id.0].buffer.as_str()
    }

    /// The name an input is reported under.
    pub fn get_input_name(&self, id: InputId) -> &str {
        self.inputs[id.0].name.as_str()
    }

    fn push(&mut self, name: String, buffer: String) -> InputId {
        let id = InputId(self.inputs.len());
        self.inputs.push(Input { name, buffer });
        id
    }
}

/// A piece of input: the name it's reported under, and its source text.
struct Input {
    name: String,
    buffer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repl_lines_number_from_one() {
        let mut inputs = InputCoordinator::default();
        let first = inputs.repl_input("1 + 1".into());
        let second = inputs.repl_input("2 + 2".into());

        assert_eq!(inputs.get_input_name(first), "<repl 1>");
        assert_eq!(inputs.get_input_name(second), "<repl 2>");
        assert_eq!(inputs.get_input_buffer(second), "2 + 2");
    }

    #[test]
    fn names() {
        let mut inputs = InputCoordinator::default();
        let eval = inputs.eval_input("1".into());
        let file = inputs.file_input("2".into(), PathBuf::from("sums.abc"));

        assert_eq!(inputs.get_input_name(eval), "<eval>");
        assert_eq!(inputs.get_input_name(file), "sums.abc");
    }
}
