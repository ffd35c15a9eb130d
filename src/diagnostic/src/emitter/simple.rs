//! A simple, safe, ascii-focused plain-text emitter that writes to standard
//! error.
//!
//! This should be a safe fall-back when we don't know what the output device
//! looks like.

use std::io;

use super::Emitter;
use crate::input_coordinator::InputCoordinator;
use crate::Diagnostic;

#[derive(Default)]
pub struct AsciiEmitter;

impl Emitter for AsciiEmitter {
    fn emit(
        &mut self,
        d: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()> {
        eprint!("{}", d.level());

        let name = d.input_id().map(|id| inputs.get_input_name(id));

        match (name, d.get_location()) {
            (None, None) => eprint!(": "),
            (None, Some(l)) => eprint!(" {l}: "),
            (Some(n), None) => eprint!(": {n} - "),
            (Some(n), Some(l)) => eprint!(": {n}:{l} - "),
        }

        eprintln!("{}", d.text());

        for highlight in d.highlights() {
            if let Some(note) = highlight.note() {
                eprintln!("  {} {}", highlight.span().start(), note);
            }
        }

        Ok(())
    }
}
