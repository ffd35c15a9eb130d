//! Diagnostic Coordinator handles collecting any diagnostics produced, and
//! emitting them at the right times, and in the right formats.

use crate::emitter::{AsciiEmitter, Emitter, TerminalEmitter};
use crate::{diagnostic::Diagnostic, InputCoordinator};

#[derive(Default)]
pub struct DiagnosticCoordinator {
    /// A sorted collection of all the registered diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCoordinator {
    /// Add a diagnostic to be shown when the coordinator next emits.
    pub fn register(&mut self, issue: Diagnostic) {
        self.diagnostics.push(issue);
    }

    /// Are there any diagnostics waiting to be emitted?
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Present all registered diagnostics to the user, sorted by input and
    /// location.
    ///
    /// If standard error looks like a terminal we use the fancy emitter with
    /// code windows, otherwise plain text.
    pub fn emit(mut self, inputs: &InputCoordinator) {
        self.diagnostics
            .sort_by_cached_key(|d| (d.input_id(), d.get_location()));

        let mut emitter: Box<dyn Emitter> = if term_size::dimensions().is_some()
        {
            Box::new(TerminalEmitter::default())
        } else {
            Box::new(AsciiEmitter)
        };

        for d in &self.diagnostics {
            if emitter.emit(d, inputs).is_err() {
                // If the emitter's own output failed there's not much left to
                // do beyond a plain dump.
                eprintln!("{}", d);
            }
        }
    }
}
