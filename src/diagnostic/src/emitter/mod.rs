mod simple;
mod terminal;

use std::io;

use crate::{Diagnostic, InputCoordinator};

pub use self::{simple::AsciiEmitter, terminal::TerminalEmitter};

/// An [`Emitter`] wraps up the ways you can output diagnostics.
pub trait Emitter {
    /// Emits the diagnostic, presenting it to the user.
    fn emit(
        &mut self,
        diagnostic: &Diagnostic,
        inputs: &InputCoordinator,
    ) -> io::Result<()>;
}
