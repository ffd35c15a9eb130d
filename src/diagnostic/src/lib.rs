//! Diagnostics - user-readable messages

mod caret;
mod diagnostic;
mod diagnostic_coordinator;
mod emitter;
mod highlight;
mod input_coordinator;
mod message;
mod span;

pub use self::{
    caret::Caret,
    diagnostic::Diagnostic,
    diagnostic_coordinator::DiagnosticCoordinator,
    highlight::Highlight,
    input_coordinator::{InputCoordinator, InputId},
    message::Level,
    span::Span,
};
