//! The runtime - evaluating syntax trees.
//!
//! There's no compilation step and no state: [`evaluate`] walks an
//! [`Expression`][syntax::Expression] and folds it into a single [`Value`],
//! or fails with the first [`Error`] it hits.

mod error;
mod eval;
mod value;

pub use crate::{error::Error, eval::evaluate, value::Value};
