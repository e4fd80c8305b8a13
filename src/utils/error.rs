//! Error types for the conversion pipeline.
//!
//! We use `thiserror` for library-style errors with custom types.
//! A broken or unresolvable frame inside a stack chain is NOT an error:
//! the walker drops it locally and keeps going. Errors here are reserved
//! for invariant violations that make the whole conversion unreliable.

use crate::source::CallStackIndex;
use thiserror::Error;

/// Errors that abort a trace conversion.
///
/// Any of these fails the export for the affected trace as a whole;
/// partial results are never emitted.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("sample has a negative or non-finite timestamp: {0}")]
    InvalidTimestamp(f64),

    #[error("sample has a negative or non-finite metric weight: {0}")]
    InvalidWeight(f64),

    #[error("caller chain starting at stack {stack:?} exceeds {limit} entries, caller links likely form a cycle")]
    CallerCycle { stack: CallStackIndex, limit: usize },
}
