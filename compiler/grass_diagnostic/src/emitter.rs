//! Diagnostic Emitters
//!
//! The terminal emitter renders diagnostics for humans, with optional ANSI
//! color and a source snippet under each located label.

mod terminal;

pub use terminal::{stderr_emitter, ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
