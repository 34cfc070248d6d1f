//! Where diagnostics go.
//!
//! Every operation that can find a problem in a document takes a
//! `&mut dyn DiagnosticSink` instead of logging on its own, so the caller
//! decides whether diagnostics are collected, logged or both.

use log::log;

use crate::error::Diagnostic;

/// Receiver for diagnostics produced while loading, merging or rendering.
pub trait DiagnosticSink {
    /// Report one diagnostic.
    fn emit(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit(&mut self, diagnostic: Diagnostic) {
        (**self).emit(diagnostic);
    }
}

/// A sink that forwards every diagnostic to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        let code = diagnostic.code().map_or("none", |code| code.as_str());
        log!(diagnostic.severity().log_level(), code; "{}", diagnostic.message());
    }
}
