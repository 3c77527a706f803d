//! Emitter that records diagnostics for assertions.

use casefn_diagnostic::emitter::DiagnosticEmitter;
use casefn_diagnostic::{Diagnostic, ErrorCode};

#[derive(Default)]
pub(super) struct Recorder {
    pub diagnostics: Vec<Diagnostic>,
}

impl Recorder {
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

impl DiagnosticEmitter for Recorder {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn flush(&mut self) {}

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}
