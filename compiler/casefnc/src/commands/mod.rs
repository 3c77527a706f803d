//! Command handlers for the casefn CLI.
//!
//! Each submodule implements one command. The `*_source` functions do the
//! work against in-memory text and report through a `DiagnosticEmitter`;
//! the `*_file` wrappers add file reading, stderr output and the summary.

mod check;
mod explain;
mod run;
#[cfg(test)]
mod testing;

pub use check::{check_file, check_source, CheckOptions, CheckSummary};
pub use explain::explain_error;
pub use run::{run_file, run_source, RunOptions, RunOutput};

use casefn_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use casefn_ir::RuleSet;
use casefn_parse::{parse, ParseOptions};

use crate::builtins::host_functions;

/// Read a file from disk, printing a user-friendly error on failure.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("error: {msg}");
            None
        }
    }
}

/// Stderr emitter that renders snippets from `source`.
pub(crate) fn stderr_emitter(
    path: &str,
    source: &str,
    color: ColorMode,
) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
    TerminalEmitter::<std::io::Stderr>::stderr(color, is_tty).with_source(path, source)
}

/// Parse a rule source against the built-in host functions.
///
/// Parse errors go to `emitter`; their count is returned as the error.
pub(crate) fn load_rules(
    source: &str,
    options: &ParseOptions,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<RuleSet, usize> {
    let output = parse(source, &host_functions(), options);
    if output.has_errors() {
        emitter.emit_all(&output.diagnostics());
        return Err(output.errors.len());
    }
    Ok(output.rules)
}
