//! The `check` command: parse and validate a rule file without running it.

use casefn_diagnostic::emitter::{ColorMode, DiagnosticEmitter};
use casefn_eval::{check, CompileOptions};
use casefn_parse::ParseOptions;

use super::{load_rules, read_file, stderr_emitter};

#[derive(Clone, Copy, Debug, Default)]
pub struct CheckOptions {
    pub color: ColorMode,
    /// Treat unreachable-rule warnings as errors.
    pub deny_warnings: bool,
    /// Callback arity the rules are checked for. `0` means the default, 1.
    pub arity: usize,
}

impl CheckOptions {
    pub(crate) fn parse_options(&self) -> ParseOptions {
        ParseOptions::default().with_arity(self.arity.max(1))
    }

    pub(crate) fn compile_options(&self) -> CompileOptions {
        if self.deny_warnings {
            CompileOptions::deny_warnings()
        } else {
            CompileOptions::default()
        }
    }
}

/// What `check_source` found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub rules: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Parse and validate `source`, emitting every diagnostic.
///
/// Validation only runs once the source parses cleanly.
pub fn check_source(
    source: &str,
    options: &CheckOptions,
    emitter: &mut impl DiagnosticEmitter,
) -> CheckSummary {
    let rules = match load_rules(source, &options.parse_options(), emitter) {
        Ok(rules) => rules,
        Err(errors) => {
            return CheckSummary {
                errors,
                ..CheckSummary::default()
            }
        }
    };

    let report = check(&rules, &options.compile_options());
    emitter.emit_all(&report.diagnostics());
    CheckSummary {
        rules: rules.len(),
        errors: report.errors.len(),
        warnings: report.warnings.len(),
    }
}

/// Check a file, printing diagnostics to stderr. Returns `false` on errors.
pub fn check_file(path: &str, options: &CheckOptions) -> bool {
    let Some(content) = read_file(path) else {
        return false;
    };
    let mut emitter = stderr_emitter(path, &content, options.color);

    let summary = check_source(&content, options, &mut emitter);
    emitter.emit_summary(summary.errors, summary.warnings);
    emitter.flush();

    if summary.errors > 0 {
        return false;
    }
    println!(
        "OK: {path} ({} rule{}, {} warning{})",
        summary.rules,
        if summary.rules == 1 { "" } else { "s" },
        summary.warnings,
        if summary.warnings == 1 { "" } else { "s" },
    );
    true
}
