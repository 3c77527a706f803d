//! Rule-set validation for casefn.
//!
//! Before a rule set can be invoked it must pass two phases:
//!
//! 1. **Validation** (`validate`): binding names, concise-form restrictions,
//!    default placement, callback arity and pattern shapes against the
//!    declared domain.
//! 2. **Coverage** (`exhaustiveness`): the unguarded rules must cover every
//!    value of the domain, and rules shadowed by earlier ones are reported.
//!
//! Coverage only runs on rule sets that validate cleanly, since its
//! lowering assumes well-shaped patterns.
//!
//! # Pipeline Position
//!
//! ```text
//! Source → Lex → Parse → **Check** → casefn_eval
//! ```

mod error;
mod exhaustiveness;
mod options;
mod validate;

pub use error::{CompileError, CompileWarning};
pub use exhaustiveness::{check_exhaustive, Exhaustiveness};
pub use options::{CompileOptions, LintLevel};

use casefn_diagnostic::Diagnostic;
use casefn_ir::{RuleSet, Span};

/// Everything `check` found, in rule order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckReport {
    pub errors: Vec<CompileError>,
    pub warnings: Vec<CompileWarning>,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Errors first, then warnings.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors
            .iter()
            .map(CompileError::to_diagnostic)
            .chain(self.warnings.iter().map(CompileWarning::to_diagnostic))
            .collect()
    }

    /// The warnings, or the first error.
    pub fn into_result(self) -> Result<Vec<CompileWarning>, CompileError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.warnings),
        }
    }
}

/// Validate a rule set and analyse its coverage.
pub fn check(rules: &RuleSet, options: &CompileOptions) -> CheckReport {
    let mut report = CheckReport::default();
    if rules.is_empty() {
        report.errors.push(CompileError::EmptyRuleSet);
        return report;
    }

    let domain = validate::validate(rules, &mut report.errors);
    if report.has_errors() {
        tracing::debug!(errors = report.errors.len(), "rule set failed validation");
        return report;
    }

    let coverage = exhaustiveness::analyse(&rules.rules, &domain);
    for index in coverage.unreachable {
        let span = rules.rules.get(index).map_or(Span::DUMMY, |rule| rule.span);
        let warning = CompileWarning::UnreachableRule { index, span };
        match options.unreachable {
            LintLevel::Allow => {}
            LintLevel::Warn => report.warnings.push(warning),
            LintLevel::Deny => report.errors.push(CompileError::Denied(warning)),
        }
    }
    if !coverage.missing.is_empty() {
        report.errors.push(CompileError::NonExhaustive {
            missing: coverage.missing,
            span: rules_span(rules),
        });
    }

    tracing::debug!(
        rules = rules.len(),
        domain = %domain,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "checked rule set"
    );
    report
}

/// Span covering every rule that has one.
fn rules_span(rules: &RuleSet) -> Span {
    rules
        .rules
        .iter()
        .map(|rule| rule.span)
        .filter(|span| !span.is_dummy())
        .reduce(Span::merge)
        .unwrap_or(Span::DUMMY)
}
