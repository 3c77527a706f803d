//! Compile-time errors and warnings for rule sets.

use casefn_diagnostic::{Diagnostic, ErrorCode};
use casefn_ir::{Name, Pattern, Span};

/// A problem that stops a rule set from compiling.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("`{name}` is bound more than once in the same pattern")]
    DuplicateBinding { name: Name, span: Span },

    #[error(
        "alternatives bind different names: {{{}}} and {{{}}}",
        join_names(.expected),
        join_names(.found)
    )]
    InconsistentAlternativeBindings {
        expected: Vec<Name>,
        found: Vec<Name>,
        span: Span,
    },

    #[error("unknown variant `{tag}`")]
    UnknownVariant {
        tag: Name,
        declared: Vec<Name>,
        span: Span,
    },

    #[error("`where` guards are not allowed in the concise `cases` form")]
    GuardNotAllowedInConciseForm { span: Span },

    #[error("`{pattern}` is not a literal; `cases` entries take literal patterns only")]
    NonLiteralInConciseForm { pattern: Pattern, span: Span },

    #[error("non-exhaustive rules: {} not covered", join_patterns(.missing))]
    NonExhaustive { missing: Vec<Pattern>, span: Span },

    #[error("{message}")]
    PatternDomainMismatch { message: String, span: Span },

    #[error("{}", misplaced_default_message(.repeated))]
    MisplacedDefault { repeated: bool, span: Span },

    #[error("{message}")]
    ArgumentArity {
        expected: usize,
        message: String,
        span: Span,
    },

    #[error("the rule set has no rules")]
    EmptyRuleSet,

    #[error("rule {} has no patterns", .index + 1)]
    /// `index` is zero-based; messages count from one.
    EmptyAlternatives { index: usize, span: Span },

    /// A warning promoted by `LintLevel::Deny`.
    #[error(transparent)]
    Denied(CompileWarning),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateBinding { .. } => ErrorCode::E3001,
            Self::InconsistentAlternativeBindings { .. } => ErrorCode::E3002,
            Self::UnknownVariant { .. } => ErrorCode::E3003,
            Self::GuardNotAllowedInConciseForm { .. } => ErrorCode::E3004,
            Self::NonLiteralInConciseForm { .. } => ErrorCode::E3005,
            Self::NonExhaustive { .. } => ErrorCode::E3006,
            Self::PatternDomainMismatch { .. } => ErrorCode::E3007,
            Self::MisplacedDefault { .. } => ErrorCode::E3008,
            Self::ArgumentArity { .. } => ErrorCode::E3009,
            Self::EmptyRuleSet => ErrorCode::E3010,
            Self::EmptyAlternatives { .. } => ErrorCode::E3011,
            Self::Denied(warning) => warning.code(),
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::DuplicateBinding { span, .. }
            | Self::InconsistentAlternativeBindings { span, .. }
            | Self::UnknownVariant { span, .. }
            | Self::GuardNotAllowedInConciseForm { span }
            | Self::NonLiteralInConciseForm { span, .. }
            | Self::NonExhaustive { span, .. }
            | Self::PatternDomainMismatch { span, .. }
            | Self::MisplacedDefault { span, .. }
            | Self::ArgumentArity { span, .. }
            | Self::EmptyAlternatives { span, .. } => *span,
            Self::EmptyRuleSet => Span::DUMMY,
            Self::Denied(warning) => warning.span(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        if let Self::Denied(warning) = self {
            return warning
                .to_diagnostic()
                .into_error()
                .with_note("unreachable rules are denied by the compile options");
        }

        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            Self::DuplicateBinding { name, span } => diag
                .with_label(*span, format!("`{name}` bound again here"))
                .with_suggestion("rename one of the bindings, or use `_` for the ignored one"),
            Self::InconsistentAlternativeBindings { span, .. } => diag
                .with_label(*span, "in this rule")
                .with_note("only one alternative's captures reach the guard and action"),
            Self::UnknownVariant { declared, span, .. } => {
                let diag = diag.with_label(*span, "not declared by the domain");
                if declared.is_empty() {
                    diag
                } else {
                    diag.with_note(format!("declared variants: {}", join_names(declared)))
                }
            }
            Self::GuardNotAllowedInConciseForm { span } => diag
                .with_label(*span, "guarded entry")
                .with_suggestion("use the full `case <pattern> where <guard>:` form"),
            Self::NonLiteralInConciseForm { span, .. } => diag
                .with_label(*span, "not a literal")
                .with_suggestion("use the full `case` form for structural patterns"),
            Self::NonExhaustive { missing, span } => {
                let mut diag = diag.with_label(*span, "these rules do not cover every input");
                for pattern in missing {
                    diag = diag.with_note(format!("missing: {pattern}"));
                }
                diag.with_suggestion("add a `default:` rule or cover the missing cases")
            }
            Self::PatternDomainMismatch { span, .. } => {
                diag.with_label(*span, "pattern does not fit the domain")
            }
            Self::MisplacedDefault { span, .. } => diag.with_label(*span, "this `default`"),
            Self::ArgumentArity { expected, span, .. } => diag
                .with_label(*span, "in this rule")
                .with_note(format!(
                    "a {expected}-argument callback takes patterns like `({})`",
                    vec!["_"; *expected].join(", ")
                )),
            Self::EmptyRuleSet => diag.with_suggestion("add at least a `default:` rule"),
            Self::EmptyAlternatives { span, .. } => diag.with_label(*span, "empty rule"),
            Self::Denied(_) => diag,
        }
    }
}

/// A non-fatal problem.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileWarning {
    #[error("rule {} is unreachable", .index + 1)]
    UnreachableRule { index: usize, span: Span },
}

impl CompileWarning {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnreachableRule { .. } => ErrorCode::W3001,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnreachableRule { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::UnreachableRule { span, .. } => Diagnostic::warning(self.code())
                .with_message(self.to_string())
                .with_label(*span, "never reached")
                .with_note("earlier unguarded rules already match every input this rule matches"),
        }
    }
}

fn misplaced_default_message(repeated: &bool) -> &'static str {
    if *repeated {
        "more than one `default` rule"
    } else {
        "`default` must be the last rule"
    }
}

fn join_names(names: &[Name]) -> String {
    names
        .iter()
        .map(Name::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_patterns(patterns: &[Pattern]) -> String {
    let mut shown: Vec<String> = patterns.iter().map(|p| format!("`{p}`")).collect();
    if shown.is_empty() {
        shown.push("some inputs".to_string());
    }
    shown.join(", ")
}
