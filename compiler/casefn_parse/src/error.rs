//! Parse error types.
//!
//! Every parse error has an error code, a message and a span. An optional
//! `ErrorContext` yields "while parsing X" notes, and `help` lines become
//! diagnostic suggestions.

use casefn_diagnostic::{Diagnostic, ErrorCode};
use casefn_ir::Span;
use casefn_lexer::LexError;

/// What was being parsed when an error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    DomainDecl,
    Closure,
    CaseLabel,
    ConciseCase,
    DefaultLabel,
    Pattern,
    Guard,
    Action,
    Value,
}

impl ErrorContext {
    /// A phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::DomainDecl => "a domain declaration",
            Self::Closure => "the rule closure",
            Self::CaseLabel => "a `case` label",
            Self::ConciseCase => "a `cases` entry",
            Self::DefaultLabel => "a `default` label",
            Self::Pattern => "a pattern",
            Self::Guard => "a `where` clause",
            Self::Action => "an action",
            Self::Value => "a value",
        }
    }
}

/// A parse error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error code for searchability.
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// Innermost construct being parsed.
    pub context: Option<ErrorContext>,
    /// Secondary location, e.g. where an unclosed delimiter was opened.
    pub related: Option<(Span, String)>,
    pub help: Vec<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        ParseError {
            code,
            message: message.into(),
            span,
            context: None,
            related: None,
            help: Vec::new(),
        }
    }

    /// Set the context unless an inner parser already did.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    #[must_use]
    pub fn with_related(mut self, span: Span, message: impl Into<String>) -> Self {
        self.related = Some((span, message.into()));
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Lexer errors surface through the parser's error list.
    pub fn from_lex(error: &LexError) -> Self {
        ParseError::new(error.code(), error.kind.to_string(), error.span)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, "here");

        if let Some((span, message)) = &self.related {
            diag = diag.with_secondary_label(*span, message);
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        for help in &self.help {
            diag = diag.with_suggestion(help);
        }
        diag
    }
}
