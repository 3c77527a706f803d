//! Lexer errors.

use casefn_diagnostic::{Diagnostic, ErrorCode};
use casefn_ir::Span;

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("invalid character `{0}`")]
    InvalidChar(char),
    #[error("unterminated text literal")]
    UnterminatedText,
    /// Integer literal does not fit in `i64`, or float failed to parse.
    #[error("invalid number literal `{0}`")]
    InvalidNumber(String),
}

/// A lexer error located in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::InvalidChar(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedText => ErrorCode::E0002,
            LexErrorKind::InvalidNumber(_) => ErrorCode::E0003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, "here");
        match &self.kind {
            LexErrorKind::UnterminatedText => diag.with_suggestion("add a closing `\"`"),
            LexErrorKind::InvalidNumber(_) => {
                diag.with_note("integers are 64-bit signed; floats are 64-bit IEEE 754")
            }
            LexErrorKind::InvalidChar(_) => diag,
        }
    }
}
