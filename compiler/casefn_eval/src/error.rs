//! Invocation errors.

use casefn_diagnostic::{Diagnostic, ErrorCode};
use casefn_ir::{HostError, Value};

/// Why an invocation produced no value.
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    /// A guard or action failed. Propagated unchanged.
    #[error(transparent)]
    Host(#[from] HostError),

    /// No rule matched, even though the rule set was proven exhaustive.
    ///
    /// Only reachable through an unsound coverage check or an input outside
    /// the declared domain.
    #[error("no rule matched `{input}` in an exhaustive rule set")]
    NonExhaustive { input: Value },

    #[error("expected {expected} argument(s), found {found}")]
    ArgumentCount { expected: usize, found: usize },

    /// A filter predicate returned something other than a boolean.
    #[error("predicate returned `{found}`, expected a bool")]
    NotABoolean { found: Value },
}

impl InvokeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            InvokeError::NonExhaustive { .. } => ErrorCode::E6001,
            InvokeError::ArgumentCount { .. } => ErrorCode::E6002,
            InvokeError::Host(_) => ErrorCode::E6003,
            InvokeError::NotABoolean { .. } => ErrorCode::E6004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            InvokeError::NonExhaustive { .. } => diag
                .with_note("this is an internal error: the rule set passed its coverage check")
                .with_note("check that the input fits the declared domain"),
            InvokeError::Host(err) => match std::error::Error::source(err) {
                Some(source) => diag.with_note(format!("caused by: {source}")),
                None => diag,
            },
            InvokeError::ArgumentCount { .. } | InvokeError::NotABoolean { .. } => diag,
        }
    }
}
