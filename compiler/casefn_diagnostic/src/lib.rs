//! Diagnostics for the casefn engine.
//!
//! Every error the engine can raise (lexing, parsing, rule-set validation and
//! invocation) has an [`ErrorCode`] and converts into a [`Diagnostic`]:
//! - Error codes for searchability (`casefn explain E3006`)
//! - A clear message (what went wrong)
//! - A primary span when the rule came from source text
//! - Notes and suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{unclosed_delimiter, unexpected_token, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
