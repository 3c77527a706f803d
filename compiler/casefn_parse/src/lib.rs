//! Recursive descent parser for casefn rule sources.
//!
//! A rule source is an optional `domain` declaration followed by one closure
//! in either the full `case` form or the concise `cases` form:
//!
//! ```text
//! domain enum { Pound(float), Ounce(float) }
//! {
//!   case Pound(q) where heavy: "heavy"
//!   case Pound(q), Ounce(q): q
//! }
//! ```
//!
//! The parser produces a `RuleSet`. It never validates semantics (binding
//! consistency, exhaustiveness); that is `casefn_canon`'s job. Guards and
//! host actions are resolved against a caller-supplied [`HostFunctions`].

mod cursor;
mod error;
mod grammar;
mod host;

pub use error::{ErrorContext, ParseError};
pub use host::HostFunctions;

use casefn_diagnostic::Diagnostic;
use casefn_ir::{Domain, RuleSet, Value};

use cursor::Cursor;

/// What the host knows about the callback being parsed.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Number of callback arguments: 1 for map/filter, 2 for reduce.
    pub arity: usize,
    /// Overrides any `domain` declaration in the source.
    pub domain: Option<Domain>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            arity: 1,
            domain: None,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// Result of parsing: the rule set built so far plus every error.
///
/// When `errors` is non-empty the rule set is incomplete and must not be
/// compiled.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub rules: RuleSet,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }

    /// The rule set, or the first error.
    pub fn into_result(self) -> Result<RuleSet, ParseError> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.rules),
        }
    }
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor,
    host: &'a HostFunctions,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    fn new(source: &str, host: &'a HostFunctions) -> Self {
        let lexed = casefn_lexer::lex(source);
        Parser {
            cursor: Cursor::new(lexed.tokens),
            host,
            errors: lexed.errors.iter().map(ParseError::from_lex).collect(),
        }
    }

    fn error(&mut self, error: ParseError) {
        tracing::debug!(code = %error.code, span = %error.span, "{}", error.message);
        self.errors.push(error);
    }
}

/// Parse a rule source.
pub fn parse(source: &str, host: &HostFunctions, options: &ParseOptions) -> ParseOutput {
    let mut parser = Parser::new(source, host);
    let mut rules = parser.parse_source();
    rules.arity = options.arity;
    if let Some(domain) = &options.domain {
        rules.domain = Some(domain.clone());
    }
    tracing::debug!(
        rules = rules.len(),
        errors = parser.errors.len(),
        form = ?rules.form,
        "parsed rule source"
    );
    ParseOutput {
        rules,
        errors: parser.errors,
    }
}

/// Parse a value written in pattern-literal syntax, e.g. `(0.0, Pound(5.0))`.
///
/// Used for command-line inputs. No bindings or wildcards are allowed.
pub fn parse_value(source: &str) -> Result<Value, ParseError> {
    let host = HostFunctions::default();
    let mut parser = Parser::new(source, &host);
    if let Some(err) = parser.errors.drain(..).next() {
        return Err(err);
    }
    let value = parser.parse_value()?;
    if !parser.cursor.is_at_end() {
        return Err(parser.cursor.make_expect_error("end of input"));
    }
    Ok(value)
}

/// Parse a domain written in `domain` declaration syntax, e.g. `int?`.
pub fn parse_domain(source: &str) -> Result<Domain, ParseError> {
    let host = HostFunctions::default();
    let mut parser = Parser::new(source, &host);
    if let Some(err) = parser.errors.drain(..).next() {
        return Err(err);
    }
    let domain = parser.parse_domain()?;
    if !parser.cursor.is_at_end() {
        return Err(parser.cursor.make_expect_error("end of input"));
    }
    Ok(domain)
}
