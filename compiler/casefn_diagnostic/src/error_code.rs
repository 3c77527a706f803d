//! Error codes for all casefn diagnostics.
//!
//! Each code is a unique identifier (e.g. `E3006`) whose first digit names
//! the phase that raises it. Used for `casefn explain` lookups.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E3xxx: Rule-set validation errors
/// - E6xxx: Invocation errors
/// - W3xxx: Rule-set warnings
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Invalid character in source
    E0001,
    /// Unterminated text literal
    E0002,
    /// Invalid number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected a pattern
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected an identifier
    E1004,
    /// Expected a domain
    E1005,
    /// `case` and `cases` mixed in one closure
    E1006,
    /// Unknown host function
    E1007,
    /// `return` is not supported in actions
    E1008,
    /// Expected an action
    E1009,

    // Rule-set Errors (E3xxx)
    /// Duplicate binding in one pattern
    E3001,
    /// Alternatives capture different names
    E3002,
    /// Unknown variant tag
    E3003,
    /// Guard in concise form
    E3004,
    /// Non-literal pattern in concise form
    E3005,
    /// Non-exhaustive rule set
    E3006,
    /// Pattern does not fit the declared domain
    E3007,
    /// Misplaced or repeated default rule
    E3008,
    /// Argument pattern arity mismatch
    E3009,
    /// Empty rule set
    E3010,
    /// Rule without patterns
    E3011,

    // Invocation Errors (E6xxx)
    /// No rule matched a compiled rule set (internal invariant violation)
    E6001,
    /// Wrong number of arguments
    E6002,
    /// Guard or action failed
    E6003,
    /// Filter callback did not return a boolean
    E6004,

    // Warnings (Wxxxx)
    /// Unreachable rule
    W3001,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// When adding a new variant: add it to the enum, `as_str()`,
    /// `explanation()` and here.
    pub const ALL: &[ErrorCode] = &[
        // Lexer
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        // Parser
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        // Rule set
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E3003,
        ErrorCode::E3004,
        ErrorCode::E3005,
        ErrorCode::E3006,
        ErrorCode::E3007,
        ErrorCode::E3008,
        ErrorCode::E3009,
        ErrorCode::E3010,
        ErrorCode::E3011,
        // Invocation
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        // Warnings
        ErrorCode::W3001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
            ErrorCode::E3009 => "E3009",
            ErrorCode::E3010 => "E3010",
            ErrorCode::E3011 => "E3011",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::W3001 => "W3001",
        }
    }

    /// Long-form description shown by `casefn explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "The source contains a character that starts no token.",
            ErrorCode::E0002 => "A text literal is missing its closing quote.",
            ErrorCode::E0003 => "A number literal does not fit a 64-bit integer or float.",
            ErrorCode::E1001 => "The parser found a token it did not expect at this position.",
            ErrorCode::E1002 => {
                "A pattern was expected: a literal, `_`, a binding name, a tuple \
                 `(p, q)` or a variant tag such as `Pound(q)`."
            }
            ErrorCode::E1003 => "A `(`, `{` or `enum {` was opened but never closed.",
            ErrorCode::E1004 => "An identifier was expected here.",
            ErrorCode::E1005 => {
                "A domain was expected: `int`, `float`, `bool`, `text`, `_`, a tuple \
                 of domains, `enum { ... }`, optionally followed by `?`."
            }
            ErrorCode::E1006 => {
                "A closure uses either the full `case` form or the concise `cases` \
                 form, never both."
            }
            ErrorCode::E1007 => {
                "Guards (`where name`) and host actions (`@name`) must be registered \
                 with the host before the rules are parsed."
            }
            ErrorCode::E1008 => {
                "Actions are expression-valued: the value of the action is the result \
                 of the rule. Drop the `return` keyword."
            }
            ErrorCode::E1009 => "An action was expected after the case label's `:`.",
            ErrorCode::E3001 => {
                "A name may be captured only once per pattern. Rename one of the \
                 bindings or replace it with `_`."
            }
            ErrorCode::E3002 => {
                "All alternatives of one case label share a guard and an action, so \
                 they must capture exactly the same names."
            }
            ErrorCode::E3003 => "The pattern names a variant tag the input domain does not declare.",
            ErrorCode::E3004 => {
                "The concise `cases` form does not accept `where` guards. Use the \
                 full `case` form instead."
            }
            ErrorCode::E3005 => {
                "The concise `cases` form accepts only literal patterns. Use the \
                 full `case` form for bindings, tuples and variants."
            }
            ErrorCode::E3006 => {
                "Some inputs are not covered by any rule. Integer, float and text \
                 inputs can only be covered by a binding, `_`, or a `default` rule; \
                 guarded rules never count toward coverage."
            }
            ErrorCode::E3007 => {
                "The pattern's shape (literal kind, tuple arity or variant fields) \
                 cannot match values of the declared domain."
            }
            ErrorCode::E3008 => "A rule set may have at most one `default`, and it must be the last rule.",
            ErrorCode::E3009 => {
                "Multi-argument callbacks (such as reduce) need every case pattern to \
                 be a parenthesized tuple with one element per argument."
            }
            ErrorCode::E3010 => "A rule set needs at least one rule.",
            ErrorCode::E3011 => "Every `case` label needs at least one pattern.",
            ErrorCode::E6001 => {
                "No rule matched the input of a compiled rule set. Compilation proves \
                 exhaustiveness, so this indicates an engine defect."
            }
            ErrorCode::E6002 => "The compiled function was invoked with the wrong number of arguments.",
            ErrorCode::E6003 => "A host guard or action reported an error.",
            ErrorCode::E6004 => "A function used as a filter returned a non-boolean value.",
            ErrorCode::W3001 => {
                "Every input this rule accepts is already handled by earlier rules \
                 without guards, so the rule can never run."
            }
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a rule-set validation error (E3xxx range).
    pub fn is_rule_error(&self) -> bool {
        self.as_str().starts_with("E3")
    }

    pub fn is_invoke_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Check if this is a warning code (Wxxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W3001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E3006"` or `"w3001"` (case-insensitive).
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
