//! Cooked tokens handed to the parser.

use std::fmt;

use casefn_ir::{Name, Span};

/// Token kinds of the rule-source language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals
    Int(i64),
    Float(f64),
    /// Text literal with escapes already processed.
    Text(String),
    Ident(Name),

    // Keywords
    Domain,
    Enum,
    Case,
    Cases,
    Default,
    Where,
    Return,
    True,
    False,
    Absent,
    IntType,
    FloatType,
    BoolType,
    TextType,

    // Symbols
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Question,
    Underscore,
    At,
    Minus,
    Semicolon,

    /// A lexing error; the matching `LexError` says what went wrong.
    Error,
    Eof,
}

impl TokenKind {
    /// Short description for "expected X, found Y" messages.
    pub fn display_name(&self) -> String {
        match self {
            TokenKind::Int(n) => n.to_string(),
            TokenKind::Float(f) => format!("{f:?}"),
            TokenKind::Text(s) => format!("{s:?}"),
            TokenKind::Ident(name) => name.to_string(),
            TokenKind::Error => "<error>".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => other.as_symbol().to_string(),
        }
    }

    fn as_symbol(&self) -> &'static str {
        match self {
            TokenKind::Domain => "domain",
            TokenKind::Enum => "enum",
            TokenKind::Case => "case",
            TokenKind::Cases => "cases",
            TokenKind::Default => "default",
            TokenKind::Where => "where",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Absent => "absent",
            TokenKind::IntType => "int",
            TokenKind::FloatType => "float",
            TokenKind::BoolType => "bool",
            TokenKind::TextType => "text",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Underscore => "_",
            TokenKind::At => "@",
            TokenKind::Minus => "-",
            TokenKind::Semicolon => ";",
            TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Text(_)
            | TokenKind::Ident(_)
            | TokenKind::Error
            | TokenKind::Eof => "",
        }
    }

    /// Whether two kinds are the same variant, ignoring payloads.
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
