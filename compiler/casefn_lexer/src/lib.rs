//! Lexer for casefn rule sources, built on logos.
//!
//! Whitespace, newlines and `//` comments are trivia. Lexing never stops at
//! an error: the bad span becomes a `TokenKind::Error` token and a matching
//! `LexError`, so the parser can keep going and report more problems.

mod lex_error;
mod token;

use casefn_ir::{Name, Span};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind};

/// Raw token from logos (before cooking).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("domain")]
    Domain,
    #[token("enum")]
    Enum,
    #[token("case")]
    Case,
    #[token("cases")]
    Cases,
    #[token("default")]
    Default,
    #[token("where")]
    Where,
    #[token("return")]
    Return,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("absent")]
    Absent,

    #[token("int")]
    IntType,
    #[token("float")]
    FloatType,
    #[token("bool")]
    BoolType,
    #[token("text")]
    TextType,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("_", priority = 3)]
    Underscore,
    #[token("@")]
    At,
    #[token("-")]
    Minus,
    #[token(";")]
    Semicolon,

    #[regex(r"[0-9][0-9_]*", |lex| {
        lex.slice().replace('_', "").parse::<i64>().ok()
    })]
    Int(i64),

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| {
        lex.slice().replace('_', "").parse::<f64>().ok()
    })]
    Float(f64),

    // No unescaped newlines inside a text literal.
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    Text,

    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    UnterminatedText,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Tokens plus every error met along the way.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    /// Always ends with `TokenKind::Eof`.
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a rule source.
pub fn lex(source: &str) -> LexOutput {
    let mut out = LexOutput::default();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::UnterminatedText) => {
                out.errors.push(LexError {
                    span,
                    kind: LexErrorKind::UnterminatedText,
                });
                out.tokens.push(Token::new(TokenKind::Error, span));
            }
            Ok(raw) => out.tokens.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => {
                let kind = match slice.chars().next() {
                    Some(c) if c.is_ascii_digit() => LexErrorKind::InvalidNumber(slice.to_string()),
                    Some(c) => LexErrorKind::InvalidChar(c),
                    None => LexErrorKind::InvalidChar('\0'),
                };
                out.errors.push(LexError { span, kind });
                out.tokens.push(Token::new(TokenKind::Error, span));
            }
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    out.tokens.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));
    tracing::trace!(
        tokens = out.tokens.len(),
        errors = out.errors.len(),
        "lexed rule source"
    );
    out
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::Float(f),
        RawToken::Text => TokenKind::Text(unescape_text(&slice[1..slice.len() - 1])),
        RawToken::Ident => TokenKind::Ident(Name::new(slice)),

        RawToken::Domain => TokenKind::Domain,
        RawToken::Enum => TokenKind::Enum,
        RawToken::Case => TokenKind::Case,
        RawToken::Cases => TokenKind::Cases,
        RawToken::Default => TokenKind::Default,
        RawToken::Where => TokenKind::Where,
        RawToken::Return => TokenKind::Return,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Absent => TokenKind::Absent,
        RawToken::IntType => TokenKind::IntType,
        RawToken::FloatType => TokenKind::FloatType,
        RawToken::BoolType => TokenKind::BoolType,
        RawToken::TextType => TokenKind::TextType,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,
        RawToken::Underscore => TokenKind::Underscore,
        RawToken::At => TokenKind::At,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Semicolon => TokenKind::Semicolon,

        // Handled in `lex`.
        RawToken::LineComment | RawToken::UnterminatedText => TokenKind::Error,
    }
}

/// Process escape sequences in a text literal body.
fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('0') => result.push('\0'),
            Some('"') => result.push('"'),
            Some('\\') | None => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests;
