//! Token cursor for navigating the token stream.

use casefn_diagnostic::ErrorCode;
use casefn_ir::{Name, Span};
use casefn_lexer::{Token, TokenKind};

use crate::ParseError;

/// Cursor over a token list that always ends with `Eof`.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Build a cursor, dropping lexer error tokens (already reported).
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.kind != TokenKind::Error)
            .collect();
        if tokens.last().map(|t| &t.kind) != Some(&TokenKind::Eof) {
            let end = tokens.last().map_or(0, |t| t.span.end);
            tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        }
        Cursor { tokens, pos: 0 }
    }

    /// Invariant: `pos < tokens.len()`, and the last token is `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Peek at the next token's kind. Returns `Eof` at the end of the stream.
    pub(crate) fn peek_next_kind(&self) -> &TokenKind {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)].kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check the current token's kind, ignoring payloads.
    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().same_kind(kind)
    }

    /// Advance and return the consumed token. Never moves past `Eof`.
    pub(crate) fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect the current token to be of the given kind; return its span.
    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.make_expect_error(&format!("`{}`", kind.display_name())))
        }
    }

    /// Expect and consume an identifier.
    pub(crate) fn expect_ident(&mut self) -> Result<(Name, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let name = name.clone();
            let span = self.advance().span;
            Ok((name, span))
        } else {
            Err(ParseError::new(
                ErrorCode::E1004,
                format!(
                    "expected identifier, found `{}`",
                    self.current_kind().display_name()
                ),
                self.current_span(),
            ))
        }
    }

    #[cold]
    #[inline(never)]
    pub(crate) fn make_expect_error(&self, expected: &str) -> ParseError {
        ParseError::new(
            ErrorCode::E1001,
            format!(
                "expected {expected}, found `{}`",
                self.current_kind().display_name()
            ),
            self.current_span(),
        )
    }
}
