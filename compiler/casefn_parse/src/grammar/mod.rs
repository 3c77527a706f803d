//! Grammar productions, one module per construct.
//!
//! Each module adds methods to `Parser`.

mod closure;
mod domain;
mod literal;
mod pattern;
mod template;

use casefn_diagnostic::ErrorCode;
use casefn_ir::Span;
use casefn_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Consume the closing delimiter of a group opened at `open_span`.
    ///
    /// Reaching the end of input reports an unclosed delimiter pointing back
    /// at the opener.
    pub(crate) fn expect_closing(
        &mut self,
        close: &TokenKind,
        open_span: Span,
    ) -> Result<Span, ParseError> {
        if self.cursor.check(close) {
            return Ok(self.cursor.advance().span);
        }
        if self.cursor.is_at_end() {
            return Err(ParseError::new(
                ErrorCode::E1003,
                format!("unclosed delimiter: expected `{}`", close.display_name()),
                self.cursor.current_span(),
            )
            .with_related(open_span, "opened here"));
        }
        Err(self
            .cursor
            .make_expect_error(&format!("`,` or `{}`", close.display_name())))
    }

    /// Parse `item ("," item)* ","?` up to `close`, which is consumed.
    ///
    /// The opening delimiter must already be consumed; its span is
    /// `open_span`.
    pub(crate) fn parse_delimited<T>(
        &mut self,
        close: &TokenKind,
        open_span: Span,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = Vec::new();
        while !self.cursor.check(close) && !self.cursor.is_at_end() {
            items.push(item(self)?);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(close, open_span)?;
        Ok(items)
    }

    /// Skip to the next token that can start a clause or end the closure.
    pub(crate) fn synchronize(&mut self) {
        while !matches!(
            self.cursor.current_kind(),
            TokenKind::Case
                | TokenKind::Cases
                | TokenKind::Default
                | TokenKind::RBrace
                | TokenKind::Eof
        ) {
            self.cursor.advance();
        }
    }

    /// Whether `ident ":"` starts here (a named field).
    pub(crate) fn at_named_field(&self) -> bool {
        matches!(self.cursor.current_kind(), TokenKind::Ident(_))
            && matches!(self.cursor.peek_next_kind(), TokenKind::Colon)
    }
}
