//! Patterns: literals, `_`, bindings, tuples and variant tags.

use casefn_diagnostic::ErrorCode;
use casefn_ir::{ensure_sufficient_stack, FieldPattern, Pattern};
use casefn_lexer::TokenKind;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_pattern(&mut self) -> Result<Pattern, ParseError> {
        ensure_sufficient_stack(|| self.parse_pattern_inner())
            .map_err(|e| e.with_context(ErrorContext::Pattern))
    }

    fn parse_pattern_inner(&mut self) -> Result<Pattern, ParseError> {
        if let Some(value) = self.parse_literal()? {
            return Ok(Pattern::Literal(value));
        }
        match self.cursor.current_kind() {
            TokenKind::Underscore => {
                self.cursor.advance();
                Ok(Pattern::Wildcard)
            }
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.cursor.advance();
                if !name.is_tag_like() {
                    return Ok(Pattern::Binding(name));
                }
                if !self.cursor.check(&TokenKind::LParen) {
                    return Ok(Pattern::unit_variant(name));
                }
                let open = self.cursor.advance().span;
                let fields = self.parse_delimited(&TokenKind::RParen, open, |p| {
                    if p.at_named_field() {
                        let (field, _) = p.cursor.expect_ident()?;
                        p.cursor.advance();
                        Ok(FieldPattern::named(field, p.parse_pattern()?))
                    } else {
                        Ok(FieldPattern::positional(p.parse_pattern()?))
                    }
                })?;
                Ok(Pattern::variant_fields(name, fields))
            }
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let mut items =
                    self.parse_delimited(&TokenKind::RParen, open, Self::parse_pattern)?;
                match items.len() {
                    0 => Err(ParseError::new(
                        ErrorCode::E1002,
                        "expected a pattern inside `(`",
                        open,
                    )),
                    1 => Ok(items.remove(0)),
                    _ => Ok(Pattern::Tuple(items)),
                }
            }
            other => Err(ParseError::new(
                ErrorCode::E1002,
                format!("expected a pattern, found `{}`", other.display_name()),
                self.cursor.current_span(),
            )),
        }
    }
}
