//! Literal values shared by patterns, templates and command-line values.

use casefn_diagnostic::ErrorCode;
use casefn_ir::{ensure_sufficient_stack, Field, Value};
use casefn_lexer::TokenKind;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse a scalar or `absent` literal if one starts here.
    ///
    /// Returns `Ok(None)` without consuming anything when the current token
    /// cannot start a literal.
    pub(crate) fn parse_literal(&mut self) -> Result<Option<Value>, ParseError> {
        let value = match self.cursor.current_kind() {
            TokenKind::Int(n) => Value::int(*n),
            TokenKind::Float(f) => Value::float(*f),
            TokenKind::Text(s) => Value::text(s),
            TokenKind::True => Value::bool(true),
            TokenKind::False => Value::bool(false),
            TokenKind::Absent => Value::Absent,
            TokenKind::Minus => {
                self.cursor.advance();
                return match self.cursor.current_kind() {
                    TokenKind::Int(n) => {
                        let n = -*n;
                        self.cursor.advance();
                        Ok(Some(Value::int(n)))
                    }
                    TokenKind::Float(f) => {
                        let f = -*f;
                        self.cursor.advance();
                        Ok(Some(Value::float(f)))
                    }
                    _ => Err(self.cursor.make_expect_error("a number after `-`")),
                };
            }
            _ => return Ok(None),
        };
        self.cursor.advance();
        Ok(Some(value))
    }

    /// Parse a value in pattern-literal syntax: literals, tuples and tags.
    pub(crate) fn parse_value(&mut self) -> Result<Value, ParseError> {
        ensure_sufficient_stack(|| self.parse_value_inner())
            .map_err(|e| e.with_context(ErrorContext::Value))
    }

    fn parse_value_inner(&mut self) -> Result<Value, ParseError> {
        if let Some(value) = self.parse_literal()? {
            return Ok(value);
        }
        match self.cursor.current_kind() {
            TokenKind::Ident(tag) if tag.is_tag_like() => {
                let tag = tag.clone();
                self.cursor.advance();
                if !self.cursor.check(&TokenKind::LParen) {
                    return Ok(Value::unit_variant(tag));
                }
                let open = self.cursor.advance().span;
                let fields = self.parse_delimited(&TokenKind::RParen, open, |p| {
                    if p.at_named_field() {
                        let (name, _) = p.cursor.expect_ident()?;
                        p.cursor.advance();
                        Ok(Field::named(name, p.parse_value()?))
                    } else {
                        Ok(Field::positional(p.parse_value()?))
                    }
                })?;
                Ok(Value::variant_fields(tag, fields))
            }
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let mut items = self.parse_delimited(&TokenKind::RParen, open, Self::parse_value)?;
                match items.len() {
                    1 => Ok(items.remove(0)),
                    0 => Err(ParseError::new(
                        ErrorCode::E1001,
                        "empty tuples are not values",
                        open,
                    )),
                    _ => Ok(Value::tuple(items)),
                }
            }
            other => Err(ParseError::new(
                ErrorCode::E1001,
                format!("expected a value, found `{}`", other.display_name()),
                self.cursor.current_span(),
            )
            .with_help("values are literals, tuples like `(1, 2)` or tags like `Pound(5.0)`")),
        }
    }
}
