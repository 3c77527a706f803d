//! Action bodies.
//!
//! An action is a template: literal data, capture references, tuples and
//! tags built from them, or a call to a registered host action (`@name`).
//! Actions are expression-valued, so `return` is rejected.

use casefn_diagnostic::ErrorCode;
use casefn_ir::{ensure_sufficient_stack, Action, Template};
use casefn_lexer::TokenKind;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse an action body, followed by an optional `;`.
    pub(crate) fn parse_action(&mut self) -> Result<Action, ParseError> {
        if self.cursor.check(&TokenKind::Return) {
            return Err(ParseError::new(
                ErrorCode::E1008,
                "`return` is not supported in actions",
                self.cursor.current_span(),
            )
            .with_context(ErrorContext::Action)
            .with_help("an action's value is the rule's result; drop the `return` keyword"));
        }
        let template = self
            .parse_template()
            .map_err(|e| e.with_context(ErrorContext::Action))?;
        self.cursor.eat(&TokenKind::Semicolon);
        Ok(match template {
            Template::Literal(value) => Action::constant(value),
            Template::Capture(name) => Action::capture(name),
            Template::Host { action, .. } => action,
            other => Action::template(other),
        })
    }

    pub(crate) fn parse_template(&mut self) -> Result<Template, ParseError> {
        ensure_sufficient_stack(|| self.parse_template_inner())
    }

    fn parse_template_inner(&mut self) -> Result<Template, ParseError> {
        if let Some(value) = self.parse_literal()? {
            return Ok(Template::Literal(value));
        }
        match self.cursor.current_kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.cursor.advance();
                if !name.is_tag_like() {
                    return Ok(Template::Capture(name));
                }
                if !self.cursor.check(&TokenKind::LParen) {
                    return Ok(Template::Variant {
                        tag: name,
                        fields: Vec::new(),
                    });
                }
                let open = self.cursor.advance().span;
                let fields = self.parse_delimited(&TokenKind::RParen, open, |p| {
                    if p.at_named_field() {
                        let (field, _) = p.cursor.expect_ident()?;
                        p.cursor.advance();
                        Ok((Some(field), p.parse_template()?))
                    } else {
                        Ok((None, p.parse_template()?))
                    }
                })?;
                Ok(Template::Variant { tag: name, fields })
            }
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let mut items =
                    self.parse_delimited(&TokenKind::RParen, open, Self::parse_template)?;
                match items.len() {
                    0 => Err(ParseError::new(
                        ErrorCode::E1009,
                        "expected an action inside `(`",
                        open,
                    )),
                    1 => Ok(items.remove(0)),
                    _ => Ok(Template::Tuple(items)),
                }
            }
            TokenKind::At => {
                self.cursor.advance();
                let (name, span) = self.cursor.expect_ident()?;
                match self.host.action(name.as_str()) {
                    Some(action) => Ok(Template::Host {
                        action: action.clone(),
                        name,
                    }),
                    None => Err(unknown_host_name(
                        "action",
                        &name,
                        span,
                        &self.host.action_names(),
                    )),
                }
            }
            other => Err(ParseError::new(
                ErrorCode::E1009,
                format!("expected an action, found `{}`", other.display_name()),
                self.cursor.current_span(),
            )),
        }
    }
}

/// Error for a guard or action name the host did not register.
pub(crate) fn unknown_host_name(
    what: &str,
    name: &casefn_ir::Name,
    span: casefn_ir::Span,
    known: &[&str],
) -> ParseError {
    let help = if known.is_empty() {
        format!("no host {what}s are registered")
    } else {
        format!("registered {what}s: {}", known.join(", "))
    };
    ParseError::new(
        ErrorCode::E1007,
        format!("unknown host {what} `{name}`"),
        span,
    )
    .with_help(help)
}
