//! Domain declarations: `int`, `(float, text?)`, `enum { Pound(float) }`.

use casefn_diagnostic::ErrorCode;
use casefn_ir::{ensure_sufficient_stack, Domain, FieldDef, VariantDef};
use casefn_lexer::TokenKind;

use crate::{ErrorContext, ParseError, Parser};

impl Parser<'_> {
    /// `domain := base "?"*`
    pub(crate) fn parse_domain(&mut self) -> Result<Domain, ParseError> {
        let mut domain = ensure_sufficient_stack(|| self.parse_domain_base())
            .map_err(|e| e.with_context(ErrorContext::DomainDecl))?;
        while self.cursor.eat(&TokenKind::Question) {
            domain = Domain::optional(domain);
        }
        Ok(domain)
    }

    fn parse_domain_base(&mut self) -> Result<Domain, ParseError> {
        let domain = match self.cursor.current_kind() {
            TokenKind::IntType => Domain::Int,
            TokenKind::FloatType => Domain::Float,
            TokenKind::BoolType => Domain::Bool,
            TokenKind::TextType => Domain::Text,
            TokenKind::Underscore => Domain::Unknown,
            TokenKind::LParen => {
                let open = self.cursor.advance().span;
                let mut items =
                    self.parse_delimited(&TokenKind::RParen, open, Self::parse_domain)?;
                return match items.len() {
                    0 => Err(ParseError::new(
                        ErrorCode::E1005,
                        "expected a domain inside `(`",
                        open,
                    )),
                    1 => Ok(items.remove(0)),
                    _ => Ok(Domain::Tuple(items)),
                };
            }
            TokenKind::Enum => {
                self.cursor.advance();
                let open = self.cursor.expect(&TokenKind::LBrace)?;
                let variants =
                    self.parse_delimited(&TokenKind::RBrace, open, Self::parse_variant_def)?;
                return Ok(Domain::variants(variants));
            }
            other => {
                return Err(ParseError::new(
                    ErrorCode::E1005,
                    format!("expected a domain, found `{}`", other.display_name()),
                    self.cursor.current_span(),
                )
                .with_help("domains are `int`, `float`, `bool`, `text`, `_`, tuples or `enum { ... }`"));
            }
        };
        self.cursor.advance();
        Ok(domain)
    }

    /// `variant := Tag ("(" field ("," field)* ")")?`
    fn parse_variant_def(&mut self) -> Result<VariantDef, ParseError> {
        let (tag, span) = self.cursor.expect_ident()?;
        if !tag.is_tag_like() {
            return Err(ParseError::new(
                ErrorCode::E1004,
                format!("variant tag `{tag}` must start with an upper-case letter"),
                span,
            )
            .with_help("lower-case names in patterns are bindings, not tags"));
        }
        if !self.cursor.check(&TokenKind::LParen) {
            return Ok(VariantDef::new(tag, Vec::new()));
        }
        let open = self.cursor.advance().span;
        let fields = self.parse_delimited(&TokenKind::RParen, open, |p| {
            if p.at_named_field() {
                let (name, _) = p.cursor.expect_ident()?;
                p.cursor.advance();
                Ok(FieldDef::named(name, p.parse_domain()?))
            } else {
                Ok(FieldDef::positional(p.parse_domain()?))
            }
        })?;
        Ok(VariantDef::new(tag, fields))
    }
}
