//! The rule source: optional `domain` declaration, then one closure.
//!
//! ```text
//! source         := ("domain" domain)? "{" clause* "}"
//! clause         := case-label action | cases-group | "default" ":" action
//! case-label     := "case" case-item ("," case-item)* ":"
//! case-item      := pattern ("where" ident)?
//! cases-group    := "cases" pattern ":" action ("," pattern ":" action)* ","?
//! ```
//!
//! A `where` on a non-final case item closes a group: the items up to and
//! including it become one guarded rule, and the remaining items continue
//! in the next rule. All the resulting rules share the label's action.

use casefn_diagnostic::ErrorCode;
use casefn_ir::{Action, Form, Guard, Pattern, Rule, RuleSet, Span};
use casefn_lexer::TokenKind;

use super::template::unknown_host_name;
use crate::{ErrorContext, ParseError, Parser};

/// Case items, the label's `:` span and the shared action.
type CaseClause = (Vec<(Pattern, Option<Guard>)>, Span, Action);

/// First `case`/`cases` keyword seen; the other form is then rejected.
#[derive(Copy, Clone)]
struct FormSeen {
    form: Form,
    span: Span,
}

impl Parser<'_> {
    pub(crate) fn parse_source(&mut self) -> RuleSet {
        let mut rules = RuleSet::new();

        if self.cursor.eat(&TokenKind::Domain) {
            match self.parse_domain() {
                Ok(domain) => rules.domain = Some(domain),
                Err(err) => {
                    self.error(err);
                    while !self.cursor.check(&TokenKind::LBrace) && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
            }
        }

        let open = match self.cursor.expect(&TokenKind::LBrace) {
            Ok(span) => span,
            Err(err) => {
                self.error(
                    err.with_context(ErrorContext::Closure)
                        .with_help("rules are wrapped in `{ ... }`"),
                );
                return rules;
            }
        };

        let mut seen: Option<FormSeen> = None;
        loop {
            match self.cursor.current_kind() {
                TokenKind::RBrace => {
                    self.cursor.advance();
                    break;
                }
                TokenKind::Eof => {
                    let err = ParseError::new(
                        ErrorCode::E1003,
                        "unclosed delimiter: expected `}`",
                        self.cursor.current_span(),
                    )
                    .with_related(open, "closure opened here");
                    self.error(err);
                    break;
                }
                TokenKind::Case => {
                    self.check_form(&mut seen, Form::Full);
                    self.parse_case_clause(&mut rules);
                }
                TokenKind::Cases => {
                    self.check_form(&mut seen, Form::Concise);
                    self.parse_cases_group(&mut rules);
                }
                TokenKind::Default => self.parse_default_clause(&mut rules),
                other => {
                    let err = ParseError::new(
                        ErrorCode::E1001,
                        format!(
                            "expected `case`, `cases`, `default` or `}}`, found `{}`",
                            other.display_name()
                        ),
                        self.cursor.current_span(),
                    )
                    .with_context(ErrorContext::Closure);
                    self.error(err);
                    self.cursor.advance();
                    self.synchronize();
                }
            }
        }

        if !self.cursor.is_at_end() {
            let err = self.cursor.make_expect_error("end of input");
            self.error(err.with_help("a rule source holds exactly one closure"));
        }

        if let Some(seen) = seen {
            rules.form = seen.form;
        }
        rules
    }

    /// Record the closure's form; report a clause of the other form.
    fn check_form(&mut self, seen: &mut Option<FormSeen>, form: Form) {
        let span = self.cursor.current_span();
        match *seen {
            None => *seen = Some(FormSeen { form, span }),
            Some(first) if first.form != form => {
                self.error(
                    ParseError::new(
                        ErrorCode::E1006,
                        "cannot mix `case` and `cases` in one closure",
                        span,
                    )
                    .with_related(first.span, "closure form chosen here")
                    .with_help("use `case` labels throughout, or `cases` entries throughout"),
                );
            }
            Some(_) => {}
        }
    }

    /// `case <items>: <action>`
    fn parse_case_clause(&mut self, rules: &mut RuleSet) {
        let start = self.cursor.advance().span;
        match self.parse_case_clause_inner() {
            Ok((items, colon, action)) => {
                let span = start.merge(colon);
                let mut pending = Vec::new();
                for (pattern, guard) in items {
                    pending.push(pattern);
                    if let Some(guard) = guard {
                        rules.push(
                            Rule::alternatives(std::mem::take(&mut pending), action.clone())
                                .with_guard(guard)
                                .with_span(span),
                        );
                    }
                }
                if !pending.is_empty() {
                    rules.push(Rule::alternatives(pending, action).with_span(span));
                }
            }
            Err(err) => {
                self.error(err.with_context(ErrorContext::CaseLabel));
                self.synchronize();
            }
        }
    }

    fn parse_case_clause_inner(&mut self) -> Result<CaseClause, ParseError> {
        let mut items = Vec::new();
        loop {
            let pattern = self.parse_pattern()?;
            let guard = if self.cursor.check(&TokenKind::Where) {
                Some(self.parse_guard()?)
            } else {
                None
            };
            items.push((pattern, guard));
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        let colon = self.cursor.expect(&TokenKind::Colon)?;
        let action = self.parse_action()?;
        Ok((items, colon, action))
    }

    /// `where <ident>`, resolved against the host's guards.
    fn parse_guard(&mut self) -> Result<Guard, ParseError> {
        self.cursor.expect(&TokenKind::Where)?;
        let (name, span) = self
            .cursor
            .expect_ident()
            .map_err(|e| e.with_context(ErrorContext::Guard))?;
        match self.host.guard(name.as_str()) {
            Some(guard) => Ok(guard.clone()),
            None => Err(
                unknown_host_name("guard", &name, span, &self.host.guard_names())
                    .with_context(ErrorContext::Guard),
            ),
        }
    }

    /// `cases <pattern>: <action>, <pattern>: <action>, ...`
    fn parse_cases_group(&mut self, rules: &mut RuleSet) {
        self.cursor.advance();
        loop {
            match self.parse_cases_entry() {
                Ok(rule) => rules.push(rule),
                Err(err) => {
                    self.error(err.with_context(ErrorContext::ConciseCase));
                    self.synchronize();
                    return;
                }
            }
            if !self.cursor.eat(&TokenKind::Comma) {
                return;
            }
            if matches!(
                self.cursor.current_kind(),
                TokenKind::Case
                    | TokenKind::Cases
                    | TokenKind::Default
                    | TokenKind::RBrace
                    | TokenKind::Eof
            ) {
                return;
            }
        }
    }

    fn parse_cases_entry(&mut self) -> Result<Rule, ParseError> {
        let start = self.cursor.current_span();
        let pattern = self.parse_pattern()?;
        if self.cursor.check(&TokenKind::Where) {
            let where_span = self.cursor.advance().span;
            let guard_span = match self.cursor.current_kind() {
                TokenKind::Ident(_) => self.cursor.advance().span,
                _ => where_span,
            };
            self.error(
                ParseError::new(
                    ErrorCode::E3004,
                    "`where` guards are not allowed in the concise `cases` form",
                    where_span.merge(guard_span),
                )
                .with_context(ErrorContext::ConciseCase)
                .with_help("use `case <pattern> where <guard>: <action>` instead"),
            );
        }
        let colon = self.cursor.expect(&TokenKind::Colon)?;
        let action = self.parse_action()?;
        Ok(Rule::case(pattern, action).with_span(start.merge(colon)))
    }

    /// `default: <action>`
    fn parse_default_clause(&mut self, rules: &mut RuleSet) {
        let start = self.cursor.advance().span;
        let result = match self.cursor.expect(&TokenKind::Colon) {
            Ok(colon) => self.parse_action().map(|action| (colon, action)),
            Err(err) => Err(err),
        };
        match result {
            Ok((colon, action)) => {
                rules.push(Rule::default_case(action).with_span(start.merge(colon)));
            }
            Err(err) => {
                self.error(err.with_context(ErrorContext::DefaultLabel));
                self.synchronize();
            }
        }
    }
}
