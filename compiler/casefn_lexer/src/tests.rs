use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_a_full_form_rule() {
    assert_eq!(
        kinds("case (acc, Pound(q)) where heavy: @convert"),
        vec![
            TokenKind::Case,
            TokenKind::LParen,
            TokenKind::Ident(Name::new("acc")),
            TokenKind::Comma,
            TokenKind::Ident(Name::new("Pound")),
            TokenKind::LParen,
            TokenKind::Ident(Name::new("q")),
            TokenKind::RParen,
            TokenKind::RParen,
            TokenKind::Where,
            TokenKind::Ident(Name::new("heavy")),
            TokenKind::Colon,
            TokenKind::At,
            TokenKind::Ident(Name::new("convert")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_are_not_identifiers() {
    assert_eq!(
        kinds("cases default absent int text _ _x"),
        vec![
            TokenKind::Cases,
            TokenKind::Default,
            TokenKind::Absent,
            TokenKind::IntType,
            TokenKind::TextType,
            TokenKind::Underscore,
            TokenKind::Ident(Name::new("_x")),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn literals() {
    assert_eq!(
        kinds(r#"15_000 0.373 "a\"b" true"#),
        vec![
            TokenKind::Int(15_000),
            TokenKind::Float(0.373),
            TokenKind::Text("a\"b".to_string()),
            TokenKind::True,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn comments_and_newlines_are_trivia() {
    assert_eq!(
        kinds("case 1: // one\n  \"one\""),
        vec![
            TokenKind::Case,
            TokenKind::Int(1),
            TokenKind::Colon,
            TokenKind::Text("one".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn spans_cover_the_slice() {
    let out = lex("case Ounce");
    assert_eq!(out.tokens[1].span, Span::new(5, 10));
    assert_eq!(out.tokens[2].span, Span::point(10));
}

#[test]
fn errors_are_reported_and_lexing_continues() {
    let out = lex("case 1 $ 2");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::InvalidChar('$'));
    assert_eq!(out.errors[0].code(), casefn_diagnostic::ErrorCode::E0001);
    assert_eq!(out.tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
    assert!(out.tokens.iter().any(|t| t.kind == TokenKind::Int(2)));
}

#[test]
fn unterminated_text() {
    let out = lex("case \"abc");
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, LexErrorKind::UnterminatedText);
    assert_eq!(out.errors[0].to_diagnostic().code, casefn_diagnostic::ErrorCode::E0002);
}

#[test]
fn integer_overflow_is_invalid_number() {
    let out = lex("99999999999999999999");
    assert_eq!(
        out.errors[0].kind,
        LexErrorKind::InvalidNumber("99999999999999999999".to_string())
    );
}

proptest! {
    #[test]
    fn lexing_never_panics_and_ends_with_eof(source in "\\PC{0,64}") {
        let out = lex(&source);
        prop_assert_eq!(out.tokens.last().map(|t| t.kind.clone()), Some(TokenKind::Eof));
    }

    #[test]
    fn non_negative_ints_round_trip(n in 0_i64..i64::MAX) {
        prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Int(n), TokenKind::Eof]);
    }
}
