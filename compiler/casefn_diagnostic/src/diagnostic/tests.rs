use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E3006)
        .with_message("rule set is not exhaustive")
        .with_label(Span::new(0, 12), "missing `false`")
        .with_note("guarded rules do not count toward coverage")
        .with_suggestion("add a `default:` rule");

    assert_eq!(diag.code, ErrorCode::E3006);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.primary_span(), Some(Span::new(0, 12)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_dummy_spans_are_not_labeled() {
    let diag = Diagnostic::error(ErrorCode::E3001)
        .with_message("duplicate binding")
        .with_label(Span::DUMMY, "here");
    assert!(diag.labels.is_empty());
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_warning_promotion() {
    let warn = Diagnostic::warning(ErrorCode::W3001).with_message("unreachable rule");
    assert!(warn.is_warning());
    let promoted = warn.into_error();
    assert!(promoted.is_error());
    assert_eq!(promoted.code, ErrorCode::W3001);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::warning(ErrorCode::W3001)
        .with_message("unreachable rule")
        .with_label(Span::new(20, 26), "never runs")
        .with_secondary_label(Span::new(0, 8), "already covered here")
        .with_suggestion("remove this rule");

    assert_eq!(
        diag.to_string(),
        "warning [W3001]: unreachable rule\n  \
         --> 20..26: never runs\n      \
         0..8: already covered here\n  \
         = help: remove this rule"
    );
}

#[test]
fn test_unclosed_delimiter() {
    let diag = unclosed_delimiter(Span::new(3, 4), Span::new(20, 20), '{');
    assert_eq!(diag.code, ErrorCode::E1003);
    assert_eq!(diag.labels.len(), 2);
    assert!(diag.labels[0].message.contains('}'));
}
