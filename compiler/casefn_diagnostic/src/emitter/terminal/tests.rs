use super::*;
use crate::ErrorCode;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E3003)
        .with_message("unknown variant `Stone`")
        .with_label(Span::new(26, 31), "not declared by the input domain")
        .with_secondary_label(Span::new(0, 6), "domain declared here")
        .with_note("declared variants: Pound, Ounce")
        .with_suggestion("check the tag's spelling")
}

const SOURCE: &str = "domain enum { Pound(float) }\n{ case Stone(q): q }";

fn render(emitter: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut output = Vec::new();
    emitter(&mut output);
    String::from_utf8(output).unwrap_or_default()
}

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, true);
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    });
    assert!(text.contains("error[E3003]: unknown variant `Stone`"));
    assert!(text.contains("--> 26..31: not declared by the input domain"));
    assert!(text.contains("= note: declared variants"));
    assert!(text.contains("= help: check the tag's spelling"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Always, false);
        emitter.emit(&sample_diagnostic());
        emitter.flush();
    });
    assert!(text.contains("\x1b["));
    assert!(text.contains("E3003"));
}

#[test]
fn test_with_source_renders_line_and_column() {
    let diag = Diagnostic::error(ErrorCode::E3003)
        .with_message("unknown variant `Stone`")
        .with_label(Span::new(36, 41), "not declared");
    let text = render(|out| {
        let mut emitter =
            TerminalEmitter::with_color_mode(out, ColorMode::Never, false).with_source("w.case", SOURCE);
        emitter.emit(&diag);
    });
    assert!(text.contains("--> w.case:2:8: not declared"), "got:\n{text}");
    assert!(text.contains("   | { case Stone(q): q }"), "got:\n{text}");
    assert!(text.contains("   |        ^^^^^"), "got:\n{text}");
}

#[test]
fn test_emit_all() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_all(&[
            Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
            Diagnostic::warning(ErrorCode::W3001).with_message("warning 1"),
        ]);
    });
    assert!(text.contains("error 1"));
    assert!(text.contains("warning[W3001]: warning 1"));
}

#[test]
fn test_emit_summary() {
    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(2, 1);
    });
    assert!(text.contains("aborting due to 2 previous errors; 1 warning emitted"));

    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(1, 0);
    });
    assert!(text.contains("previous error"));
    assert!(!text.contains("errors"));

    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 3);
    });
    assert!(text.contains("3 warnings emitted"));

    let text = render(|out| {
        let mut emitter = TerminalEmitter::with_color_mode(out, ColorMode::Never, false);
        emitter.emit_summary(0, 0);
    });
    assert!(text.is_empty());
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}
