use super::*;
use crate::ErrorCode;
use grass_ir::Span;
use pretty_assertions::assert_eq;

fn render(diag: &Diagnostic, source: Option<&str>) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    if let Some(src) = source {
        emitter = emitter.with_source(src).with_file_path("prog.lawn");
    }
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn header_without_labels() {
    let diag = Diagnostic::error(ErrorCode::E1001).with_message("empty program");
    assert_eq!(render(&diag, None), "error[E1001]: SyntaxError: empty program\n\n");
}

#[test]
fn label_without_source_shows_raw_span() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected `]`")
        .with_label(Span::new(0, 1), "no open definition");
    assert_eq!(
        render(&diag, None),
        "error[E1001]: SyntaxError: unexpected `]`\n  --> <input>@0..1: no open definition\n\n"
    );
}

#[test]
fn label_with_source_shows_snippet() {
    let source = "1 out .1 ]\nfoo foo";
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("unbound name `foo`")
        .with_label(Span::new(11, 14), "not declared")
        .with_note("declare it with `: foo`");
    let expected = "\
error[E1004]: UnboundNameError: unbound name `foo`
  --> prog.lawn:2:1: not declared
    |
  2 | foo foo
    | ^^^
  = note: declare it with `: foo`

";
    assert_eq!(render(&diag, Some(source)), expected);
}

#[test]
fn colors_wrap_severity_when_enabled() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&Diagnostic::error(ErrorCode::E6001).with_message("bad"));
    let out = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
