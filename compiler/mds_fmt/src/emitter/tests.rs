use super::*;
use pretty_assertions::assert_eq;

#[test]
fn string_emitter_uses_line_ending() {
    let mut emitter = StringEmitter::new(LineEnding::Lf);
    emitter.emit("a:", Style::Plain);
    emitter.emit_line_break();
    emitter.emit("\t", Style::Plain);
    assert!(emitter.ends_with_tab());
    assert_eq!(emitter.output(), "a:\n\t");

    let mut crlf = StringEmitter::default();
    crlf.emit("x", Style::Terminal);
    crlf.emit_line_break();
    assert!(!crlf.ends_with_tab());
    assert_eq!(crlf.output(), "x\r\n");
}

#[test]
fn color_emitter_splits_lines() {
    let mut emitter = ColorEmitter::new();
    emitter.emit("a", Style::ProductionName);
    emitter.emit(":", Style::Plain);
    emitter.emit_line_break();
    emitter.emit_line_break();
    emitter.emit("\t", Style::Plain);
    assert!(emitter.ends_with_tab());
    emitter.emit("", Style::Comment);
    emitter.emit("'x'", Style::Terminal);

    let lines = emitter.finish();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].text(), "a:");
    assert_eq!(lines[0].words[0].style, Style::ProductionName);
    assert!(lines[1].words.is_empty());
    assert_eq!(lines[2].text(), "\t'x'");
}
