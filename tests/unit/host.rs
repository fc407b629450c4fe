use super::*;

#[test]
fn flat_display_lines_follow_rope_line_breaks() {
    let text = "a\rb\u{2028}c\u{85}d\ne";
    let surface = FlatTextSurface::new(text);
    let lines = surface.display_lines();
    assert_eq!(lines.len(), 5);

    let mut line_start = 0usize;
    for (line_idx, line) in lines.iter().enumerate() {
        assert_eq!(surface.line_of_offset(line_start), Some(line_idx));
        line_start += line.chars().count();
    }
    assert_eq!(line_start, text.chars().count());
}

#[test]
fn structured_display_lines_match_index_lines() {
    let mut surface = StructuredDocumentSurface::new(Document::from_plain_text("one\ntwo\nthree"));
    let lines = surface.display_lines();
    assert_eq!(lines, vec!["one\n", "two\n", "three"]);
    assert_eq!(surface.line_of_offset(8), Some(2));
}

#[test]
fn drawn_lines_stop_at_line_end() {
    let mut out = Vec::new();
    draw_line(&mut out, "ab\r\n", 0, None, 80).unwrap();
    let drawn = String::from_utf8(out).unwrap();
    assert!(drawn.contains("ab"));
    assert!(!drawn.contains('\r'));
    assert!(!drawn.contains('\n'));

    for ch in ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'] {
        assert!(is_line_end(ch));
    }
    assert!(!is_line_end('\t'));
}
