use super::*;

fn numbered(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn select_sets_selection_and_caret() {
    let mut surface = FlatTextSurface::new("hello\nworld");
    assert_eq!(surface.select(8, 3).unwrap(), Resolution::Applied);
    assert_eq!(surface.selection_range(), Some(8..11));
    assert_eq!(surface.selected_text().as_deref(), Some("rld"));
    assert_eq!(surface.caret(), (1, 5));
}

#[test]
fn select_past_end_is_skipped() {
    let mut surface = FlatTextSurface::new("abc");
    surface.select(0, 1).unwrap();
    assert_eq!(surface.select(2, 2).unwrap(), Resolution::Skipped);
    assert_eq!(surface.select(usize::MAX, 2).unwrap(), Resolution::Skipped);
    assert_eq!(surface.selection_range(), Some(0..1));
}

#[test]
fn select_up_to_end_is_applied() {
    let mut surface = FlatTextSurface::new("abc");
    assert_eq!(surface.select(1, 2).unwrap(), Resolution::Applied);
    assert_eq!(surface.selected_text().as_deref(), Some("bc"));
}

#[test]
fn scroll_into_view_follows_match_line() {
    let text = numbered(100);
    let mut surface = FlatTextSurface::new(&text).with_viewport_height(10);
    let offset = text.find("line 42").unwrap();

    surface.scroll_into_view(offset);
    assert!(surface.viewport().is_visible(42));
    assert_eq!(surface.caret(), (42, 0));
    assert_eq!(surface.line_of_offset(offset), Some(42));
}

#[test]
fn unresolvable_scroll_brings_caret_into_view() {
    let text = numbered(100);
    let mut surface = FlatTextSurface::new(&text).with_viewport_height(10);
    surface.buffer.set_cursor(60, 0);

    surface.scroll_into_view(text.len() + 10);
    assert!(surface.viewport().is_visible(60));
}

#[test]
fn position_at_maps_to_row_col() {
    let mut surface = FlatTextSurface::new("ab\ncd");
    assert_eq!(surface.position_at(4), Some((1, 1)));
    assert_eq!(surface.position_at(5), Some((1, 2)));
    assert_eq!(surface.position_at(6), None);
}

#[test]
fn set_text_clears_selection_and_scroll() {
    let text = numbered(50);
    let mut surface = FlatTextSurface::new(&text).with_viewport_height(5);
    surface.select(0, 4).unwrap();
    surface.scroll_to_line(30);
    assert!(surface.viewport().line_offset() > 0);

    surface.set_text("fresh");
    assert_eq!(surface.selection_range(), None);
    assert_eq!(surface.viewport().line_offset(), 0);
    assert_eq!(surface.linear_text(), "fresh");

    surface.reload();
    assert_eq!(surface.linear_text(), "fresh");
}

#[test]
fn focus_and_blur() {
    let mut surface = FlatTextSurface::new("x");
    assert!(!surface.is_focused());
    surface.focus();
    assert!(surface.is_focused());
    surface.blur();
    assert!(!surface.is_focused());
}
