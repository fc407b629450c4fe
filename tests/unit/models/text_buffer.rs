use super::*;

#[test]
fn empty_buffer() {
    let buffer = TextBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.len_lines(), 1);
    assert_eq!(buffer.text(), "");
}

#[test]
fn char_to_pos_maps_across_lines() {
    let buffer = TextBuffer::from_text("ab\n你好\nx");
    assert_eq!(buffer.char_to_pos(0).unwrap(), (0, 0));
    assert_eq!(buffer.char_to_pos(3).unwrap(), (1, 0));
    assert_eq!(buffer.char_to_pos(5).unwrap(), (1, 2));
    assert_eq!(buffer.char_to_pos(7).unwrap(), (2, 1));
    assert!(buffer.char_to_pos(8).is_err());
}

#[test]
fn pos_to_char_round_trips() {
    let buffer = TextBuffer::from_text("one\ntwo\nthree");
    for offset in 0..=buffer.len_chars() {
        let pos = buffer.char_to_pos(offset).unwrap();
        assert_eq!(buffer.pos_to_char(pos).unwrap(), offset);
    }
}

#[test]
fn selection_exposes_char_range_and_text() {
    let mut buffer = TextBuffer::from_text("hello\nworld");
    assert!(!buffer.has_selection());

    buffer.set_selection(Some(Selection::between((1, 3), (0, 3))));
    assert!(buffer.has_selection());
    assert_eq!(buffer.selection_char_range(), Some(3..9));
    assert_eq!(buffer.selected_text().as_deref(), Some("lo\nwor"));

    buffer.clear_selection();
    assert_eq!(buffer.selected_text(), None);
}

#[test]
fn set_text_resets_cursor_and_selection() {
    let mut buffer = TextBuffer::from_text("abc");
    buffer.set_cursor(0, 2);
    buffer.set_selection(Some(Selection::between((0, 0), (0, 2))));

    buffer.set_text("xyz\n");
    assert_eq!(buffer.cursor(), (0, 0));
    assert!(buffer.selection().is_none());
    assert_eq!(buffer.len_lines(), 2);
    assert_eq!(buffer.line(0).as_deref(), Some("xyz\n"));
    assert_eq!(buffer.line(2), None);
}

#[test]
fn slice_to_cow_borrows_small_slices() {
    let rope = Rope::from_str("short");
    assert!(matches!(slice_to_cow(rope.slice(..)), Cow::Borrowed("short")));
}
