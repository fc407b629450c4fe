use super::*;

fn cursor_with(offsets: Vec<usize>) -> NavigationCursor {
    let mut cursor = NavigationCursor::new();
    cursor.reset(MatchSet::new(offsets, 2));
    cursor
}

#[test]
fn reset_selects_first_match() {
    let cursor = cursor_with(vec![0, 2, 4]);
    assert_eq!(cursor.current_index(), Some(0));
    assert_eq!(cursor.current(), Some(0));
    assert_eq!(cursor.position(), Some((1, 3)));
}

#[test]
fn reset_with_empty_set_clears_current() {
    let mut cursor = cursor_with(vec![0, 2]);
    cursor.reset(MatchSet::empty());
    assert_eq!(cursor.current_index(), None);
    assert_eq!(cursor.position(), None);
    assert!(cursor.is_empty());
}

#[test]
fn next_wraps_around() {
    let mut cursor = cursor_with(vec![0, 2, 4]);
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(cursor.next(), Some(4));
    assert_eq!(cursor.next(), Some(0));
    assert_eq!(cursor.current_index(), Some(0));
}

#[test]
fn previous_wraps_from_first_to_last() {
    let mut cursor = cursor_with(vec![0, 2, 4]);
    assert_eq!(cursor.previous(), Some(4));
    assert_eq!(cursor.previous(), Some(2));
    assert_eq!(cursor.position(), Some((2, 3)));
}

#[test]
fn navigation_on_empty_set_is_noop() {
    let mut cursor = NavigationCursor::new();
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.previous(), None);
    assert_eq!(cursor.current_index(), None);
}

#[test]
fn next_and_previous_len_times_return_to_start() {
    let mut cursor = cursor_with(vec![1, 3, 5, 7, 9]);
    cursor.next();
    let start = cursor.current_index();
    for _ in 0..cursor.len() {
        cursor.next();
    }
    assert_eq!(cursor.current_index(), start);
    for _ in 0..cursor.len() {
        cursor.previous();
    }
    assert_eq!(cursor.current_index(), start);
}

#[test]
fn single_match_stays_put() {
    let mut cursor = cursor_with(vec![3]);
    assert_eq!(cursor.next(), Some(3));
    assert_eq!(cursor.previous(), Some(3));
    assert_eq!(cursor.position(), Some((1, 1)));
}

#[test]
fn jump_to_out_of_range_keeps_state() {
    let mut cursor = cursor_with(vec![0, 2, 4]);
    assert_eq!(cursor.jump_to(2), Some(4));
    assert_eq!(cursor.jump_to(3), None);
    assert_eq!(cursor.current_index(), Some(2));
}
