//! Selection behavior tests

mod common;

use common::{assert_collapsed_at, render, test_buffer, test_buffer_with_selection};
use editbuf::editable::{Selection, TextBuffer};
use editbuf::Direction;

// ========================================================================
// update_select
// ========================================================================

#[test]
fn test_update_select_false_collapses_to_cursor() {
    let mut buffer = test_buffer_with_selection("hello world", 2, 7);
    buffer.set_cursor_position(9, 0);
    buffer.update_select(false);
    assert_collapsed_at(&buffer, 9);
}

#[test]
fn test_update_select_false_is_idempotent() {
    let mut once = test_buffer_with_selection("hello world", 2, 7);
    once.set_cursor_position(4, 0);
    let mut twice = once.clone();

    once.update_select(false);
    twice.update_select(false);
    twice.update_select(false);

    assert_eq!(once.cursor(), twice.cursor());
    assert_eq!(once.selection(), twice.selection());
}

#[test]
fn test_extend_right_then_left_across_anchor_keeps_right_side() {
    let mut buffer = test_buffer("abcdef", 3, 0);

    buffer.move_cursor_col(Direction::Forward, true, false);
    buffer.move_cursor_col(Direction::Forward, true, false);
    assert_eq!(buffer.selection(), Selection::new(3, 5));

    // Dragging back across the anchor grows the left side; the right stays
    for _ in 0..4 {
        buffer.move_cursor_col(Direction::Backward, true, false);
    }
    assert_eq!(buffer.cursor(), 1);
    assert_eq!(buffer.selection(), Selection::new(1, 5));
    assert_eq!(render(&buffer), "a[|bcde]f");
}

#[test]
fn test_extend_never_shrinks_while_cursor_inside() {
    let mut buffer = test_buffer_with_selection("abcdef", 1, 5);
    let before = buffer.selection();

    for col in [2, 3, 4, 1, 5] {
        buffer.set_cursor_position(col, 0);
        buffer.update_select(true);
        assert_eq!(buffer.selection(), before, "cursor at {}", col);
    }
}

#[test]
fn test_extend_grows_both_sides() {
    let mut buffer = test_buffer("abcdef", 3, 0);
    buffer.set_cursor_position(5, 0);
    buffer.update_select(true);
    buffer.set_cursor_position(0, 0);
    buffer.update_select(true);
    assert_eq!(buffer.selected_text(), "abcde");
}

#[test]
fn test_extend_across_rows() {
    let mut buffer = test_buffer("ab\ncd\nef", 1, 0);
    buffer.move_cursor_row(Direction::Forward, true, false);
    buffer.move_cursor_row(Direction::Forward, true, false);
    assert_eq!(buffer.selected_text(), "b\ncd\ne");

    let rows = buffer.view().selection_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!((rows[0].row, rows[0].start_col, rows[0].end_col), (0, 1, 2));
    assert_eq!((rows[2].row, rows[2].start_col, rows[2].end_col), (2, 0, 1));
}

// ========================================================================
// select_all / set_selection
// ========================================================================

#[test]
fn test_select_all_then_type_replaces_everything() {
    let mut buffer = TextBuffer::from_text("old\ncontent");
    buffer.select_all();
    assert_eq!(buffer.selected_text(), "old\ncontent");

    buffer.insert_char('n');
    assert_eq!(buffer.text(), "n");
    assert_collapsed_at(&buffer, 1);
}

#[test]
fn test_select_all_empty_buffer() {
    let mut buffer = TextBuffer::new();
    buffer.select_all();
    assert!(!buffer.has_selection());
    assert_collapsed_at(&buffer, 0);
}

#[test]
fn test_set_selection_past_end_is_clamped() {
    let mut buffer = TextBuffer::from_text("hello");
    buffer.set_selection(3..50);
    assert_eq!(buffer.selected_text(), "lo");
    assert_eq!(buffer.cursor(), 5);
}

#[test]
fn test_selected_text_multibyte() {
    let buffer = test_buffer_with_selection("naïve café", 2, 8);
    assert_eq!(buffer.selected_text(), "ïve ca");
}

// ========================================================================
// Scenario: word-select then type
// ========================================================================

#[test]
fn test_word_select_then_type_replaces_word() {
    let mut buffer = TextBuffer::from_text("hello world");
    buffer.move_cursor_col(Direction::Forward, true, true);
    assert_eq!(buffer.selected_text(), "hello");

    buffer.insert_char('J');
    assert_eq!(buffer.text(), "J world");
    assert_collapsed_at(&buffer, 1);
}

#[test]
fn test_remove_selection_then_selected_text_is_empty() {
    for (start, end) in [(0, 0), (0, 5), (3, 8), (6, 11)] {
        let mut buffer = test_buffer_with_selection("hello world", start, end);
        buffer.remove_selection();
        assert_eq!(buffer.selected_text(), "");
        assert_eq!(buffer.len_chars(), 11 - (end - start));
    }
}
