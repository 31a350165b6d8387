//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use editbuf::editable::{StringStorage, TextBuffer, TextStorageMut};
use editbuf::layout::{LayoutRenderer, MarkerRenderer};

/// Rope-backed buffer with the cursor at the given column/row
pub fn test_buffer(text: &str, col: isize, row: isize) -> TextBuffer {
    let mut buffer = TextBuffer::from_text(text);
    buffer.set_cursor_position(col, row);
    buffer.update_select(false);
    buffer
}

/// String-backed buffer with the cursor at the given column/row
pub fn test_string_buffer(text: &str, col: isize, row: isize) -> TextBuffer<StringStorage> {
    let mut buffer = TextBuffer::with_storage(StringStorage::from_text(text));
    buffer.set_cursor_position(col, row);
    buffer.update_select(false);
    buffer
}

/// Rope-backed buffer with `start..end` selected, cursor at `end`
pub fn test_buffer_with_selection(text: &str, start: usize, end: usize) -> TextBuffer {
    let mut buffer = TextBuffer::from_text(text);
    buffer.set_selection(start..end);
    buffer
}

/// Text with `|` at the cursor and `[`/`]` around the selection
pub fn render<S: TextStorageMut>(buffer: &TextBuffer<S>) -> String {
    MarkerRenderer.render(&buffer.view())
}

/// Offsets all inside the text and the selection ordered
pub fn assert_invariants<S: TextStorageMut>(buffer: &TextBuffer<S>) {
    let len = buffer.len_chars();
    assert!(
        buffer.selection_start() <= buffer.selection_end(),
        "selection reversed: {:?}",
        buffer.selection()
    );
    assert!(
        buffer.selection_end() <= len,
        "selection end {} past len {}",
        buffer.selection_end(),
        len
    );
    assert!(
        buffer.cursor() <= len,
        "cursor {} past len {}",
        buffer.cursor(),
        len
    );
}

/// Cursor and selection collapsed onto the same offset
pub fn assert_collapsed_at<S: TextStorageMut>(buffer: &TextBuffer<S>, offset: usize) {
    assert_eq!(buffer.cursor(), offset, "cursor in {:?}", render(buffer));
    assert_eq!(buffer.selection_start(), offset, "start in {:?}", render(buffer));
    assert_eq!(buffer.selection_end(), offset, "end in {:?}", render(buffer));
}
