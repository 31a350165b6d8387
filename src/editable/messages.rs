//! Message types for driving a text buffer from an input layer.
//!
//! Key and pointer handlers translate events into `TextEditMsg` values and hand
//! them to [`TextBuffer::apply`]. The enum is serde-tagged so scripted sessions
//! can be written as YAML:
//!
//! ```yaml
//! - op: move_col
//!   direction: forward
//!   word: true
//! - op: insert_char
//!   ch: "!"
//! ```

use serde::{Deserialize, Serialize};

use super::buffer::TextBuffer;
use super::position::Direction;
use super::storage::TextStorageMut;
use crate::tracing::SelectionSnapshot;

/// Unified message type for all buffer operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TextEditMsg {
    // === Content ===
    /// Replace the whole content
    SetText { text: String },
    /// Empty the buffer
    Clear,

    // === Insertion ===
    /// Insert a single character (replaces the selection)
    InsertChar { ch: char },
    /// Insert a string (keeps the selected text)
    InsertText { text: String },

    // === Deletion ===
    /// Delete selection or character before cursor (Backspace)
    Backspace,
    /// Delete the selected range
    RemoveSelection,

    // === Movement ===
    /// Place the cursor at a column and row (negative values reset to 0)
    SetCursorPosition { col: isize, row: isize },
    /// Move one row up or down
    MoveRow {
        direction: Direction,
        #[serde(default)]
        extend: bool,
        #[serde(default)]
        word: bool,
    },
    /// Move one character or word left or right
    MoveCol {
        direction: Direction,
        #[serde(default)]
        extend: bool,
        #[serde(default)]
        word: bool,
    },

    // === Selection ===
    /// Collapse or grow the selection to the cursor
    UpdateSelect { extend: bool },
    /// Select all text
    SelectAll,
    /// Select an explicit range, e.g. from a pointer drag
    SetSelection { start: usize, end: usize },
}

impl TextEditMsg {
    /// Check if this message modifies the text
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::SetText { .. }
                | TextEditMsg::Clear
                | TextEditMsg::InsertChar { .. }
                | TextEditMsg::InsertText { .. }
                | TextEditMsg::Backspace
                | TextEditMsg::RemoveSelection
        )
    }
}

impl<S: TextStorageMut> TextBuffer<S> {
    /// Apply one message to the buffer
    pub fn apply(&mut self, msg: &TextEditMsg) {
        let before = SelectionSnapshot::from_buffer(self);

        match msg {
            TextEditMsg::SetText { text } => self.set_text(text),
            TextEditMsg::Clear => self.clear(),
            TextEditMsg::InsertChar { ch } => self.insert_char(*ch),
            TextEditMsg::InsertText { text } => self.insert_text(text),
            TextEditMsg::Backspace => self.backspace(),
            TextEditMsg::RemoveSelection => self.remove_selection(),
            TextEditMsg::SetCursorPosition { col, row } => self.set_cursor_position(*col, *row),
            TextEditMsg::MoveRow {
                direction,
                extend,
                word,
            } => self.move_cursor_row(*direction, *extend, *word),
            TextEditMsg::MoveCol {
                direction,
                extend,
                word,
            } => self.move_cursor_col(*direction, *extend, *word),
            TextEditMsg::UpdateSelect { extend } => self.update_select(*extend),
            TextEditMsg::SelectAll => self.select_all(),
            TextEditMsg::SetSelection { start, end } => self.set_selection(*start..*end),
        }

        let after = SelectionSnapshot::from_buffer(self);
        if let Some(diff) = before.diff(&after) {
            if msg.is_editing() {
                tracing::debug!(target: "cursor", ?msg, "{}", diff);
            } else {
                tracing::trace!(target: "cursor", ?msg, "{}", diff);
            }
        }
    }
}
