//! TextBuffer - character sequence plus cursor and selection offsets.
//!
//! Every offset is a char index between characters: offset `k` sits before
//! character `k`. The buffer keeps three offsets (cursor, selection start,
//! selection end) inside `[0, len]` after every public call; requests that
//! point outside the text are clamped or ignored, never reported as errors.

use std::ops::Range;

use crate::util::WordStops;

use super::position::{Direction, RowCol};
use super::selection::Selection;
use super::storage::{RopeStorage, TextStorageMut};

/// Editable text with a single cursor and a grow-only selection range.
///
/// Generic over the storage backend S (RopeStorage for documents, StringStorage for short inputs).
#[derive(Debug, Clone)]
pub struct TextBuffer<S: TextStorageMut = RopeStorage> {
    storage: S,
    cursor: usize,
    selection: Selection,
    word_stops: WordStops,
}

impl TextBuffer<RopeStorage> {
    /// Empty buffer, cursor and selection at 0
    pub fn new() -> Self {
        Self::with_storage(RopeStorage::new())
    }

    /// Buffer preloaded with `text`.
    ///
    /// The cursor and selection start at offset 0, not at the end of the text.
    pub fn from_text(text: &str) -> Self {
        Self::with_storage(RopeStorage::from_text(text))
    }
}

impl Default for TextBuffer<RopeStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TextStorageMut> TextBuffer<S> {
    /// Wrap existing storage; cursor and selection start at offset 0
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            cursor: 0,
            selection: Selection::collapsed(0),
            word_stops: WordStops::default(),
        }
    }

    /// Replace the stop characters used by word-mode moves
    pub fn with_word_stops(mut self, word_stops: WordStops) -> Self {
        self.word_stops = word_stops;
        self
    }

    pub fn set_word_stops(&mut self, word_stops: WordStops) {
        self.word_stops = word_stops;
    }

    pub fn word_stops(&self) -> &WordStops {
        &self.word_stops
    }

    /// Read-only access to the storage backend
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Full content as a String
    pub fn text(&self) -> String {
        self.storage.content()
    }

    /// Insertion point
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selection_start(&self) -> usize {
        self.selection.start
    }

    pub fn selection_end(&self) -> usize {
        self.selection.end
    }

    /// Check if there is a non-empty selection
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn len_chars(&self) -> usize {
        self.storage.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.storage.line_count()
    }

    /// The selected text (empty string if the selection is collapsed)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.storage.slice(self.selection.range())
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the whole content.
    ///
    /// Offsets keep their numeric values; they are not mapped onto the new
    /// text, only clamped so they stay inside it. Callers that want a fresh
    /// position set it explicitly afterwards.
    pub fn set_text(&mut self, text: &str) {
        self.storage.set_content(text);
        let len = self.storage.len_chars();
        self.cursor = self.cursor.min(len);
        self.selection.clamp_to(len);
        tracing::debug!(
            len = len,
            cursor = self.cursor,
            start = self.selection.start,
            end = self.selection.end,
            "replaced buffer content"
        );
        self.check_invariants();
    }

    /// Empty the buffer and collapse everything to offset 0
    pub fn clear(&mut self) {
        self.storage.clear();
        self.cursor = 0;
        self.selection = Selection::collapsed(0);
        self.check_invariants();
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert a character at the cursor, replacing the selection if there is one
    pub fn insert_char(&mut self, ch: char) {
        if !self.selection.is_empty() {
            self.delete_selected_range();
        }
        self.storage.insert_char(self.cursor, ch);
        self.cursor += 1;
        self.update_select(false);
        self.check_invariants();
    }

    /// Insert text at the cursor.
    ///
    /// Unlike [`insert_char`](Self::insert_char) an existing selection is not
    /// removed first: the text lands at the cursor and the selection then
    /// collapses behind it.
    pub fn insert_text(&mut self, text: &str) {
        self.storage.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.update_select(false);
        self.check_invariants();
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    /// Delete the selection, or the character before the cursor (Backspace)
    pub fn backspace(&mut self) {
        if !self.selection.is_empty() {
            self.delete_selected_range();
        } else if self.cursor > 0 {
            self.storage.remove(self.cursor - 1..self.cursor);
            self.cursor -= 1;
        }
        self.update_select(false);
        self.check_invariants();
    }

    /// Remove the selected range and collapse at its start.
    ///
    /// With nothing selected no text is removed, but the cursor still moves
    /// to the selection start.
    pub fn remove_selection(&mut self) {
        self.delete_selected_range();
        self.update_select(false);
        self.check_invariants();
    }

    fn delete_selected_range(&mut self) {
        let range = self.selection.range();
        self.storage.remove(range.clone());
        self.cursor = range.start;
    }

    // =========================================================================
    // Cursor positioning
    // =========================================================================

    /// Place the cursor at a 0-based column and row.
    ///
    /// A negative column or row puts the cursor at offset 0. A row past the
    /// last one stops at the end of the text, and a column past the end of
    /// its row stops at the row's newline. The selection is left alone.
    pub fn set_cursor_position(&mut self, col: isize, row: isize) {
        if col < 0 || row < 0 {
            self.cursor = 0;
            return;
        }
        let (col, row) = (col as usize, row as usize);

        let mut chars = self.storage.chars();
        let mut offset = 0;

        let mut current_row = 0;
        while current_row < row {
            match chars.next() {
                Some(ch) => {
                    offset += 1;
                    if ch == '\n' {
                        current_row += 1;
                    }
                }
                None => break,
            }
        }

        let mut current_col = 0;
        while current_col < col {
            match chars.next() {
                Some('\n') | None => break,
                Some(_) => {
                    offset += 1;
                    current_col += 1;
                }
            }
        }

        self.cursor = offset.min(self.storage.len_chars());
    }

    /// Number of newlines before the cursor
    pub fn current_row(&self) -> usize {
        self.storage
            .chars()
            .take(self.cursor)
            .filter(|ch| *ch == '\n')
            .count()
    }

    /// Characters between the start of the cursor's row and the cursor
    pub fn current_col(&self) -> usize {
        self.storage
            .chars()
            .take(self.cursor)
            .fold(0, |col, ch| if ch == '\n' { 0 } else { col + 1 })
    }

    pub fn current_row_col(&self) -> RowCol {
        RowCol::new(self.current_row(), self.current_col())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the same column one row up or down.
    ///
    /// Goes through [`set_cursor_position`](Self::set_cursor_position), so
    /// moving up from the first row lands on offset 0 and moving down from
    /// the last row lands on the end of the text. `_word_mode` has no effect
    /// on row moves.
    pub fn move_cursor_row(&mut self, direction: Direction, extend: bool, _word_mode: bool) {
        let RowCol { row, col } = self.current_row_col();
        self.set_cursor_position(col as isize, row as isize + direction.delta());
        self.update_select(extend);
        self.check_invariants();
    }

    /// Move one character, or one word in word mode, left or right.
    ///
    /// A plain move at either end of the text does nothing at all. A word
    /// move steps one character at a time, updating the selection after each
    /// step, and stops once the next character it would cross is a stop
    /// character or there is no next character.
    pub fn move_cursor_col(&mut self, direction: Direction, extend: bool, word_mode: bool) {
        // Moves never change the text, so the length holds for the whole loop
        let len = self.storage.len_chars();
        if word_mode {
            while self.step(direction, len) {
                self.update_select(extend);
                match self.char_ahead(direction) {
                    Some(ch) if !self.word_stops.is_stop(ch) => {}
                    _ => break,
                }
            }
        } else if self.step(direction, len) {
            self.update_select(extend);
        }
        self.check_invariants();
    }

    /// Advance the cursor one position within `[0, len]`; false at the boundary
    fn step(&mut self, direction: Direction, len: usize) -> bool {
        match direction {
            Direction::Backward if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            Direction::Forward if self.cursor < len => {
                self.cursor += 1;
                true
            }
            _ => false,
        }
    }

    /// The character the next step in `direction` would cross
    fn char_ahead(&self, direction: Direction) -> Option<char> {
        match direction {
            Direction::Backward => self
                .cursor
                .checked_sub(1)
                .and_then(|offset| self.storage.char_at(offset)),
            Direction::Forward => self.storage.char_at(self.cursor),
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Reconcile the selection with the cursor after a cursor move.
    ///
    /// Without `extend` the selection collapses onto the cursor. With
    /// `extend` it grows to include the cursor; a cursor already inside the
    /// range changes nothing, so the range never shrinks here.
    pub fn update_select(&mut self, extend: bool) {
        if extend {
            self.selection.extend_to(self.cursor);
        } else {
            self.selection.collapse_to(self.cursor);
        }
        tracing::trace!(
            target: "selection",
            extend = extend,
            cursor = self.cursor,
            start = self.selection.start,
            end = self.selection.end,
            "updated selection"
        );
    }

    /// Select the whole text, cursor at the end
    pub fn select_all(&mut self) {
        let len = self.storage.len_chars();
        self.selection = Selection::new(0, len);
        self.cursor = len;
        self.check_invariants();
    }

    /// Select `range` (clamped, either order) and put the cursor at its end
    pub fn set_selection(&mut self, range: Range<usize>) {
        let len = self.storage.len_chars();
        self.selection = Selection::new(range.start.min(len), range.end.min(len));
        self.cursor = self.selection.end;
        self.check_invariants();
    }

    /// Offsets outside the text would corrupt every later move; treat as fatal.
    fn check_invariants(&self) {
        let len = self.storage.len_chars();
        assert!(
            self.selection.start <= self.selection.end
                && self.selection.end <= len
                && self.cursor <= len,
            "buffer offsets out of range: cursor={} selection={}..{} len={}",
            self.cursor,
            self.selection.start,
            self.selection.end,
            len
        );
    }
}
