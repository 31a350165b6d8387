//! Character storage traits and backends for the text buffer.
//!
//! Provides `TextStorage` (read-only) and `TextStorageMut` (read-write) traits
//! that abstract over different backends (String for small inputs, Rope for documents).
//! All offsets are character indices, never byte indices.

use ropey::Rope;
use std::ops::Range;

/// Read-only view into a character sequence.
pub trait TextStorage {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if storage is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get character at offset, None if out of bounds
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Iterate all characters from the start
    fn chars(&self) -> impl Iterator<Item = char> + '_;

    /// Get slice of text as String (by character indices, clamped)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large documents)
    fn content(&self) -> String;

    /// Number of lines (always >= 1); a trailing newline opens an empty last line
    fn line_count(&self) -> usize {
        self.chars().filter(|c| *c == '\n').count() + 1
    }
}

/// Mutable storage operations. Extends TextStorage.
///
/// Out-of-range offsets are clamped to the end of the storage.
pub trait TextStorageMut: TextStorage {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Insert single character at character offset
    fn insert_char(&mut self, offset: usize, ch: char);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Clear all content
    fn clear(&mut self) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}

// =============================================================================
// StringStorage - for short inputs (single fields, tests)
// =============================================================================

/// Storage wrapping `String`. Character lookups are linear, so this is meant
/// for short inputs.
///
/// `len_chars` and `char_at` both scan from the start of the string. A
/// word-mode move looks up one character per step, so its cost grows with
/// the cursor offset times the word length. Use [`RopeStorage`] for documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringStorage {
    text: String,
}

impl StringStorage {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringStorage from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert char offset to byte offset (clamped to the end)
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextStorage for StringStorage {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.text.chars().skip(start).take(end - start).collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextStorageMut for StringStorage {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert(byte_offset, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        if start_byte < end_byte {
            self.text.replace_range(start_byte..end_byte, "");
        }
    }

    fn clear(&mut self) {
        self.text.clear();
    }
}

// =============================================================================
// RopeStorage - for multi-line documents
// =============================================================================

/// Storage wrapping `ropey::Rope`. Edits stay cheap on large documents.
#[derive(Debug, Clone)]
pub struct RopeStorage {
    rope: Rope,
}

impl RopeStorage {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeStorage from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }
}

impl Default for RopeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStorage for RopeStorage {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextStorageMut for RopeStorage {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn insert_char(&mut self, offset: usize, ch: char) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert_char(clamped, ch);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }

    fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}
