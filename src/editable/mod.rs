//! Editable text buffer with cursor and range-selection semantics.
//!
//! This module holds the text-editing state machine behind an editing widget:
//! a character sequence, an insertion cursor, and a selection range, kept
//! mutually consistent under every insertion, deletion, and navigation call.
//!
//! # Architecture
//!
//! - [`TextStorage`] / [`TextStorageMut`]: Traits abstracting over character storage
//! - [`StringStorage`]: Storage for short inputs (backed by `String`)
//! - [`RopeStorage`]: Storage for multi-line documents (backed by `ropey::Rope`)
//! - [`TextBuffer`]: Cursor, selection, and every editing/navigation operation
//! - [`Selection`]: Ordered, grow-only selection range
//! - [`TextEditMsg`]: Serializable message type for scripted or event-driven input
//!
//! # Example
//!
//! ```
//! use editbuf::editable::{Direction, TextBuffer};
//!
//! let mut buffer = TextBuffer::from_text("hello world");
//! buffer.move_cursor_col(Direction::Forward, true, true);
//! assert_eq!(buffer.selected_text(), "hello");
//!
//! buffer.insert_char('J');
//! assert_eq!(buffer.text(), "J world");
//! ```

mod buffer;
mod messages;
mod position;
mod selection;
mod storage;

// Re-export main types
pub use buffer::TextBuffer;
pub use messages::TextEditMsg;
pub use position::{Direction, RowCol};
pub use selection::Selection;
pub use storage::{RopeStorage, StringStorage, TextStorage, TextStorageMut};
