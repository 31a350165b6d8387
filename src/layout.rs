//! Renderer-facing boundary of the buffer.
//!
//! The buffer never calls into rendering. A renderer asks for a [`BufferView`],
//! a read-only snapshot of text, cursor, and selection, and turns it into
//! whatever it draws. Fonts, colours, and glyph placement stay on the
//! renderer's side of the [`LayoutRenderer`] trait.

use serde::Serialize;

use crate::editable::{RowCol, Selection, TextBuffer, TextStorageMut};

/// Read-only snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BufferView {
    pub text: String,
    pub cursor: usize,
    pub selection: Selection,
}

/// Highlighted columns `[start_col, end_col)` on one row of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowSpan {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl BufferView {
    /// Selection bounds in order; a hand-built view may carry them reversed
    fn ordered_selection(&self) -> Selection {
        Selection::new(self.selection.start, self.selection.end)
    }

    pub fn selected_text(&self) -> String {
        let Selection { start, end } = self.ordered_selection();
        self.text.chars().skip(start).take(end - start).collect()
    }

    /// Row and column of the cursor
    pub fn cursor_row_col(&self) -> RowCol {
        self.text
            .chars()
            .take(self.cursor)
            .fold(RowCol::zero(), |pos, ch| {
                if ch == '\n' {
                    RowCol::new(pos.row + 1, 0)
                } else {
                    RowCol::new(pos.row, pos.col + 1)
                }
            })
    }

    /// Split the selection into one highlighted span per row it touches.
    ///
    /// A row the selection runs off the end of is highlighted up to its
    /// newline; the next row's span then starts at column 0.
    pub fn selection_rows(&self) -> Vec<RowSpan> {
        let Selection { start, end } = self.ordered_selection();
        let mut spans = Vec::new();
        if start == end {
            return spans;
        }

        let mut row = 0;
        let mut col = 0;
        let mut span_start: Option<usize> = None;

        for (offset, ch) in self.text.chars().enumerate() {
            if offset == start {
                span_start = Some(col);
            }
            if offset == end {
                break;
            }
            if ch == '\n' {
                if let Some(start_col) = span_start {
                    spans.push(RowSpan {
                        row,
                        start_col,
                        end_col: col,
                    });
                    span_start = Some(0);
                }
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }

        if let Some(start_col) = span_start {
            spans.push(RowSpan {
                row,
                start_col,
                end_col: col,
            });
        }
        spans
    }
}

impl<S: TextStorageMut> TextBuffer<S> {
    /// Snapshot for a renderer
    pub fn view(&self) -> BufferView {
        BufferView {
            text: self.text(),
            cursor: self.cursor(),
            selection: self.selection(),
        }
    }
}

/// Turns a buffer snapshot into visual output.
pub trait LayoutRenderer {
    type Output;

    fn render(&mut self, view: &BufferView) -> Self::Output;
}

/// Plain-text renderer marking the cursor and selection inline.
///
/// `|` marks the cursor, `[` and `]` the selection bounds. Used by the
/// command-line replay and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerRenderer;

impl LayoutRenderer for MarkerRenderer {
    type Output = String;

    fn render(&mut self, view: &BufferView) -> String {
        let Selection { start, end } = view.ordered_selection();
        let mut out = String::with_capacity(view.text.len() + 3);

        let mark = |offset: usize, out: &mut String| {
            if start != end && offset == start {
                out.push('[');
            }
            if offset == view.cursor {
                out.push('|');
            }
            if start != end && offset == end {
                out.push(']');
            }
        };

        let mut len = 0;
        for (offset, ch) in view.text.chars().enumerate() {
            mark(offset, &mut out);
            out.push(ch);
            len = offset + 1;
        }
        mark(len, &mut out);
        out
    }
}
