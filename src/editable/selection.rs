//! Selection range type for the text buffer.

use serde::Serialize;
use std::ops::Range;

/// A selection as an ordered pair of character offsets, `start <= end`.
///
/// `start == end` means nothing is selected. Unlike an anchor/head pair the
/// range carries no direction: it only ever grows outward from its bounds
/// (see [`Selection::extend_to`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection from two offsets in either order
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub const fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if selection is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Selected range as a half-open char range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Grow the selection so it reaches `offset`.
    ///
    /// Only a bound that `offset` lies beyond moves: an offset inside the
    /// range leaves it untouched, so moving back toward the middle never
    /// shrinks the opposite side.
    pub fn extend_to(&mut self, offset: usize) {
        if offset > self.end {
            self.end = offset;
        } else if offset < self.start {
            self.start = offset;
        }
    }

    /// Collapse selection to a single offset
    pub fn collapse_to(&mut self, offset: usize) {
        self.start = offset;
        self.end = offset;
    }

    /// Clamp both bounds into `[0, len]`
    pub fn clamp_to(&mut self, len: usize) {
        self.start = self.start.min(len);
        self.end = self.end.min(len);
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
