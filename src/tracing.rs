//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! cursor, selection, and state transition issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=cursor=trace,selection=trace` - scoped filtering
//! - `RUST_LOG=editbuf::editable=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/editbuf/logs/editbuf.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::{TextBuffer, TextStorageMut};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering (default `warn`).
/// File logging writes to `~/.config/editbuf/logs/editbuf.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, stderr so stdout stays clean for output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "editbuf.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub len: usize,
    pub cursor: usize,
    pub start: usize,
    pub end: usize,
}

impl SelectionSnapshot {
    pub fn from_buffer<S: TextStorageMut>(buffer: &TextBuffer<S>) -> Self {
        Self {
            len: buffer.len_chars(),
            cursor: buffer.cursor(),
            start: buffer.selection_start(),
            end: buffer.selection_end(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.start != other.start || self.end != other.end {
            let was_empty = self.start == self.end;
            let is_empty = other.start == other.end;
            let status = match (was_empty, is_empty) {
                (true, false) => " (active)",
                (false, true) => " (cleared)",
                _ => "",
            };
            changes.push(format!(
                "selection: {}..{} → {}..{}{}",
                self.start, self.end, other.start, other.end, status
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(len: usize, cursor: usize, start: usize, end: usize) -> SelectionSnapshot {
        SelectionSnapshot {
            len,
            cursor,
            start,
            end,
        }
    }

    #[test]
    fn test_diff_identical_is_none() {
        let a = snapshot(5, 2, 2, 2);
        assert_eq!(a.diff(&a), None);
    }

    #[test]
    fn test_diff_reports_cursor_and_selection() {
        let before = snapshot(5, 2, 2, 2);
        let after = snapshot(5, 4, 2, 4);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("cursor: 2 → 4"));
        assert!(diff.contains("selection: 2..2 → 2..4 (active)"));
    }

    #[test]
    fn test_diff_reports_cleared_selection() {
        let before = snapshot(5, 4, 2, 4);
        let after = snapshot(3, 2, 2, 2);
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("len: 5 → 3"));
        assert!(diff.contains("(cleared)"));
    }

    #[test]
    fn test_from_buffer() {
        let mut buffer = TextBuffer::from_text("hello");
        buffer.set_selection(1..3);
        assert_eq!(SelectionSnapshot::from_buffer(&buffer), snapshot(5, 3, 1, 3));
    }
}
