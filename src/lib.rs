//! editbuf - in-memory text buffer for editing widgets
//!
//! This crate provides a character buffer with a cursor and a selection range,
//! plus the configuration, logging, and renderer boundary around it.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod layout;
pub mod scenario;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{Direction, Selection, TextBuffer, TextEditMsg};
pub use layout::{BufferView, LayoutRenderer};
