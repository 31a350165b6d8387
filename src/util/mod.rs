//! Utility modules

pub mod text;

pub use text::{WordStops, DEFAULT_STOP_CHARS};
