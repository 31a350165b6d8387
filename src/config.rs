//! Editor configuration persistence
//!
//! Stores buffer preferences in `~/.config/editbuf/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{RopeStorage, TextBuffer, TextStorageMut};
use crate::util::{WordStops, DEFAULT_STOP_CHARS};

/// Where the cursor starts when a buffer is created with text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPlacement {
    /// Offset 0
    #[default]
    Start,
    /// After the last character
    End,
}

/// Which storage backend the binary builds buffers on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    #[default]
    Rope,
    String,
}

/// Buffer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Characters that end a word-mode move
    #[serde(default = "default_word_stop_chars")]
    pub word_stop_chars: String,

    /// Cursor placement for buffers created with text
    #[serde(default)]
    pub initial_cursor: CursorPlacement,

    #[serde(default)]
    pub storage: StorageKind,
}

fn default_word_stop_chars() -> String {
    DEFAULT_STOP_CHARS.to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            word_stop_chars: default_word_stop_chars(),
            initial_cursor: CursorPlacement::default(),
            storage: StorageKind::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn word_stops(&self) -> WordStops {
        WordStops::new(&self.word_stop_chars)
    }

    /// Apply stop characters and initial cursor placement to a fresh buffer
    pub fn configure<S: TextStorageMut>(&self, buffer: TextBuffer<S>) -> TextBuffer<S> {
        let mut buffer = buffer.with_word_stops(self.word_stops());
        if self.initial_cursor == CursorPlacement::End {
            let end = buffer.len_chars();
            buffer.set_selection(end..end);
        }
        buffer
    }
}

impl TextBuffer<RopeStorage> {
    /// Buffer preloaded with `text`, using the configured stop characters
    /// and initial cursor placement
    pub fn with_config(text: &str, config: &EditorConfig) -> Self {
        config.configure(Self::from_text(text))
    }
}
