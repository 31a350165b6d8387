//! Command-line argument parsing for the scenario replayer
//!
//! Supports:
//! - Replaying a YAML scenario file
//! - Overriding the scenario's starting text
//! - An explicit config file instead of the user config
//! - Plain or JSON output, optionally after every step

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::EditorConfig;

/// Replay text-editing scenarios against a buffer
#[derive(Parser, Debug)]
#[command(name = "editbuf", version, about = "Replay text-editing scenarios against a buffer")]
pub struct CliArgs {
    /// Scenario YAML file with starting text and edit steps
    #[arg(value_name = "SCENARIO")]
    pub scenario: PathBuf,

    /// Config file (defaults to ~/.config/editbuf/config.yaml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Starting text, replacing the scenario's
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Print views as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the view after every step, not just the last
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Explicit config file if given (errors are fatal), user config otherwise
    pub fn load_config(&self) -> Result<EditorConfig> {
        match &self.config {
            Some(path) => EditorConfig::load_from(path),
            None => Ok(EditorConfig::load()),
        }
    }
}
