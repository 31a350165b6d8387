//! Scripted editing sessions.
//!
//! A scenario is a YAML file with the starting text and a list of
//! [`TextEditMsg`] steps, replayed against a buffer the same way an input
//! layer would drive it:
//!
//! ```yaml
//! text: "hello world"
//! steps:
//!   - op: move_col
//!     direction: forward
//!     extend: true
//!     word: true
//!   - op: insert_char
//!     ch: J
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::{TextBuffer, TextEditMsg, TextStorageMut};
use crate::layout::BufferView;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Starting content
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub steps: Vec<TextEditMsg>,
}

impl Scenario {
    /// Load a scenario from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse scenario {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Number of steps that change the text, as opposed to moving or selecting
    pub fn edit_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_editing()).count()
    }

    /// Apply every step in order, calling `on_step` with the view after each one
    pub fn replay<S, F>(&self, buffer: &mut TextBuffer<S>, mut on_step: F)
    where
        S: TextStorageMut,
        F: FnMut(usize, &TextEditMsg, &BufferView),
    {
        tracing::debug!(steps = self.steps.len(), "replaying scenario");
        for (index, step) in self.steps.iter().enumerate() {
            buffer.apply(step);
            on_step(index, step, &buffer.view());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::Direction;

    const SAMPLE: &str = r#"
text: "abc"
steps:
  - op: set_selection
    start: 1
    end: 2
  - op: insert_char
    ch: X
"#;

    #[test]
    fn test_from_yaml() {
        let scenario = Scenario::from_yaml(SAMPLE).unwrap();
        assert_eq!(scenario.text, "abc");
        assert_eq!(scenario.steps.len(), 2);
        assert_eq!(scenario.steps[1], TextEditMsg::InsertChar { ch: 'X' });
    }

    #[test]
    fn test_edit_count_skips_selection_steps() {
        let scenario = Scenario::from_yaml(SAMPLE).unwrap();
        assert_eq!(scenario.edit_count(), 1);
    }

    #[test]
    fn test_empty_yaml_is_empty_scenario() {
        let scenario = Scenario::from_yaml("{}").unwrap();
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn test_unknown_op_is_an_error() {
        let err = Scenario::from_yaml("steps:\n  - op: undo\n").unwrap_err();
        assert!(err.to_string().contains("undo"));
    }

    #[test]
    fn test_replay_reports_each_step() {
        let scenario = Scenario::from_yaml(SAMPLE).unwrap();
        let mut buffer = TextBuffer::from_text(&scenario.text);
        let mut seen = Vec::new();
        scenario.replay(&mut buffer, |index, _, view| seen.push((index, view.text.clone())));

        assert_eq!(buffer.text(), "aXc");
        assert_eq!(buffer.cursor(), 2);
        assert_eq!(seen, vec![(0, "abc".to_string()), (1, "aXc".to_string())]);
    }

    #[test]
    fn test_replay_word_navigation() {
        let scenario = Scenario {
            text: "fn main() {}".to_string(),
            steps: vec![TextEditMsg::MoveCol {
                direction: Direction::Forward,
                extend: false,
                word: true,
            }],
        };
        let mut buffer = TextBuffer::from_text(&scenario.text);
        scenario.replay(&mut buffer, |_, _, _| {});
        assert_eq!(buffer.cursor(), 2);
    }
}
