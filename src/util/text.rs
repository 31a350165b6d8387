//! Character classification for word-mode navigation

use std::fmt;

/// Characters that end a word-mode cursor move
pub const DEFAULT_STOP_CHARS: &str = " {}[]()\n";

/// Set of stop characters used by word-mode navigation.
///
/// A word move keeps stepping until the next character it would cross is
/// in this set.
#[derive(Clone, PartialEq, Eq)]
pub struct WordStops {
    chars: Vec<char>,
}

impl WordStops {
    /// Build a stop set from the characters of `chars` (duplicates ignored)
    pub fn new(chars: &str) -> Self {
        let mut set: Vec<char> = chars.chars().collect();
        set.sort_unstable();
        set.dedup();
        Self { chars: set }
    }

    /// Check if a character ends a word move
    pub fn is_stop(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for WordStops {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_CHARS)
    }
}

impl fmt::Debug for WordStops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WordStops").field(&self.as_string()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stops() {
        let stops = WordStops::default();
        for ch in [' ', '{', '}', '[', ']', '(', ')', '\n'] {
            assert!(stops.is_stop(ch), "{:?} should stop", ch);
        }
        assert!(!stops.is_stop('a'));
        assert!(!stops.is_stop('.'));
        assert!(!stops.is_stop('\t'));
    }

    #[test]
    fn test_custom_stops_dedup() {
        let stops = WordStops::new("..,,");
        assert!(stops.is_stop('.'));
        assert!(stops.is_stop(','));
        assert!(!stops.is_stop(' '));
        assert_eq!(stops.as_string(), ",.");
    }

    #[test]
    fn test_empty_stops_never_stop() {
        let stops = WordStops::new("");
        assert!(!stops.is_stop(' '));
        assert!(!stops.is_stop('\n'));
    }
}
