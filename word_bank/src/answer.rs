//! The shared yes/no/unknown answer vocabulary.
//!
//! One parsing rule governs both free-text attribute cells being loaded
//! from disk and interactive answers typed during a game.

use serde::{Deserialize, Serialize};

/// Tokens recognized as affirmative.
const AFFIRMATIVE: &[&str] = &["si", "sí", "s", "y", "yes", "true", "t", "1", "verdadero"];

/// Tokens recognized as negative.
const NEGATIVE: &[&str] = &["no", "n", "false", "f", "0", "falso"];

/// Tokens recognized as an explicit "don't know".
const UNKNOWN: &[&str] = &["no se", "no sé", "nose", "idk", "ns", "?"];

/// A tri-valued answer to a boolean question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    Unknown,
}

impl Answer {
    /// Parse free text into an answer.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything outside the fixed vocabulary is `Unknown`.
    pub fn parse(text: &str) -> Self {
        let token = text.trim().to_lowercase();
        if AFFIRMATIVE.contains(&token.as_str()) {
            Answer::Yes
        } else if NEGATIVE.contains(&token.as_str()) {
            Answer::No
        } else if UNKNOWN.contains(&token.as_str()) {
            Answer::Unknown
        } else {
            Answer::Unknown
        }
    }

    /// The boolean value of this answer, if it has one.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Answer::Yes => Some(true),
            Answer::No => Some(false),
            Answer::Unknown => None,
        }
    }

    /// Truth of a table cell under the shared vocabulary.
    ///
    /// Cells are two-valued: only an affirmative token is `true`, every
    /// other value (including "don't know" and empty cells) loads as
    /// `false`.
    pub fn cell_truth(text: &str) -> bool {
        matches!(Self::parse(text), Answer::Yes)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Yes => write!(f, "sí"),
            Answer::No => write!(f, "no"),
            Answer::Unknown => write!(f, "no sé"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_tokens() {
        for token in ["sí", "si", "s", "y", "yes", "VERDADERO", "1", " true "] {
            assert_eq!(Answer::parse(token), Answer::Yes, "token {:?}", token);
        }
    }

    #[test]
    fn test_negative_tokens() {
        for token in ["no", "N", "false", "0", "falso"] {
            assert_eq!(Answer::parse(token), Answer::No, "token {:?}", token);
        }
    }

    #[test]
    fn test_unknown_tokens() {
        for token in ["no sé", "no se", "nose", "idk", "?"] {
            assert_eq!(Answer::parse(token), Answer::Unknown, "token {:?}", token);
        }
    }

    #[test]
    fn test_unrecognized_text_is_unknown() {
        assert_eq!(Answer::parse("quizás"), Answer::Unknown);
        assert_eq!(Answer::parse(""), Answer::Unknown);
        assert_eq!(Answer::parse("yess"), Answer::Unknown);
    }

    #[test]
    fn test_as_bool() {
        assert_eq!(Answer::Yes.as_bool(), Some(true));
        assert_eq!(Answer::No.as_bool(), Some(false));
        assert_eq!(Answer::Unknown.as_bool(), None);
    }

    #[test]
    fn test_cell_truth_is_two_valued() {
        assert!(Answer::cell_truth("sí"));
        assert!(Answer::cell_truth("TRUE"));
        assert!(!Answer::cell_truth("no"));
        assert!(!Answer::cell_truth("no sé"));
        assert!(!Answer::cell_truth(""));
        assert!(!Answer::cell_truth("garbage"));
    }
}
