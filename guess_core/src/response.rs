//! The answer vocabulary a player can give about a guess.
//!
//! Two protocols share the same tokens:
//! - **Combined**: `C` (correct), `L` (lower), `H` (higher) in a single prompt
//! - **Legacy**: `Y` / `N`, and after a `N` a second `H` / `L` question

use serde::{Deserialize, Serialize};

/// A normalized player answer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Response {
    /// `Y`: legacy "yes, that is my number".
    Yes,

    /// `N`: legacy "no"; the direction is asked separately.
    No,

    /// `C`: combined "correct".
    Correct,

    /// `H`: the hidden number is higher than the guess.
    Higher,

    /// `L`: the hidden number is lower than the guess.
    Lower,

    /// Anything else, holding the normalized text.
    Unrecognized(String),
}

impl Response {
    /// Trim surrounding whitespace and upper-case.
    pub fn normalize(text: &str) -> String {
        text.trim().to_uppercase()
    }

    /// Parse free-form text into a response.
    pub fn parse(text: &str) -> Self {
        let normalized = Self::normalize(text);
        match normalized.as_str() {
            "Y" => Response::Yes,
            "N" => Response::No,
            "C" => Response::Correct,
            "H" => Response::Higher,
            "L" => Response::Lower,
            _ => Response::Unrecognized(normalized),
        }
    }

    /// Whether this answer confirms the guess.
    pub fn is_confirmation(&self) -> bool {
        matches!(self, Response::Yes | Response::Correct)
    }

    /// Whether this is the legacy `N` that calls for a direction question.
    pub fn is_no(&self) -> bool {
        matches!(self, Response::No)
    }

    /// The canonical token for this response.
    pub fn as_str(&self) -> &str {
        match self {
            Response::Yes => "Y",
            Response::No => "N",
            Response::Correct => "C",
            Response::Higher => "H",
            Response::Lower => "L",
            Response::Unrecognized(s) => s,
        }
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(Response::parse("Y"), Response::Yes);
        assert_eq!(Response::parse("N"), Response::No);
        assert_eq!(Response::parse("C"), Response::Correct);
        assert_eq!(Response::parse("H"), Response::Higher);
        assert_eq!(Response::parse("L"), Response::Lower);
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        for text in ["h", "H", " H ", "\th\n"] {
            assert_eq!(Response::parse(text), Response::Higher);
        }
        assert_eq!(Response::parse(" c"), Response::Correct);
        assert_eq!(Response::parse("l "), Response::Lower);
    }

    #[test]
    fn test_unrecognized_keeps_normalized_text() {
        assert_eq!(
            Response::parse(" x "),
            Response::Unrecognized("X".to_string())
        );
        assert_eq!(Response::parse(""), Response::Unrecognized(String::new()));
        // Whole words are not accepted, only single-letter tokens.
        assert_eq!(
            Response::parse("higher"),
            Response::Unrecognized("HIGHER".to_string())
        );
    }

    #[test]
    fn test_predicates() {
        assert!(Response::Yes.is_confirmation());
        assert!(Response::Correct.is_confirmation());
        assert!(!Response::No.is_confirmation());
        assert!(Response::parse("n").is_no());
        assert!(!Response::Lower.is_no());
    }

    #[test]
    fn test_display() {
        assert_eq!(Response::Higher.to_string(), "H");
        assert_eq!(Response::parse("zz").to_string(), "ZZ");
    }
}
