//! Shared types and matching configuration.

use serde::{Deserialize, Serialize};

/// Question formats the quiz supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    TrueFalse,
    Matching,
    MultipleChoice,
    FillInTheBlank,
}

impl QuestionType {
    /// Get the question type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TrueFalse => "true-false",
            Self::Matching => "matching",
            Self::MultipleChoice => "multiple-choice",
            Self::FillInTheBlank => "fill-in-the-blank",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "true-false" => Some(Self::TrueFalse),
            "matching" => Some(Self::Matching),
            "multiple-choice" => Some(Self::MultipleChoice),
            "fill-in-the-blank" => Some(Self::FillInTheBlank),
            _ => None,
        }
    }
}

/// Tuning knobs for blank matching.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Minimum best-variant similarity that counts as a match.
    pub threshold: f64,
    /// Expected answers of at most this many characters (after
    /// normalization) must match exactly.
    pub short_answer_max_chars: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            short_answer_max_chars: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_round_trip() {
        for qt in [
            QuestionType::TrueFalse,
            QuestionType::Matching,
            QuestionType::MultipleChoice,
            QuestionType::FillInTheBlank,
        ] {
            assert_eq!(QuestionType::from_str(qt.as_str()), Some(qt));
        }
        assert_eq!(QuestionType::from_str("essay"), None);
    }

    #[test]
    fn test_question_type_wire_names() {
        let json = serde_json::to_string(&QuestionType::FillInTheBlank).unwrap();
        assert_eq!(json, "\"fill-in-the-blank\"");
        let parsed: QuestionType = serde_json::from_str("\"true-false\"").unwrap();
        assert_eq!(parsed, QuestionType::TrueFalse);
    }

    #[test]
    fn test_default_policy() {
        let policy = MatchPolicy::default();
        assert_eq!(policy.threshold, 0.8);
        assert_eq!(policy.short_answer_max_chars, 3);
    }
}
