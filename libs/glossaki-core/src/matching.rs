//! Per-blank answer matching.

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::similarity::similarity;
use crate::types::MatchPolicy;
use crate::variants::expand_variants;

/// Result of comparing one user answer to the expected answer of a blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer counts as correct.
    pub is_match: bool,
    /// Best similarity found, between 0.0 and 1.0.
    pub similarity: f64,
}

/// Feedback tier derived from a match result.
///
/// This is user-facing presentation only; the match itself stays binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackTier {
    Correct,
    NearCorrect,
    Incorrect,
}

impl FeedbackTier {
    /// Classify a match result: similarity of 0.95 or better reads as
    /// fully correct, any other match as near correct.
    pub fn from_result(result: &MatchResult) -> Self {
        if !result.is_match {
            Self::Incorrect
        } else if result.similarity >= 0.95 {
            Self::Correct
        } else {
            Self::NearCorrect
        }
    }
}

/// Match one user answer against the expected answer for a blank.
///
/// Expected answers of at most `policy.short_answer_max_chars` characters
/// must match exactly after normalization: one wrong letter in a
/// three-letter word still scores 0.66 on edit distance, which is far too
/// forgiving. Longer answers fall through to fuzzy matching over the
/// input and all of its sound-alike variants, keeping the best score.
pub fn match_blank(user_answer: &str, correct_answer: &str, policy: &MatchPolicy) -> MatchResult {
    let user = normalize(user_answer);
    let correct = normalize(correct_answer);

    if correct.chars().count() <= policy.short_answer_max_chars {
        let is_match = user == correct;
        return MatchResult {
            is_match,
            similarity: if is_match { 1.0 } else { 0.0 },
        };
    }

    if user == correct {
        return MatchResult {
            is_match: true,
            similarity: 1.0,
        };
    }

    // expand_variants always contains the input, so the plain similarity
    // is covered by the loop.
    let mut best: f64 = 0.0;
    for variant in expand_variants(&user) {
        let score = similarity(&variant, &correct);
        if score > best {
            best = score;
        }
    }

    MatchResult {
        is_match: best >= policy.threshold,
        similarity: best,
    }
}
