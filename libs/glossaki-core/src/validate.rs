//! Multi-blank validation with partial credit.

use serde::{Deserialize, Serialize};

use crate::matching::{match_blank, MatchResult};
use crate::types::MatchPolicy;

/// Aggregate outcome of validating every blank of one exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlankValidation {
    /// Match decision per blank, in answer-key order.
    pub per_blank_results: Vec<bool>,
    /// Number of blanks that matched.
    pub correct_count: usize,
    /// Number of blanks in the answer key.
    pub total_blanks: usize,
    /// All blanks matched. Pass/fail is strictly this flag; partial
    /// credit lives in `correct_count` / `total_blanks`.
    pub is_correct: bool,
    /// Mean per-blank similarity, for diagnostics only. `None` when the
    /// key has no blanks, so an empty exercise never reads as a perfect
    /// score.
    pub overall_similarity: Option<f64>,
}

/// Validate user answers against the answer key, blank by blank.
///
/// Tolerates ragged input: blanks the user never filled in count as
/// unmatched, extra submissions are ignored. Never fails. A caller that
/// receives `total_blanks == 0` has nothing to grade.
pub fn validate_blanks(
    user_answers: &[String],
    correct_answers: &[String],
    policy: &MatchPolicy,
) -> BlankValidation {
    let total_blanks = correct_answers.len();
    let mut per_blank_results = Vec::with_capacity(total_blanks);
    let mut similarity_sum = 0.0;

    for (i, correct) in correct_answers.iter().enumerate() {
        let result = match user_answers.get(i) {
            Some(user) => match_blank(user, correct, policy),
            // A blank with no submission is unmatched outright; an empty
            // expected answer must not match a missing one.
            None => MatchResult {
                is_match: false,
                similarity: 0.0,
            },
        };
        similarity_sum += result.similarity;
        per_blank_results.push(result.is_match);
    }

    let correct_count = per_blank_results.iter().filter(|&&m| m).count();

    BlankValidation {
        is_correct: correct_count == total_blanks,
        correct_count,
        total_blanks,
        per_blank_results,
        overall_similarity: if total_blanks > 0 {
            Some(similarity_sum / total_blanks as f64)
        } else {
            None
        },
    }
}
