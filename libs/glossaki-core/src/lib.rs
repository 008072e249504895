//! Core answer-validation library for the glossaki quiz game.
//!
//! Provides:
//! - Greek text normalization (accents, final sigma, punctuation)
//! - Edit-distance similarity scoring
//! - Sound-alike variant expansion for common learner misspellings
//! - Per-blank matching with a length-tiered threshold policy
//! - Multi-blank aggregation with partial credit
//! - Stored answer-key decoding
//!
//! Everything here is a pure function over its arguments; nothing keeps
//! state between calls, so the whole crate is safe to use concurrently.

pub mod answer_key;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod similarity;
pub mod types;
pub mod validate;
pub mod variants;

pub use answer_key::parse_answer_key;
pub use error::{AnswerKeyError, Result};
pub use matching::{match_blank, FeedbackTier, MatchResult};
pub use normalize::normalize;
pub use similarity::{levenshtein_distance, similarity};
pub use types::{MatchPolicy, QuestionType};
pub use validate::{validate_blanks, BlankValidation};
pub use variants::expand_variants;
