//! Decoding of stored answer keys.
//!
//! Fill-in-the-blank keys are stored as a JSON array of strings; legacy
//! content rows use `|`- or `,`-delimited plain text instead. All three
//! forms decode to the same ordered list of expected answers, one per
//! blank.

use crate::error::{AnswerKeyError, Result};

/// Decode a stored answer key into the ordered list of expected answers.
///
/// JSON arrays win; non-string elements are stringified. Anything that
/// is not a JSON array splits on `|` when present, on `,` otherwise.
/// Entries are trimmed. A key with no usable entries is an error.
pub fn parse_answer_key(raw: &str) -> Result<Vec<String>> {
    if let Ok(serde_json::Value::Array(items)) = serde_json::from_str::<serde_json::Value>(raw) {
        let values = items
            .into_iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .collect();
        return non_empty(values);
    }

    let delimiter = if raw.contains('|') { '|' } else { ',' };
    let values = raw
        .split(delimiter)
        .map(|s| s.trim().to_string())
        .collect();
    non_empty(values)
}

fn non_empty(values: Vec<String>) -> Result<Vec<String>> {
    if values.is_empty() || values.iter().all(|v| v.is_empty()) {
        return Err(AnswerKeyError::Empty);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_json_array() {
        let parsed = parse_answer_key(r#"["ακολουθία", "ναός"]"#).unwrap();
        assert_eq!(parsed, vec!["ακολουθία", "ναός"]);
    }

    #[test]
    fn test_json_array_stringifies_non_strings() {
        let parsed = parse_answer_key("[3, true]").unwrap();
        assert_eq!(parsed, vec!["3", "true"]);
    }

    #[test]
    fn test_pipe_delimited() {
        let parsed = parse_answer_key("ακολουθία|ναός|ψαλμός").unwrap();
        assert_eq!(parsed, vec!["ακολουθία", "ναός", "ψαλμός"]);
    }

    #[test]
    fn test_comma_delimited() {
        let parsed = parse_answer_key("ακολουθία, ναός").unwrap();
        assert_eq!(parsed, vec!["ακολουθία", "ναός"]);
    }

    #[test]
    fn test_single_plain_answer() {
        let parsed = parse_answer_key("ακολουθία").unwrap();
        assert_eq!(parsed, vec!["ακολουθία"]);
    }

    #[test]
    fn test_pipe_wins_over_comma() {
        let parsed = parse_answer_key("ένα, δύο|τρία").unwrap();
        assert_eq!(parsed, vec!["ένα, δύο", "τρία"]);
    }

    #[test]
    fn test_empty_key_is_error() {
        assert!(parse_answer_key("").is_err());
        assert!(parse_answer_key("[]").is_err());
        assert!(parse_answer_key("  ,  ").is_err());
    }

    #[test]
    fn test_non_array_json_falls_through_to_split() {
        // A bare JSON string is treated as plain text.
        let parsed = parse_answer_key("42").unwrap();
        assert_eq!(parsed, vec!["42"]);
    }
}
