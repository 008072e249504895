//! Greek text normalization for answer comparison.

/// Normalize Greek text before comparing it to an expected answer.
///
/// Lower-cases, folds each accented vowel to its bare form, folds the
/// final sigma to the medial form, strips sentence punctuation and
/// collapses whitespace runs to a single space. Accents and sigma forms
/// are never distinctive for answer checking, so none of this loses
/// information the matcher cares about.
///
/// Total on any input; normalizing twice gives the same string as once.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            'ά' => Some('α'),
            'έ' => Some('ε'),
            'ή' => Some('η'),
            'ί' | 'ϊ' | 'ΐ' => Some('ι'),
            'ό' => Some('ο'),
            'ύ' | 'ϋ' | 'ΰ' => Some('υ'),
            'ώ' => Some('ω'),
            'ς' => Some('σ'),
            '.' | ',' | ';' | ':' | '!' | '?' => None,
            _ => Some(c),
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
