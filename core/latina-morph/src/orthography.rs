//! Diacritic-insensitive spelling helpers.
//!
//! Folding never changes the number of base letters, so a length measured on
//! normalized text can be cut from the original text.

use alloc::string::String;

/// Unicode combining diacritical marks block.
pub fn is_combining(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn fold(c: char) -> char {
    match c {
        'ā' | 'ă' | 'á' | 'à' | 'â' | 'ä' => 'a',
        'ē' | 'ĕ' | 'é' | 'è' | 'ê' | 'ë' => 'e',
        'ī' | 'ĭ' | 'í' | 'ì' | 'î' | 'ï' => 'i',
        'ō' | 'ŏ' | 'ó' | 'ò' | 'ô' | 'ö' => 'o',
        'ū' | 'ŭ' | 'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ȳ' | 'ý' | 'ỳ' | 'ŷ' | 'ÿ' => 'y',
        other => other,
    }
}

/// Lowercases and strips vowel diacritics: `"Ancillārum"` → `"ancillarum"`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !is_combining(*c))
        .map(fold)
        .collect()
}

/// `text` ends in `suffix`, ignoring letter case and diacritics.
///
/// Plain byte comparison runs first; normalization only when that fails on
/// non-ASCII input.
pub fn ends_with_normalized(text: &str, suffix: &str) -> bool {
    if text.ends_with(suffix) {
        return true;
    }
    if text.is_ascii() && suffix.is_ascii() {
        return text.len() >= suffix.len()
            && text.as_bytes()[text.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes());
    }
    normalize(text).ends_with(normalize(suffix).as_str())
}

/// Cuts the last `letters` base letters, along with their combining marks.
///
/// Returns `None` when `text` has fewer letters than requested.
pub fn strip_trailing_letters(text: &str, letters: usize) -> Option<&str> {
    if letters == 0 {
        return Some(text);
    }
    let mut remaining = letters;
    for (at, c) in text.char_indices().rev() {
        if is_combining(c) {
            continue;
        }
        remaining -= 1;
        if remaining == 0 {
            return Some(&text[..at]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_folds_macrons() {
        assert_eq!(normalize("Ancillārum"), "ancillarum");
        assert_eq!(normalize("diēī"), "diei");
        assert_eq!(normalize("poëta"), "poeta");
        // a + combining macron
        assert_eq!(normalize("ro\u{0304}sa"), "rosa");
    }

    #[test]
    fn test_ends_with_normalized() {
        assert!(ends_with_normalized("ancillārum", "ārum"));
        assert!(ends_with_normalized("ancillarum", "ārum"));
        assert!(ends_with_normalized("ANCILLARUM", "arum"));
        assert!(ends_with_normalized("fīli", "i"));
        assert!(!ends_with_normalized("domine", "i"));
        assert!(!ends_with_normalized("a", "ārum"));
    }

    #[test]
    fn test_strip_trailing_letters_keeps_marks_with_their_letter() {
        assert_eq!(strip_trailing_letters("ancillārum", 4), Some("ancill"));
        assert_eq!(strip_trailing_letters("ro\u{0304}sa", 1), Some("ro\u{0304}s"));
        assert_eq!(strip_trailing_letters("rosa\u{0304}", 1), Some("ros"));
        assert_eq!(strip_trailing_letters("re", 3), None);
        assert_eq!(strip_trailing_letters("re", 0), Some("re"));
    }
}
