//! Script-based language-direction detection.
//!
//! Classifies raw text into a translation direction using Cyrillic/Latin
//! presence heuristics. No external calls, no state.

use serde::{Deserialize, Serialize};

/// Language-pair label attached to a translation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    RuToEn,
    EnToRu,
    Other,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::RuToEn, Direction::EnToRu, Direction::Other];

    /// Stable label used as the `translations` key in the persisted snapshot.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::RuToEn => "ru_to_en",
            Direction::EnToRu => "en_to_ru",
            Direction::Other => "other",
        }
    }
}

/// Outcome of classifying a piece of text: where to translate it to, and the
/// direction label recorded in stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub direction: Direction,
    /// Target language code handed to the translation provider.
    pub target: &'static str,
}

fn is_cyrillic(c: char) -> bool {
    ('\u{0410}'..='\u{044F}').contains(&c) || c == 'Ё' || c == 'ё'
}

fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Classifies trimmed text into a translation direction.
///
/// Cyrillic-only text goes to English, Latin-only text to Russian; mixed
/// scripts, digits-only and other scripts fall into `Other` and go to English.
pub fn detect_direction(text: &str) -> Detection {
    let has_cyr = text.chars().any(is_cyrillic);
    let has_lat = text.chars().any(is_latin);
    if has_cyr && !has_lat {
        Detection {
            direction: Direction::RuToEn,
            target: "en",
        }
    } else if has_lat && !has_cyr {
        Detection {
            direction: Direction::EnToRu,
            target: "ru",
        }
    } else {
        Detection {
            direction: Direction::Other,
            target: "en",
        }
    }
}

/// True when the text is non-empty and contains no word characters at all
/// (no letters, no digits, no underscore) — emoji, symbols, punctuation.
pub fn is_emoji_only(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| !c.is_alphanumeric() && c != '_')
}

/// True when the text contains at least one letter or digit, i.e. there is
/// something a translation provider can work with.
pub fn has_word_chars(text: &str) -> bool {
    text.chars().any(|c| c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pure_cyrillic_goes_to_english() {
        let d = detect_direction("Привет как дела");
        assert_eq!(d.direction, Direction::RuToEn);
        assert_eq!(d.target, "en");

        let d = detect_direction("Ёжик, ещё ёлки!");
        assert_eq!(d.direction, Direction::RuToEn);
    }

    #[test]
    fn test_pure_latin_goes_to_russian() {
        let d = detect_direction("hello there");
        assert_eq!(d.direction, Direction::EnToRu);
        assert_eq!(d.target, "ru");
    }

    #[test]
    fn test_mixed_scripts_are_other() {
        let d = detect_direction("hello привет");
        assert_eq!(d.direction, Direction::Other);
        assert_eq!(d.target, "en");
    }

    #[test]
    fn test_digits_and_punctuation_are_other() {
        assert_eq!(detect_direction("12345").direction, Direction::Other);
        assert_eq!(detect_direction("?!...").direction, Direction::Other);
        assert_eq!(detect_direction("你好").direction, Direction::Other);
    }

    #[test]
    fn test_cyrillic_with_digits_still_ru() {
        assert_eq!(detect_direction("Привет 123").direction, Direction::RuToEn);
    }

    #[test]
    fn test_emoji_only() {
        assert!(is_emoji_only("🙂🙂"));
        assert!(is_emoji_only("?!... 🙂"));
        assert!(!is_emoji_only(""));
        assert!(!is_emoji_only("🙂 ok"));
        // Underscore counts as a word character, same as the stats pattern.
        assert!(!is_emoji_only("___"));
    }

    #[test]
    fn test_has_word_chars() {
        assert!(has_word_chars("a"));
        assert!(has_word_chars("7"));
        assert!(has_word_chars("привет"));
        assert!(!has_word_chars("🙂 ... ___"));
        assert!(!has_word_chars(""));
    }
}
