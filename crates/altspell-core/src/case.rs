// Case type detection and whole-word case conversion

use crate::character::{full_title, is_lower, is_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "apfel".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Apfel".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "aPfel".
    Complex,
    /// All letters are uppercase: "APFEL".
    AllUpper,
}

impl CaseType {
    /// Whether any letter of the word is uppercase.
    pub fn has_upper(self) -> bool {
        matches!(
            self,
            CaseType::FirstUpper | CaseType::Complex | CaseType::AllUpper
        )
    }
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation) are ignored when
/// determining the case pattern.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for c in chars {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Lowercase a whole word.
pub fn lowercase(word: &str) -> String {
    word.to_lowercase()
}

/// Titlecase the first character and lowercase the rest: "ÄPFEL" -> "Äpfel".
///
/// The first character may expand ('ß' -> "Ss"), the result is not
/// guaranteed to have the same length as the input.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = full_title(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}
