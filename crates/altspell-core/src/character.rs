// Character classification and case conversion helpers

// ---------------------------------------------------------------------------
// Word characters
// ---------------------------------------------------------------------------

/// Check whether a character belongs to a word token.
///
/// Letters (any script) and decimal digits form words; everything else,
/// including the underscore, separates them.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to multiple characters ('ß' -> "SS"). The
// "simple" variants only take the first character and are used for case
// classification, never for producing output text.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether any character of `s` is an uppercase letter.
///
/// Used to decide whether a matched alternative spelling ("Ae", "aE",
/// "AE") stands for an uppercase native letter.
pub fn contains_upper(s: &str) -> bool {
    s.chars().any(is_upper)
}

// ---------------------------------------------------------------------------
// Full case conversion
// ---------------------------------------------------------------------------

/// Uppercase form of a native character, which may span several characters.
pub fn full_upper(c: char) -> String {
    c.to_uppercase().collect()
}

/// Lowercase form of a native character, which may span several characters.
pub fn full_lower(c: char) -> String {
    c.to_lowercase().collect()
}

/// Characters whose titlecase form differs from their uppercase form.
const TITLECASE_EXCEPTIONS: &[(char, &str)] = &[
    ('\u{00DF}', "Ss"),       // ß (uppercase "SS")
    ('\u{01C4}', "\u{01C5}"), // Ǆ -> ǅ
    ('\u{01C5}', "\u{01C5}"),
    ('\u{01C6}', "\u{01C5}"), // ǆ -> ǅ
    ('\u{01C7}', "\u{01C8}"), // Ǉ -> ǈ
    ('\u{01C8}', "\u{01C8}"),
    ('\u{01C9}', "\u{01C8}"), // ǉ -> ǈ
    ('\u{01CA}', "\u{01CB}"), // Ǌ -> ǋ
    ('\u{01CB}', "\u{01CB}"),
    ('\u{01CC}', "\u{01CB}"), // ǌ -> ǋ
    ('\u{01F1}', "\u{01F2}"), // Ǳ -> ǲ
    ('\u{01F2}', "\u{01F2}"),
    ('\u{01F3}', "\u{01F2}"), // ǳ -> ǲ
    ('\u{FB00}', "Ff"),       // ﬀ
    ('\u{FB01}', "Fi"),       // ﬁ
    ('\u{FB02}', "Fl"),       // ﬂ
];

/// Titlecase form of a character, as used for the first letter of a word.
///
/// Same as the full uppercase form except for digraphs and ligatures:
/// 'ß' gives "Ss", not "SS".
pub fn full_title(c: char) -> String {
    match TITLECASE_EXCEPTIONS.iter().find(|&&(lower, _)| lower == c) {
        Some(&(_, title)) => title.to_string(),
        None => full_upper(c),
    }
}

/// Uppercase form of a character if it is exactly one character long.
///
/// `'ä'` gives `Some('Ä')`, `'ß'` gives `None` since its uppercase is "SS".
pub fn single_upper(c: char) -> Option<char> {
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => Some(upper),
        _ => None,
    }
}
