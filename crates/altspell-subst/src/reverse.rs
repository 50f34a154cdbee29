// Reverse transliteration: native characters -> alternative spellings
//
// No dictionary is involved; every native character has exactly one
// alternative spelling. The forward direction is lossy for ambiguous
// words, so backward(forward(x)) and forward(backward(x)) are not
// round trips.

use hashbrown::HashMap;
use tracing::debug;

use altspell_core::case::capitalize;
use altspell_core::character::{full_lower, single_upper};
use altspell_core::mapping::LanguageMapping;

/// Single-character uppercase forms for characters whose full uppercase
/// mapping expands to several characters.
const SINGLE_UPPER_FALLBACKS: &[(char, char)] = &[
    ('\u{00DF}', '\u{1E9E}'), // ß -> ẞ (instead of "SS")
];

fn single_upper_form(native: char) -> Option<char> {
    single_upper(native).or_else(|| {
        SINGLE_UPPER_FALLBACKS
            .iter()
            .find(|&&(lower, _)| lower == native)
            .map(|&(_, upper)| upper)
    })
}

/// Character-to-string substitution table built from a mapping.
///
/// Each native character contributes its lowercase form (mapped to the
/// lowercase alternative) and its single-character uppercase form (mapped
/// to the capitalized alternative): `ä -> ae`, `Ä -> Ae`, `ß -> ss`,
/// `ẞ -> Ss`.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    table: HashMap<char, String>,
}

impl TransliterationTable {
    pub fn new(mapping: &LanguageMapping) -> Self {
        let mut table = HashMap::with_capacity(mapping.len() * 2);
        for (native, alternative) in mapping.iter() {
            let lower_text = full_lower(native);
            let mut lower = lower_text.chars();
            let lower = match (lower.next(), lower.next()) {
                (Some(c), None) => c,
                _ => native,
            };
            table.insert(lower, alternative.to_lowercase());

            match single_upper_form(native) {
                Some(upper) => {
                    table.insert(upper, capitalize(alternative));
                }
                None => debug!(%native, "no single-character uppercase form, skipping"),
            }
        }
        Self { table }
    }

    /// Replacement for one character, if any.
    pub fn get(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Apply the table to `text` in one pass. Characters without an entry
    /// are copied unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.table.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }
}

/// Replace all native characters in `text` with their alternative
/// spellings, in the matching case.
pub fn backward(text: &str, mapping: &LanguageMapping) -> String {
    TransliterationTable::new(mapping).apply(text)
}
