// Known-word lookup

use hashbrown::HashSet;

use crate::mapping::LanguageMapping;

/// Trait for sets of legal words.
///
/// Lookups are case-exact: "Äpfel" and "äpfel" are different words. The
/// caller decides which case forms to test.
pub trait WordLookup {
    /// Check whether the given word is a known legal word.
    fn contains_word(&self, word: &str) -> bool;
}

impl WordLookup for HashSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl WordLookup for std::collections::HashSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl WordLookup for std::collections::BTreeSet<String> {
    fn contains_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<T: WordLookup + ?Sized> WordLookup for &T {
    fn contains_word(&self, word: &str) -> bool {
        (**self).contains_word(word)
    }
}

/// A word set loaded from a line-delimited dictionary.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from newline-delimited text, one word per line.
    ///
    /// Lines are taken verbatim apart from a trailing `\r`; empty lines
    /// are skipped.
    pub fn from_lines(text: &str) -> Self {
        text.lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Keep only the words containing any native character of `mapping`,
    /// compared case-insensitively.
    ///
    /// Words without native characters can never be the result of a
    /// substitution, so they are irrelevant for validation.
    pub fn retain_native(&self, mapping: &LanguageMapping) -> Self {
        let natives: Vec<String> = mapping.natives().map(|c| c.to_lowercase().collect()).collect();
        self.words
            .iter()
            .filter(|word| {
                let lowered = word.to_lowercase();
                natives.iter().any(|native| lowered.contains(native.as_str()))
            })
            .cloned()
            .collect()
    }

    /// Words in sorted order, for writing to disk deterministically.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().collect();
        words.sort_unstable();
        words
    }
}

impl WordLookup for Dictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> LanguageMapping {
        LanguageMapping::try_from_pairs([
            ("\u{00E4}", "ae"),
            ("\u{00F6}", "oe"),
            ("\u{00FC}", "ue"),
            ("\u{00DF}", "ss"),
        ])
        .unwrap()
    }

    #[test]
    fn from_lines_is_case_exact() {
        let dict = Dictionary::from_lines("\u{00C4}pfel\n\u{00FC}bel\r\n\nHaus\n");
        assert_eq!(dict.len(), 3);
        assert!(dict.contains_word("\u{00C4}pfel"));
        assert!(!dict.contains_word("\u{00E4}pfel"));
        assert!(dict.contains_word("\u{00FC}bel"));
    }

    #[test]
    fn retain_native_filters_caselessly() {
        let dict = Dictionary::from_lines("\u{00C4}pfel\nHaus\nStra\u{00DF}e\nApfel\n");
        let filtered = dict.retain_native(&german());
        assert_eq!(filtered.sorted(), vec!["Stra\u{00DF}e", "\u{00C4}pfel"]);
    }

    #[test]
    fn lookup_through_reference() {
        let dict = Dictionary::from_lines("\u{00DC}bel");
        let by_ref: &dyn WordLookup = &dict;
        assert!(by_ref.contains_word("\u{00DC}bel"));
    }

    #[test]
    fn hash_sets_are_lookups() {
        let mut set: HashSet<String> = HashSet::new();
        set.insert("gr\u{00FC}\u{00DF}e".to_string());
        assert!(set.contains_word("gr\u{00FC}\u{00DF}e"));
        assert!(!set.contains_word("gruesse"));
    }
}
