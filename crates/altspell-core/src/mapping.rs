// Native character to alternative spelling mapping for one language

use std::collections::BTreeMap;

use crate::character::simple_lower;

/// Error raised when building a mapping from untrusted key/value pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// The key is not exactly one character.
    #[error("native character must be exactly one character, got {0:?}")]
    KeyNotSingleChar(String),

    /// The alternative spelling is empty.
    #[error("alternative spelling for {0:?} is empty")]
    EmptyAlternative(char),
}

/// Mapping of native characters to their alternative spellings, e.g.
/// `'ä' -> "ae"`.
///
/// Keys are stored in their lowercase canonical form and iterate in
/// code point order. The mapping is expected to be bijective: no two
/// native characters share an alternative spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMapping {
    entries: BTreeMap<char, String>,
}

impl LanguageMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry without validation.
    ///
    /// The key is lowercased, the alternative is kept as given. An empty
    /// alternative is accepted here; the substitution engine never matches it.
    pub fn insert(&mut self, native: char, alternative: impl Into<String>) {
        self.entries.insert(simple_lower(native), alternative.into());
    }

    /// Build a mapping from string pairs, rejecting malformed entries.
    pub fn try_from_pairs<K, V, I>(pairs: I) -> Result<Self, MappingError>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut mapping = Self::new();
        for (key, value) in pairs {
            let key = key.as_ref();
            let mut chars = key.chars();
            let native = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(MappingError::KeyNotSingleChar(key.to_string())),
            };
            let alternative = value.into();
            if alternative.is_empty() {
                return Err(MappingError::EmptyAlternative(native));
            }
            mapping.insert(native, alternative);
        }
        Ok(mapping)
    }

    /// Alternative spelling of a native character, if mapped.
    pub fn get(&self, native: char) -> Option<&str> {
        self.entries.get(&simple_lower(native)).map(String::as_str)
    }

    /// Iterate over `(native, alternative)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(&c, alt)| (c, alt.as_str()))
    }

    /// Iterate over the native characters.
    pub fn natives(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(char, String)> for LanguageMapping {
    fn from_iter<T: IntoIterator<Item = (char, String)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (native, alternative) in iter {
            mapping.insert(native, alternative);
        }
        mapping
    }
}
