// Locating alternative spellings inside a word

use std::collections::BTreeMap;

use regex::Regex;
use tracing::{debug, warn};

use altspell_core::character::{contains_upper, full_lower, full_upper};
use altspell_core::mapping::LanguageMapping;
use altspell_core::span::{Occurrence, Span};

/// One compiled alternative-spelling pattern.
#[derive(Debug, Clone)]
struct Pattern {
    native: char,
    regex: Regex,
}

/// Finds every occurrence of the mapping's alternative spellings in a word.
///
/// Alternative spellings are matched as case-insensitive literals. Matches
/// of one pattern never overlap each other; matches of different patterns
/// are keyed by span, so a later pattern matching the exact same span as
/// an earlier one replaces it.
#[derive(Debug, Clone)]
pub struct OccurrenceFinder {
    patterns: Vec<Pattern>,
}

impl OccurrenceFinder {
    /// Compile the patterns of a mapping.
    ///
    /// Entries with an empty alternative spelling are skipped, they would
    /// match everywhere.
    pub fn new(mapping: &LanguageMapping) -> Self {
        let mut patterns = Vec::with_capacity(mapping.len());
        for (native, alternative) in mapping.iter() {
            if alternative.is_empty() {
                warn!(%native, "skipping empty alternative spelling");
                continue;
            }
            match Regex::new(&format!("(?i){}", regex::escape(alternative))) {
                Ok(regex) => patterns.push(Pattern { native, regex }),
                Err(e) => {
                    warn!(%native, alternative, error = %e, "skipping unusable alternative spelling")
                }
            }
        }
        Self { patterns }
    }

    /// Find all occurrences in `word`, ordered by span.
    ///
    /// Spans are character offsets. The replacement is the uppercase native
    /// form if the matched text contains any uppercase letter ("Ue", "uE",
    /// "UE" all give "Ü"), the lowercase form otherwise.
    pub fn find(&self, word: &str) -> Vec<Occurrence> {
        let mut found: BTreeMap<Span, String> = BTreeMap::new();

        for pattern in &self.patterns {
            for m in pattern.regex.find_iter(word) {
                let start = word[..m.start()].chars().count();
                let end = start + m.as_str().chars().count();
                let replacement = if contains_upper(m.as_str()) {
                    full_upper(pattern.native)
                } else {
                    full_lower(pattern.native)
                };
                let span = Span::new(start, end);
                debug!(word, matched = m.as_str(), %span, %replacement, "found alternative spelling");
                found.insert(span, replacement);
            }
        }

        found
            .into_iter()
            .map(|(span, replacement)| Occurrence::new(span, replacement))
            .collect()
    }
}
