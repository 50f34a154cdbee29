// Forward substitution over whole texts

use std::borrow::Cow;

use tracing::{debug, info, warn};

use altspell_core::case::detect_case;
use altspell_core::lookup::WordLookup;
use altspell_core::mapping::LanguageMapping;
use altspell_core::span::Occurrence;

use super::Policy;
use super::combinations::{Combinations, distinct_greatest_by_key};
use super::occurrences::OccurrenceFinder;
use super::spans::substitute_spans;
use super::validate::is_legal;
use crate::tokenizer::{Tokenizer, tokenize};

/// Restores native characters in words, according to one policy.
///
/// Built once per mapping and policy; compiling the occurrence patterns is
/// the only setup cost.
#[derive(Debug, Clone)]
pub struct Substituter<'a> {
    finder: OccurrenceFinder,
    policy: Policy<'a>,
}

impl<'a> Substituter<'a> {
    pub fn new(mapping: &LanguageMapping, policy: Policy<'a>) -> Self {
        Self {
            finder: OccurrenceFinder::new(mapping),
            policy,
        }
    }

    /// Process a single word token.
    ///
    /// Returns the word unchanged (borrowed) when it has no occurrences, when
    /// no candidate is legal, or on a forced tie.
    pub fn substitute_word<'t>(&self, word: &'t str) -> Cow<'t, str> {
        let occurrences = self.finder.find(word);
        if occurrences.is_empty() {
            debug!(word, "no substitutions to be made");
            return Cow::Borrowed(word);
        }
        debug!(
            word,
            occurrences = occurrences.len(),
            subsets = Combinations::total(occurrences.len()),
            "testing substitution subsets"
        );

        match &self.policy {
            Policy::Force => self.force(word, &occurrences),
            Policy::Dictionary {
                lookup,
                alternatives,
            } => {
                let legal = legal_candidates(word, &occurrences, *lookup);
                match legal.len() {
                    0 => {
                        info!(word, "no dictionary entry found for any candidate");
                        Cow::Borrowed(word)
                    }
                    1 => {
                        debug!(word, candidate = %legal[0], "single legal candidate");
                        Cow::Owned(alternatives.represent(&legal))
                    }
                    n => {
                        debug!(word, candidates = n, "ambiguous substitution, keeping all");
                        Cow::Owned(alternatives.represent(&legal))
                    }
                }
            }
        }
    }

    /// Pick the candidate with the most substitutions.
    fn force<'t>(&self, word: &'t str, occurrences: &[Occurrence]) -> Cow<'t, str> {
        match distinct_greatest_by_key(Combinations::all_lengths(occurrences.len()), Vec::len) {
            Some(most) => {
                let forced = substitute_spans(word, most.iter().map(|&i| &occurrences[i]));
                debug!(word, %forced, "forced substitution");
                Cow::Owned(forced)
            }
            None => {
                warn!(word, "no distinct candidate with the most substitutions, leaving word as-is");
                Cow::Borrowed(word)
            }
        }
    }

    /// Lazily process every token of `text`.
    pub fn tokens<'t>(&'t self, text: &'t str) -> ForwardTokens<'t, 't> {
        ForwardTokens {
            substituter: Cow::Borrowed(self),
            tokens: tokenize(text),
        }
    }

    /// Process `text` and join the result.
    pub fn apply(&self, text: &str) -> String {
        self.tokens(text).collect()
    }
}

/// Candidates of `word` that pass dictionary validation, in enumeration
/// order and without duplicates.
fn legal_candidates(
    word: &str,
    occurrences: &[Occurrence],
    lookup: &dyn WordLookup,
) -> Vec<String> {
    let case_type = detect_case(word);
    let mut legal: Vec<String> = Vec::new();
    for subset in Combinations::all_lengths(occurrences.len()) {
        let candidate = substitute_spans(word, subset.iter().map(|&i| &occurrences[i]));
        if legal.contains(&candidate) {
            continue;
        }
        if is_legal(&candidate, case_type, lookup) {
            legal.push(candidate);
        } else {
            debug!(word, %candidate, "candidate rejected");
        }
    }
    legal
}

/// Iterator over processed tokens; non-word tokens pass through unchanged.
///
/// Joining all items reproduces the text with substitutions applied.
#[derive(Debug, Clone)]
pub struct ForwardTokens<'s, 't> {
    substituter: Cow<'s, Substituter<'s>>,
    tokens: Tokenizer<'t>,
}

impl<'s, 't> Iterator for ForwardTokens<'s, 't> {
    type Item = Cow<'t, str>;

    fn next(&mut self) -> Option<Cow<'t, str>> {
        let token = self.tokens.next()?;
        if !token.is_word() {
            return Some(Cow::Borrowed(token.text));
        }
        Some(self.substituter.substitute_word(token.text))
    }
}

/// Lazily substitute alternative spellings in `text`, token by token.
pub fn forward_tokens<'a>(
    text: &'a str,
    mapping: &LanguageMapping,
    policy: Policy<'a>,
) -> ForwardTokens<'a, 'a> {
    ForwardTokens {
        substituter: Cow::Owned(Substituter::new(mapping, policy)),
        tokens: tokenize(text),
    }
}

/// Substitute alternative spellings in `text` with native characters.
pub fn forward(text: &str, mapping: &LanguageMapping, policy: Policy<'_>) -> String {
    Substituter::new(mapping, policy).apply(text)
}
