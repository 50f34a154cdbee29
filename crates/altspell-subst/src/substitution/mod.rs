// Forward substitution: alternative spellings -> native characters
//
// Per word token:
//   occurrences (OccurrenceFinder)
//     -> subsets of occurrences (Combinations)
//     -> candidate strings (substitute_spans)
//     -> policy: forced maximal candidate, or dictionary validation
//
// Words are independent of each other; nothing is carried between tokens.

pub mod combinations;
pub mod forward;
pub mod occurrences;
pub mod repr;
pub mod spans;
pub mod validate;

use altspell_core::lookup::WordLookup;

pub use repr::Alternatives;

/// How a word with occurrences is resolved.
#[derive(Clone)]
pub enum Policy<'a> {
    /// Skip validation and substitute every occurrence.
    ///
    /// Useful for names and other words missing from the dictionary. Under
    /// a bijective mapping the candidate with the most substitutions is
    /// unique.
    Force,

    /// Keep only candidates found in `lookup`.
    ///
    /// One legal candidate replaces the word, several are rendered with
    /// `alternatives`, none leave the word unchanged.
    Dictionary {
        lookup: &'a dyn WordLookup,
        alternatives: Alternatives,
    },
}

impl<'a> Policy<'a> {
    /// Dictionary policy with the default `[a|b]` rendering.
    pub fn dictionary(lookup: &'a dyn WordLookup) -> Self {
        Policy::Dictionary {
            lookup,
            alternatives: Alternatives::default(),
        }
    }
}

impl std::fmt::Debug for Policy<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Policy::Force => f.write_str("Force"),
            Policy::Dictionary { alternatives, .. } => f
                .debug_struct("Dictionary")
                .field("alternatives", alternatives)
                .finish_non_exhaustive(),
        }
    }
}
