// Dictionary validation of substitution candidates

use altspell_core::case::{CaseType, capitalize, lowercase};
use altspell_core::lookup::WordLookup;

/// Case forms of a candidate to look up, depending on the case of the
/// original word.
///
/// - All-lowercase words only test the lowercase form: "uebel" may become
///   "übel", but "aepfel" never becomes "Äpfel".
/// - Words with an uppercase letter (capitalized, all-caps, mixed) test
///   the lowercase form and the capitalized form. "AEPFEL" validates
///   through "Äpfel", "UEBEL" through "übel".
pub fn case_forms(candidate: &str, case_type: CaseType) -> Vec<String> {
    if case_type.has_upper() {
        vec![lowercase(candidate), capitalize(candidate)]
    } else {
        vec![lowercase(candidate)]
    }
}

/// Check whether any tested case form of `candidate` is a known word.
pub fn is_legal<L>(candidate: &str, case_type: CaseType, lookup: &L) -> bool
where
    L: WordLookup + ?Sized,
{
    case_forms(candidate, case_type)
        .iter()
        .any(|form| lookup.contains_word(form))
}
