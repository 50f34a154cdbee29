// Positional substitution of occurrence spans
//
// A plain replace-all of e.g. "ue" by "ü" cannot be used: in
// "Kuechenfeuer" only the first "ue" is to be replaced. Substitutions are
// therefore applied per span.

use altspell_core::span::Occurrence;

/// Replace the characters covered by each occurrence's span with its
/// replacement text.
///
/// Spans are applied back-to-front (descending start), so replacements
/// that change the length of the word leave the offsets of the remaining,
/// lower spans intact. Spans reaching past the end of the word are clamped.
pub fn substitute_spans<'o, I>(word: &str, occurrences: I) -> String
where
    I: IntoIterator<Item = &'o Occurrence>,
{
    let mut selected: Vec<&Occurrence> = occurrences.into_iter().collect();
    selected.sort_by(|a, b| b.span.cmp(&a.span));

    let mut chars: Vec<char> = word.chars().collect();
    for occurrence in selected {
        let start = occurrence.span.start.min(chars.len());
        let end = occurrence.span.end.clamp(start, chars.len());
        chars.splice(start..end, occurrence.replacement.chars());
    }
    chars.into_iter().collect()
}
