// Spans and occurrences of alternative spellings within one word

use std::fmt;

/// Half-open `[start, end)` range of character offsets into a word.
///
/// Ordering is by `start`, then `end`; spans of one word never overlap,
/// so they double as identity keys for occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered. An inverted span covers nothing.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}

/// One located alternative spelling together with its native replacement.
///
/// The replacement is already case-adjusted: "Ue" yields "Ü", "ss" yields
/// "ß", while "SS" yields "SS" (the full uppercase of 'ß').
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub span: Span,
    pub replacement: String,
}

impl Occurrence {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_ordering_by_start() {
        let mut spans = vec![Span::new(8, 10), Span::new(1, 3), Span::new(4, 6)];
        spans.sort();
        assert_eq!(spans, vec![Span::new(1, 3), Span::new(4, 6), Span::new(8, 10)]);
    }

    #[test]
    fn span_len() {
        assert_eq!(Span::new(1, 3).len(), 2);
        assert!(Span::new(0, 0).is_empty());
        assert_eq!(Span::new(5, 2).len(), 0);
    }

    #[test]
    fn span_display() {
        assert_eq!(Span::new(6, 8).to_string(), "(6, 8)");
    }
}
