// Shared enums

/// Token types produced by the word splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Run of letters and digits.
    Word,
    /// Run of everything else: punctuation, whitespace, newlines.
    NonWord,
}
