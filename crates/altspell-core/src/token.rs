// Token type produced by splitting text into word and non-word runs

use crate::enums::TokenType;

/// A slice of the input text tagged as word or non-word.
///
/// Tokens borrow from the text they were produced from, so concatenating
/// the `text` of all tokens in order reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: &'a str,

    /// Byte offset of this token within the text.
    pub pos: usize,
}

impl<'a> Token<'a> {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: &'a str, pos: usize) -> Self {
        Self {
            token_type,
            text,
            pos,
        }
    }

    /// Whether this token is a word.
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}
