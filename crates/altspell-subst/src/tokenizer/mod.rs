// Word / non-word tokenizer
//
// Splits text into maximal runs of word characters (letters and digits)
// and maximal runs of everything else. Nothing is dropped or normalized:
// joining the token texts in order gives back the input.

use altspell_core::character::is_word_char;
use altspell_core::enums::TokenType;
use altspell_core::token::Token;

/// Iterator over the tokens of a text.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;
        let in_word = is_word_char(first);

        let len = rest
            .char_indices()
            .find(|&(_, c)| is_word_char(c) != in_word)
            .map_or(rest.len(), |(i, _)| i);

        let token_type = if in_word {
            TokenType::Word
        } else {
            TokenType::NonWord
        };
        let token = Token::new(token_type, &rest[..len], self.pos);
        self.pos += len;
        Some(token)
    }
}

/// Split `text` into word and non-word tokens.
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<(TokenType, &str)> {
        tokenize(text).map(|t| (t.token_type, t.text)).collect()
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn single_word() {
        assert_eq!(texts("Uebel"), vec![(TokenType::Word, "Uebel")]);
    }

    #[test]
    fn words_and_separators() {
        assert_eq!(
            texts("Voegel sind aehnlich."),
            vec![
                (TokenType::Word, "Voegel"),
                (TokenType::NonWord, " "),
                (TokenType::Word, "sind"),
                (TokenType::NonWord, " "),
                (TokenType::Word, "aehnlich"),
                (TokenType::NonWord, "."),
            ]
        );
    }

    #[test]
    fn hyphen_and_underscore_split_words() {
        assert_eq!(
            texts("DRPFA-Angehoerige snake_case"),
            vec![
                (TokenType::Word, "DRPFA"),
                (TokenType::NonWord, "-"),
                (TokenType::Word, "Angehoerige"),
                (TokenType::NonWord, " "),
                (TokenType::Word, "snake"),
                (TokenType::NonWord, "_"),
                (TokenType::Word, "case"),
            ]
        );
    }

    #[test]
    fn native_letters_stay_inside_words() {
        assert_eq!(
            texts("Gr\u{00FC}sse!"),
            vec![(TokenType::Word, "Gr\u{00FC}sse"), (TokenType::NonWord, "!")]
        );
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(
            texts("\n\t(ok)\n"),
            vec![
                (TokenType::NonWord, "\n\t("),
                (TokenType::Word, "ok"),
                (TokenType::NonWord, ")\n"),
            ]
        );
    }

    #[test]
    fn positions_are_byte_offsets() {
        let tokens: Vec<_> = tokenize("\u{00DC}bel ist").collect();
        assert_eq!(tokens[0].pos, 0);
        assert_eq!(tokens[1].pos, 5);
        assert_eq!(tokens[2].pos, 6);
    }

    #[test]
    fn round_trip_is_lossless() {
        let samples = [
            "",
            " ",
            "Ueberhaupt braeuchte es mal einen Teststring.",
            "Oder Uemlaeuten? Auslaeuten?\r\n\r\nLeute gaebe es, wuerde man meinen.\n",
            "  \u{00E4}\u{00F6}\u{00FC}\u{00DF} -- 42_x\u{2014}y ",
            "Stroemelschnoesseldaemel!",
        ];
        for sample in samples {
            let joined: String = tokenize(sample).map(|t| t.text).collect();
            assert_eq!(joined, sample);
        }
    }

    #[test]
    fn token_types_alternate() {
        let tokens: Vec<_> = tokenize("a, b; c").collect();
        for pair in tokens.windows(2) {
            assert_ne!(pair[0].token_type, pair[1].token_type);
        }
    }
}
