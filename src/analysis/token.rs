//! Tokens flowing from a tokenizer through the filters to the term extractor.

use std::fmt;

/// One word of document text and its index among the tokenizer's matches.
///
/// Positions are assigned by the tokenizer and survive filtering, so a
/// removed stop word leaves a gap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokens produced by a tokenizer or a filter.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new("crawler", 4);
        assert_eq!(token.to_string(), "crawler");
        assert_eq!(token.position, 4);
    }
}
