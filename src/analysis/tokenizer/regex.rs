//! Regex-based tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{ClassifierError, Result};

/// Runs of Unicode word characters.
pub const DEFAULT_PATTERN: &str = r"\w+";

/// Emits each non-overlapping match of a pattern as a token.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Fails with an analysis error if `pattern` does not compile.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            ClassifierError::analysis(format!("Invalid token pattern '{pattern}': {e}"))
        })?;
        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .filter(|mat| !mat.is_empty())
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
