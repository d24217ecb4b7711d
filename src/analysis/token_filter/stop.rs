//! Stop word removal.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static ENGLISH: LazyLock<Arc<HashSet<String>>> =
    LazyLock::new(|| Arc::new(ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect()));

/// Drops tokens found in a stop word set.
///
/// Words are stored lowercased, so the filter belongs after
/// [`LowercaseFilter`](super::LowercaseFilter).
#[derive(Clone, Debug)]
pub struct StopFilter {
    words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// The default English list.
    pub fn new() -> Self {
        StopFilter {
            words: ENGLISH.clone(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        StopFilter {
            words: Arc::new(words.into_iter().map(|w| w.as_ref().to_lowercase()).collect()),
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let words = Arc::clone(&self.words);
        Ok(Box::new(tokens.filter(move |token| !words.contains(&token.text))))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
