//! Splitting document text into tokens.
//!
//! [`RegexTokenizer`] emits every match of its pattern. The classifier uses
//! `\w+` unless `token_pattern` is set in its configuration.
//!
//! ```
//! use lexiclass::analysis::tokenizer::{RegexTokenizer, Tokenizer};
//!
//! let tokenizer = RegexTokenizer::with_pattern(r"[a-z]+").unwrap();
//! let words: Vec<_> = tokenizer.tokenize("web2 page").unwrap().map(|t| t.text).collect();
//! assert_eq!(words, vec!["web", "page"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// First stage of an analyzer.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &'static str;
}

pub mod regex;

pub use regex::RegexTokenizer;
