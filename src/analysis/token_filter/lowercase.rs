//! Case folding.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases every token, so `Rust` and `RUST` count as one term.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let text = if token.text.is_ascii() {
                token.text.to_ascii_lowercase()
            } else {
                token.text.to_lowercase()
            };
            Token { text, ..token }
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
