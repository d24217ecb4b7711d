//! The analyzer behind term extraction: regex tokenizer, lowercase, stop
//! words.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// `\w+` tokens and the default English stop words.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(RegexTokenizer::new()?, StopFilter::new()))
    }

    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_parts(
            RegexTokenizer::new()?,
            StopFilter::from_words(words),
        ))
    }

    pub fn with_parts(tokenizer: RegexTokenizer, stop_filter: StopFilter) -> Self {
        let inner = PipelineAnalyzer::new("standard", Arc::new(tokenizer))
            .then(Arc::new(LowercaseFilter::new()))
            .then(Arc::new(stop_filter));
        StandardAnalyzer { inner }
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
