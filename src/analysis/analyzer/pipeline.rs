//! Tokenizer plus an ordered filter chain.

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    name: String,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    pub fn new<S: Into<String>>(name: S, tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: name.into(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Append a filter; filters run in insertion order.
    pub fn then(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |tokens, filter| {
                filter.filter(tokens)
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &self.filter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::{LowercaseFilter, StopFilter};
    use crate::analysis::tokenizer::RegexTokenizer;

    #[test]
    fn test_filters_run_in_order() {
        let tokenizer = Arc::new(RegexTokenizer::new().unwrap());

        // Stop words are matched before lowercasing, so "THE" survives.
        let stop_first = PipelineAnalyzer::new("stop_first", tokenizer.clone())
            .then(Arc::new(StopFilter::from_words(["the"])))
            .then(Arc::new(LowercaseFilter::new()));
        let terms: Vec<String> = stop_first.analyze("THE the Page").unwrap().map(|t| t.text).collect();
        assert_eq!(terms, vec!["the", "page"]);

        let lower_first = PipelineAnalyzer::new("lower_first", tokenizer)
            .then(Arc::new(LowercaseFilter::new()))
            .then(Arc::new(StopFilter::from_words(["the"])));
        let terms: Vec<String> = lower_first.analyze("THE the Page").unwrap().map(|t| t.text).collect();
        assert_eq!(terms, vec!["page"]);
        assert_eq!(lower_first.filter_names(), vec!["lowercase", "stop"]);
        assert_eq!(lower_first.name(), "lower_first");
    }
}
