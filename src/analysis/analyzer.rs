//! Analyzers: a tokenizer followed by a chain of filters.
//!
//! ```text
//! text → tokenizer → filter → ... → filter → tokens
//! ```
//!
//! The classifier extracts terms with a [`StandardAnalyzer`]; a
//! [`PipelineAnalyzer`] assembles any other chain.
//!
//! # Examples
//!
//! ```
//! use lexiclass::analysis::analyzer::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new().unwrap();
//! let terms: Vec<_> = analyzer.analyze("The Web Crawler").unwrap().map(|t| t.text).collect();
//! assert_eq!(terms, vec!["web", "crawler"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

pub mod pipeline;
pub mod standard;

pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;

/// Shared by every classification worker, hence `Send + Sync`.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    fn name(&self) -> &str;
}
