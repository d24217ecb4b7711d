//! Per-document term maps.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::document::Document;
use crate::error::Result;
use crate::terms::predicate::{PredicateList, TermCounts};

/// The distinct filtered terms of one document with their occurrence counts.
///
/// Keys are unique and iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTerms {
    counts: BTreeMap<String, u64>,
}

impl DocumentTerms {
    pub fn new() -> Self {
        DocumentTerms {
            counts: BTreeMap::new(),
        }
    }

    /// Count raw terms, then drop the ones `predicates` reject.
    ///
    /// Each term is checked with `documents == 1` and its in-document count.
    pub fn from_terms<I, S>(terms: I, predicates: &PredicateList) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for term in terms {
            *counts.entry(term.into()).or_insert(0) += 1;
        }
        counts.retain(|term, count| predicates.accepts(term, &TermCounts::new(1, *count)));

        DocumentTerms { counts }
    }

    /// Occurrences of `term` in this document, 0 if absent.
    pub fn count(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    /// Distinct terms in order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(term, count)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total_occurrences(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Turns document text into [`DocumentTerms`]: analyzer first, then the
/// document-level predicates.
#[derive(Clone)]
pub struct TermExtractor {
    analyzer: Arc<dyn Analyzer>,
    predicates: PredicateList,
}

impl TermExtractor {
    pub fn new(analyzer: Arc<dyn Analyzer>, predicates: PredicateList) -> Self {
        TermExtractor {
            analyzer,
            predicates,
        }
    }

    /// Extract the filtered term map of raw text.
    pub fn extract(&self, text: &str) -> Result<DocumentTerms> {
        let tokens = self.analyzer.analyze(text)?;
        Ok(DocumentTerms::from_terms(
            tokens.map(|token| token.text),
            &self.predicates,
        ))
    }

    /// Extract the filtered term map of a document.
    pub fn extract_document(&self, document: &Document) -> Result<DocumentTerms> {
        self.extract(&document.text)
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    pub fn predicates(&self) -> &PredicateList {
        &self.predicates
    }
}

impl std::fmt::Debug for TermExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TermExtractor")
            .field("analyzer", &self.analyzer.name())
            .field("predicates", &self.predicates.names())
            .finish()
    }
}
