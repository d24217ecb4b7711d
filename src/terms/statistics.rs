//! Aggregate term statistics of one class.

use std::collections::HashMap;

use crate::terms::document::DocumentTerms;
use crate::terms::predicate::{PredicateList, TermCounts};

/// Term statistics over all training documents of one class.
///
/// Built once per `teach` call and never mutated afterwards. Lookups of
/// unknown terms return 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermStatistics {
    document_count: u64,
    document_frequency: HashMap<String, u64>,
    occurrences: HashMap<String, u64>,
    total_occurrences: u64,
}

impl TermStatistics {
    /// Statistics of a class without any training documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Aggregate `documents`, then drop every term the collection-level
    /// `predicates` reject. The occurrence sum only covers kept terms.
    pub fn build<'a, I>(documents: I, predicates: &PredicateList) -> Self
    where
        I: IntoIterator<Item = &'a DocumentTerms>,
    {
        let mut document_count = 0;
        let mut counts: HashMap<String, TermCounts> = HashMap::new();

        for document in documents {
            document_count += 1;
            for (term, count) in document.iter() {
                let entry = counts.entry(term.to_string()).or_default();
                entry.documents += 1;
                entry.occurrences += count;
            }
        }

        let mut document_frequency = HashMap::with_capacity(counts.len());
        let mut occurrences = HashMap::with_capacity(counts.len());
        let mut total_occurrences = 0;

        for (term, term_counts) in counts {
            if !predicates.accepts(&term, &term_counts) {
                continue;
            }
            total_occurrences += term_counts.occurrences;
            document_frequency.insert(term.clone(), term_counts.documents);
            occurrences.insert(term, term_counts.occurrences);
        }

        TermStatistics {
            document_count,
            document_frequency,
            occurrences,
            total_occurrences,
        }
    }

    /// Reassemble statistics from their stored parts.
    ///
    /// Terms missing from `occurrences` get an occurrence count of 0.
    pub fn from_parts(
        document_count: u64,
        document_frequency: HashMap<String, u64>,
        occurrences: HashMap<String, u64>,
        total_occurrences: u64,
    ) -> Self {
        TermStatistics {
            document_count,
            document_frequency,
            occurrences,
            total_occurrences,
        }
    }

    /// Number of documents in the class.
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Number of documents containing `term`.
    pub fn documents_with_term(&self, term: &str) -> u64 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Total occurrences of `term` across all documents.
    pub fn term_occurrences(&self, term: &str) -> u64 {
        self.occurrences.get(term).copied().unwrap_or(0)
    }

    /// Sum of all term occurrences in the class.
    pub fn total_occurrences(&self) -> u64 {
        self.total_occurrences
    }

    /// Number of distinct terms kept.
    pub fn vocabulary_size(&self) -> usize {
        self.document_frequency.len()
    }

    pub fn document_frequencies(&self) -> &HashMap<String, u64> {
        &self.document_frequency
    }

    pub fn occurrences(&self) -> &HashMap<String, u64> {
        &self.occurrences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::predicate::NotSingleDocument;
    use std::sync::Arc;

    fn doc(terms: &[&str]) -> DocumentTerms {
        DocumentTerms::from_terms(terms.iter().copied(), &PredicateList::new())
    }

    #[test]
    fn test_build_counts() {
        let docs = vec![
            doc(&["alpha", "beta", "alpha"]),
            doc(&["alpha", "gamma"]),
            doc(&[]),
        ];

        let stats = TermStatistics::build(&docs, &PredicateList::new());

        assert_eq!(stats.document_count(), 3);
        assert_eq!(stats.documents_with_term("alpha"), 2);
        assert_eq!(stats.term_occurrences("alpha"), 3);
        assert_eq!(stats.documents_with_term("beta"), 1);
        assert_eq!(stats.documents_with_term("delta"), 0);
        assert_eq!(stats.term_occurrences("delta"), 0);
        assert_eq!(stats.total_occurrences(), 5);
        assert_eq!(stats.vocabulary_size(), 3);
    }

    #[test]
    fn test_collection_predicates_drop_single_document_terms() {
        let docs = vec![doc(&["alpha", "beta", "beta"]), doc(&["alpha"])];
        let predicates = PredicateList::new().with(Arc::new(NotSingleDocument));

        let stats = TermStatistics::build(&docs, &predicates);

        assert_eq!(stats.document_count(), 2);
        assert_eq!(stats.documents_with_term("alpha"), 2);
        assert_eq!(stats.documents_with_term("beta"), 0);
        assert_eq!(stats.term_occurrences("beta"), 0);
        assert_eq!(stats.total_occurrences(), 2);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = TermStatistics::empty();
        assert_eq!(stats.document_count(), 0);
        assert_eq!(stats.total_occurrences(), 0);
        assert_eq!(stats, TermStatistics::build(std::iter::empty(), &PredicateList::new()));
    }
}
