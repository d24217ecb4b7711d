//! Term predicates deciding which terms reach the statistics.
//!
//! Predicates are evaluated against a term together with its [`TermCounts`]:
//! at document granularity the counts describe the term inside that one
//! document (`documents == 1`), at collection granularity they describe the
//! term across all documents of a class. A [`PredicateList`] is conjunctive:
//! a term survives only if every predicate accepts it.
//!
//! # Examples
//!
//! ```
//! use lexiclass::terms::predicate::{PredicateList, TermCounts};
//! use lexiclass::terms::predicate::{NotNumber, NotShortWord};
//! use std::sync::Arc;
//!
//! let predicates = PredicateList::new()
//!     .with(Arc::new(NotShortWord::new(3)))
//!     .with(Arc::new(NotNumber));
//!
//! let once = TermCounts::new(1, 1);
//! assert!(predicates.accepts("rust", &once));
//! assert!(!predicates.accepts("to", &once));
//! assert!(!predicates.accepts("2024", &once));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// How often a term was seen: in how many documents, and how many times overall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermCounts {
    /// Number of documents containing the term.
    pub documents: u64,
    /// Total number of occurrences.
    pub occurrences: u64,
}

impl TermCounts {
    pub fn new(documents: u64, occurrences: u64) -> Self {
        TermCounts {
            documents,
            occurrences,
        }
    }
}

/// A single accept/reject rule for terms.
pub trait TermPredicate: Send + Sync + fmt::Debug {
    /// Return `true` if the term should be kept.
    fn accepts(&self, term: &str, counts: &TermCounts) -> bool;

    /// Get the name of this predicate (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Rejects terms shorter than `min_length` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotShortWord {
    min_length: usize,
}

impl NotShortWord {
    pub fn new(min_length: usize) -> Self {
        NotShortWord { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl TermPredicate for NotShortWord {
    fn accepts(&self, term: &str, _counts: &TermCounts) -> bool {
        term.chars().count() >= self.min_length
    }

    fn name(&self) -> &'static str {
        "not_short_word"
    }
}

/// Rejects terms that parse as numbers (`2024`, `3.14`, `3,14`, `1e5`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNumber;

impl NotNumber {
    /// Terms without a single digit never count as numbers, so words like
    /// `inf` or `nan` that `f64` would happily parse are kept.
    pub fn is_number(term: &str) -> bool {
        if !term.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }
        term.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
            || term.replace(',', ".").parse::<f64>().is_ok()
    }
}

impl TermPredicate for NotNumber {
    fn accepts(&self, term: &str, _counts: &TermCounts) -> bool {
        !Self::is_number(term)
    }

    fn name(&self) -> &'static str {
        "not_number"
    }
}

/// Rejects terms present in only one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotSingleDocument;

impl TermPredicate for NotSingleDocument {
    fn accepts(&self, _term: &str, counts: &TermCounts) -> bool {
        counts.documents > 1
    }

    fn name(&self) -> &'static str {
        "not_single_document"
    }
}

/// Rejects terms that occur only once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotSingleWord;

impl TermPredicate for NotSingleWord {
    fn accepts(&self, _term: &str, counts: &TermCounts) -> bool {
        counts.occurrences > 1
    }

    fn name(&self) -> &'static str {
        "not_single_word"
    }
}

/// Configuration names of the built-in predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateKind {
    NotShortWord,
    NotNumber,
    NotSingleDocument,
    NotSingleWord,
}

impl PredicateKind {
    /// Instantiate the predicate. `min_word_length` only matters for
    /// [`PredicateKind::NotShortWord`].
    pub fn build(self, min_word_length: usize) -> Arc<dyn TermPredicate> {
        match self {
            PredicateKind::NotShortWord => Arc::new(NotShortWord::new(min_word_length)),
            PredicateKind::NotNumber => Arc::new(NotNumber),
            PredicateKind::NotSingleDocument => Arc::new(NotSingleDocument),
            PredicateKind::NotSingleWord => Arc::new(NotSingleWord),
        }
    }
}

/// An ordered, conjunctive list of predicates. The empty list accepts
/// every term.
#[derive(Debug, Clone, Default)]
pub struct PredicateList {
    predicates: Vec<Arc<dyn TermPredicate>>,
}

impl PredicateList {
    pub fn new() -> Self {
        PredicateList {
            predicates: Vec::new(),
        }
    }

    /// Build a list from configuration names, keeping their order.
    pub fn from_kinds(kinds: &[PredicateKind], min_word_length: usize) -> Self {
        PredicateList {
            predicates: kinds.iter().map(|k| k.build(min_word_length)).collect(),
        }
    }

    /// Append a predicate.
    pub fn with(mut self, predicate: Arc<dyn TermPredicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Evaluate every predicate in order, stopping at the first rejection.
    pub fn accepts(&self, term: &str, counts: &TermCounts) -> bool {
        self.predicates.iter().all(|p| p.accepts(term, counts))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_short_word_counts_characters() {
        let predicate = NotShortWord::new(3);
        let counts = TermCounts::new(1, 1);

        assert!(predicate.accepts("abc", &counts));
        assert!(!predicate.accepts("ab", &counts));
        // three characters, six bytes
        assert!(predicate.accepts("żół", &counts));
    }

    #[test]
    fn test_not_number() {
        for number in ["0", "2024", "3.14", "3,14", "1e5", "-7", "1,000,000", "1.000.000", "10.04.2024"] {
            assert!(NotNumber::is_number(number), "{number}");
        }
        for word in ["rust", "inf", "nan", "x86", "2nd", ""] {
            assert!(!NotNumber::is_number(word), "{word}");
        }
    }

    #[test]
    fn test_collection_predicates() {
        assert!(!NotSingleDocument.accepts("t", &TermCounts::new(1, 5)));
        assert!(NotSingleDocument.accepts("t", &TermCounts::new(2, 2)));
        assert!(!NotSingleWord.accepts("t", &TermCounts::new(1, 1)));
        assert!(NotSingleWord.accepts("t", &TermCounts::new(1, 2)));
    }

    #[test]
    fn test_predicate_list_is_conjunctive() {
        let list = PredicateList::from_kinds(
            &[PredicateKind::NotShortWord, PredicateKind::NotNumber],
            4,
        );
        let counts = TermCounts::new(1, 1);

        assert_eq!(list.names(), vec!["not_short_word", "not_number"]);
        assert!(list.accepts("word", &counts));
        assert!(!list.accepts("abc", &counts));
        assert!(!list.accepts("12345", &counts));
    }

    #[test]
    fn test_empty_list_accepts_everything() {
        let list = PredicateList::new();
        assert!(list.is_empty());
        assert!(list.accepts("", &TermCounts::default()));
    }

    #[test]
    fn test_predicate_kind_serde_names() {
        let kinds: Vec<PredicateKind> =
            serde_json::from_str(r#"["not_single_document", "not_short_word"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![PredicateKind::NotSingleDocument, PredicateKind::NotShortWord]
        );
    }
}
