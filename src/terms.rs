//! Term extraction and per-class term statistics.
//!
//! - [`predicate`] - Conjunctive term predicates (short words, numbers, rare terms)
//! - [`document`] - Per-document term maps and the [`TermExtractor`]
//! - [`statistics`] - Per-class [`TermStatistics`] built during training

pub mod document;
pub mod predicate;
pub mod statistics;

pub use document::{DocumentTerms, TermExtractor};
pub use predicate::{PredicateKind, PredicateList, TermCounts, TermPredicate};
pub use statistics::TermStatistics;
