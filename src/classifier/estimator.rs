//! Likelihood estimators.
//!
//! Both estimators start from the class priors and multiply in one Laplace
//! smoothed factor per distinct document term:
//!
//! - [`BinaryEstimator`]: `(documentsWithTerm + 1) / (documentCount + 2)`
//! - [`TermFrequencyEstimator`]:
//!   `((termOccurrences + 1) / (totalOccurrences + 2)) ^ countInDocument`
//!
//! Factors lie strictly within (0, 1), so likelihoods shrink with every term
//! but never reach zero. Arithmetic is exact except for the factor division,
//! which is rounded to [`decimal::DIVISION_SCALE`] digits.

use bigdecimal::BigDecimal;
use log::debug;

use crate::classifier::decimal;
use crate::classifier::model::TrainedModel;
use crate::classifier::result::LikelihoodPair;
use crate::terms::{DocumentTerms, TermStatistics};

/// Computes the likelihood pair of a document's terms.
pub trait LikelihoodEstimator {
    fn estimate(&self, terms: &DocumentTerms) -> LikelihoodPair;

    /// Get the name of this estimator.
    fn name(&self) -> &'static str;
}

/// Bernoulli estimator over term presence.
#[derive(Debug, Clone, Copy)]
pub struct BinaryEstimator<'a> {
    model: &'a TrainedModel,
}

impl<'a> BinaryEstimator<'a> {
    pub fn new(model: &'a TrainedModel) -> Self {
        BinaryEstimator { model }
    }

    /// Smoothed probability that a document of the class contains `term`.
    pub fn factor(statistics: &TermStatistics, term: &str) -> BigDecimal {
        decimal::ratio(
            statistics.documents_with_term(term) + 1,
            statistics.document_count() + 2,
        )
    }
}

impl LikelihoodEstimator for BinaryEstimator<'_> {
    fn estimate(&self, terms: &DocumentTerms) -> LikelihoodPair {
        debug!("[binary] estimating likelihoods over {} terms [BEGIN]", terms.len());
        let (mut positive, mut negative) = self.model.priors();

        for term in terms.terms() {
            positive = &positive * &Self::factor(self.model.positive(), term);
            negative = &negative * &Self::factor(self.model.negative(), term);
        }

        debug!("[binary] estimating likelihoods [END]");
        LikelihoodPair::new(positive, negative)
    }

    fn name(&self) -> &'static str {
        "binary"
    }
}

/// Multinomial estimator over term occurrence counts.
#[derive(Debug, Clone, Copy)]
pub struct TermFrequencyEstimator<'a> {
    model: &'a TrainedModel,
}

impl<'a> TermFrequencyEstimator<'a> {
    pub fn new(model: &'a TrainedModel) -> Self {
        TermFrequencyEstimator { model }
    }

    /// Smoothed per-occurrence probability of `term` in the class.
    pub fn factor(statistics: &TermStatistics, term: &str) -> BigDecimal {
        decimal::ratio(
            statistics.term_occurrences(term) + 1,
            statistics.total_occurrences() + 2,
        )
    }
}

impl LikelihoodEstimator for TermFrequencyEstimator<'_> {
    fn estimate(&self, terms: &DocumentTerms) -> LikelihoodPair {
        debug!("[tf] estimating likelihoods over {} terms [BEGIN]", terms.len());
        let (mut positive, mut negative) = self.model.priors();

        for (term, count) in terms.iter() {
            let positive_factor = Self::factor(self.model.positive(), term);
            let negative_factor = Self::factor(self.model.negative(), term);
            positive = &positive * &decimal::pow(&positive_factor, count);
            negative = &negative * &decimal::pow(&negative_factor, count);
        }

        debug!("[tf] estimating likelihoods [END]");
        LikelihoodPair::new(positive, negative)
    }

    fn name(&self) -> &'static str {
        "tf"
    }
}
