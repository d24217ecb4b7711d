//! The trained state of a classifier.

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::classifier::config::DocumentType;
use crate::classifier::decimal;
use crate::classifier::estimator::{BinaryEstimator, LikelihoodEstimator, TermFrequencyEstimator};
use crate::classifier::mixed::MixedCombiner;
use crate::classifier::result::{ClassificationResult, make_result};
use crate::error::{ClassifierError, Result};
use crate::terms::{DocumentTerms, TermStatistics};

/// Estimation mode, prior and per-class statistics. Immutable once built and
/// shared read-only between classification threads.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainedModel {
    document_type: DocumentType,
    prior: f64,
    positive_prior: BigDecimal,
    negative_prior: BigDecimal,
    positive: TermStatistics,
    negative: TermStatistics,
}

impl TrainedModel {
    pub fn new(
        document_type: DocumentType,
        prior: f64,
        positive: TermStatistics,
        negative: TermStatistics,
    ) -> Result<Self> {
        if !(prior > 0.0 && prior < 1.0) {
            return Err(ClassifierError::configuration(format!(
                "prior must be within (0, 1), got {prior}"
            )));
        }

        Ok(TrainedModel {
            document_type,
            prior,
            positive_prior: decimal::from_f64(prior)?,
            negative_prior: decimal::from_f64(1.0 - prior)?,
            positive,
            negative,
        })
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn prior(&self) -> f64 {
        self.prior
    }

    /// Starting likelihoods `(prior, 1 - prior)`.
    pub fn priors(&self) -> (BigDecimal, BigDecimal) {
        (self.positive_prior.clone(), self.negative_prior.clone())
    }

    pub fn positive(&self) -> &TermStatistics {
        &self.positive
    }

    pub fn negative(&self) -> &TermStatistics {
        &self.negative
    }

    /// Classify an already extracted term map with this model's strategy.
    pub fn classify_terms(&self, terms: &DocumentTerms) -> ClassificationResult {
        match self.document_type {
            DocumentType::Binary => make_result(&BinaryEstimator::new(self).estimate(terms)),
            DocumentType::TermFrequency => {
                make_result(&TermFrequencyEstimator::new(self).estimate(terms))
            }
            DocumentType::Mixed => MixedCombiner::new(self).combine(terms),
        }
    }

    /// Summary of the model for display.
    pub fn info(&self) -> ClassificationInfo {
        ClassificationInfo {
            document_type: self.document_type,
            prior: self.prior,
            positive: ClassSummary::of(&self.positive),
            negative: ClassSummary::of(&self.negative),
        }
    }
}

/// Size of one class's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub documents: u64,
    pub vocabulary: usize,
    pub occurrences: u64,
}

impl ClassSummary {
    fn of(statistics: &TermStatistics) -> Self {
        ClassSummary {
            documents: statistics.document_count(),
            vocabulary: statistics.vocabulary_size(),
            occurrences: statistics.total_occurrences(),
        }
    }
}

/// Description of a trained classifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationInfo {
    pub document_type: DocumentType,
    pub prior: f64,
    pub positive: ClassSummary,
    pub negative: ClassSummary,
}
