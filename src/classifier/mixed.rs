//! Arbitration between the binary and term-frequency estimators.
//!
//! The rules are evaluated in order and are intentionally not symmetric:
//!
//! 1. either pair tied: undetermined, binary pair reported
//! 2. binary favors positive: positive, binary confidence and pair
//! 3. term frequency does not favor positive: negative, confidence from the
//!    binary pair but the term-frequency pair reported
//! 4. binary positive or term-frequency negative is zero: undetermined
//! 5. otherwise compare the odds `bN / bP` against `tfP / tfN`; a smaller
//!    binary odds means positive

use std::cmp::Ordering;

use num_traits::Zero;

use crate::classifier::decimal;
use crate::classifier::estimator::{BinaryEstimator, LikelihoodEstimator, TermFrequencyEstimator};
use crate::classifier::model::TrainedModel;
use crate::classifier::result::{
    ClassificationResult, LikelihoodPair, Outcome, describe, format_probabilities, share,
};
use crate::terms::DocumentTerms;

/// Runs both estimators over one model and decides between them.
#[derive(Debug, Clone, Copy)]
pub struct MixedCombiner<'a> {
    model: &'a TrainedModel,
}

impl<'a> MixedCombiner<'a> {
    pub fn new(model: &'a TrainedModel) -> Self {
        MixedCombiner { model }
    }

    pub fn combine(&self, terms: &DocumentTerms) -> ClassificationResult {
        let binary = BinaryEstimator::new(self.model).estimate(terms);
        let tf = TermFrequencyEstimator::new(self.model).estimate(terms);
        arbitrate(&binary, &tf)
    }
}

/// Decide between a binary and a term-frequency likelihood pair.
pub fn arbitrate(binary: &LikelihoodPair, tf: &LikelihoodPair) -> ClassificationResult {
    if binary.is_tied() || tf.is_tied() {
        return ClassificationResult::undetermined(binary.describe());
    }

    if binary.favors_positive() {
        return ClassificationResult::new(
            binary.describe(),
            binary.positive_share(),
            Outcome::Positive,
        );
    }

    if !tf.favors_positive() {
        return ClassificationResult::new(tf.describe(), binary.negative_share(), Outcome::Negative);
    }

    // binary favors negative, term frequency favors positive
    if binary.positive.is_zero() || tf.negative.is_zero() {
        return ClassificationResult::undetermined(format_probabilities(0.0, 0.0));
    }

    let binary_odds = decimal::divide(&binary.negative, &binary.positive);
    let tf_odds = decimal::divide(&tf.positive, &tf.negative);

    if binary_odds.cmp(&tf_odds) == Ordering::Less {
        ClassificationResult::new(
            describe(&tf_odds, &binary_odds),
            share(&tf_odds, &binary_odds),
            Outcome::Positive,
        )
    } else {
        ClassificationResult::new(
            describe(&binary_odds, &tf_odds),
            share(&binary_odds, &tf_odds),
            Outcome::Negative,
        )
    }
}
