//! Classification results and the two-likelihood decision rule.

use std::cmp::Ordering;
use std::fmt;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::classifier::decimal;

/// Which class a document was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Positive,
    Negative,
    /// The competing likelihoods were equal.
    Undetermined,
}

impl Outcome {
    /// `Some(true)` for positive, `Some(false)` for negative.
    pub fn label(&self) -> Option<bool> {
        match self {
            Outcome::Positive => Some(true),
            Outcome::Negative => Some(false),
            Outcome::Undetermined => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Outcome::Positive => "positive",
            Outcome::Negative => "negative",
            Outcome::Undetermined => "undetermined",
        };
        f.write_str(name)
    }
}

/// Unnormalized likelihoods of the positive and negative class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikelihoodPair {
    pub positive: BigDecimal,
    pub negative: BigDecimal,
}

impl LikelihoodPair {
    pub fn new(positive: BigDecimal, negative: BigDecimal) -> Self {
        LikelihoodPair { positive, negative }
    }

    /// Ordering of positive relative to negative.
    pub fn compare(&self) -> Ordering {
        self.positive.cmp(&self.negative)
    }

    pub fn is_tied(&self) -> bool {
        self.compare() == Ordering::Equal
    }

    pub fn favors_positive(&self) -> bool {
        self.compare() == Ordering::Greater
    }

    /// `positive / (positive + negative)`.
    pub fn positive_share(&self) -> f64 {
        share(&self.positive, &self.negative)
    }

    /// `negative / (negative + positive)`.
    pub fn negative_share(&self) -> f64 {
        share(&self.negative, &self.positive)
    }

    /// The diagnostic string of this pair.
    pub fn describe(&self) -> String {
        describe(&self.positive, &self.negative)
    }
}

/// `part / (part + other)` with 100-digit half-up division, as `f64`.
pub(crate) fn share(part: &BigDecimal, other: &BigDecimal) -> f64 {
    decimal::to_f64(&decimal::divide(part, &(part + other)))
}

/// `true=<positive>;false=<negative>`, with both values printed as `f64`.
pub(crate) fn describe(positive: &BigDecimal, negative: &BigDecimal) -> String {
    format_probabilities(decimal::to_f64(positive), decimal::to_f64(negative))
}

pub(crate) fn format_probabilities(positive: f64, negative: f64) -> String {
    format!("true={positive:?};false={negative:?}")
}

/// Outcome of classifying one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Diagnostic `true=..;false=..` string with the compared values.
    pub probabilities: String,
    /// Confidence in [0, 1]; 0 exactly when undetermined.
    pub confidence: f64,
    pub outcome: Outcome,
}

impl ClassificationResult {
    pub fn new(probabilities: String, confidence: f64, outcome: Outcome) -> Self {
        ClassificationResult {
            probabilities,
            confidence,
            outcome,
        }
    }

    /// Undetermined result carrying the given diagnostic.
    pub fn undetermined(probabilities: String) -> Self {
        Self::new(probabilities, 0.0, Outcome::Undetermined)
    }

    pub fn is_undetermined(&self) -> bool {
        self.outcome == Outcome::Undetermined
    }
}

/// Turn two competing likelihoods into a result.
///
/// Equal likelihoods are undetermined with confidence 0; otherwise the larger
/// side wins with confidence `larger / (positive + negative)`. The diagnostic
/// always carries both raw values.
pub fn make_result(pair: &LikelihoodPair) -> ClassificationResult {
    let probabilities = pair.describe();
    match pair.compare() {
        Ordering::Equal => ClassificationResult::undetermined(probabilities),
        Ordering::Greater => {
            ClassificationResult::new(probabilities, pair.positive_share(), Outcome::Positive)
        }
        Ordering::Less => {
            ClassificationResult::new(probabilities, pair.negative_share(), Outcome::Negative)
        }
    }
}
