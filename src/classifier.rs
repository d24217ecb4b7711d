//! Bayesian two-class document classification.
//!
//! A [`BayesClassifier`] is trained on labeled documents, then assigns new
//! documents to the positive or negative class. Three estimation strategies
//! are available through [`DocumentType`]:
//!
//! - **Binary**: Laplace-smoothed Bernoulli likelihoods over term presence
//! - **TermFrequency**: multinomial likelihoods weighted by occurrence counts
//! - **Mixed**: both, arbitrated by [`mixed::arbitrate`]
//!
//! Likelihoods are computed with arbitrary-precision decimals so long
//! documents do not underflow.
//!
//! # Examples
//!
//! ```
//! use lexiclass::classifier::{BayesClassifier, Classifier, ClassifierConfig, Outcome};
//! use lexiclass::document::{Document, LabeledSample};
//!
//! let config = ClassifierConfig {
//!     collection_filters: Vec::new(),
//!     ..ClassifierConfig::default()
//! };
//! let classifier = BayesClassifier::new(config).unwrap();
//! classifier
//!     .teach(&[
//!         LabeledSample::positive(Document::new("p", "alpha beta")),
//!         LabeledSample::negative(Document::new("n", "gamma")),
//!     ])
//!     .unwrap();
//!
//! let result = classifier.classify(&Document::new("d", "alpha")).unwrap();
//! assert_eq!(result.outcome, Outcome::Positive);
//! ```

pub mod bayes;
pub mod config;
pub mod decimal;
pub mod estimator;
pub mod factory;
pub mod mixed;
pub mod model;
pub mod result;
pub mod trainer;
pub mod traits;

pub use bayes::BayesClassifier;
pub use config::{ClassifierConfig, DocumentType};
pub use estimator::{BinaryEstimator, LikelihoodEstimator, TermFrequencyEstimator};
pub use factory::{BayesClassifierFactory, BayesParameters};
pub use mixed::MixedCombiner;
pub use model::{ClassSummary, ClassificationInfo, TrainedModel};
pub use result::{ClassificationResult, LikelihoodPair, Outcome, make_result};
pub use trainer::Trainer;
pub use traits::{Classifier, ClassifierFactory, ClassifierParameters};
