//! # lexiclass
//!
//! A two-class Bayesian classifier for web documents.
//!
//! ## Features
//!
//! - Binary (term presence), term-frequency and mixed estimation
//! - Arbitrary-precision likelihoods that never underflow
//! - Configurable text analysis and term filtering
//! - Parallel training and batch classification
//! - Versioned, checksummed model files

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod document;
pub mod error;
pub mod storage;
pub mod terms;

pub mod prelude {
    pub use crate::classifier::{
        BayesClassifier, BayesClassifierFactory, ClassificationResult, Classifier,
        ClassifierConfig, ClassifierFactory, DocumentType, Outcome,
    };
    pub use crate::document::{Document, LabeledSample};
    pub use crate::error::{ClassifierError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
