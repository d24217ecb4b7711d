//! Classifier and factory trait definitions.

use std::any::Any;
use std::fmt;
use std::path::Path;

use crate::classifier::model::ClassificationInfo;
use crate::classifier::result::ClassificationResult;
use crate::document::{Document, LabeledSample};
use crate::error::Result;

/// Two-class document classifier.
///
/// Training replaces any previous state; it is never incremental.
/// Classification is read-only and may run concurrently once `teach` returned.
pub trait Classifier: Send + Sync + fmt::Debug {
    /// Train on labeled samples, replacing the current model.
    fn teach(&self, samples: &[LabeledSample]) -> Result<()>;

    /// Classify a single document.
    fn classify(&self, document: &Document) -> Result<ClassificationResult>;

    /// Classify many documents. Results are in input order.
    fn classify_batch(&self, documents: &[Document]) -> Result<Vec<ClassificationResult>>;

    /// Write the trained model to `path`.
    fn store_to_file(&self, path: &Path) -> Result<()>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}

/// Construction parameters of a classifier, downcast by its factory.
pub trait ClassifierParameters: Send + Sync + fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    /// Type name reported when a factory receives the wrong parameters.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Creates classifiers from parameters, configuration strings or files.
pub trait ClassifierFactory: Send + Sync {
    /// Build an untrained classifier. Fails if `parameters` are not the type
    /// this factory understands.
    fn get_instance(&self, parameters: &dyn ClassifierParameters) -> Result<Box<dyn Classifier>>;

    /// Parse a command-line style configuration string such as `-f tf`.
    fn parse_configuration_string(
        &self,
        configuration: &str,
    ) -> Result<Box<dyn ClassifierParameters>>;

    /// Load a trained classifier. Errors are returned, never replaced by an
    /// untrained instance.
    fn get_from_file(&self, path: &Path) -> Result<Box<dyn Classifier>>;

    /// Parse a textual classifier description.
    fn parse_classification_info(&self, info: &str) -> Result<ClassificationInfo>;
}
