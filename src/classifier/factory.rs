//! Factory for [`BayesClassifier`] instances.

use std::any::Any;
use std::path::Path;

use clap::Parser;
use log::debug;

use crate::classifier::bayes::BayesClassifier;
use crate::classifier::config::{ClassifierConfig, DocumentType};
use crate::classifier::model::ClassificationInfo;
use crate::classifier::traits::{Classifier, ClassifierFactory, ClassifierParameters};
use crate::error::{ClassifierError, Result};

/// Parameters understood by [`BayesClassifierFactory`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BayesParameters {
    pub config: ClassifierConfig,
}

impl BayesParameters {
    pub fn new(config: ClassifierConfig) -> Self {
        BayesParameters { config }
    }

    pub fn with_document_type(document_type: DocumentType) -> Self {
        Self::new(ClassifierConfig::with_document_type(document_type))
    }
}

impl ClassifierParameters for BayesParameters {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Options accepted in a configuration string.
#[derive(Parser, Debug)]
#[command(name = "bayes", no_binary_name = true, disable_help_flag = true)]
struct ConfigurationArgs {
    /// Document format (binary, tf, mixed)
    #[arg(short = 'f', long = "format")]
    format: Option<DocumentType>,

    /// Prior probability of the positive class
    #[arg(short = 'p', long = "prior")]
    prior: Option<f64>,

    /// Minimum term length
    #[arg(short = 'm', long = "min-word-length")]
    min_word_length: Option<usize>,
}

/// Creates [`BayesClassifier`]s.
///
/// Term extraction settings of loaded classifiers come from the factory's
/// base configuration.
#[derive(Debug, Clone, Default)]
pub struct BayesClassifierFactory {
    base: ClassifierConfig,
}

impl BayesClassifierFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose parsed parameters and loaded classifiers start from `base`.
    pub fn with_config(base: ClassifierConfig) -> Self {
        BayesClassifierFactory { base }
    }
}

impl ClassifierFactory for BayesClassifierFactory {
    fn get_instance(&self, parameters: &dyn ClassifierParameters) -> Result<Box<dyn Classifier>> {
        let parameters = parameters
            .as_any()
            .downcast_ref::<BayesParameters>()
            .ok_or_else(|| {
                ClassifierError::configuration(format!(
                    "Unexpected parameters type {} for factory {}",
                    parameters.type_name(),
                    std::any::type_name::<Self>()
                ))
            })?;

        Ok(Box::new(BayesClassifier::new(parameters.config.clone())?))
    }

    fn parse_configuration_string(
        &self,
        configuration: &str,
    ) -> Result<Box<dyn ClassifierParameters>> {
        let args = ConfigurationArgs::try_parse_from(configuration.split_whitespace())
            .map_err(|e| {
                ClassifierError::configuration(format!(
                    "Invalid configuration string '{configuration}': {}",
                    e.to_string().trim()
                ))
            })?;
        debug!("[factory] parsed configuration {args:?}");

        let mut config = self.base.clone();
        if let Some(format) = args.format {
            config.document_type = format;
        }
        if let Some(prior) = args.prior {
            config.prior = prior;
        }
        if let Some(min_word_length) = args.min_word_length {
            config.min_word_length = min_word_length;
        }
        config.validate()?;

        Ok(Box::new(BayesParameters::new(config)))
    }

    fn get_from_file(&self, path: &Path) -> Result<Box<dyn Classifier>> {
        Ok(Box::new(BayesClassifier::load(path, self.base.clone())?))
    }

    fn parse_classification_info(&self, _info: &str) -> Result<ClassificationInfo> {
        Err(ClassifierError::not_supported(
            "parsing classification info is not implemented for the bayes classifier",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Document, LabeledSample};
    use tempfile::TempDir;

    #[derive(Debug)]
    struct OtherParameters;

    impl ClassifierParameters for OtherParameters {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn parse(configuration: &str) -> Result<ClassifierConfig> {
        let parameters = BayesClassifierFactory::new().parse_configuration_string(configuration)?;
        let parameters = parameters
            .as_any()
            .downcast_ref::<BayesParameters>()
            .unwrap()
            .clone();
        Ok(parameters.config)
    }

    #[test]
    fn test_parse_configuration_string() {
        assert_eq!(parse("").unwrap().document_type, DocumentType::Binary);
        assert_eq!(parse("-f tf").unwrap().document_type, DocumentType::TermFrequency);
        assert_eq!(parse("--format mixed").unwrap().document_type, DocumentType::Mixed);
        assert_eq!(parse("-f binary").unwrap().document_type, DocumentType::Binary);

        let config = parse("--format=tf -p 0.3 -m 4").unwrap();
        assert_eq!(config.document_type, DocumentType::TermFrequency);
        assert_eq!(config.prior, 0.3);
        assert_eq!(config.min_word_length, 4);
    }

    #[test]
    fn test_parse_configuration_string_errors() {
        for bad in ["-f bayes", "--unknown", "-f", "-p 1.5", "positional"] {
            assert!(
                matches!(parse(bad), Err(ClassifierError::Configuration(_))),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_get_instance_rejects_foreign_parameters() {
        let factory = BayesClassifierFactory::new();

        let err = factory.get_instance(&OtherParameters).unwrap_err();
        match err {
            ClassifierError::Configuration(message) => {
                assert!(message.contains("OtherParameters"), "{message}");
                assert!(message.contains("BayesClassifierFactory"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }

        let classifier = factory
            .get_instance(&BayesParameters::with_document_type(DocumentType::Mixed))
            .unwrap();
        assert_eq!(classifier.name(), "bayes");
    }

    #[test]
    fn test_get_from_file_surfaces_errors() {
        let temp_dir = TempDir::new().unwrap();
        let factory = BayesClassifierFactory::new();

        let missing = factory.get_from_file(&temp_dir.path().join("missing.lxcl"));
        assert!(matches!(missing, Err(ClassifierError::Persistence(_))));

        let garbage = temp_dir.path().join("garbage.lxcl");
        std::fs::write(&garbage, b"not a model at all").unwrap();
        assert!(matches!(
            factory.get_from_file(&garbage),
            Err(ClassifierError::Persistence(_))
        ));
    }

    #[test]
    fn test_get_from_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.lxcl");
        let factory = BayesClassifierFactory::new();

        let classifier = factory
            .get_instance(&BayesParameters::with_document_type(DocumentType::Binary))
            .unwrap();
        classifier
            .teach(&[
                LabeledSample::positive(Document::new("p1", "rust cargo")),
                LabeledSample::positive(Document::new("p2", "rust crates")),
                LabeledSample::negative(Document::new("n1", "python pip")),
                LabeledSample::negative(Document::new("n2", "python wheels")),
            ])
            .unwrap();
        classifier.store_to_file(&path).unwrap();

        let loaded = factory.get_from_file(&path).unwrap();
        let document = Document::new("d", "rust python rust");
        assert_eq!(
            loaded.classify(&document).unwrap(),
            classifier.classify(&document).unwrap()
        );
    }

    #[test]
    fn test_parse_classification_info_is_not_supported() {
        let factory = BayesClassifierFactory::new();
        assert!(matches!(
            factory.parse_classification_info("true=0.5;false=0.5"),
            Err(ClassifierError::NotSupported(_))
        ));
    }
}
