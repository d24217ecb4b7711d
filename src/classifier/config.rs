//! Configuration for the Bayes classifier.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::{ClassifierError, Result};
use crate::terms::{PredicateKind, PredicateList, TermExtractor};

/// Default probability of the positive class.
pub const DEFAULT_PRIOR: f64 = 0.5;

/// Default minimum term length, in characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Which estimation strategy a classifier uses.
///
/// Serialized as its short name; deserialization goes through [`FromStr`], so
/// config files accept the same spellings as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DocumentType {
    /// Term presence only.
    #[default]
    Binary,
    /// Term occurrence counts.
    TermFrequency,
    /// Both estimators, arbitrated.
    Mixed,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Binary => "binary",
            DocumentType::TermFrequency => "tf",
            DocumentType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Ok(DocumentType::Binary),
            "tf" | "term_frequency" => Ok(DocumentType::TermFrequency),
            "mixed" => Ok(DocumentType::Mixed),
            other => Err(ClassifierError::configuration(format!(
                "Unknown document type '{other}' (expected binary, tf or mixed)"
            ))),
        }
    }
}

impl TryFrom<String> for DocumentType {
    type Error = ClassifierError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<DocumentType> for String {
    fn from(document_type: DocumentType) -> Self {
        document_type.as_str().to_string()
    }
}

/// Settings of a [`BayesClassifier`](crate::classifier::BayesClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Estimation strategy.
    pub document_type: DocumentType,

    /// Prior probability of the positive class; the negative class gets
    /// `1 - prior`.
    pub prior: f64,

    /// Minimum term length used by the `not_short_word` predicate.
    pub min_word_length: usize,

    /// Predicates applied to the aggregated statistics of each class.
    pub collection_filters: Vec<PredicateKind>,

    /// Predicates applied to the terms of every single document.
    pub document_filters: Vec<PredicateKind>,

    /// Regex whose matches become tokens. If None, uses `\w+`.
    pub token_pattern: Option<String>,

    /// Custom stop words. If None, uses the default English list.
    pub stop_words: Option<Vec<String>>,

    /// Worker pool size for training and batch classification.
    /// If None, uses the number of CPU cores.
    pub worker_threads: Option<usize>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            document_type: DocumentType::Binary,
            prior: DEFAULT_PRIOR,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            collection_filters: vec![PredicateKind::NotSingleDocument],
            document_filters: vec![PredicateKind::NotShortWord, PredicateKind::NotNumber],
            token_pattern: None,
            stop_words: None,
            worker_threads: None,
        }
    }
}

impl ClassifierConfig {
    /// Default configuration with the given estimation strategy.
    pub fn with_document_type(document_type: DocumentType) -> Self {
        Self {
            document_type,
            ..Self::default()
        }
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ClassifierError::configuration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        let config: ClassifierConfig = serde_json::from_str(&content).map_err(|e| {
            ClassifierError::configuration(format!(
                "Invalid config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.prior > 0.0 && self.prior < 1.0) {
            return Err(ClassifierError::configuration(format!(
                "prior must be within (0, 1), got {}",
                self.prior
            )));
        }
        if self.worker_threads == Some(0) {
            return Err(ClassifierError::configuration(
                "worker_threads must be at least 1",
            ));
        }
        Ok(())
    }

    /// Resolved worker pool size.
    pub fn worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or_else(num_cpus::get)
    }

    pub fn collection_predicates(&self) -> PredicateList {
        PredicateList::from_kinds(&self.collection_filters, self.min_word_length)
    }

    pub fn document_predicates(&self) -> PredicateList {
        PredicateList::from_kinds(&self.document_filters, self.min_word_length)
    }

    /// Build the analyzer and document-level predicates for term extraction.
    pub fn term_extractor(&self) -> Result<TermExtractor> {
        let tokenizer = match &self.token_pattern {
            Some(pattern) => RegexTokenizer::with_pattern(pattern)?,
            None => RegexTokenizer::new()?,
        };
        let stop_filter = match &self.stop_words {
            Some(words) => StopFilter::from_words(words),
            None => StopFilter::new(),
        };
        let analyzer: Arc<dyn Analyzer> =
            Arc::new(StandardAnalyzer::with_parts(tokenizer, stop_filter));
        Ok(TermExtractor::new(analyzer, self.document_predicates()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_document_type_parsing() {
        assert_eq!("binary".parse::<DocumentType>().unwrap(), DocumentType::Binary);
        assert_eq!("TF".parse::<DocumentType>().unwrap(), DocumentType::TermFrequency);
        assert_eq!(" Mixed ".parse::<DocumentType>().unwrap(), DocumentType::Mixed);

        let err = "bayes".parse::<DocumentType>().unwrap_err();
        assert!(matches!(err, ClassifierError::Configuration(_)));
        assert_eq!(DocumentType::TermFrequency.to_string(), "tf");
    }

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.document_type, DocumentType::Binary);
        assert_eq!(config.prior, 0.5);
        assert_eq!(config.min_word_length, 3);
        assert_eq!(config.collection_predicates().names(), vec!["not_single_document"]);
        assert_eq!(
            config.document_predicates().names(),
            vec!["not_short_word", "not_number"]
        );
        assert!(config.validate().is_ok());
        assert!(config.worker_threads() >= 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        for prior in [0.0, 1.0, -0.1, f64::NAN] {
            let config = ClassifierConfig {
                prior,
                ..ClassifierConfig::default()
            };
            assert!(config.validate().is_err(), "{prior}");
        }

        let config = ClassifierConfig {
            worker_threads: Some(0),
            ..ClassifierConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"document_type": "mixed", "collection_filters": [], "stop_words": ["foo"]}}"#
        )
        .unwrap();

        let config = ClassifierConfig::from_file(file.path()).unwrap();
        assert_eq!(config.document_type, DocumentType::Mixed);
        assert!(config.collection_filters.is_empty());
        assert_eq!(config.stop_words, Some(vec!["foo".to_string()]));
        assert_eq!(config.min_word_length, DEFAULT_MIN_WORD_LENGTH);
    }

    #[test]
    fn test_from_file_rejects_unknown_filter() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"document_filters": ["not_a_filter"]}}"#).unwrap();
        assert!(ClassifierConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_document_type_in_json_is_case_insensitive() {
        let config: ClassifierConfig = serde_json::from_str(r#"{"document_type": "TF"}"#).unwrap();
        assert_eq!(config.document_type, DocumentType::TermFrequency);

        let config: ClassifierConfig =
            serde_json::from_str(r#"{"document_type": "Term_Frequency"}"#).unwrap();
        assert_eq!(config.document_type, DocumentType::TermFrequency);

        assert!(serde_json::from_str::<ClassifierConfig>(r#"{"document_type": "bayes"}"#).is_err());
        assert_eq!(
            serde_json::to_value(DocumentType::TermFrequency).unwrap(),
            serde_json::json!("tf")
        );
    }

    #[test]
    fn test_from_file_rejects_misspelled_key() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"priorr": 0.9}}"#).unwrap();
        let err = ClassifierConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Configuration(_)));
        assert!(err.to_string().contains("priorr"), "{err}");
    }

    #[test]
    fn test_token_pattern_reaches_extractor() {
        let config = ClassifierConfig {
            token_pattern: Some(r"[\p{L}-]+".to_string()),
            document_filters: Vec::new(),
            ..ClassifierConfig::default()
        };
        let terms = config.term_extractor().unwrap().extract("e-mail and web2").unwrap();
        assert_eq!(terms.terms().collect::<Vec<_>>(), vec!["e-mail", "web"]);

        let config = ClassifierConfig {
            token_pattern: Some("(unclosed".to_string()),
            ..ClassifierConfig::default()
        };
        assert!(matches!(
            config.term_extractor(),
            Err(ClassifierError::Analysis(_))
        ));
    }

    #[test]
    fn test_from_file_rejects_invalid_prior() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"prior": 1.5}}"#).unwrap();
        let err = ClassifierConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Configuration(_)));
    }
}
