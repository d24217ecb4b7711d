//! Two-class Bayesian web document classifier.

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::classifier::config::{ClassifierConfig, DocumentType};
use crate::classifier::model::{ClassificationInfo, TrainedModel};
use crate::classifier::result::ClassificationResult;
use crate::classifier::trainer::Trainer;
use crate::classifier::traits::Classifier;
use crate::document::{Document, LabeledSample};
use crate::error::{ClassifierError, Result};
use crate::storage;
use crate::terms::TermExtractor;

/// Bayesian likelihood-ratio classifier over two fixed classes.
///
/// `teach` builds a new [`TrainedModel`] and swaps it in under a write lock.
/// Classification clones the current model handle under a read lock and then
/// runs without holding it, so many documents can be classified in parallel.
pub struct BayesClassifier {
    config: ClassifierConfig,
    trainer: Trainer,
    model: RwLock<Option<Arc<TrainedModel>>>,
    thread_pool: Arc<ThreadPool>,
}

impl BayesClassifier {
    /// Create an untrained classifier.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let trainer = Trainer::new(config.term_extractor()?, config.collection_predicates());
        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(config.worker_threads())
            .thread_name(|i| format!("lexiclass-worker-{i}"))
            .build()
            .map_err(|e| ClassifierError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(BayesClassifier {
            config,
            trainer,
            model: RwLock::new(None),
            thread_pool: Arc::new(thread_pool),
        })
    }

    /// Wrap an already trained model.
    pub fn with_model(config: ClassifierConfig, model: TrainedModel) -> Result<Self> {
        let config = ClassifierConfig {
            document_type: model.document_type(),
            prior: model.prior(),
            ..config
        };
        let classifier = Self::new(config)?;
        *classifier.model.write() = Some(Arc::new(model));
        Ok(classifier)
    }

    /// Load a model file, extracting terms with the settings of `config`.
    pub fn load<P: AsRef<Path>>(path: P, config: ClassifierConfig) -> Result<Self> {
        let model = storage::load_model(path)?;
        Self::with_model(config, model)
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn document_type(&self) -> DocumentType {
        self.config.document_type
    }

    pub fn extractor(&self) -> &TermExtractor {
        self.trainer.extractor()
    }

    pub fn is_trained(&self) -> bool {
        self.model.read().is_some()
    }

    /// The current model.
    pub fn model(&self) -> Result<Arc<TrainedModel>> {
        self.model
            .read()
            .clone()
            .ok_or_else(|| ClassifierError::not_trained("call teach before using the classifier"))
    }

    /// Summary of the current model.
    pub fn info(&self) -> Result<ClassificationInfo> {
        Ok(self.model()?.info())
    }

    fn classify_with(&self, model: &TrainedModel, document: &Document) -> Result<ClassificationResult> {
        let terms = self.extractor().extract_document(document)?;
        let result = model.classify_terms(&terms);
        debug!(
            "[classify] {}: {} ({:.4}) {}",
            document.id, result.outcome, result.confidence, result.probabilities
        );
        Ok(result)
    }
}

impl Classifier for BayesClassifier {
    fn teach(&self, samples: &[LabeledSample]) -> Result<()> {
        let model = self.trainer.train(
            samples,
            self.config.document_type,
            self.config.prior,
            &self.thread_pool,
        )?;
        *self.model.write() = Some(Arc::new(model));
        Ok(())
    }

    fn classify(&self, document: &Document) -> Result<ClassificationResult> {
        let model = self.model()?;
        self.classify_with(&model, document)
    }

    fn classify_batch(&self, documents: &[Document]) -> Result<Vec<ClassificationResult>> {
        let model = self.model()?;
        info!("[classify] batch of {} documents", documents.len());

        self.thread_pool.install(|| {
            documents
                .par_iter()
                .map(|document| self.classify_with(&model, document))
                .collect()
        })
    }

    fn store_to_file(&self, path: &Path) -> Result<()> {
        let model = self.model()?;
        storage::save_model(path, &model)
    }

    fn name(&self) -> &str {
        "bayes"
    }
}

impl std::fmt::Debug for BayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BayesClassifier")
            .field("config", &self.config)
            .field("trained", &self.is_trained())
            .finish()
    }
}
