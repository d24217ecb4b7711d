//! Building a [`TrainedModel`] from labeled samples.

use log::{info, warn};
use rayon::ThreadPool;
use rayon::prelude::*;

use crate::classifier::config::DocumentType;
use crate::classifier::model::TrainedModel;
use crate::document::LabeledSample;
use crate::error::Result;
use crate::terms::{DocumentTerms, PredicateList, TermExtractor, TermStatistics};

/// Splits samples by label and aggregates one [`TermStatistics`] per class.
#[derive(Debug, Clone)]
pub struct Trainer {
    extractor: TermExtractor,
    collection_predicates: PredicateList,
}

impl Trainer {
    pub fn new(extractor: TermExtractor, collection_predicates: PredicateList) -> Self {
        Trainer {
            extractor,
            collection_predicates,
        }
    }

    /// Train a fresh model. Term extraction runs on `pool`.
    ///
    /// A class without samples gets empty statistics; that is not an error.
    pub fn train(
        &self,
        samples: &[LabeledSample],
        document_type: DocumentType,
        prior: f64,
        pool: &ThreadPool,
    ) -> Result<TrainedModel> {
        info!("[teach] training set: {} samples", samples.len());

        let (positive, negative): (Vec<&LabeledSample>, Vec<&LabeledSample>) =
            samples.iter().partition(|sample| sample.label);

        info!(
            "[teach] {} positive, {} negative samples",
            positive.len(),
            negative.len()
        );
        if positive.is_empty() || negative.is_empty() {
            warn!("[teach] one of the classes has no samples, its statistics will be empty");
        }

        let positive = self.class_statistics(&positive, pool)?;
        let negative = self.class_statistics(&negative, pool)?;

        info!(
            "[teach] vocabulary: {} positive terms, {} negative terms",
            positive.vocabulary_size(),
            negative.vocabulary_size()
        );

        TrainedModel::new(document_type, prior, positive, negative)
    }

    fn class_statistics(
        &self,
        samples: &[&LabeledSample],
        pool: &ThreadPool,
    ) -> Result<TermStatistics> {
        if samples.is_empty() {
            return Ok(TermStatistics::empty());
        }

        let documents: Vec<DocumentTerms> = pool.install(|| {
            samples
                .par_iter()
                .map(|sample| self.extractor.extract_document(&sample.document))
                .collect::<Result<Vec<_>>>()
        })?;

        Ok(TermStatistics::build(&documents, &self.collection_predicates))
    }

    pub fn extractor(&self) -> &TermExtractor {
        &self.extractor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::config::ClassifierConfig;
    use crate::document::Document;
    use rayon::ThreadPoolBuilder;

    fn pool() -> ThreadPool {
        ThreadPoolBuilder::new().num_threads(2).build().unwrap()
    }

    fn trainer(config: &ClassifierConfig) -> Trainer {
        Trainer::new(config.term_extractor().unwrap(), config.collection_predicates())
    }

    #[test]
    fn test_train_partitions_by_label() {
        let config = ClassifierConfig {
            collection_filters: Vec::new(),
            ..ClassifierConfig::default()
        };
        let samples = vec![
            LabeledSample::positive(Document::new("p1", "alpha beta")),
            LabeledSample::positive(Document::new("p2", "alpha delta")),
            LabeledSample::negative(Document::new("n1", "gamma")),
        ];

        let model = trainer(&config)
            .train(&samples, DocumentType::Binary, 0.5, &pool())
            .unwrap();

        assert_eq!(model.positive().document_count(), 2);
        assert_eq!(model.positive().documents_with_term("alpha"), 2);
        assert_eq!(model.positive().documents_with_term("gamma"), 0);
        assert_eq!(model.negative().document_count(), 1);
        assert_eq!(model.negative().documents_with_term("gamma"), 1);
    }

    #[test]
    fn test_default_collection_filter_drops_single_document_terms() {
        let config = ClassifierConfig::default();
        let samples = vec![
            LabeledSample::positive(Document::new("p1", "alpha beta")),
            LabeledSample::positive(Document::new("p2", "alpha")),
        ];

        let model = trainer(&config)
            .train(&samples, DocumentType::Binary, 0.5, &pool())
            .unwrap();

        assert_eq!(model.positive().documents_with_term("alpha"), 2);
        assert_eq!(model.positive().documents_with_term("beta"), 0);
        assert_eq!(model.positive().total_occurrences(), 2);
    }

    #[test]
    fn test_single_class_and_empty_training_sets() {
        let config = ClassifierConfig::default();
        let samples = vec![LabeledSample::negative(Document::new("n1", "gamma gamma"))];

        let model = trainer(&config)
            .train(&samples, DocumentType::TermFrequency, 0.5, &pool())
            .unwrap();
        assert_eq!(model.positive(), &TermStatistics::empty());
        assert_eq!(model.negative().document_count(), 1);

        let model = trainer(&config)
            .train(&[], DocumentType::Binary, 0.5, &pool())
            .unwrap();
        assert_eq!(model.positive().document_count(), 0);
        assert_eq!(model.negative().document_count(), 0);
    }
}
