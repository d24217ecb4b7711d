//! Command implementations for lexiclass CLI.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use crate::classifier::{BayesClassifier, Classifier, ClassifierConfig};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::jsonl::read_all;
use crate::document::{Document, LabeledSample};
use crate::storage;

/// Execute a CLI command.
pub fn execute_command(args: LexiclassArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect(inspect_args.clone(), &args),
    }
}

/// Train a classifier and store it.
fn train(args: TrainArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(document_type) = args.document_type {
        config.document_type = document_type;
    }
    if let Some(prior) = args.prior {
        config.prior = prior;
    }
    if args.threads.is_some() {
        config.worker_threads = args.threads;
    }

    let samples: Vec<LabeledSample> = read_all(&args.samples)
        .with_context(|| format!("Failed to read samples from {}", args.samples.display()))?;
    info!("Loaded {} samples from {}", samples.len(), args.samples.display());

    let start = Instant::now();
    let classifier = BayesClassifier::new(config)?;
    classifier.teach(&samples)?;
    classifier
        .store_to_file(&args.output)
        .with_context(|| format!("Failed to store model to {}", args.output.display()))?;

    let info = classifier.info()?;
    output_training(
        &TrainingSummary {
            model_path: args.output.to_string_lossy().to_string(),
            document_type: info.document_type,
            samples: samples.len(),
            positive_samples: info.positive.documents,
            negative_samples: info.negative.documents,
            duration_ms: start.elapsed().as_millis() as u64,
        },
        cli_args,
    )?;

    Ok(())
}

/// Classify documents with a stored model.
fn classify(args: ClassifyArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if args.threads.is_some() {
        config.worker_threads = args.threads;
    }

    let classifier = BayesClassifier::load(&args.model, config)
        .with_context(|| format!("Failed to load model from {}", args.model.display()))?;
    let documents: Vec<Document> = read_all(&args.documents)
        .with_context(|| format!("Failed to read documents from {}", args.documents.display()))?;

    let start = Instant::now();
    let results = classifier.classify_batch(&documents)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let results = documents
        .iter()
        .zip(results)
        .map(|(document, result)| DocumentClassification::new(&document.id, result))
        .collect();
    output_classification(&ClassificationReport::new(results, duration_ms), cli_args)?;

    Ok(())
}

/// Describe a stored model.
fn inspect(args: InspectArgs, cli_args: &LexiclassArgs) -> Result<()> {
    let model = storage::load_model(&args.model)
        .with_context(|| format!("Failed to load model from {}", args.model.display()))?;
    output_info(&args.model.to_string_lossy(), &model.info(), cli_args)?;
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ClassifierConfig> {
    match path {
        Some(path) => ClassifierConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ClassifierConfig::default()),
    }
}
