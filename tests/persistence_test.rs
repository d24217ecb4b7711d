//! Integration tests for storing and loading trained classifiers

use std::fs;

use lexiclass::prelude::*;
use lexiclass::storage::{FORMAT_VERSION, MAGIC, load_model, save_model};
use tempfile::TempDir;

fn samples() -> Vec<LabeledSample> {
    [
        ("p1", "rust cargo crates ownership", true),
        ("p2", "rust borrow checker crates", true),
        ("p3", "cargo clippy rustup rust", true),
        ("n1", "python pip wheels django", false),
        ("n2", "django templates python", false),
        ("n3", "python notebooks pandas pip", false),
    ]
    .into_iter()
    .map(|(id, text, label)| LabeledSample::new(Document::new(id, text), label))
    .collect()
}

fn documents() -> Vec<Document> {
    vec![
        Document::new("d1", "rust crates and cargo"),
        Document::new("d2", "python with pandas"),
        Document::new("d3", "rust python pip crates crates"),
        Document::new("d4", ""),
    ]
}

#[test]
fn test_round_trip_preserves_results_in_every_mode() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let factory = BayesClassifierFactory::new();

    for format in ["binary", "tf", "mixed"] {
        let path = temp_dir.path().join(format!("{format}.lxcl"));
        let parameters = factory.parse_configuration_string(&format!("-f {format}"))?;
        let classifier = factory.get_instance(&*parameters)?;
        classifier.teach(&samples())?;
        classifier.store_to_file(&path)?;

        let loaded = factory.get_from_file(&path)?;
        assert_eq!(
            loaded.classify_batch(&documents())?,
            classifier.classify_batch(&documents())?,
            "{format}"
        );
    }
    Ok(())
}

#[test]
fn test_model_file_header() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.lxcl");

    let classifier = BayesClassifier::new(ClassifierConfig::default())?;
    classifier.teach(&samples())?;
    classifier.store_to_file(&path)?;

    let bytes = fs::read(&path)?;
    assert_eq!(&bytes[..4], &MAGIC);
    assert_eq!(u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]), FORMAT_VERSION);

    let model = load_model(&path)?;
    assert_eq!(model.document_type(), DocumentType::Binary);
    assert_eq!(model.positive().document_count(), 3);
    assert_eq!(model.negative().document_count(), 3);

    let copy = temp_dir.path().join("copy.lxcl");
    save_model(&copy, &model)?;
    assert_eq!(fs::read(&copy)?, bytes);
    Ok(())
}

#[test]
fn test_corrupt_file_is_an_error_not_an_empty_classifier() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("model.lxcl");

    let classifier = BayesClassifier::new(ClassifierConfig::default()).unwrap();
    classifier.teach(&samples()).unwrap();
    classifier.store_to_file(&path).unwrap();

    let mut bytes = fs::read(&path).unwrap();
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x55;
    fs::write(&path, &bytes).unwrap();

    let result = BayesClassifierFactory::new().get_from_file(&path);
    assert!(matches!(result, Err(ClassifierError::Persistence(_))));
}
