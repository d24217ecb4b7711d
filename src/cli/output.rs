//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::classifier::{ClassificationInfo, ClassificationResult, DocumentType, Outcome};
use crate::cli::args::{LexiclassArgs, OutputFormat};
use crate::error::Result;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingSummary {
    pub model_path: String,
    pub document_type: DocumentType,
    pub samples: usize,
    pub positive_samples: u64,
    pub negative_samples: u64,
    pub duration_ms: u64,
}

/// One classified document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentClassification {
    pub id: String,
    pub outcome: Outcome,
    pub confidence: f64,
    pub probabilities: String,
}

impl DocumentClassification {
    pub fn new(id: &str, result: ClassificationResult) -> Self {
        DocumentClassification {
            id: id.to_string(),
            outcome: result.outcome,
            confidence: result.confidence,
            probabilities: result.probabilities,
        }
    }
}

/// Result structure for a classification run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub results: Vec<DocumentClassification>,
    pub positive: usize,
    pub negative: usize,
    pub undetermined: usize,
    pub duration_ms: u64,
}

impl ClassificationReport {
    pub fn new(results: Vec<DocumentClassification>, duration_ms: u64) -> Self {
        let count = |outcome: Outcome| results.iter().filter(|r| r.outcome == outcome).count();
        ClassificationReport {
            positive: count(Outcome::Positive),
            negative: count(Outcome::Negative),
            undetermined: count(Outcome::Undetermined),
            results,
            duration_ms,
        }
    }
}

/// Output a training summary.
pub fn output_training(summary: &TrainingSummary, args: &LexiclassArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(summary, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Model trained successfully");
                println!();
            }
            println!("Model: {}", summary.model_path);
            println!("Mode: {}", summary.document_type);
            println!(
                "Samples: {} ({} positive, {} negative)",
                summary.samples, summary.positive_samples, summary.negative_samples
            );
            println!("Training time: {}ms", summary.duration_ms);
            Ok(())
        }
    }
}

/// Output classification results, one line per document in input order.
pub fn output_classification(report: &ClassificationReport, args: &LexiclassArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(report, args),
        OutputFormat::Human => {
            for result in &report.results {
                println!(
                    "{}\t{}\t{:.4}\t{}",
                    result.id, result.outcome, result.confidence, result.probabilities
                );
            }
            if args.verbosity() > 1 {
                println!();
                println!(
                    "{} positive, {} negative, {} undetermined in {}ms",
                    report.positive, report.negative, report.undetermined, report.duration_ms
                );
            }
            Ok(())
        }
    }
}

/// Output a model description.
pub fn output_info(path: &str, info: &ClassificationInfo, args: &LexiclassArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(info, args),
        OutputFormat::Human => {
            println!("Model: {path}");
            println!("════════════════");
            println!("Mode: {}", info.document_type);
            println!("Prior: {}", info.prior);
            for (name, class) in [("Positive", &info.positive), ("Negative", &info.negative)] {
                println!();
                println!("{name} class:");
                println!("  Documents: {}", class.documents);
                println!("  Distinct terms: {}", class.vocabulary);
                println!("  Term occurrences: {}", class.occurrences);
            }
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexiclassArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_outcomes() {
        let results = vec![
            DocumentClassification::new(
                "a",
                ClassificationResult::new("true=0.3;false=0.1".into(), 0.75, Outcome::Positive),
            ),
            DocumentClassification::new(
                "b",
                ClassificationResult::undetermined("true=0.5;false=0.5".into()),
            ),
        ];

        let report = ClassificationReport::new(results, 3);
        assert_eq!(report.positive, 1);
        assert_eq!(report.negative, 0);
        assert_eq!(report.undetermined, 1);
        assert_eq!(report.results[0].id, "a");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["results"][1]["outcome"], "undetermined");
    }
}
