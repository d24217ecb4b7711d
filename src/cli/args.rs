//! Command line argument parsing for lexiclass CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classifier::DocumentType;

/// lexiclass - Bayesian two-class web document classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "lexiclass")]
#[command(about = "Train and apply a two-class Bayesian document classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexiclassArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexiclassArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a classifier from labeled JSONL samples
    Train(TrainArgs),

    /// Classify JSONL documents with a trained model
    Classify(ClassifyArgs),

    /// Show what a model file contains
    Inspect(InspectArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// JSONL file with {"id", "text", "label"} lines
    #[arg(value_name = "SAMPLES")]
    pub samples: PathBuf,

    /// Where to write the trained model
    #[arg(short, long, value_name = "MODEL")]
    pub output: PathBuf,

    /// Classifier configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Estimation mode (binary, tf, mixed); overrides the config file
    #[arg(short = 't', long)]
    pub document_type: Option<DocumentType>,

    /// Prior probability of the positive class; overrides the config file
    #[arg(long)]
    pub prior: Option<f64>,

    /// Number of worker threads
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Trained model file
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// JSONL file with {"id", "text"} lines
    #[arg(value_name = "DOCUMENTS")]
    pub documents: PathBuf,

    /// Configuration file for term extraction (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Arguments for model inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Trained model file
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
