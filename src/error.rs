//! Error types for the lexiclass library.
//!
//! All fallible operations return [`ClassifierError`] through the [`Result`]
//! alias. Numeric edge cases during estimation are never errors; they resolve
//! to an undetermined classification instead. Only structural problems
//! (bad configuration, I/O, corrupt model files, unsupported parsing paths)
//! surface here.
//!
//! # Examples
//!
//! ```
//! use lexiclass::error::{ClassifierError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ClassifierError::configuration("prior must be within (0, 1)"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexiclass operations.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid or mistyped configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Loading or storing a trained model failed
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// The classifier was used before `teach` completed
    #[error("Model not trained: {0}")]
    NotTrained(String),

    /// Parsing path that has no implementation
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with ClassifierError.
pub type Result<T> = std::result::Result<T, ClassifierError>;

impl ClassifierError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Configuration(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Analysis(msg.into())
    }

    /// Create a new persistence error.
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Persistence(msg.into())
    }

    /// Create a new not-trained error.
    pub fn not_trained<S: Into<String>>(msg: S) -> Self {
        ClassifierError::NotTrained(msg.into())
    }

    /// Create a new not-supported error.
    pub fn not_supported<S: Into<String>>(msg: S) -> Self {
        ClassifierError::NotSupported(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        ClassifierError::Other(format!("Internal error: {}", msg.into()))
    }
}
