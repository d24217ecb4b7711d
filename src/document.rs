//! Documents and labeled training samples.
//!
//! A [`Document`] is a page identifier (usually its URL) together with the
//! text already extracted from it. Fetching and HTML extraction happen
//! upstream; the classifier only ever sees text.
//!
//! # Examples
//!
//! ```
//! use lexiclass::document::{Document, LabeledSample};
//!
//! let doc = Document::new("https://example.org/", "Rust systems programming");
//! let sample = LabeledSample::positive(doc.clone());
//!
//! assert!(sample.label);
//! assert_eq!(sample.document.id, "https://example.org/");
//! ```

pub mod jsonl;

use serde::{Deserialize, Serialize};

/// A document to classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the document, e.g. the page URL.
    pub id: String,
    /// Extracted text content.
    pub text: String,
}

impl Document {
    /// Create a new document.
    pub fn new<I: Into<String>, T: Into<String>>(id: I, text: T) -> Self {
        Document {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A document with its class label, consumed only during training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSample {
    /// The training document.
    #[serde(flatten)]
    pub document: Document,
    /// `true` for the positive class, `false` for the negative class.
    pub label: bool,
}

impl LabeledSample {
    /// Create a new labeled sample.
    pub fn new(document: Document, label: bool) -> Self {
        LabeledSample { document, label }
    }

    /// Create a positive sample.
    pub fn positive(document: Document) -> Self {
        Self::new(document, true)
    }

    /// Create a negative sample.
    pub fn negative(document: Document) -> Self {
        Self::new(document, false)
    }
}
