//! Text analysis for lexiclass.
//!
//! Tokenization and normalization of document text, ahead of term filtering
//! and counting in [`crate::terms`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
