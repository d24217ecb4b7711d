//! Persistence of trained models.
//!
//! Models are written as a small fixed header followed by a compressed
//! payload; see [`snapshot`] for the layout.

pub mod snapshot;

pub use snapshot::{FORMAT_VERSION, MAGIC, ModelSnapshot, StatisticsSnapshot, load_model, save_model};
