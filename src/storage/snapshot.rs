//! Versioned model file format.
//!
//! # Layout (little-endian)
//!
//! | field          | size |
//! |----------------|------|
//! | magic `LXCL`   | 4    |
//! | format version | 4    |
//! | payload length | 8    |
//! | payload CRC32  | 4    |
//! | payload        | n    |
//!
//! The payload is the zstd-compressed bincode encoding of a
//! [`ModelSnapshot`]. Term maps are ordered, so the same model always
//! produces the same bytes.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::classifier::config::DocumentType;
use crate::classifier::model::TrainedModel;
use crate::error::{ClassifierError, Result};
use crate::terms::TermStatistics;

/// File magic.
pub const MAGIC: [u8; 4] = *b"LXCL";

/// Current format version.
pub const FORMAT_VERSION: u32 = 1;

const HEADER_SIZE: usize = 4 + 4 + 8 + 4;
const COMPRESSION_LEVEL: i32 = 3;

/// Stored form of one class's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub document_count: u64,
    pub document_frequency: BTreeMap<String, u64>,
    pub occurrences: BTreeMap<String, u64>,
    pub total_occurrences: u64,
}

impl From<&TermStatistics> for StatisticsSnapshot {
    fn from(statistics: &TermStatistics) -> Self {
        StatisticsSnapshot {
            document_count: statistics.document_count(),
            document_frequency: statistics
                .document_frequencies()
                .iter()
                .map(|(term, count)| (term.clone(), *count))
                .collect(),
            occurrences: statistics
                .occurrences()
                .iter()
                .map(|(term, count)| (term.clone(), *count))
                .collect(),
            total_occurrences: statistics.total_occurrences(),
        }
    }
}

impl From<StatisticsSnapshot> for TermStatistics {
    fn from(snapshot: StatisticsSnapshot) -> Self {
        TermStatistics::from_parts(
            snapshot.document_count,
            snapshot.document_frequency.into_iter().collect(),
            snapshot.occurrences.into_iter().collect(),
            snapshot.total_occurrences,
        )
    }
}

/// Everything needed to restore a [`TrainedModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub document_type: DocumentType,
    pub prior: f64,
    pub positive: StatisticsSnapshot,
    pub negative: StatisticsSnapshot,
}

impl ModelSnapshot {
    pub fn from_model(model: &TrainedModel) -> Self {
        ModelSnapshot {
            document_type: model.document_type(),
            prior: model.prior(),
            positive: StatisticsSnapshot::from(model.positive()),
            negative: StatisticsSnapshot::from(model.negative()),
        }
    }

    pub fn into_model(self) -> Result<TrainedModel> {
        TrainedModel::new(
            self.document_type,
            self.prior,
            self.positive.into(),
            self.negative.into(),
        )
        .map_err(|e| ClassifierError::persistence(format!("Invalid model snapshot: {e}")))
    }

    /// Encode header and payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let encoded = bincode::serialize(self)
            .map_err(|e| ClassifierError::persistence(format!("Failed to encode model: {e}")))?;
        let payload = zstd::encode_all(Cursor::new(encoded), COMPRESSION_LEVEL)
            .map_err(|e| ClassifierError::persistence(format!("Failed to compress model: {e}")))?;

        let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
        bytes.extend_from_slice(&MAGIC);
        bytes.write_u32::<LittleEndian>(FORMAT_VERSION)?;
        bytes.write_u64::<LittleEndian>(payload.len() as u64)?;
        bytes.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
        bytes.extend_from_slice(&payload);

        Ok(bytes)
    }

    /// Validate the header, then decode the payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(ClassifierError::persistence(format!(
                "File too short for a model header: {} bytes",
                bytes.len()
            )));
        }

        let mut reader = Cursor::new(bytes);
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(ClassifierError::persistence("Not a model file (bad magic)"));
        }

        let version = reader.read_u32::<LittleEndian>()?;
        if version != FORMAT_VERSION {
            return Err(ClassifierError::persistence(format!(
                "Unsupported model format version {version} (expected {FORMAT_VERSION})"
            )));
        }

        let length = reader.read_u64::<LittleEndian>()?;
        let checksum = reader.read_u32::<LittleEndian>()?;
        let payload = &bytes[HEADER_SIZE..];
        if payload.len() as u64 != length {
            return Err(ClassifierError::persistence(format!(
                "Payload length mismatch: header says {length}, found {}",
                payload.len()
            )));
        }
        if crc32fast::hash(payload) != checksum {
            return Err(ClassifierError::persistence("Checksum mismatch"));
        }

        let decoded = zstd::decode_all(Cursor::new(payload))
            .map_err(|e| ClassifierError::persistence(format!("Failed to decompress model: {e}")))?;
        bincode::deserialize(&decoded)
            .map_err(|e| ClassifierError::persistence(format!("Failed to decode model: {e}")))
    }
}

/// Write `model` to `path`, replacing any existing file.
pub fn save_model<P: AsRef<Path>>(path: P, model: &TrainedModel) -> Result<()> {
    let path = path.as_ref();
    let bytes = ModelSnapshot::from_model(model).to_bytes()?;

    let file = File::create(path).map_err(|e| {
        ClassifierError::persistence(format!("Failed to create {}: {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .map_err(|e| {
            ClassifierError::persistence(format!("Failed to write {}: {e}", path.display()))
        })?;

    info!("[store] model written to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Read a model from `path`.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TrainedModel> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ClassifierError::persistence(format!("Failed to open {}: {e}", path.display()))
    })?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes).map_err(|e| {
        ClassifierError::persistence(format!("Failed to read {}: {e}", path.display()))
    })?;
    debug!("[load] read {} bytes from {}", bytes.len(), path.display());

    ModelSnapshot::from_bytes(&bytes)?.into_model()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::{DocumentTerms, PredicateList};
    use tempfile::TempDir;

    fn model() -> TrainedModel {
        let predicates = PredicateList::new();
        let positive = vec![
            DocumentTerms::from_terms(["rust", "cargo", "cargo"], &predicates),
            DocumentTerms::from_terms(["rust", "crate"], &predicates),
        ];
        let negative = vec![DocumentTerms::from_terms(["python"], &predicates)];

        TrainedModel::new(
            DocumentType::Mixed,
            0.4,
            TermStatistics::build(&positive, &predicates),
            TermStatistics::build(&negative, &predicates),
        )
        .unwrap()
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.lxcl");
        let model = model();

        save_model(&path, &model).unwrap();
        let loaded = load_model(&path).unwrap();

        assert_eq!(loaded, model);
        assert_eq!(loaded.document_type(), DocumentType::Mixed);
        assert_eq!(loaded.positive().term_occurrences("cargo"), 2);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let model = model();
        let first = ModelSnapshot::from_model(&model).to_bytes().unwrap();
        let second = ModelSnapshot::from_model(&model.clone()).to_bytes().unwrap();
        assert_eq!(first, second);
        assert_eq!(&first[..4], b"LXCL");
    }

    #[test]
    fn test_rejects_corruption() {
        let bytes = ModelSnapshot::from_model(&model()).to_bytes().unwrap();

        let mut bad_magic = bytes.clone();
        bad_magic[0] = b'X';
        let mut bad_version = bytes.clone();
        bad_version[4] = 9;
        let mut bad_payload = bytes.clone();
        let last = bad_payload.len() - 1;
        bad_payload[last] ^= 0xff;
        let truncated = bytes[..bytes.len() - 1].to_vec();

        for corrupt in [bad_magic, bad_version, bad_payload, truncated, vec![1, 2, 3]] {
            let err = ModelSnapshot::from_bytes(&corrupt).unwrap_err();
            assert!(matches!(err, ClassifierError::Persistence(_)), "{err}");
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_model(temp_dir.path().join("missing.lxcl")).unwrap_err();
        assert!(matches!(err, ClassifierError::Persistence(_)));
    }
}
