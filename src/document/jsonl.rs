//! JSON Lines reader for documents and training samples.
//!
//! Each non-empty line is one JSON object:
//! ```jsonl
//! {"id": "https://example.org/a", "text": "rust ownership borrowing", "label": true}
//! {"id": "https://example.org/b", "text": "celebrity gossip", "label": false}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ClassifierError, Result};

/// Iterator over the records of a JSONL source.
pub struct JsonlReader<R, T> {
    reader: BufReader<R>,
    line_number: usize,
    _record: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<File, T> {
    /// Open a JSONL file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| {
            ClassifierError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to open {}: {e}", path.as_ref().display()),
            ))
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read, T: DeserializeOwned> JsonlReader<R, T> {
    /// Wrap any reader.
    pub fn new(reader: R) -> Self {
        JsonlReader {
            reader: BufReader::new(reader),
            line_number: 0,
            _record: PhantomData,
        }
    }
}

impl<R: Read, T: DeserializeOwned> Iterator for JsonlReader<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            self.line_number += 1;
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let line_number = self.line_number;
                    return Some(serde_json::from_str(line).map_err(|e| {
                        ClassifierError::Json(serde::de::Error::custom(format!(
                            "line {line_number}: {e}"
                        )))
                    }));
                }
                Err(e) => return Some(Err(ClassifierError::Io(e))),
            }
        }
    }
}

/// Read every record of a JSONL file, failing on the first bad line.
pub fn read_all<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    JsonlReader::open(path)?.collect()
}
