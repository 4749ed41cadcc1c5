use super::BookStore;
use crate::error::Result;
use crate::model::BookRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Stores the inventory as a single JSON array in one file.
///
/// Writes overwrite the file in place; there is no temp-file rename and no
/// locking, so two processes sharing a file can clobber each other.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookStore for JsonFileStore {
    fn load_records(&self) -> Result<Vec<BookRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<BookRecord> = serde_json::from_str(&content)?;
        Ok(records)
    }

    fn save_records(&mut self, records: &[BookRecord]) -> Result<()> {
        let content = encode_records(records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serializes records as a JSON array indented with four spaces.
pub fn encode_records(records: &[BookRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}
