use crate::document::{GroupDocument, parse_group_document};
use fairshare_application::{GroupSnapshot, RecordSource, SnapshotError};
use std::{fs, path::PathBuf};

/// [`RecordSource`] backed by a JSON file. The file is re-read on every call so
/// the latest write always wins.
#[derive(Debug, Clone)]
pub struct JsonSnapshotSource {
    path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the file once and returns the records together with display names.
    pub fn load_document(&self) -> Result<GroupDocument, SnapshotError> {
        let raw = fs::read_to_string(&self.path).inspect_err(|err| {
            tracing::warn!(path = %self.path.display(), error = %err, "Failed to read group file");
        })?;
        parse_group_document(&raw)
    }
}

impl RecordSource for JsonSnapshotSource {
    fn snapshot(&self) -> Result<GroupSnapshot, SnapshotError> {
        self.load_document().map(|document| document.snapshot)
    }
}
