//! Snapshot stores shipped with the engine.

use lernstil_core::{AssessmentSnapshot, PersistenceError, SnapshotStore, SNAPSHOT_KEY};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Keeps the last saved snapshot in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    snapshot: Option<AssessmentSnapshot>,
    saves: usize,
}

impl MemoryStore {
    /// A store that already holds `snapshot`, as if saved by an earlier session.
    #[must_use]
    pub fn with_snapshot(snapshot: AssessmentSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&AssessmentSnapshot> {
        self.snapshot.as_ref()
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &AssessmentSnapshot) -> Result<(), PersistenceError> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&self) -> Result<Option<AssessmentSnapshot>, PersistenceError> {
        Ok(self.snapshot.clone())
    }
}

/// Pretty-printed JSON file, one snapshot per file.
///
/// Saves go to `<file>.tmp` first and are renamed into place, so an
/// interrupted write never replaces the last good snapshot.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/learning-assessment.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{SNAPSHOT_KEY}.json")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SnapshotStore for JsonFileStore {
    fn save(&mut self, snapshot: &AssessmentSnapshot) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let staging = self.staging_path();
        let mut writer = BufWriter::new(File::create(&staging)?);
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writer.flush()?;
        std::fs::rename(&staging, &self.path)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<AssessmentSnapshot>, PersistenceError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        let snapshot = serde_json::from_reader(file)?;
        Ok(Some(snapshot))
    }
}
