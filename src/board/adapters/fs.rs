//! File-backed snapshot store.
//!
//! Persists the snapshot as a single JSON file inside a capability-scoped
//! directory, the desktop analogue of the browser storage key the board was
//! originally persisted under.

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::path::Path;

/// Default snapshot file name inside the store directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "board.json";

/// Snapshot store writing one JSON file in a directory.
///
/// The directory handle is capability-scoped: once opened, the store can
/// only touch files inside it.
#[derive(Debug)]
pub struct FileSnapshotStore {
    dir: Dir,
    file_name: String,
}

impl FileSnapshotStore {
    /// Opens a store over the given directory using the default file name.
    ///
    /// The directory must already exist.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with_file_name(path, DEFAULT_SNAPSHOT_FILE)
    }

    /// Opens a store over the given directory with a custom file name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be opened.
    pub fn open_with_file_name(
        path: impl AsRef<Path>,
        file_name: impl Into<String>,
    ) -> io::Result<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self {
            dir,
            file_name: file_name.into(),
        })
    }

    /// Returns the snapshot file name used by this store.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<String>> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotStoreError::storage(err)),
        }
    }

    async fn save(&self, raw: &str) -> SnapshotStoreResult<()> {
        self.dir
            .write(&self.file_name, raw)
            .map_err(SnapshotStoreError::storage)
    }
}
