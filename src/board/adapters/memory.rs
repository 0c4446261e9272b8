//! In-memory snapshot store for testing.

use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory snapshot store.
///
/// Holds at most one payload, like a single storage key. Suitable for unit
/// tests and ephemeral sessions that never touch disk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<Option<String>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a snapshot payload, as if a previous
    /// session had saved it.
    #[must_use]
    pub fn with_snapshot(raw: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    /// Returns the most recently saved payload, for assertions.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the lock is poisoned.
    pub fn last_saved(&self) -> SnapshotStoreResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| SnapshotStoreError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.clone())
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Option<String>> {
        self.last_saved()
    }

    async fn save(&self, raw: &str) -> SnapshotStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| SnapshotStoreError::storage(std::io::Error::other(err.to_string())))?;
        *state = Some(raw.to_owned());
        Ok(())
    }
}
