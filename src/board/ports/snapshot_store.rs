//! Storage port for persisted board snapshots.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Durable storage contract for the encoded board snapshot.
///
/// The store deals in opaque text: encoding and decoding stay with the
/// snapshot codec. Implementations must surface storage failures (medium
/// unavailable, quota exceeded) rather than swallowing them; the caller
/// decides how to react.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the most recently saved snapshot payload.
    ///
    /// Returns `None` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the medium cannot be
    /// read.
    async fn load(&self) -> SnapshotStoreResult<Option<String>>;

    /// Saves a snapshot payload, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Storage`] when the medium cannot be
    /// written.
    async fn save(&self, raw: &str) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// Storage-layer failure.
    #[error("snapshot storage failure: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
