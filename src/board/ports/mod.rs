//! Port contracts for the board module.

mod snapshot_store;

pub use snapshot_store::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
