//! Adapter implementations of the board ports.

pub mod fs;
pub mod memory;

pub use fs::FileSnapshotStore;
pub use memory::InMemorySnapshotStore;
