//! Board state management for Corkboard.
//!
//! This module owns every rule that governs the task board: which workflow
//! stages exist, where each task sits, how drag-and-drop reorders translate
//! into new board revisions, and how a board is encoded for persistence.
//! Every mutation produces a fully consistent new [`domain::Board`] value;
//! partial updates are never observable. The module follows hexagonal
//! architecture:
//!
//! - Domain types and the pure transition engine in [`domain`]
//! - Snapshot codec in [`snapshot`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board-owning session service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod snapshot;

#[cfg(test)]
mod tests;
