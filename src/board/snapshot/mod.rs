//! Snapshot codec: the persisted representation of a board.
//!
//! The snapshot is a JSON document with camelCase keys (`columns`,
//! `columnOrder`, `dueDate`), calendar dates as ISO-8601 `YYYY-MM-DD`
//! strings, and absent optional fields omitted rather than written as
//! `null`. Decoding rebuilds domain values through their validating
//! constructors and then checks the board's structural invariants, so a
//! successfully decoded board is always well formed.
//!
//! The codec never substitutes a fallback board: on corruption it reports
//! [`SnapshotError::Corrupt`] and leaves the recovery decision (typically
//! seeding a fresh board) to the caller.

mod models;

use crate::board::domain::Board;
use models::BoardSnapshot;
use thiserror::Error;

/// Errors returned by the snapshot codec.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The raw payload is not a structurally valid board snapshot.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    /// Serializing a board failed. Does not occur for well-formed boards.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

impl SnapshotError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        Self::Corrupt(reason.into())
    }
}

/// Encodes a board into its durable JSON representation.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] when JSON serialization fails.
pub fn encode(board: &Board) -> Result<String, SnapshotError> {
    let snapshot = BoardSnapshot::from(board);
    serde_json::to_string(&snapshot).map_err(SnapshotError::Encode)
}

/// Decodes a board from its durable JSON representation.
///
/// # Errors
///
/// Returns [`SnapshotError::Corrupt`] when the payload is malformed JSON,
/// references an unknown workflow stage, misses a fixed stage, repeats a
/// task identifier, carries an unparsable date, or violates any other
/// structural invariant.
pub fn decode(raw: &str) -> Result<Board, SnapshotError> {
    let snapshot: BoardSnapshot =
        serde_json::from_str(raw).map_err(|err| SnapshotError::corrupt(err.to_string()))?;
    Board::try_from(snapshot)
}
