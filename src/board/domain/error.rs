//! Error types for board domain validation and transitions.

use super::{ColumnId, SubtaskId, TaskId};
use thiserror::Error;

/// Errors returned while constructing domain values or applying board
/// transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// A move request referenced a source slot outside the source column.
    #[error("invalid reorder: index {index} is out of range for column '{column}' (length {len})")]
    InvalidReorder {
        /// The column the bad index referenced.
        column: ColumnId,
        /// The offending index.
        index: usize,
        /// The length of the column's task list at the time of the request.
        len: usize,
    },

    /// A task with the same identifier already exists on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateId(TaskId),

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The subtask identifier is empty after trimming.
    #[error("subtask identifier must not be empty")]
    EmptySubtaskId,

    /// The subtask title is empty after trimming.
    #[error("subtask title must not be empty")]
    EmptySubtaskTitle,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// A fixed workflow stage is absent from the column map.
    ///
    /// The board constructors always populate every stage, so seeing this
    /// indicates corrupted state rather than caller error.
    #[error("workflow stage '{0}' is missing from the board")]
    MissingStage(ColumnId),
}

/// Structural invariant violations detected by [`Board::validate`].
///
/// These indicate programmer error or snapshot corruption, never ordinary
/// user input: engine operations preserve the invariants by construction.
///
/// [`Board::validate`]: super::Board::validate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A fixed stage is missing from the column map or the display order.
    #[error("workflow stage '{0}' is not present exactly once")]
    MissingColumn(ColumnId),

    /// A stage appears more than once in the display order.
    #[error("workflow stage '{0}' is listed more than once in the column order")]
    DuplicateColumn(ColumnId),

    /// A column is stored under a key that does not match its own id.
    #[error("column stored under key '{0}' reports a different id")]
    MismatchedColumnKey(ColumnId),

    /// The same task identifier appears in more than one slot.
    #[error("task '{0}' appears in more than one slot")]
    DuplicateTaskId(TaskId),

    /// The same subtask identifier appears twice within one task.
    #[error("subtask '{subtask_id}' appears twice within task '{task_id}'")]
    DuplicateSubtaskId {
        /// The task owning the duplicated subtask.
        task_id: TaskId,
        /// The duplicated subtask identifier.
        subtask_id: SubtaskId,
    },
}
