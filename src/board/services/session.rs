//! The board session: single owner of the current board revision.

use crate::board::domain::{Board, BoardError, MoveRequest, SubtaskId, Task, TaskId};
use crate::board::ports::{SnapshotStore, SnapshotStoreError};
use crate::board::snapshot::{self, SnapshotError};
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// A board mutation expressed as a plain tagged value.
///
/// The presentation layer translates user actions into commands; the
/// command set is the whole mutation surface of the board. A cancelled
/// drag gesture simply produces no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Reorder a task within or across columns.
    Move(MoveRequest),
    /// Add a new task to the default first stage.
    Create(Task),
    /// Replace a task's fields in place, keeping its position.
    Update(Task),
    /// Remove a task from whichever column holds it.
    Delete(TaskId),
    /// Append a fresh subtask to a task's checklist.
    AddSubtask {
        /// Task owning the checklist.
        task_id: TaskId,
        /// Title for the new subtask.
        title: String,
    },
    /// Flip a subtask's completion flag.
    ToggleSubtask {
        /// Task owning the checklist.
        task_id: TaskId,
        /// Subtask to toggle.
        subtask_id: SubtaskId,
    },
    /// Remove a subtask from a task's checklist.
    DeleteSubtask {
        /// Task owning the checklist.
        task_id: TaskId,
        /// Subtask to remove.
        subtask_id: SubtaskId,
    },
}

impl BoardCommand {
    /// Returns a short label for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Move(_) => "move_task",
            Self::Create(_) => "create_task",
            Self::Update(_) => "update_task",
            Self::Delete(_) => "delete_task",
            Self::AddSubtask { .. } => "add_subtask",
            Self::ToggleSubtask { .. } => "toggle_subtask",
            Self::DeleteSubtask { .. } => "delete_subtask",
        }
    }
}

/// Service-level errors for board sessions.
#[derive(Debug, Error)]
pub enum BoardSessionError {
    /// The engine rejected the mutation; the committed board is unchanged.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// Snapshot encoding or decoding failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// The snapshot store failed.
    #[error(transparent)]
    Store(#[from] SnapshotStoreError),
}

/// Result type for board session operations.
pub type BoardSessionResult<T> = Result<T, BoardSessionError>;

/// Owner of the latest committed board revision.
///
/// The session serializes mutations: each [`dispatch`] applies one command
/// to the current revision, commits the resulting board, then persists it
/// through the snapshot store. Concurrent callers must share the session
/// behind `&mut` access, which is exactly the single-owner model the board
/// requires.
///
/// [`dispatch`]: BoardSession::dispatch
pub struct BoardSession<S: SnapshotStore> {
    store: Arc<S>,
    board: Board,
}

impl<S: SnapshotStore> BoardSession<S> {
    /// Opens a session from the snapshot store.
    ///
    /// An absent snapshot seeds the starter board. A snapshot that fails to
    /// decode also falls back to the starter board: this is the documented
    /// caller-side recovery for corruption, and the decode failure is
    /// logged rather than surfaced. Callers wanting a different policy can
    /// decode via [`snapshot::decode`] themselves and use [`with_board`].
    ///
    /// [`with_board`]: BoardSession::with_board
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Store`] when the store cannot be read.
    pub async fn open(store: Arc<S>, today: NaiveDate) -> BoardSessionResult<Self> {
        let board = store.load().await?.map_or_else(
            || Board::seed(today),
            |raw| {
                snapshot::decode(&raw).unwrap_or_else(|err| {
                    warn!(error = %err, "stored snapshot is corrupt, starting from the seed board");
                    Board::seed(today)
                })
            },
        );
        Ok(Self { store, board })
    }

    /// Creates a session over an already-constructed board.
    #[must_use]
    pub const fn with_board(store: Arc<S>, board: Board) -> Self {
        Self { store, board }
    }

    /// Returns the latest committed board revision.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Applies a command, commits the new revision, and persists it.
    ///
    /// The commit happens before the save: persistence is a side effect of
    /// a completed transition, so a store failure leaves the new revision
    /// in place and is reported for the caller to surface or retry.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSessionError::Board`] when the engine rejects the
    /// command (the committed board is unchanged), or
    /// [`BoardSessionError::Snapshot`] / [`BoardSessionError::Store`] when
    /// persisting the committed revision fails.
    pub async fn dispatch(&mut self, command: BoardCommand) -> BoardSessionResult<&Board> {
        let kind = command.kind();
        let next = self.apply(command)?;
        self.board = next;
        debug!(
            command = kind,
            tasks = self.board.task_count(),
            "committed board revision"
        );

        let raw = snapshot::encode(&self.board)?;
        self.store.save(&raw).await?;
        Ok(&self.board)
    }

    fn apply(&self, command: BoardCommand) -> Result<Board, BoardError> {
        match command {
            BoardCommand::Move(request) => self.board.move_task(&request),
            BoardCommand::Create(task) => self.board.create_task(task),
            BoardCommand::Update(task) => Ok(self.board.update_task(task)),
            BoardCommand::Delete(task_id) => Ok(self.board.delete_task(&task_id)),
            BoardCommand::AddSubtask { task_id, title } => {
                self.board.add_subtask(&task_id, &title)
            }
            BoardCommand::ToggleSubtask {
                task_id,
                subtask_id,
            } => Ok(self.board.toggle_subtask(&task_id, &subtask_id)),
            BoardCommand::DeleteSubtask {
                task_id,
                subtask_id,
            } => Ok(self.board.delete_subtask(&task_id, &subtask_id)),
        }
    }
}
