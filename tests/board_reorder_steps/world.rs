//! Shared world state for board reordering BDD scenarios.

use std::sync::Arc;

use corkboard::board::adapters::memory::InMemorySnapshotStore;
use corkboard::board::domain::{Board, ColumnId, TaskId};
use corkboard::board::services::{BoardSession, BoardSessionError};
use rstest::fixture;

/// Scenario world for board reordering behaviour tests.
pub struct BoardWorld {
    /// The snapshot store backing the session, kept for assertions.
    pub store: Arc<InMemorySnapshotStore>,
    /// The session under test.
    pub session: BoardSession<InMemorySnapshotStore>,
    /// Identifier of the most recently created task.
    pub last_task_id: Option<TaskId>,
    /// Result of the last dispatch attempt.
    pub last_dispatch_error: Option<BoardSessionError>,
}

impl BoardWorld {
    /// Creates a world over an empty board and a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemorySnapshotStore::new());
        let session = BoardSession::with_board(Arc::clone(&store), Board::empty());
        Self {
            store,
            session,
            last_task_id: None,
            last_dispatch_error: None,
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a stage name used in feature text.
pub fn parse_stage(raw: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(raw).map_err(|err| eyre::eyre!("bad stage in feature text: {err}"))
}
