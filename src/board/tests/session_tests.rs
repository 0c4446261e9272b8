//! Session service tests: load policies, dispatch, and persistence.

use super::{task, task_id};
use crate::board::adapters::memory::InMemorySnapshotStore;
use crate::board::domain::{Board, ColumnId, MoveRequest};
use crate::board::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
use crate::board::services::{BoardCommand, BoardSession, BoardSessionError};
use crate::board::snapshot;
use async_trait::async_trait;
use chrono::NaiveDate;
use rstest::{fixture, rstest};
use std::sync::Arc;

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

/// Store whose saves always fail, for commit-then-persist semantics.
#[derive(Debug, Default)]
struct WriteFailingStore;

#[async_trait]
impl SnapshotStore for WriteFailingStore {
    async fn load(&self) -> SnapshotStoreResult<Option<String>> {
        Ok(None)
    }

    async fn save(&self, _raw: &str) -> SnapshotStoreResult<()> {
        Err(SnapshotStoreError::storage(std::io::Error::other(
            "disk full",
        )))
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_seeds_when_no_snapshot_exists(today: NaiveDate) {
    let store = Arc::new(InMemorySnapshotStore::new());
    let session = BoardSession::open(store, today)
        .await
        .expect("open succeeds");

    assert_eq!(session.board(), &Board::seed(today));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_restores_a_saved_snapshot(today: NaiveDate) {
    let board = Board::empty()
        .create_task(task("t1", "Persisted"))
        .expect("unique id");
    let raw = snapshot::encode(&board).expect("encoding succeeds");
    let store = Arc::new(InMemorySnapshotStore::with_snapshot(raw));

    let session = BoardSession::open(store, today)
        .await
        .expect("open succeeds");

    assert_eq!(session.board(), &board);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_falls_back_to_seed_on_corrupt_snapshot(today: NaiveDate) {
    let store = Arc::new(InMemorySnapshotStore::with_snapshot("{\"columns\": 41}"));
    let session = BoardSession::open(store, today)
        .await
        .expect("open succeeds despite corruption");

    assert_eq!(session.board(), &Board::seed(today));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_commits_and_persists_each_revision() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let mut session = BoardSession::with_board(Arc::clone(&store), Board::empty());

    session
        .dispatch(BoardCommand::Create(task("t1", "First")))
        .await
        .expect("create succeeds");
    session
        .dispatch(BoardCommand::Move(MoveRequest {
            source_column: ColumnId::NotStarted,
            source_index: 0,
            dest_column: ColumnId::InProgress,
            dest_index: 0,
        }))
        .await
        .expect("move succeeds");

    let saved = store
        .last_saved()
        .expect("store readable")
        .expect("a snapshot was saved");
    let persisted = snapshot::decode(&saved).expect("saved snapshot decodes");
    assert_eq!(persisted, *session.board());
    assert!(
        persisted
            .column(ColumnId::InProgress)
            .expect("stage present")
            .tasks()
            .iter()
            .any(|item| item.id() == &task_id("t1"))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_leaves_the_board_unchanged_when_the_engine_rejects() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let mut session = BoardSession::with_board(Arc::clone(&store), Board::empty());

    let result = session
        .dispatch(BoardCommand::Move(MoveRequest {
            source_column: ColumnId::NotStarted,
            source_index: 0,
            dest_column: ColumnId::Done,
            dest_index: 0,
        }))
        .await;

    assert!(matches!(result, Err(BoardSessionError::Board(_))));
    assert_eq!(session.board(), &Board::empty());
    // Nothing was persisted for the rejected mutation.
    assert!(store.last_saved().expect("store readable").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatch_reports_store_failure_but_keeps_the_committed_revision() {
    let mut session = BoardSession::with_board(Arc::new(WriteFailingStore), Board::empty());

    let result = session
        .dispatch(BoardCommand::Create(task("t1", "Kept in memory")))
        .await;

    assert!(matches!(result, Err(BoardSessionError::Store(_))));
    // The revision was committed before the failed save.
    assert!(session.board().contains_task(&task_id("t1")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subtask_commands_flow_through_dispatch() {
    let store = Arc::new(InMemorySnapshotStore::new());
    let mut session = BoardSession::with_board(Arc::clone(&store), Board::empty());

    session
        .dispatch(BoardCommand::Create(task("t1", "With checklist")))
        .await
        .expect("create succeeds");
    session
        .dispatch(BoardCommand::AddSubtask {
            task_id: task_id("t1"),
            title: "step one".to_owned(),
        })
        .await
        .expect("add subtask succeeds");

    let added = session
        .board()
        .task(&task_id("t1"))
        .expect("task present")
        .subtasks()[0]
        .id()
        .clone();

    session
        .dispatch(BoardCommand::ToggleSubtask {
            task_id: task_id("t1"),
            subtask_id: added.clone(),
        })
        .await
        .expect("toggle succeeds");
    let toggled = session.board().task(&task_id("t1")).expect("task present");
    assert!(toggled.subtasks()[0].is_completed());

    session
        .dispatch(BoardCommand::DeleteSubtask {
            task_id: task_id("t1"),
            subtask_id: added,
        })
        .await
        .expect("delete succeeds");
    let emptied = session.board().task(&task_id("t1")).expect("task present");
    assert!(emptied.subtasks().is_empty());
}
