//! Wire models for the persisted snapshot document.
//!
//! These mirror the persisted JSON shape exactly and stay separate from the
//! domain types so that decoding always passes through the validating
//! domain constructors.

use super::SnapshotError;
use crate::board::domain::{Board, Column, ColumnId, Priority, Subtask, SubtaskId, Task, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level snapshot document.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BoardSnapshot {
    pub(super) columns: BTreeMap<String, ColumnRecord>,
    pub(super) column_order: Vec<String>,
}

/// Persisted form of one column.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct ColumnRecord {
    pub(super) id: String,
    pub(super) title: String,
    pub(super) tasks: Vec<TaskRecord>,
}

/// Persisted form of one task.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskRecord {
    pub(super) id: String,
    pub(super) title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) due_date: Option<NaiveDate>,
    pub(super) priority: String,
    pub(super) subtasks: Vec<SubtaskRecord>,
}

/// Persisted form of one subtask.
#[derive(Debug, Serialize, Deserialize)]
pub(super) struct SubtaskRecord {
    pub(super) id: String,
    pub(super) title: String,
    pub(super) completed: bool,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            columns: board
                .columns_in_order()
                .map(|column| (column.id().as_str().to_owned(), ColumnRecord::from(column)))
                .collect(),
            column_order: board
                .column_order()
                .iter()
                .map(|id| id.as_str().to_owned())
                .collect(),
        }
    }
}

impl From<&Column> for ColumnRecord {
    fn from(column: &Column) -> Self {
        Self {
            id: column.id().as_str().to_owned(),
            title: column.title().to_owned(),
            tasks: column.tasks().iter().map(TaskRecord::from).collect(),
        }
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            due_date: task.due_date(),
            priority: task.priority().as_str().to_owned(),
            subtasks: task.subtasks().iter().map(SubtaskRecord::from).collect(),
        }
    }
}

impl From<&Subtask> for SubtaskRecord {
    fn from(subtask: &Subtask) -> Self {
        Self {
            id: subtask.id().as_str().to_owned(),
            title: subtask.title().to_owned(),
            completed: subtask.is_completed(),
        }
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = SnapshotError;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let mut columns = BTreeMap::new();
        for (key, record) in snapshot.columns {
            let column_id = parse_column_id(&key)?;
            let column = Column::try_from(record)?;
            if column.id() != column_id {
                return Err(SnapshotError::corrupt(format!(
                    "column stored under key '{key}' reports id '{}'",
                    column.id()
                )));
            }
            if columns.insert(column_id, column).is_some() {
                return Err(SnapshotError::corrupt(format!(
                    "column '{key}' appears more than once"
                )));
            }
        }

        let mut column_order = Vec::with_capacity(snapshot.column_order.len());
        for raw_id in &snapshot.column_order {
            column_order.push(parse_column_id(raw_id)?);
        }

        Self::from_parts(columns, column_order)
            .map_err(|violation| SnapshotError::corrupt(violation.to_string()))
    }
}

impl TryFrom<ColumnRecord> for Column {
    type Error = SnapshotError;

    fn try_from(record: ColumnRecord) -> Result<Self, Self::Error> {
        let column_id = parse_column_id(&record.id)?;
        let mut tasks = Vec::with_capacity(record.tasks.len());
        for task_record in record.tasks {
            tasks.push(Task::try_from(task_record)?);
        }
        Self::from_parts(column_id, record.title, tasks)
            .map_err(|err| SnapshotError::corrupt(err.to_string()))
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = SnapshotError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let id = TaskId::new(record.id).map_err(|err| SnapshotError::corrupt(err.to_string()))?;
        let priority = Priority::try_from(record.priority.as_str())
            .map_err(|err| SnapshotError::corrupt(err.to_string()))?;

        let mut task = Self::new(id, record.title)
            .map_err(|err| SnapshotError::corrupt(err.to_string()))?
            .with_priority(priority);
        if let Some(description) = record.description {
            task = task.with_description(description);
        }
        if let Some(due_date) = record.due_date {
            task = task.with_due_date(due_date);
        }

        let mut subtasks = Vec::with_capacity(record.subtasks.len());
        for subtask_record in record.subtasks {
            subtasks.push(Subtask::try_from(subtask_record)?);
        }
        Ok(task.with_subtasks(subtasks))
    }
}

impl TryFrom<SubtaskRecord> for Subtask {
    type Error = SnapshotError;

    fn try_from(record: SubtaskRecord) -> Result<Self, Self::Error> {
        let id =
            SubtaskId::new(record.id).map_err(|err| SnapshotError::corrupt(err.to_string()))?;
        Self::from_parts(id, record.title, record.completed)
            .map_err(|err| SnapshotError::corrupt(err.to_string()))
    }
}

fn parse_column_id(raw: &str) -> Result<ColumnId, SnapshotError> {
    ColumnId::try_from(raw).map_err(|err| SnapshotError::corrupt(err.to_string()))
}
