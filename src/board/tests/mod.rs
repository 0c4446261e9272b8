//! Unit tests for the board module.
//!
//! Tests are organised by concern: entity construction and projections,
//! the transition engine, the snapshot codec, and the session service.

mod session_tests;

use crate::board::domain::{Subtask, SubtaskId, Task, TaskId};

/// Builds a task with defaults from literal parts.
pub(crate) fn task(id: &str, title: &str) -> Task {
    Task::new(TaskId::new(id).expect("valid task id"), title).expect("valid task")
}

/// Builds a subtask from literal parts.
pub(crate) fn subtask(id: &str, title: &str, completed: bool) -> Subtask {
    Subtask::from_parts(SubtaskId::new(id).expect("valid subtask id"), title, completed)
        .expect("valid subtask")
}

/// Builds a task id from a literal.
pub(crate) fn task_id(id: &str) -> TaskId {
    TaskId::new(id).expect("valid task id")
}

/// Builds a subtask id from a literal.
pub(crate) fn subtask_id(id: &str) -> SubtaskId {
    SubtaskId::new(id).expect("valid subtask id")
}
