//! Identifier types for tasks and subtasks.
//!
//! Identifiers are opaque non-empty strings. Freshly created tasks and
//! subtasks receive random UUID-backed identifiers; identifiers loaded from
//! a snapshot keep whatever (non-empty) form they were persisted with.

use super::BoardError;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task, unique across the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTaskId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptyTaskId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a fresh random task identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a subtask, unique within its parent task.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubtaskId(String);

impl SubtaskId {
    /// Creates a validated subtask identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySubtaskId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptySubtaskId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a fresh random subtask identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubtaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SubtaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
