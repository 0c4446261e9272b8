//! Workflow stages and the column list holder.

use super::{BoardError, Task};
use std::fmt;
use thiserror::Error;

/// Fixed workflow stage identifier.
///
/// The stage set is closed: users reorder tasks across these four stages
/// but cannot add or remove stages. Variant order is the canonical
/// left-to-right workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnId {
    /// Work that has not been picked up yet. New tasks land here.
    NotStarted,
    /// Work currently being done.
    InProgress,
    /// Work waiting on something external.
    Blocked,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// Every stage in canonical workflow order.
    pub const ALL: [Self; 4] = [Self::NotStarted, Self::InProgress, Self::Blocked, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Blocked => "blocked",
            Self::Done => "done",
        }
    }

    /// Returns the default display label for the stage.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Blocked => "Blocked",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "not-started" => Ok(Self::NotStarted),
            "in-progress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned while parsing stage identifiers from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workflow stage: {0}")]
pub struct ParseColumnIdError(pub String);

/// A workflow stage holding an ordered list of tasks.
///
/// Order within the task list is meaningful (it determines displayed
/// position) and only ever changes through engine operations, never by
/// sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with the stage's default display label.
    #[must_use]
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_owned(),
            tasks: Vec::new(),
        }
    }

    /// Reconstructs a column from persisted parts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyColumnTitle`] when the title is empty
    /// after trimming.
    pub fn from_parts(
        id: ColumnId,
        title: impl Into<String>,
        tasks: Vec<Task>,
    ) -> Result<Self, BoardError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptyColumnTitle);
        }
        Ok(Self {
            id,
            title: trimmed.to_owned(),
            tasks,
        })
    }

    /// Returns the stage identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the ordered task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Grants the engine mutable access to the ordered task list.
    pub(super) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }
}
