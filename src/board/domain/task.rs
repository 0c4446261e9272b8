//! Tasks, subtasks, and priority levels.

use super::{BoardError, SubtaskId, TaskId};
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    /// Can wait.
    Low,
    /// Ordinary urgency. The default for new tasks.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// A single checklist entry owned by exactly one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtask {
    id: SubtaskId,
    title: String,
    completed: bool,
}

impl Subtask {
    /// Creates a new incomplete subtask.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySubtaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(id: SubtaskId, title: impl Into<String>) -> Result<Self, BoardError> {
        Self::from_parts(id, title, false)
    }

    /// Reconstructs a subtask from persisted parts.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySubtaskTitle`] when the title is empty
    /// after trimming.
    pub fn from_parts(
        id: SubtaskId,
        title: impl Into<String>,
        completed: bool,
    ) -> Result<Self, BoardError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptySubtaskTitle);
        }
        Ok(Self {
            id,
            title: trimmed.to_owned(),
            completed,
        })
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> &SubtaskId {
        &self.id
    }

    /// Returns the subtask title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns `true` when the subtask has been checked off.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flips the completion flag.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// A work item belonging to exactly one column at any time.
///
/// Column membership is not stored on the task itself; it is defined by
/// which column's task list the task currently sits in, and only
/// [`Board::move_task`] may change it.
///
/// [`Board::move_task`]: super::Board::move_task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Priority,
    subtasks: Vec<Subtask>,
}

impl Task {
    /// Creates a task with the default priority and no optional fields.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTaskTitle`] when the title is empty after
    /// trimming.
    pub fn new(id: TaskId, title: impl Into<String>) -> Result<Self, BoardError> {
        let raw = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardError::EmptyTaskTitle);
        }
        Ok(Self {
            id,
            title: trimmed.to_owned(),
            description: None,
            due_date: None,
            priority: Priority::default(),
            subtasks: Vec::new(),
        })
    }

    /// Sets the free-form description. A whitespace-only description is
    /// treated as absent.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let raw = description.into();
        let trimmed = raw.trim();
        self.description = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
        self
    }

    /// Sets the due date. Dates are calendar days without time-of-day
    /// semantics.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Replaces the subtask list.
    #[must_use]
    pub fn with_subtasks(mut self, subtasks: impl IntoIterator<Item = Subtask>) -> Self {
        self.subtasks = subtasks.into_iter().collect();
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the ordered subtask list.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Appends a subtask to the checklist.
    pub fn push_subtask(&mut self, subtask: Subtask) {
        self.subtasks.push(subtask);
    }

    /// Flips the completion flag of the named subtask.
    ///
    /// Returns `false` when no subtask carries the identifier.
    pub fn toggle_subtask(&mut self, subtask_id: &SubtaskId) -> bool {
        self.subtasks
            .iter_mut()
            .find(|subtask| subtask.id() == subtask_id)
            .is_some_and(|subtask| {
                subtask.toggle();
                true
            })
    }

    /// Removes the named subtask from the checklist.
    ///
    /// Returns `false` when no subtask carries the identifier.
    pub fn remove_subtask(&mut self, subtask_id: &SubtaskId) -> bool {
        let before = self.subtasks.len();
        self.subtasks.retain(|subtask| subtask.id() != subtask_id);
        self.subtasks.len() != before
    }

    /// Returns the fraction of subtasks checked off, in `[0.0, 1.0]`.
    ///
    /// A task without subtasks reports `0.0`. This is a pure projection for
    /// progress display, not stored state.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "checklist lengths are tiny and the ratio only feeds a progress bar"
    )]
    pub fn completion_ratio(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }
        let completed = self
            .subtasks
            .iter()
            .filter(|subtask| subtask.is_completed())
            .count();
        completed as f64 / self.subtasks.len() as f64
    }
}
