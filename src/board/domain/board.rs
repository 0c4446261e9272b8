//! The board aggregate root and the reordering/mutation engine.

use super::{BoardError, Column, ColumnId, InvariantViolation, Subtask, SubtaskId, Task, TaskId};
use std::collections::{BTreeMap, HashSet};

/// A drag-and-drop move descriptor.
///
/// Produced by the gesture layer once a drop lands on a real destination; a
/// cancelled gesture never constructs one. Indices refer to positions in
/// the named columns' task lists. The destination index is interpreted
/// against the list *after* the source removal when both columns are the
/// same, and is clamped to the list length on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Stage the task is dragged from.
    pub source_column: ColumnId,
    /// Slot of the task within the source column.
    pub source_index: usize,
    /// Stage the task is dropped on.
    pub dest_column: ColumnId,
    /// Requested slot within the destination column.
    pub dest_index: usize,
}

/// The full board state: all columns, all tasks, column display order.
///
/// The board is the unit of persistence and the unit of atomic update.
/// Every engine operation takes `&self` and returns a fresh, fully
/// consistent `Board`; the input is never mutated, so a caller that holds
/// the previous revision can keep using it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: BTreeMap<ColumnId, Column>,
    column_order: Vec<ColumnId>,
}

impl Board {
    /// Stage that newly created tasks are appended to.
    pub const DEFAULT_STAGE: ColumnId = ColumnId::NotStarted;

    /// Creates a board with every stage present and empty, in canonical
    /// workflow order.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::ALL
                .iter()
                .map(|id| (*id, Column::new(*id)))
                .collect(),
            column_order: ColumnId::ALL.to_vec(),
        }
    }

    /// Reconstructs a board from persisted parts, enforcing structural
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn from_parts(
        columns: BTreeMap<ColumnId, Column>,
        column_order: Vec<ColumnId>,
    ) -> Result<Self, InvariantViolation> {
        let board = Self {
            columns,
            column_order,
        };
        board.validate()?;
        Ok(board)
    }

    /// Returns the left-to-right stage display order.
    #[must_use]
    pub fn column_order(&self) -> &[ColumnId] {
        &self.column_order
    }

    /// Returns the named column.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(&id)
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns_in_order(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    /// Returns the task with the given identifier, wherever it sits.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.locate(task_id)
            .and_then(|(column_id, index)| self.columns.get(&column_id)?.tasks().get(index))
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns.values().map(Column::len).sum()
    }

    /// Returns `true` when any column holds a task with the identifier.
    #[must_use]
    pub fn contains_task(&self, task_id: &TaskId) -> bool {
        self.locate(task_id).is_some()
    }

    /// Checks the structural invariants: every fixed stage present exactly
    /// once in both the column map and the display order, map keys matching
    /// column ids, no duplicate task identifiers anywhere, and no duplicate
    /// subtask identifiers within a task.
    ///
    /// Engine operations preserve these by construction; the check exists
    /// for snapshot decoding and for debug assertions.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for stage in ColumnId::ALL {
            if !self.columns.contains_key(&stage) {
                return Err(InvariantViolation::MissingColumn(stage));
            }
            match self.column_order.iter().filter(|id| **id == stage).count() {
                0 => return Err(InvariantViolation::MissingColumn(stage)),
                1 => {}
                _ => return Err(InvariantViolation::DuplicateColumn(stage)),
            }
        }

        let mut task_ids = HashSet::new();
        for (key, column) in &self.columns {
            if *key != column.id() {
                return Err(InvariantViolation::MismatchedColumnKey(*key));
            }
            for task in column.tasks() {
                if !task_ids.insert(task.id().clone()) {
                    return Err(InvariantViolation::DuplicateTaskId(task.id().clone()));
                }
                let mut subtask_ids = HashSet::new();
                for subtask in task.subtasks() {
                    if !subtask_ids.insert(subtask.id().clone()) {
                        return Err(InvariantViolation::DuplicateSubtaskId {
                            task_id: task.id().clone(),
                            subtask_id: subtask.id().clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Moves a task between slots, possibly across columns.
    ///
    /// Removes the task at the source slot and inserts the identical value
    /// at the destination slot, so column membership and ordering change
    /// atomically and no duplicate can appear. A request naming the same
    /// column and slot for source and destination is a no-op returning a
    /// value-equal board. The destination index is clamped to the
    /// destination list length (measured after the removal when both
    /// columns are the same).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidReorder`] when the source index is out
    /// of range.
    pub fn move_task(&self, request: &MoveRequest) -> Result<Self, BoardError> {
        let MoveRequest {
            source_column,
            source_index,
            dest_column,
            dest_index,
        } = *request;

        if source_column == dest_column && source_index == dest_index {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let source = next.column_mut(source_column)?;
        let len = source.tasks().len();
        if source_index >= len {
            return Err(BoardError::InvalidReorder {
                column: source_column,
                index: source_index,
                len,
            });
        }
        let task = source.tasks_mut().remove(source_index);

        let dest = next.column_mut(dest_column)?;
        let slot = dest_index.min(dest.tasks().len());
        dest.tasks_mut().insert(slot, task);

        debug_assert!(next.validate().is_ok());
        Ok(next)
    }

    /// Adds a new task to the end of the default first stage.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateId`] when a task with the same
    /// identifier already exists anywhere on the board.
    pub fn create_task(&self, task: Task) -> Result<Self, BoardError> {
        if self.contains_task(task.id()) {
            return Err(BoardError::DuplicateId(task.id().clone()));
        }
        let mut next = self.clone();
        next.column_mut(Self::DEFAULT_STAGE)?.tasks_mut().push(task);
        debug_assert!(next.validate().is_ok());
        Ok(next)
    }

    /// Replaces the stored task carrying `updated.id()` with `updated`,
    /// preserving its column and slot.
    ///
    /// Column membership never changes here; only [`Board::move_task`]
    /// does that. When no task carries the identifier the board is
    /// returned unchanged (documented no-op policy).
    #[must_use]
    pub fn update_task(&self, updated: Task) -> Self {
        let Some((column_id, index)) = self.locate(updated.id()) else {
            return self.clone();
        };
        let mut next = self.clone();
        if let Ok(column) = next.column_mut(column_id)
            && let Some(slot) = column.tasks_mut().get_mut(index)
        {
            *slot = updated;
        }
        debug_assert!(next.validate().is_ok());
        next
    }

    /// Removes the task carrying the identifier from whichever column
    /// holds it. No-op when the identifier is unknown.
    #[must_use]
    pub fn delete_task(&self, task_id: &TaskId) -> Self {
        let Some((column_id, index)) = self.locate(task_id) else {
            return self.clone();
        };
        let mut next = self.clone();
        if let Ok(column) = next.column_mut(column_id)
            && index < column.tasks().len()
        {
            let _removed = column.tasks_mut().remove(index);
        }
        debug_assert!(next.validate().is_ok());
        next
    }

    /// Appends a fresh, incomplete subtask to the named task's checklist.
    ///
    /// No-op when the task identifier is unknown, matching the update
    /// policy.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptySubtaskTitle`] when the title is empty
    /// after trimming.
    pub fn add_subtask(&self, task_id: &TaskId, title: &str) -> Result<Self, BoardError> {
        let subtask = Subtask::new(SubtaskId::random(), title)?;
        Ok(self.map_task(task_id, |task| task.push_subtask(subtask)))
    }

    /// Flips the completion flag of a subtask. No-op when either
    /// identifier is unknown.
    #[must_use]
    pub fn toggle_subtask(&self, task_id: &TaskId, subtask_id: &SubtaskId) -> Self {
        self.map_task(task_id, |task| {
            let _found = task.toggle_subtask(subtask_id);
        })
    }

    /// Removes a subtask from a task's checklist. No-op when either
    /// identifier is unknown.
    #[must_use]
    pub fn delete_subtask(&self, task_id: &TaskId, subtask_id: &SubtaskId) -> Self {
        self.map_task(task_id, |task| {
            let _found = task.remove_subtask(subtask_id);
        })
    }

    /// Applies an in-place transform to the named task, replacing it in
    /// its current slot. Returns an unchanged clone when the task is
    /// absent.
    fn map_task(&self, task_id: &TaskId, transform: impl FnOnce(&mut Task)) -> Self {
        let Some((column_id, index)) = self.locate(task_id) else {
            return self.clone();
        };
        let mut next = self.clone();
        if let Ok(column) = next.column_mut(column_id)
            && let Some(task) = column.tasks_mut().get_mut(index)
        {
            transform(task);
        }
        debug_assert!(next.validate().is_ok());
        next
    }

    /// Finds the column and slot holding the task, scanning columns in
    /// display order. First match wins; task identifiers are unique, so
    /// the scan order only matters for defence against corrupted state.
    fn locate(&self, task_id: &TaskId) -> Option<(ColumnId, usize)> {
        self.column_order.iter().find_map(|column_id| {
            let column = self.columns.get(column_id)?;
            column
                .tasks()
                .iter()
                .position(|task| task.id() == task_id)
                .map(|index| (*column_id, index))
        })
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column, BoardError> {
        self.columns
            .get_mut(&id)
            .ok_or(BoardError::MissingStage(id))
    }
}
