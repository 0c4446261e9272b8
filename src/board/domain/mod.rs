//! Domain model for the task board.
//!
//! The board domain models the fixed set of workflow columns, the tasks and
//! subtasks they hold, and the transition engine that turns user actions
//! into new board revisions while keeping all infrastructure concerns
//! outside of the domain boundary.

mod board;
mod column;
mod error;
mod ids;
mod seed;
mod task;

pub use board::{Board, MoveRequest};
pub use column::{Column, ColumnId, ParseColumnIdError};
pub use error::{BoardError, InvariantViolation};
pub use ids::{SubtaskId, TaskId};
pub use task::{ParsePriorityError, Priority, Subtask, Task};
