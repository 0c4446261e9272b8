//! Starter board content for first launches.

use super::{Board, Column, ColumnId, Priority, Subtask, SubtaskId, Task, TaskId};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

impl Board {
    /// Builds the sample starter board shown when no snapshot exists yet.
    ///
    /// Due dates are laid out relative to `today` so the sample always
    /// contains a mix of upcoming and overdue work. Passing the date in
    /// explicitly keeps the domain free of ambient clock reads and makes
    /// the seed deterministic under test.
    #[must_use]
    pub fn seed(today: NaiveDate) -> Self {
        // The sample content is static and known-valid; a constructor
        // rejecting it would be a bug caught by the seed tests.
        build_seed(today).unwrap_or_else(Self::empty)
    }
}

fn build_seed(today: NaiveDate) -> Option<Board> {
    let not_started = Column::from_parts(
        ColumnId::NotStarted,
        ColumnId::NotStarted.default_title(),
        vec![
            seed_task("1", "Research Market Trends")?
                .with_description("Analyze current market conditions and competitor strategies")
                .with_due_date(days_from(today, 7))
                .with_priority(Priority::Medium),
            seed_task("2", "Update Portfolio")?
                .with_description("Add recent projects and update skills section")
                .with_due_date(days_from(today, 3))
                .with_priority(Priority::High)
                .with_subtasks(vec![
                    seed_subtask("2-1", "Add new projects")?,
                    seed_subtask("2-2", "Update skills")?,
                ]),
        ],
    )
    .ok()?;

    let in_progress = Column::from_parts(
        ColumnId::InProgress,
        ColumnId::InProgress.default_title(),
        vec![
            seed_task("3", "Design System Documentation")?
                .with_description("Create comprehensive documentation for the design system")
                .with_due_date(days_from(today, 5))
                .with_priority(Priority::Medium)
                .with_subtasks(vec![
                    seed_subtask_done("3-1", "Component guidelines")?,
                    seed_subtask_done("3-2", "Color palette")?,
                    seed_subtask("3-3", "Typography guide")?,
                ]),
        ],
    )
    .ok()?;

    let blocked = Column::from_parts(
        ColumnId::Blocked,
        ColumnId::Blocked.default_title(),
        vec![
            seed_task("4", "API Integration")?
                .with_description("Waiting for API documentation from backend team")
                .with_due_date(days_from(today, 1))
                .with_priority(Priority::High),
        ],
    )
    .ok()?;

    let done = Column::from_parts(
        ColumnId::Done,
        ColumnId::Done.default_title(),
        vec![
            seed_task("5", "Setup Development Environment")?
                .with_description("Configure development tools and environment")
                .with_due_date(days_ago(today, 2))
                .with_priority(Priority::Low)
                .with_subtasks(vec![
                    seed_subtask_done("5-1", "Install dependencies")?,
                    seed_subtask_done("5-2", "Configure linting")?,
                ]),
            seed_task("6", "Taxes")?
                .with_description("Complete annual tax filing")
                .with_due_date(days_ago(today, 1))
                .with_priority(Priority::High)
                .with_subtasks(vec![
                    seed_subtask_done("6-1", "Gather documents")?,
                    seed_subtask_done("6-2", "Fill out forms")?,
                    seed_subtask_done("6-3", "Submit filing")?,
                ]),
        ],
    )
    .ok()?;

    let columns: BTreeMap<ColumnId, Column> = [not_started, in_progress, blocked, done]
        .into_iter()
        .map(|column| (column.id(), column))
        .collect();

    Board::from_parts(columns, ColumnId::ALL.to_vec()).ok()
}

fn seed_task(id: &str, title: &str) -> Option<Task> {
    Task::new(TaskId::new(id).ok()?, title).ok()
}

fn seed_subtask(id: &str, title: &str) -> Option<Subtask> {
    Subtask::new(SubtaskId::new(id).ok()?, title).ok()
}

fn seed_subtask_done(id: &str, title: &str) -> Option<Subtask> {
    Subtask::from_parts(SubtaskId::new(id).ok()?, title, true).ok()
}

fn days_from(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}
