//! Given steps for board reordering BDD scenarios.

use super::world::{BoardWorld, parse_stage, run_async};
use corkboard::board::domain::{Board, ColumnId, Task, TaskId};
use corkboard::board::services::{BoardCommand, BoardSession};
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given("an empty board")]
fn an_empty_board(world: &mut BoardWorld) {
    world.session = BoardSession::with_board(Arc::clone(&world.store), Board::empty());
    world.last_task_id = None;
    world.last_dispatch_error = None;
}

#[given(r#"a task titled "{title}" in "{stage}""#)]
fn a_task_in_stage(
    world: &mut BoardWorld,
    title: String,
    stage: String,
) -> Result<(), eyre::Report> {
    let stage_id = parse_stage(&stage)?;
    if stage_id != ColumnId::NotStarted {
        return Err(eyre::eyre!(
            "scenarios seed tasks through creation, which lands in not-started"
        ));
    }

    let id = TaskId::random();
    let task =
        Task::new(id.clone(), title).map_err(|err| eyre::eyre!("invalid seed task: {err}"))?;
    run_async(world.session.dispatch(BoardCommand::Create(task)))
        .map_err(|err| eyre::eyre!("seeding task failed: {err}"))?;
    world.last_task_id = Some(id);
    Ok(())
}
