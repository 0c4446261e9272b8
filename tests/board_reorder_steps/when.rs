//! When steps for board reordering BDD scenarios.

use super::world::{BoardWorld, parse_stage, run_async};
use corkboard::board::domain::{MoveRequest, Task};
use corkboard::board::services::BoardCommand;
use rstest_bdd_macros::when;

#[when(r#"the task at slot {source_index:usize} of "{source}" is dropped at slot {dest_index:usize} of "{dest}""#)]
fn task_is_dropped(
    world: &mut BoardWorld,
    source_index: usize,
    source: String,
    dest_index: usize,
    dest: String,
) -> Result<(), eyre::Report> {
    let request = MoveRequest {
        source_column: parse_stage(&source)?,
        source_index,
        dest_column: parse_stage(&dest)?,
        dest_index,
    };
    match run_async(world.session.dispatch(BoardCommand::Move(request))) {
        Ok(_) => world.last_dispatch_error = None,
        Err(err) => world.last_dispatch_error = Some(err),
    }
    Ok(())
}

#[when("a task reusing the last identifier is created")]
fn duplicate_task_created(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_task_id
        .clone()
        .ok_or_else(|| eyre::eyre!("no task has been created in this scenario"))?;
    let duplicate =
        Task::new(id, "Duplicate").map_err(|err| eyre::eyre!("invalid duplicate task: {err}"))?;
    match run_async(world.session.dispatch(BoardCommand::Create(duplicate))) {
        Ok(_) => world.last_dispatch_error = None,
        Err(err) => world.last_dispatch_error = Some(err),
    }
    Ok(())
}

#[when("the drag gesture is cancelled")]
fn drag_cancelled(world: &mut BoardWorld) {
    // A cancelled gesture produces no move descriptor, so no command is
    // dispatched at all.
    world.last_dispatch_error = None;
}
