//! Then steps for board reordering BDD scenarios.

use super::world::{BoardWorld, parse_stage};
use corkboard::board::domain::BoardError;
use corkboard::board::services::BoardSessionError;
use corkboard::board::snapshot;
use rstest_bdd_macros::then;

#[then(r#"the stage "{stage}" is empty"#)]
fn stage_is_empty(world: &mut BoardWorld, stage: String) -> Result<(), eyre::Report> {
    let stage_id = parse_stage(&stage)?;
    let column = world
        .session
        .board()
        .column(stage_id)
        .ok_or_else(|| eyre::eyre!("stage '{stage}' missing from board"))?;
    if !column.is_empty() {
        return Err(eyre::eyre!(
            "expected '{stage}' to be empty, found {} tasks",
            column.len()
        ));
    }
    Ok(())
}

#[then(r#"slot {slot:usize} of "{stage}" holds "{title}""#)]
fn slot_holds_title(
    world: &mut BoardWorld,
    slot: usize,
    stage: String,
    title: String,
) -> Result<(), eyre::Report> {
    let stage_id = parse_stage(&stage)?;
    let column = world
        .session
        .board()
        .column(stage_id)
        .ok_or_else(|| eyre::eyre!("stage '{stage}' missing from board"))?;
    let found = column
        .tasks()
        .get(slot)
        .ok_or_else(|| eyre::eyre!("no task at slot {slot} of '{stage}'"))?;
    if found.title() != title {
        return Err(eyre::eyre!(
            "expected '{title}' at slot {slot} of '{stage}', found '{}'",
            found.title()
        ));
    }
    Ok(())
}

#[then("the command fails with a duplicate identifier error")]
fn fails_with_duplicate_id(world: &BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_dispatch_error {
        Some(BoardSessionError::Board(BoardError::DuplicateId(_))) => Ok(()),
        Some(other) => Err(eyre::eyre!("expected duplicate id error, got {other}")),
        None => Err(eyre::eyre!("expected the dispatch to fail")),
    }
}

#[then("the board holds {count:usize} task in total")]
fn board_holds_count(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.session.board().task_count();
    if actual != count {
        return Err(eyre::eyre!("expected {count} tasks, found {actual}"));
    }
    Ok(())
}

#[then("the saved snapshot matches the committed board")]
fn snapshot_matches_board(world: &BoardWorld) -> Result<(), eyre::Report> {
    let raw = world
        .store
        .last_saved()
        .map_err(|err| eyre::eyre!("store unreadable: {err}"))?
        .ok_or_else(|| eyre::eyre!("no snapshot was saved"))?;
    let persisted =
        snapshot::decode(&raw).map_err(|err| eyre::eyre!("saved snapshot corrupt: {err}"))?;
    if &persisted != world.session.board() {
        return Err(eyre::eyre!("saved snapshot differs from committed board"));
    }
    Ok(())
}
