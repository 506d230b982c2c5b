//! When steps for todo lifecycle BDD scenarios.

use super::world::{TodoWorld, run_async};
use jotlist::todo::{domain::Todo, services::TodoStore};
use mockable::DefaultClock;
use rstest_bdd_macros::when;
use std::sync::Arc;

#[when(r#"the user adds "{text}""#)]
fn add_todo(world: &mut TodoWorld, text: String) {
    run_async(world.store.add(&text));
    world.tracked_id = world.store.todos().first().map(Todo::id);
}

#[when("the user toggles that todo")]
fn toggle_tracked_todo(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .ok_or_else(|| eyre::eyre!("no todo tracked in scenario world"))?;
    run_async(world.store.toggle(id));
    Ok(())
}

#[when("completed todos are cleared")]
fn clear_completed(world: &mut TodoWorld) {
    run_async(world.store.clear_completed());
}

#[when("the user deletes it twice")]
fn delete_tracked_todo_twice(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .ok_or_else(|| eyre::eyre!("no todo tracked in scenario world"))?;
    run_async(world.store.delete(id));
    run_async(world.store.delete(id));
    Ok(())
}

#[when("the store is reopened from the same storage")]
fn reopen_store(world: &mut TodoWorld) {
    world.store = run_async(TodoStore::open(
        Arc::clone(&world.snapshots),
        Arc::new(DefaultClock),
    ));
}
