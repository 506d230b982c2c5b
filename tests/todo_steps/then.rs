//! Then steps for todo lifecycle BDD scenarios.

use super::world::TodoWorld;
use rstest_bdd_macros::then;

#[then(r#"the list contains exactly one active todo "{text}""#)]
fn list_has_one_active_todo(world: &TodoWorld, text: String) -> Result<(), eyre::Report> {
    if world.store.len() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one todo, found {}",
            world.store.len()
        ));
    }
    let todo = world
        .store
        .todos()
        .first()
        .ok_or_else(|| eyre::eyre!("todo list is unexpectedly empty"))?;
    if todo.text() != text {
        return Err(eyre::eyre!(
            "expected todo text '{text}', found '{}'",
            todo.text()
        ));
    }
    if todo.completed() {
        return Err(eyre::eyre!("expected the todo to be active"));
    }
    Ok(())
}

#[then("the todo is completed")]
fn tracked_todo_is_completed(world: &TodoWorld) -> Result<(), eyre::Report> {
    let id = world
        .tracked_id
        .ok_or_else(|| eyre::eyre!("no todo tracked in scenario world"))?;
    let todo = world
        .store
        .find(id)
        .ok_or_else(|| eyre::eyre!("tracked todo is missing from the store"))?;
    if !todo.completed() {
        return Err(eyre::eyre!("expected the tracked todo to be completed"));
    }
    Ok(())
}

#[then("the list is empty")]
fn list_is_empty(world: &TodoWorld) -> Result<(), eyre::Report> {
    if !world.store.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty list, found {} todos",
            world.store.len()
        ));
    }
    Ok(())
}
