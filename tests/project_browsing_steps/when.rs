//! When steps for project browsing BDD scenarios.

use super::world::{BrowsingWorld, parse_order};
use eyre::WrapErr;
use project_tracker::project::{domain::StatusFilter, services::BrowseEvent};
use rstest_bdd_macros::when;

#[when("the projects are browsed")]
fn browse_projects(world: &mut BrowsingWorld) {
    world.refresh();
}

#[when(r#"the order "{key}" "{direction}" is applied"#)]
fn apply_order(
    world: &mut BrowsingWorld,
    key: String,
    direction: String,
) -> Result<(), eyre::Report> {
    let order = parse_order(&key, &direction)?;
    world.handle(BrowseEvent::SelectOrder(order));
    world.handle(BrowseEvent::ApplyOrder);
    Ok(())
}

#[when(r#"the order "{key}" "{direction}" is highlighted"#)]
fn highlight_order(
    world: &mut BrowsingWorld,
    key: String,
    direction: String,
) -> Result<(), eyre::Report> {
    let order = parse_order(&key, &direction)?;
    world.handle(BrowseEvent::SelectOrder(order));
    Ok(())
}

#[when("the ordering is reset")]
fn reset_order(world: &mut BrowsingWorld) {
    world.handle(BrowseEvent::ResetOrder);
}

#[when(r#"the status chip "{label}" is selected"#)]
fn select_status(world: &mut BrowsingWorld, label: String) -> Result<(), eyre::Report> {
    let status = StatusFilter::try_from(label.as_str()).wrap_err("parse status chip")?;
    world.handle(BrowseEvent::SelectStatus(status));
    Ok(())
}

#[when(r#"the search text is "{search}""#)]
fn search(world: &mut BrowsingWorld, search: String) {
    world.handle(BrowseEvent::Search(search));
}
