//! Then steps for project browsing BDD scenarios.

use super::world::BrowsingWorld;
use project_tracker::project::services::{EmptyState, ProjectsView};
use rstest_bdd_macros::then;

fn last_view(world: &BrowsingWorld) -> Result<&ProjectsView, eyre::Report> {
    world
        .last_view
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing rendered view in scenario world"))
}

#[then(r#"the projects are listed as "{expected}""#)]
fn projects_listed_as(world: &BrowsingWorld, expected: String) -> Result<(), eyre::Report> {
    let view = last_view(world)?;
    let actual: Vec<&str> = view
        .projects
        .iter()
        .map(|project| project.name().as_str())
        .collect();
    let wanted: Vec<&str> = expected.split(", ").collect();

    if actual != wanted {
        return Err(eyre::eyre!("expected projects {wanted:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("no projects are listed")]
fn no_projects_listed(world: &BrowsingWorld) -> Result<(), eyre::Report> {
    let view = last_view(world)?;
    if !view.projects.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty list, found {} projects",
            view.projects.len()
        ));
    }
    Ok(())
}

#[then(r#"the empty state names the search "{search}""#)]
fn empty_state_names_search(world: &BrowsingWorld, search: String) -> Result<(), eyre::Report> {
    let view = last_view(world)?;
    match &view.empty_state {
        Some(EmptyState::NoSearchResults { search: shown, .. }) if *shown == search => Ok(()),
        other => Err(eyre::eyre!(
            "expected a search empty state for {search:?}, found {other:?}"
        )),
    }
}

#[then("the empty state reports an empty collection")]
fn empty_state_reports_empty_collection(world: &BrowsingWorld) -> Result<(), eyre::Report> {
    let view = last_view(world)?;
    if view.empty_state != Some(EmptyState::NoProjectsYet) || view.total != 0 {
        return Err(eyre::eyre!(
            "expected an empty-collection state, found {:?} over {} projects",
            view.empty_state,
            view.total
        ));
    }
    Ok(())
}
