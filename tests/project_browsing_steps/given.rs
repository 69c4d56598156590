//! Given steps for project browsing BDD scenarios.

use super::world::{BrowsingWorld, run_async, scenario_deadline};
use eyre::WrapErr;
use project_tracker::project::{domain::ProjectStatus, services::CreateProjectRequest};
use rstest_bdd_macros::given;

#[given(r#"a project named "{name}" with status "{status}""#)]
fn project_with_status(
    world: &mut BrowsingWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let parsed = ProjectStatus::try_from(status.as_str()).wrap_err("parse project status")?;
    let created = run_async(
        world
            .catalog
            .create_project(CreateProjectRequest::new(name, scenario_deadline()?)),
    )
    .wrap_err("create scenario project")?;
    if parsed != created.status() {
        run_async(world.catalog.change_status(created.id(), parsed))
            .wrap_err("set scenario project status")?;
    }
    Ok(())
}
