//! Shared project builders for unit tests.

use crate::project::domain::{
    PersistedProjectData, Project, ProjectId, ProjectName, ProjectStatus,
};
use chrono::{DateTime, NaiveDate};
use rstest::fixture;

/// Builds a stored project with explicit ordering keys.
pub fn project(
    id: i64,
    name: &str,
    added_secs: i64,
    deadline: (i32, u32, u32),
    status: ProjectStatus,
) -> Project {
    let created_at = DateTime::from_timestamp(added_secs, 0).expect("valid timestamp");
    let (year, month, day) = deadline;
    Project::from_persisted(PersistedProjectData {
        id: ProjectId::new(id).expect("valid project id"),
        name: ProjectName::new(name).expect("valid project name"),
        description: format!("{name} description"),
        deadline: NaiveDate::from_ymd_opt(year, month, day).expect("valid deadline"),
        status,
        created_at,
        updated_at: created_at,
    })
}

/// Zeta (added 3), alpha (added 1), Beta (added 2).
#[fixture]
pub fn sample() -> Vec<Project> {
    vec![
        project(1, "Zeta", 3, (2025, 3, 1), ProjectStatus::Completed),
        project(2, "alpha", 1, (2025, 1, 15), ProjectStatus::InProgress),
        project(3, "Beta", 2, (2025, 2, 10), ProjectStatus::Completed),
    ]
}

/// Every project shares one name (modulo case), deadline, and creation time.
pub fn all_keys_tied() -> Vec<Project> {
    ["Chores", "chores", "CHORES", "Chores"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| project(id, name, 100, (2025, 4, 4), ProjectStatus::InProgress))
        .collect()
}

/// Deterministic collection of `count` projects with repeated keys.
///
/// Names cycle through a short list with alternating case, creation times
/// repeat every eleven projects, and deadlines every five.
pub fn generated(count: usize) -> Vec<Project> {
    const NAMES: [&str; 7] = ["Roof", "garden", "Taxes", "roof", "Attic", "GARDEN", "bikes"];
    NAMES
        .iter()
        .cycle()
        .zip(ProjectStatus::ALL.iter().cycle())
        .zip(1_i64..)
        .take(count)
        .map(|((name, status), id)| {
            let deadline_day = u32::try_from(id.rem_euclid(5) + 1).expect("small day");
            project(
                id,
                name,
                (id * 37).rem_euclid(11),
                (2025, 8, deadline_day),
                *status,
            )
        })
        .collect()
}

/// Deterministic collection of `count` projects whose names differ even
/// after lower-casing.
pub fn generated_distinct_names(count: usize) -> Vec<Project> {
    generated(count)
        .into_iter()
        .map(|generic| {
            let id = generic.id().value();
            let name = if id.rem_euclid(2) == 0 {
                format!("Project {id:03}")
            } else {
                format!("project {id:03}")
            };
            project(id, &name, (id * 7).rem_euclid(13), (2025, 9, 1), generic.status())
        })
        .collect()
}

/// Returns the raw identifier values in sequence order.
pub fn ids(projects: &[Project]) -> Vec<i64> {
    projects.iter().map(|project| project.id().value()).collect()
}

/// Returns the names in sequence order.
pub fn names(projects: &[Project]) -> Vec<&str> {
    projects
        .iter()
        .map(|project| project.name().as_str())
        .collect()
}
