//! Ordering choices and the ordering stage for project snapshots.

use super::Project;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Direction applied to a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Natural key order.
    Ascending,
    /// Reversed key order.
    Descending,
}

/// Sort key paired with a direction.
///
/// The set of keys is closed: every consumer matches all three variants, so
/// adding a key is a compile-time checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key", content = "direction", rename_all = "snake_case")]
pub enum ProjectsOrder {
    /// Order by case-insensitive project name.
    Name(OrderType),
    /// Order by deadline date.
    Deadline(OrderType),
    /// Order by creation timestamp.
    DateAdded(OrderType),
}

impl ProjectsOrder {
    /// Returns the direction carried by this choice.
    #[must_use]
    pub const fn order_type(self) -> OrderType {
        match self {
            Self::Name(order_type) | Self::Deadline(order_type) | Self::DateAdded(order_type) => {
                order_type
            }
        }
    }

    /// Returns the same sort key with a different direction.
    #[must_use]
    pub const fn with_order_type(self, order_type: OrderType) -> Self {
        match self {
            Self::Name(_) => Self::Name(order_type),
            Self::Deadline(_) => Self::Deadline(order_type),
            Self::DateAdded(_) => Self::DateAdded(order_type),
        }
    }

    /// Returns `other`'s sort key carrying this choice's direction.
    ///
    /// Used by key selectors that keep the currently chosen direction.
    #[must_use]
    pub const fn with_key_of(self, other: Self) -> Self {
        other.with_order_type(self.order_type())
    }
}

impl Default for ProjectsOrder {
    /// Newest projects first.
    fn default() -> Self {
        Self::DateAdded(OrderType::Descending)
    }
}

/// Returns `projects` sorted according to `order`.
///
/// The sort is stable in both directions: projects with equal keys keep
/// their relative source order. Nothing is cached between calls.
#[must_use]
pub fn order_projects(mut projects: Vec<Project>, order: ProjectsOrder) -> Vec<Project> {
    match order {
        ProjectsOrder::Name(direction) => sort_by_direction(&mut projects, direction, |project| {
            project.name().as_str().to_lowercase()
        }),
        ProjectsOrder::Deadline(direction) => {
            sort_by_direction(&mut projects, direction, Project::deadline);
        }
        ProjectsOrder::DateAdded(direction) => {
            sort_by_direction(&mut projects, direction, Project::created_at);
        }
    }
    projects
}

/// Stable sort on a key extracted once per element.
fn sort_by_direction<K, F>(projects: &mut [Project], direction: OrderType, key: F)
where
    K: Ord,
    F: Fn(&Project) -> K,
{
    match direction {
        OrderType::Ascending => projects.sort_by_cached_key(key),
        OrderType::Descending => projects.sort_by_cached_key(|project| Reverse(key(project))),
    }
}
