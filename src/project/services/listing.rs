//! Ordered project listings derived from live repository snapshots.

use crate::project::{
    domain::{Project, ProjectsOrder, order_projects},
    ports::{ProjectRepository, ProjectSnapshots},
};
use std::sync::Arc;
use tracing::debug;

/// Service producing ordered views of the project collection.
#[derive(Clone)]
pub struct ProjectListingService<R>
where
    R: ProjectRepository,
{
    repository: Arc<R>,
}

impl<R> ProjectListingService<R>
where
    R: ProjectRepository,
{
    /// Creates a new listing service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the current collection ordered by `order`.
    #[must_use]
    pub fn current(&self, order: ProjectsOrder) -> Vec<Project> {
        let snapshot = self.repository.subscribe().borrow().clone();
        order_projects(snapshot.to_vec(), order)
    }

    /// Subscribes to the collection, ordering every snapshot by `order`.
    ///
    /// The first call to [`OrderedProjects::next`] yields the current
    /// collection without waiting for a change.
    #[must_use]
    pub fn watch(&self, order: ProjectsOrder) -> OrderedProjects {
        let mut snapshots = self.repository.subscribe();
        snapshots.mark_changed();
        OrderedProjects { snapshots, order }
    }
}

/// Live, ordered project sequence.
///
/// Each emission is ordered from scratch. Snapshots published while the
/// consumer is busy are collapsed into the newest one.
#[derive(Debug)]
pub struct OrderedProjects {
    snapshots: ProjectSnapshots,
    order: ProjectsOrder,
}

impl OrderedProjects {
    /// Returns the ordering applied to emissions.
    #[must_use]
    pub const fn order(&self) -> ProjectsOrder {
        self.order
    }

    /// Changes the ordering and schedules a re-emission of the latest
    /// snapshot under it.
    pub fn set_order(&mut self, order: ProjectsOrder) {
        self.order = order;
        self.snapshots.mark_changed();
    }

    /// Waits for the next snapshot and returns it ordered.
    ///
    /// Returns `None` once the repository has been dropped and every
    /// snapshot has been seen.
    pub async fn next(&mut self) -> Option<Vec<Project>> {
        self.snapshots.changed().await.ok()?;
        let snapshot = self.snapshots.borrow_and_update().clone();
        debug!(
            projects = snapshot.len(),
            order = ?self.order,
            "ordering project snapshot"
        );
        Some(order_projects(snapshot.to_vec(), self.order))
    }
}
