//! In-memory repository for project tracking and tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::watch;

use crate::project::{
    domain::{NewProject, Project, ProjectId},
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, ProjectSnapshot,
        ProjectSnapshots,
    },
};

/// Thread-safe in-memory project repository publishing live snapshots.
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    state: Arc<RwLock<InMemoryProjectState>>,
    snapshots: Arc<watch::Sender<ProjectSnapshot>>,
}

#[derive(Debug)]
struct InMemoryProjectState {
    // Identifiers grow monotonically, so key order is insertion order.
    projects: BTreeMap<ProjectId, Project>,
    next_id: i64,
}

impl Default for InMemoryProjectState {
    fn default() -> Self {
        Self {
            projects: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryProjectState {
    fn snapshot(&self) -> ProjectSnapshot {
        self.projects.values().cloned().collect()
    }
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ProjectSnapshot::from(Vec::new()));
        Self {
            state: Arc::new(RwLock::new(InMemoryProjectState::default())),
            snapshots: Arc::new(sender),
        }
    }

    fn read(&self) -> ProjectRepositoryResult<RwLockReadGuard<'_, InMemoryProjectState>> {
        self.state.read().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ProjectRepositoryResult<RwLockWriteGuard<'_, InMemoryProjectState>> {
        self.state.write().map_err(|err| {
            ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    /// Publishes the collection while the write guard is still held so that
    /// snapshots are emitted in mutation order.
    fn publish(&self, state: &InMemoryProjectState) {
        self.snapshots.send_replace(state.snapshot());
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn insert(&self, project: NewProject) -> ProjectRepositoryResult<Project> {
        let mut state = self.write()?;
        let id = ProjectId::new(state.next_id).map_err(ProjectRepositoryError::persistence)?;
        state.next_id = state.next_id.checked_add(1).ok_or_else(|| {
            ProjectRepositoryError::persistence(std::io::Error::other(
                "project identifier space exhausted",
            ))
        })?;

        let stored = project.into_project(id);
        state.projects.insert(id, stored.clone());
        self.publish(&state);
        Ok(stored)
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        let slot = state
            .projects
            .get_mut(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        *slot = project.clone();
        self.publish(&state);
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .projects
            .remove(&id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        self.publish(&state);
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    fn subscribe(&self) -> ProjectSnapshots {
        self.snapshots.subscribe()
    }
}
