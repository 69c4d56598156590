//! Service layer for creating and editing projects.

use crate::project::{
    domain::{NewProject, Project, ProjectDomainError, ProjectId, ProjectName, ProjectStatus},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: String,
    deadline: NaiveDate,
}

impl CreateProjectRequest {
    /// Creates a request with the required project fields.
    #[must_use]
    pub fn new(name: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            deadline,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Service-level errors for project catalog operations.
#[derive(Debug, Error)]
pub enum ProjectCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
}

/// Result type for project catalog service operations.
pub type ProjectCatalogResult<T> = Result<T, ProjectCatalogError>;

/// Project creation and editing service.
#[derive(Clone)]
pub struct ProjectCatalogService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> ProjectCatalogService<R, C>
where
    R: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project catalog service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a new project in the `NotStarted` status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Domain`] when the name is empty and
    /// [`ProjectCatalogError::Repository`] when persistence fails.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> ProjectCatalogResult<Project> {
        let name = ProjectName::new(request.name).inspect_err(|err| {
            warn!(error = %err, "rejected project creation");
        })?;
        let draft = NewProject::new(name, request.description, request.deadline, &*self.clock);
        let project = self.repository.insert(draft).await?;
        info!(project_id = %project.id(), name = %project.name(), "created project");
        Ok(project)
    }

    /// Moves a project to another status.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the project does not
    /// exist or persistence fails.
    pub async fn change_status(
        &self,
        id: ProjectId,
        status: ProjectStatus,
    ) -> ProjectCatalogResult<Project> {
        let mut project = self.load(id).await?;
        project.set_status(status, &*self.clock);
        self.repository.update(&project).await?;
        info!(project_id = %id, status = status.as_str(), "changed project status");
        Ok(project)
    }

    /// Renames a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Domain`] when the new name is empty and
    /// [`ProjectCatalogError::Repository`] when the project does not exist or
    /// persistence fails.
    pub async fn rename(
        &self,
        id: ProjectId,
        name: impl Into<String> + Send,
    ) -> ProjectCatalogResult<Project> {
        let validated = ProjectName::new(name)?;
        let mut project = self.load(id).await?;
        project.rename(validated, &*self.clock);
        self.repository.update(&project).await?;
        info!(project_id = %id, "renamed project");
        Ok(project)
    }

    /// Replaces a project's description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the project does not
    /// exist or persistence fails.
    pub async fn describe(
        &self,
        id: ProjectId,
        description: impl Into<String> + Send,
    ) -> ProjectCatalogResult<Project> {
        let mut project = self.load(id).await?;
        project.set_description(description, &*self.clock);
        self.repository.update(&project).await?;
        info!(project_id = %id, "updated project description");
        Ok(project)
    }

    /// Moves a project's deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the project does not
    /// exist or persistence fails.
    pub async fn reschedule(
        &self,
        id: ProjectId,
        deadline: NaiveDate,
    ) -> ProjectCatalogResult<Project> {
        let mut project = self.load(id).await?;
        project.set_deadline(deadline, &*self.clock);
        self.repository.update(&project).await?;
        info!(project_id = %id, %deadline, "rescheduled project");
        Ok(project)
    }

    /// Deletes a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when the project does not
    /// exist or persistence fails.
    pub async fn delete(&self, id: ProjectId) -> ProjectCatalogResult<()> {
        self.repository.delete(id).await.inspect_err(|err| {
            warn!(project_id = %id, error = %err, "failed to delete project");
        })?;
        info!(project_id = %id, "deleted project");
        Ok(())
    }

    /// Retrieves a project by identifier.
    ///
    /// Returns `Ok(None)` when the project does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectCatalogError::Repository`] when persistence lookup
    /// fails.
    pub async fn find_by_id(&self, id: ProjectId) -> ProjectCatalogResult<Option<Project>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn load(&self, id: ProjectId) -> ProjectCatalogResult<Project> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ProjectRepositoryError::NotFound(id).into())
    }
}
