//! Application services for project tracking.

mod browser;
mod catalog;
mod config;
mod listing;

pub use browser::{BrowseEvent, EmptyState, ProjectBrowser, ProjectsView};
pub use catalog::{
    CreateProjectRequest, ProjectCatalogError, ProjectCatalogResult, ProjectCatalogService,
};
pub use config::{BrowserConfig, BrowserConfigError};
pub use listing::{OrderedProjects, ProjectListingService};
