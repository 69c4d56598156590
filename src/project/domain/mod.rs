//! Domain model for project tracking.
//!
//! The project domain models project records, the closed set of ordering
//! choices, status and search filtering, and the pending/applied ordering
//! selection, while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod filter;
mod ids;
mod order;
mod project;
mod selection;

pub use error::{ParseProjectStatusError, ParseStatusFilterError, ProjectDomainError};
pub use filter::{ProjectFilter, SearchPolicy, StatusFilter, filter_projects};
pub use ids::{ProjectId, ProjectName};
pub use order::{OrderType, ProjectsOrder, order_projects};
pub use project::{NewProject, PersistedProjectData, Project, ProjectStatus};
pub use selection::OrderSelection;
