//! Port contracts for project tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by project services.

pub mod repository;

pub use repository::{
    ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, ProjectSnapshot,
    ProjectSnapshots,
};
