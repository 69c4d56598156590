//! Project tracker: ordering, filtering, and browsing of personal projects.
//!
//! This crate provides the core of a project-tracking application: project
//! records, a live repository of those records, and the pipeline that turns
//! each repository snapshot into the sorted, filtered, searchable list a
//! presentation layer renders.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: Orchestration over ports and domain functions
//!
//! # Modules
//!
//! - [`project`]: Project records, ordering, filtering, and browse state

pub mod project;
