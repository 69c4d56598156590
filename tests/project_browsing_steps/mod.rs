//! Step definitions for project browsing scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
