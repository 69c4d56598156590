//! Project tracking for the application core.
//!
//! This module creates and mutates project records, publishes live
//! snapshots of the project collection, and derives ordered and filtered
//! views over each snapshot. Ordering and filtering are plain synchronous
//! functions recomputed from scratch on every snapshot. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
