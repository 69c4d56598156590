//! Unit tests for project tracking.

mod fixtures;
