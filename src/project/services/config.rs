//! Configuration for the project browser.

use crate::project::domain::{SearchPolicy, StatusFilter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project browser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// How search text is prepared before matching project names.
    pub search_policy: SearchPolicy,
    /// Status chip selected when the browser opens.
    pub initial_status: StatusFilter,
}

impl BrowserConfig {
    /// Creates a configuration that trims search text before matching.
    #[must_use]
    pub const fn trimming() -> Self {
        Self {
            search_policy: SearchPolicy::Trimmed,
            initial_status: StatusFilter::All,
        }
    }

    /// Parses a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserConfigError::Parse`] when the document is not valid
    /// JSON or names an unknown field or value.
    pub fn from_json_str(json: &str) -> Result<Self, BrowserConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Errors returned while loading browser configuration.
#[derive(Debug, Error)]
pub enum BrowserConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid browser configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
