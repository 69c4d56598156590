//! Status and free-text filtering over ordered project sequences.

use super::{ParseStatusFilterError, Project, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status chip selection: every status, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    /// Sentinel that disables status filtering.
    #[default]
    All,
    /// Keep only projects in this status.
    Only(ProjectStatus),
}

impl StatusFilter {
    /// Label of the [`StatusFilter::All`] sentinel.
    pub const ALL_LABEL: &'static str = "All";

    /// Every filter choice, in chip order.
    pub const CHOICES: [Self; 4] = [
        Self::All,
        Self::Only(ProjectStatus::NotStarted),
        Self::Only(ProjectStatus::InProgress),
        Self::Only(ProjectStatus::Completed),
    ];

    /// Returns the chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(status) => status.label(),
        }
    }

    /// Returns the chip labels for every choice.
    #[must_use]
    pub fn labels() -> Vec<&'static str> {
        Self::CHOICES.iter().map(|choice| choice.label()).collect()
    }

    /// Returns whether `status` passes this filter.
    #[must_use]
    pub fn admits(self, status: ProjectStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(Self::All);
        }
        ProjectStatus::try_from(value)
            .map(Self::Only)
            .map_err(|_| ParseStatusFilterError(value.to_owned()))
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.label().to_owned()
    }
}

/// How search text is prepared before matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPolicy {
    /// Match the text exactly as typed; whitespace-only text is a pattern.
    #[default]
    Literal,
    /// Strip surrounding whitespace first; whitespace-only text matches all.
    Trimmed,
}

impl SearchPolicy {
    /// Applies the policy to raw search text.
    #[must_use]
    pub fn prepare(self, search: &str) -> &str {
        match self {
            Self::Literal => search,
            Self::Trimmed => search.trim(),
        }
    }
}

/// Conjunctive status and name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    status: StatusFilter,
    search: String,
    policy: SearchPolicy,
    needle: String,
}

impl ProjectFilter {
    /// Creates a filter using the [`SearchPolicy::Literal`] policy.
    #[must_use]
    pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
        let raw_search = search.into();
        let needle = prepare_needle(&raw_search, SearchPolicy::Literal);
        Self {
            status,
            search: raw_search,
            policy: SearchPolicy::Literal,
            needle,
        }
    }

    /// Creates a filter that admits every project.
    #[must_use]
    pub fn all() -> Self {
        Self::new(StatusFilter::All, String::new())
    }

    /// Sets the search policy.
    #[must_use]
    pub fn with_search_policy(mut self, policy: SearchPolicy) -> Self {
        self.needle = prepare_needle(&self.search, policy);
        self.policy = policy;
        self
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the raw search text as supplied.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the search policy.
    #[must_use]
    pub const fn search_policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Returns whether the search predicate is active under the policy.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.needle.is_empty()
    }

    /// Returns whether `project` passes both predicates.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        self.status.admits(project.status())
            && (self.needle.is_empty()
                || project
                    .name()
                    .as_str()
                    .to_lowercase()
                    .contains(&self.needle))
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::all()
    }
}

fn prepare_needle(search: &str, policy: SearchPolicy) -> String {
    policy.prepare(search).to_lowercase()
}

/// Returns the projects that pass `filter`, keeping their upstream order.
#[must_use]
pub fn filter_projects(mut projects: Vec<Project>, filter: &ProjectFilter) -> Vec<Project> {
    projects.retain(|project| filter.matches(project));
    projects
}
