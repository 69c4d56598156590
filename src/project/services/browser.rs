//! Browse state for the all-projects screen.
//!
//! [`ProjectBrowser`] owns everything the screen lets the user adjust: the
//! pending and applied ordering, the status chip, and the search text. It
//! composes `filter(order(snapshot, applied), status, search)` on demand
//! and never caches a result.

use super::BrowserConfig;
use crate::project::domain::{
    OrderSelection, Project, ProjectFilter, ProjectsOrder, StatusFilter, filter_projects,
    order_projects,
};
use tracing::debug;

/// User interactions on the all-projects screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    /// Highlight an ordering in the sort sheet without applying it.
    SelectOrder(ProjectsOrder),
    /// Apply the highlighted ordering.
    ApplyOrder,
    /// Close the sort sheet, dropping the highlighted ordering.
    DiscardOrder,
    /// Restore the default ordering, both highlighted and applied.
    ResetOrder,
    /// Select a status chip.
    SelectStatus(StatusFilter),
    /// Replace the search text.
    Search(String),
}

/// Why a rendered project list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection holds no projects at all, whatever the chip and search.
    NoProjectsYet,
    /// No project has the selected status.
    NoProjects {
        /// Status chip in effect.
        status: StatusFilter,
    },
    /// No project with the selected status matches the search text.
    NoSearchResults {
        /// Search text as typed.
        search: String,
        /// Status chip in effect.
        status: StatusFilter,
    },
}

/// Render-ready result of one browse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectsView {
    /// Projects to render, in display order.
    pub projects: Vec<Project>,
    /// Ordering that produced `projects`.
    pub order: ProjectsOrder,
    /// Status chip in effect.
    pub status: StatusFilter,
    /// Search text as typed.
    pub search: String,
    /// Number of projects in the collection before filtering.
    pub total: usize,
    /// Reason the list is empty, if it is.
    pub empty_state: Option<EmptyState>,
}

/// Screen-owned browse state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBrowser {
    config: BrowserConfig,
    selection: OrderSelection,
    status: StatusFilter,
    search: String,
}

impl ProjectBrowser {
    /// Creates a browser with the default ordering and empty search.
    #[must_use]
    pub fn new(config: BrowserConfig) -> Self {
        Self {
            config,
            selection: OrderSelection::default(),
            status: config.initial_status,
            search: String::new(),
        }
    }

    /// Returns the ordering selection.
    #[must_use]
    pub const fn selection(&self) -> &OrderSelection {
        &self.selection
    }

    /// Returns the selected status chip.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the search text as typed.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the filter built from the current chip and search text.
    #[must_use]
    pub fn filter(&self) -> ProjectFilter {
        ProjectFilter::new(self.status, self.search.clone())
            .with_search_policy(self.config.search_policy)
    }

    /// Handles a screen event.
    ///
    /// Returns the new applied ordering when the event changed it, so the
    /// caller can re-run its ordered subscription.
    pub fn on_event(&mut self, event: BrowseEvent) -> Option<ProjectsOrder> {
        debug!(?event, "handling browse event");
        let before = self.selection.applied();
        match event {
            BrowseEvent::SelectOrder(order) => self.selection.select(order),
            BrowseEvent::ApplyOrder => {
                self.selection.apply();
            }
            BrowseEvent::DiscardOrder => self.selection.discard(),
            BrowseEvent::ResetOrder => {
                self.selection.reset();
            }
            BrowseEvent::SelectStatus(status) => self.status = status,
            BrowseEvent::Search(search) => self.search = search,
        }
        let after = self.selection.applied();
        (after != before).then_some(after)
    }

    /// Orders and filters a raw snapshot.
    #[must_use]
    pub fn view(&self, snapshot: &[Project]) -> ProjectsView {
        self.present(order_projects(snapshot.to_vec(), self.selection.applied()))
    }

    /// Filters a sequence already ordered by the applied ordering.
    #[must_use]
    pub fn present(&self, ordered: Vec<Project>) -> ProjectsView {
        let filter = self.filter();
        let total = ordered.len();
        let projects = filter_projects(ordered, &filter);
        let empty_state = projects.is_empty().then(|| {
            if total == 0 {
                EmptyState::NoProjectsYet
            } else if filter.is_searching() {
                EmptyState::NoSearchResults {
                    search: self.search.clone(),
                    status: self.status,
                }
            } else {
                EmptyState::NoProjects {
                    status: self.status,
                }
            }
        });

        ProjectsView {
            projects,
            order: self.selection.applied(),
            status: self.status,
            search: self.search.clone(),
            total,
            empty_state,
        }
    }
}

impl Default for ProjectBrowser {
    fn default() -> Self {
        Self::new(BrowserConfig::default())
    }
}
