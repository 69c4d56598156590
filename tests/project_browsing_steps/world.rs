//! Shared world state for project browsing BDD scenarios.

use std::sync::Arc;

use chrono::NaiveDate;
use project_tracker::project::{
    adapters::memory::InMemoryProjectRepository,
    domain::{OrderType, ProjectsOrder},
    services::{
        BrowseEvent, BrowserConfig, ProjectBrowser, ProjectCatalogService,
        ProjectListingService, ProjectsView,
    },
};
use rstest::fixture;

use crate::test_helpers::SteppingClock;

/// Catalog service type used by the BDD world.
pub type TestCatalog = ProjectCatalogService<InMemoryProjectRepository, SteppingClock>;

/// Scenario world for project browsing behaviour tests.
pub struct BrowsingWorld {
    pub catalog: TestCatalog,
    pub listing: ProjectListingService<InMemoryProjectRepository>,
    pub browser: ProjectBrowser,
    pub last_view: Option<ProjectsView>,
}

impl BrowsingWorld {
    /// Creates a world over an empty repository.
    #[must_use]
    pub fn new() -> Self {
        let repository = Arc::new(InMemoryProjectRepository::new());
        Self {
            catalog: ProjectCatalogService::new(
                Arc::clone(&repository),
                Arc::new(SteppingClock::default()),
            ),
            listing: ProjectListingService::new(repository),
            browser: ProjectBrowser::new(BrowserConfig::default()),
            last_view: None,
        }
    }

    /// Applies a screen event and re-renders the view.
    pub fn handle(&mut self, event: BrowseEvent) {
        self.browser.on_event(event);
        self.refresh();
    }

    /// Re-renders the view from the repository's current snapshot.
    pub fn refresh(&mut self) {
        let ordered = self.listing.current(self.browser.selection().applied());
        self.last_view = Some(self.browser.present(ordered));
    }
}

impl Default for BrowsingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BrowsingWorld {
    BrowsingWorld::default()
}

/// Deadline shared by scenario projects.
pub fn scenario_deadline() -> Result<NaiveDate, eyre::Report> {
    NaiveDate::from_ymd_opt(2026, 12, 31).ok_or_else(|| eyre::eyre!("invalid scenario deadline"))
}

/// Parses an ordering from its key and direction words.
pub fn parse_order(key: &str, direction: &str) -> Result<ProjectsOrder, eyre::Report> {
    let order_type = match direction {
        "ascending" => OrderType::Ascending,
        "descending" => OrderType::Descending,
        other => return Err(eyre::eyre!("unknown direction: {other}")),
    };
    match key {
        "name" => Ok(ProjectsOrder::Name(order_type)),
        "deadline" => Ok(ProjectsOrder::Deadline(order_type)),
        "date added" => Ok(ProjectsOrder::DateAdded(order_type)),
        other => Err(eyre::eyre!("unknown order key: {other}")),
    }
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
