use std::sync::Arc;

use brandpulse_core::{BrandCatalog, CategorizedBrands, DashboardSnapshot, DashboardSummary};

/// Shown when a dashboard refresh fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch dashboard data";
/// Shown when the collection trigger request fails.
pub const COLLECT_FAILED_MESSAGE: &str = "Failed to collect data";

/// Everything a view needs to render the dashboard.
///
/// Owned by [`DashboardController`](crate::DashboardController) and handed
/// out as clones through a `watch` channel. The snapshot and catalog are
/// behind `Arc`, so cloning the state does not copy the dataset.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Last successfully fetched snapshot, kept across failed refreshes.
    pub snapshot: Option<Arc<DashboardSnapshot>>,
    pub catalog: Arc<BrandCatalog>,
    /// A refresh is in flight.
    pub loading: bool,
    /// A collection trigger is in flight, including its follow-up refresh.
    pub collecting: bool,
    /// Most recent surfaced failure. A single slot, not a log.
    pub error: Option<String>,
}

impl DashboardState {
    /// True only while the first snapshot is still loading. A refresh over
    /// an already populated view keeps showing the old data.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.loading && self.snapshot.is_none()
    }

    #[must_use]
    pub fn summary(&self) -> Option<DashboardSummary> {
        self.snapshot
            .as_deref()
            .map(DashboardSummary::from_snapshot)
    }

    #[must_use]
    pub fn categorized(&self) -> Option<CategorizedBrands<'_>> {
        self.snapshot
            .as_deref()
            .map(|snapshot| self.catalog.categorize(&snapshot.brands_overview))
    }
}
