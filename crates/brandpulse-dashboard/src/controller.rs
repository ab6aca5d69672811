//! Dashboard state controller.
//!
//! Owns the one [`DashboardState`] for a dashboard session and is the only
//! writer to it. Every mutation is a single `watch::Sender::send_modify`
//! call, so observers never see a half-applied update and are woken after
//! each change.
//!
//! Overlapping refreshes are reconciled in completion order by default:
//! whichever response arrives last is applied, even if an earlier-issued
//! request finishes after a later one. [`RefreshOrdering::IssueOrder`]
//! switches to token-guarded application, where a completion older than the
//! newest applied snapshot is discarded.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use brandpulse_client::DashboardClient;
use brandpulse_core::{AppConfig, RefreshOrdering};
use tokio::sync::watch;

use crate::error::DashboardError;
use crate::scheduler::Scheduler;
use crate::source::DataSource;
use crate::state::{DashboardState, COLLECT_FAILED_MESSAGE, FETCH_FAILED_MESSAGE};

const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(120);
const DEFAULT_COLLECTION_REFRESH_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Period of the background refresh schedule.
    pub refresh_interval: Duration,
    /// Wait between a successful collection trigger and its follow-up refresh.
    pub collection_refresh_delay: Duration,
    pub ordering: RefreshOrdering,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            collection_refresh_delay: DEFAULT_COLLECTION_REFRESH_DELAY,
            ordering: RefreshOrdering::default(),
        }
    }
}

impl ControllerSettings {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            refresh_interval: Duration::from_secs(config.refresh_interval_secs),
            collection_refresh_delay: Duration::from_millis(config.collection_refresh_delay_ms),
            ordering: config.refresh_ordering,
        }
    }
}

/// What a single [`DashboardController::refresh`] call did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched snapshot replaced the previous one.
    Applied,
    /// The fetch failed; the previous snapshot was kept and `error` set.
    Failed,
    /// A newer refresh had already been applied (issue ordering only).
    Discarded,
}

/// What a single [`DashboardController::trigger_collection`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Another trigger was still in flight; nothing was sent.
    AlreadyCollecting,
    /// The trigger request failed.
    Failed,
    /// The trigger succeeded and the follow-up refresh ran.
    Refreshed(RefreshOutcome),
}

struct Inner<S> {
    source: S,
    settings: ControllerSettings,
    state: watch::Sender<DashboardState>,
    /// Last issued refresh token.
    issued: AtomicU64,
    /// Token of the newest snapshot applied. Only consulted under issue ordering.
    applied: AtomicU64,
    started: AtomicBool,
}

/// Handle to a dashboard session. Clones share the same state.
pub struct DashboardController<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for DashboardController<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl DashboardController<DashboardClient> {
    /// Builds a controller backed by the HTTP client described in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Client`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, DashboardError> {
        let client = DashboardClient::from_app_config(config)?;
        Ok(Self::new(client, ControllerSettings::from_app_config(config)))
    }
}

impl<S: DataSource> DashboardController<S> {
    #[must_use]
    pub fn new(source: S, settings: ControllerSettings) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            inner: Arc::new(Inner {
                source,
                settings,
                state,
                issued: AtomicU64::new(0),
                applied: AtomicU64::new(0),
                started: AtomicBool::new(false),
            }),
        }
    }

    /// Subscribes to state changes. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.inner.state.subscribe()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn state(&self) -> DashboardState {
        self.inner.state.borrow().clone()
    }

    /// Issues the startup refresh and catalog load concurrently and waits
    /// for both. Neither blocks the other.
    pub async fn initialize(&self) {
        tokio::join!(self.refresh(), self.load_catalog());
    }

    /// Runs [`initialize`](Self::initialize) in the background and starts the
    /// periodic refresh schedule.
    ///
    /// There is one schedule per controller; the caller owns it and cancels
    /// it on teardown.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::InvalidInterval`] if the configured refresh
    /// interval is zero, or [`DashboardError::AlreadyStarted`] if called more
    /// than once.
    pub fn start(&self) -> Result<Scheduler, DashboardError> {
        if self.inner.settings.refresh_interval.is_zero() {
            return Err(DashboardError::InvalidInterval);
        }
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return Err(DashboardError::AlreadyStarted);
        }

        let init = self.clone();
        tokio::spawn(async move { init.initialize().await });

        let periodic = self.clone();
        let scheduler = Scheduler::start(self.inner.settings.refresh_interval, move || {
            let controller = periodic.clone();
            async move {
                controller.refresh().await;
            }
        });

        tracing::info!(
            interval_secs = self.inner.settings.refresh_interval.as_secs(),
            ordering = %self.inner.settings.ordering,
            "dashboard: refresh schedule started"
        );
        Ok(scheduler)
    }

    /// Fetches a fresh snapshot and applies it.
    ///
    /// On failure the previous snapshot stays in place and `error` is set.
    /// `loading` is cleared on every path. The fetch runs on its own task, so
    /// dropping the returned future does not abandon it.
    pub async fn refresh(&self) -> RefreshOutcome {
        let token = self.begin_refresh();
        let this = self.clone();
        match tokio::spawn(async move { this.finish_refresh(token).await }).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, token, "dashboard: refresh task failed");
                self.inner.state.send_modify(|state| state.loading = false);
                RefreshOutcome::Failed
            }
        }
    }

    fn begin_refresh(&self) -> u64 {
        let token = self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(|state| state.loading = true);
        token
    }

    async fn finish_refresh(&self, token: u64) -> RefreshOutcome {
        let result = self.inner.source.fetch_dashboard().await;
        if let Err(e) = &result {
            tracing::error!(error = %e, token, "dashboard: refresh failed");
        }

        let issue_order = self.inner.settings.ordering == RefreshOrdering::IssueOrder;
        let applied = &self.inner.applied;
        let mut outcome = RefreshOutcome::Applied;

        self.inner.state.send_modify(|state| {
            state.loading = false;
            // The watch lock serializes this closure, so the token check and
            // update cannot interleave with another completion.
            if issue_order && applied.load(Ordering::SeqCst) > token {
                outcome = RefreshOutcome::Discarded;
                return;
            }
            match result {
                Ok(snapshot) => {
                    if issue_order {
                        applied.store(token, Ordering::SeqCst);
                    }
                    state.snapshot = Some(Arc::new(snapshot));
                    state.error = None;
                }
                Err(_) => {
                    state.error = Some(FETCH_FAILED_MESSAGE.to_string());
                    outcome = RefreshOutcome::Failed;
                }
            }
        });

        match outcome {
            RefreshOutcome::Applied => tracing::debug!(token, "dashboard: snapshot applied"),
            RefreshOutcome::Discarded => {
                tracing::debug!(token, "dashboard: stale refresh discarded");
            }
            RefreshOutcome::Failed => {}
        }
        outcome
    }

    /// Loads the brand catalog.
    ///
    /// Failure is logged and otherwise ignored: the catalog stays empty and
    /// no `error` is surfaced.
    pub async fn load_catalog(&self) {
        match self.inner.source.fetch_catalog().await {
            Ok(catalog) => {
                tracing::info!(
                    indian = catalog.indian.len(),
                    global = catalog.global.len(),
                    "dashboard: brand catalog loaded"
                );
                self.inner
                    .state
                    .send_modify(|state| state.catalog = Arc::new(catalog));
            }
            Err(e) => {
                tracing::warn!(error = %e, "dashboard: brand catalog unavailable; groups stay empty");
            }
        }
    }

    /// Asks the backend to collect fresh data, then refreshes once.
    ///
    /// `collecting` stays set until the follow-up refresh has completed,
    /// whatever its outcome. If the trigger request itself fails, `error` is
    /// set and `collecting` cleared straight away. A trigger while another
    /// is in flight is ignored. Like [`refresh`](Self::refresh), the work
    /// runs on its own task and survives the returned future being dropped.
    pub async fn trigger_collection(&self) -> TriggerOutcome {
        let claimed = self.inner.state.send_if_modified(|state| {
            if state.collecting {
                false
            } else {
                state.collecting = true;
                true
            }
        });
        if !claimed {
            tracing::debug!("dashboard: collection already in flight; trigger ignored");
            return TriggerOutcome::AlreadyCollecting;
        }

        let this = self.clone();
        match tokio::spawn(async move { this.run_collection().await }).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "dashboard: collection task failed");
                self.inner
                    .state
                    .send_modify(|state| state.collecting = false);
                TriggerOutcome::Failed
            }
        }
    }

    async fn run_collection(&self) -> TriggerOutcome {
        if let Err(e) = self.inner.source.trigger_collection().await {
            tracing::error!(error = %e, "dashboard: collection trigger failed");
            self.inner.state.send_modify(|state| {
                state.error = Some(COLLECT_FAILED_MESSAGE.to_string());
                state.collecting = false;
            });
            return TriggerOutcome::Failed;
        }

        let delay = self.inner.settings.collection_refresh_delay;
        tracing::info!(
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "dashboard: collection requested; refreshing after delay"
        );
        tokio::time::sleep(delay).await;

        let token = self.begin_refresh();
        let refreshed = self.finish_refresh(token).await;
        self.inner
            .state
            .send_modify(|state| state.collecting = false);
        TriggerOutcome::Refreshed(refreshed)
    }
}
