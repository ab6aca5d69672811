//! Dashboard state-synchronization controller.
//!
//! Keeps an observable [`DashboardState`] in step with the sentiment backend:
//! refreshes on a fixed cadence, lets the user trigger a collection pass,
//! and turns every failure into state flags rather than errors.

pub mod controller;
pub mod error;
pub mod scheduler;
pub mod source;
pub mod state;

pub use brandpulse_client::DashboardClient;
pub use controller::{ControllerSettings, DashboardController, RefreshOutcome, TriggerOutcome};
pub use error::DashboardError;
pub use scheduler::Scheduler;
pub use source::DataSource;
pub use state::{DashboardState, COLLECT_FAILED_MESSAGE, FETCH_FAILED_MESSAGE};
