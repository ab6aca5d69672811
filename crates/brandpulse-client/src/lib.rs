//! HTTP client for the sentiment backend's dashboard API.

pub mod client;
pub mod error;

pub use client::DashboardClient;
pub use error::ClientError;
