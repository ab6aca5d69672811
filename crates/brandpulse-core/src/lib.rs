//! Shared types for the brandpulse dashboard.
//!
//! Holds the snapshot wire model, the brand catalog, the pure classifiers and
//! reductions the view renders from, and environment-driven configuration.

pub mod aggregate;
pub mod app_config;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod snapshot;

pub use aggregate::{recent_mentions, DashboardSummary, RECENT_MENTIONS_LIMIT};
pub use app_config::{AppConfig, RefreshOrdering};
pub use catalog::{BrandCatalog, BrandsResponse, CategorizedBrands};
pub use classify::{
    classify_sentiment, format_signed_score, label_bucket, trend_symbol, SentimentBucket,
    TrendSymbol,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use snapshot::{
    parse_timestamp, BrandSnapshot, DashboardSnapshot, Mention, SentimentLabel, SentimentTrend,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
