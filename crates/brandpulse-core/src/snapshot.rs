//! Wire model for the dashboard payload served by the sentiment backend.
//!
//! A [`DashboardSnapshot`] is immutable once decoded. Consumers replace the
//! whole value on every successful fetch and never patch individual fields.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Direction of a brand's sentiment over its recent analytics history.
///
/// The backend emits `rising`, `falling`, or `stable`. Any other string is
/// preserved as [`SentimentTrend::Other`] instead of failing the whole
/// snapshot decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentTrend {
    Rising,
    Falling,
    Stable,
    Other(String),
}

impl From<String> for SentimentTrend {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "rising" => SentimentTrend::Rising,
            "falling" => SentimentTrend::Falling,
            "stable" => SentimentTrend::Stable,
            _ => SentimentTrend::Other(raw),
        }
    }
}

impl From<SentimentTrend> for String {
    fn from(trend: SentimentTrend) -> Self {
        match trend {
            SentimentTrend::Rising => "rising".to_string(),
            SentimentTrend::Falling => "falling".to_string(),
            SentimentTrend::Stable => "stable".to_string(),
            SentimentTrend::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for SentimentTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentTrend::Rising => write!(f, "rising"),
            SentimentTrend::Falling => write!(f, "falling"),
            SentimentTrend::Stable => write!(f, "stable"),
            SentimentTrend::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Label the backend attached to a single mention.
///
/// Unknown labels read as `Neutral`, the same fallback the mention list
/// uses when colouring rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

/// Latest analytics row for one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSnapshot {
    pub brand: String,
    pub total_mentions: u64,
    /// Mean sentiment in `[-1.0, 1.0]`.
    pub sentiment_avg: f64,
    pub sentiment_trend: SentimentTrend,
    /// Predicted market share, in percent.
    pub market_share: f64,
    pub engagement_score: f64,
}

/// A single collected mention of a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    #[serde(default)]
    pub id: Option<String>,
    /// Brand identifier. Not guaranteed to match any [`BrandSnapshot`].
    pub brand: String,
    pub source: String,
    pub content: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub engagement: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Parse an ISO-8601 timestamp. Values without an offset are taken as UTC.
///
/// # Errors
///
/// Returns the offset-timestamp parse error if `raw` is neither an offset
/// timestamp nor a naive `YYYY-MM-DDTHH:MM:SS[.f]` one.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match raw.parse::<DateTime<Utc>>() {
        Ok(ts) => Ok(ts),
        Err(e) => raw
            .parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc())
            .map_err(|_| e),
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

/// Point-in-time dataset returned by `GET /api/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub brands_overview: Vec<BrandSnapshot>,
    /// Newest first.
    pub recent_mentions: Vec<Mention>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    /// Recent sentiment averages per brand, oldest first.
    #[serde(default)]
    pub sentiment_trends: HashMap<String, Vec<f64>>,
    #[serde(default)]
    pub market_predictions: HashMap<String, f64>,
}

impl DashboardSnapshot {
    /// True when the backend has not produced analytics for any brand yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brands_overview.is_empty()
    }

    #[must_use]
    pub fn brand(&self, brand: &str) -> Option<&BrandSnapshot> {
        self.brands_overview.iter().find(|b| b.brand == brand)
    }
}
