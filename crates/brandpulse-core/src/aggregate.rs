//! Summary counters reduced from a snapshot's brand list.

use crate::snapshot::{BrandSnapshot, DashboardSnapshot, Mention, SentimentTrend};

/// Brands strictly above this average count towards
/// [`DashboardSummary::positive_brands`].
///
/// Deliberately distinct from the classifier's inclusive `>= 0.1`: a brand
/// sitting exactly on `0.1` is coloured positive but not counted here.
pub const POSITIVE_COUNT_THRESHOLD: f64 = 0.1;

/// Number of mentions the recent-mentions panel shows.
pub const RECENT_MENTIONS_LIMIT: usize = 10;

/// Headline counters for the overview cards.
///
/// Computed from the current snapshot on demand; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardSummary {
    pub brand_count: usize,
    pub total_mentions: u64,
    pub positive_brands: usize,
    pub rising_brands: usize,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_brands(brands: &[BrandSnapshot]) -> Self {
        brands.iter().fold(
            Self {
                brand_count: brands.len(),
                ..Self::default()
            },
            |mut acc, brand| {
                acc.total_mentions = acc.total_mentions.saturating_add(brand.total_mentions);
                if brand.sentiment_avg > POSITIVE_COUNT_THRESHOLD {
                    acc.positive_brands += 1;
                }
                if brand.sentiment_trend == SentimentTrend::Rising {
                    acc.rising_brands += 1;
                }
                acc
            },
        )
    }

    #[must_use]
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        Self::from_brands(&snapshot.brands_overview)
    }
}

/// The newest `limit` mentions. The backend already sends them newest first.
#[must_use]
pub fn recent_mentions(snapshot: &DashboardSnapshot, limit: usize) -> &[Mention] {
    let end = limit.min(snapshot.recent_mentions.len());
    &snapshot.recent_mentions[..end]
}
