//! Display classifiers for brand and mention sentiment.
//!
//! These are pure mappings from snapshot fields to display buckets. They
//! carry no state and can be recomputed on every render.

use crate::snapshot::{SentimentLabel, SentimentTrend};

/// Sentiment at or above this value classifies as positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Sentiment at or below this value classifies as negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Colour bucket for a sentiment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentBucket {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBucket::Positive => f.pad("positive"),
            SentimentBucket::Negative => f.pad("negative"),
            SentimentBucket::Neutral => f.pad("neutral"),
        }
    }
}

/// Bucket a brand's average sentiment.
///
/// Both boundaries are inclusive of the non-neutral bucket: `0.1` is
/// positive and `-0.1` is negative.
#[must_use]
pub fn classify_sentiment(score: f64) -> SentimentBucket {
    if score >= POSITIVE_THRESHOLD {
        SentimentBucket::Positive
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentBucket::Negative
    } else {
        SentimentBucket::Neutral
    }
}

/// Bucket a mention by the label the backend assigned to it.
#[must_use]
pub fn label_bucket(label: SentimentLabel) -> SentimentBucket {
    match label {
        SentimentLabel::Positive => SentimentBucket::Positive,
        SentimentLabel::Negative => SentimentBucket::Negative,
        SentimentLabel::Neutral => SentimentBucket::Neutral,
    }
}

/// Arrow shown next to a brand for its sentiment trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrendSymbol {
    Up,
    Down,
    Flat,
}

impl TrendSymbol {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            TrendSymbol::Up => "📈",
            TrendSymbol::Down => "📉",
            TrendSymbol::Flat => "➡️",
        }
    }

    /// Plain-text form for terminals without emoji support.
    #[must_use]
    pub fn ascii(self) -> &'static str {
        match self {
            TrendSymbol::Up => "^",
            TrendSymbol::Down => "v",
            TrendSymbol::Flat => "-",
        }
    }
}

/// Map a trend to its symbol. Anything other than rising or falling,
/// including values the backend invented later, is flat.
#[must_use]
pub fn trend_symbol(trend: &SentimentTrend) -> TrendSymbol {
    match trend {
        SentimentTrend::Rising => TrendSymbol::Up,
        SentimentTrend::Falling => TrendSymbol::Down,
        SentimentTrend::Stable | SentimentTrend::Other(_) => TrendSymbol::Flat,
    }
}

/// Format a sentiment value with three decimals and an explicit `+` for
/// strictly positive values.
#[must_use]
pub fn format_signed_score(score: f64) -> String {
    if score > 0.0 {
        format!("+{score:.3}")
    } else {
        format!("{score:.3}")
    }
}
