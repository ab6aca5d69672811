//! Plain-text rendering of dashboard state for the terminal.

use std::fmt::Write as _;

use brandpulse_core::{
    classify_sentiment, format_signed_score, label_bucket, recent_mentions, trend_symbol,
    BrandSnapshot, TrendSymbol, RECENT_MENTIONS_LIMIT,
};
use brandpulse_dashboard::DashboardState;

/// One-line status for `watch` mode.
pub(crate) fn status_line(state: &DashboardState) -> String {
    if state.is_blocking() {
        return "loading dashboard data...".to_string();
    }

    let mut line = match (&state.snapshot, state.summary()) {
        (Some(snapshot), Some(summary)) => format!(
            "{} brands, {} mentions, {} positive, {} rising (updated {})",
            summary.brand_count,
            summary.total_mentions,
            summary.positive_brands,
            summary.rising_brands,
            snapshot.last_updated.format("%H:%M:%S"),
        ),
        _ => "no data available".to_string(),
    };

    if state.loading {
        line.push_str(" [refreshing]");
    }
    if state.collecting {
        line.push_str(" [collecting]");
    }
    if let Some(error) = &state.error {
        let _ = write!(line, " [error: {error}]");
    }
    line
}

fn symbol(symbol: TrendSymbol, ascii: bool) -> &'static str {
    if ascii {
        symbol.ascii()
    } else {
        symbol.glyph()
    }
}

fn write_brand(out: &mut String, brand: &BrandSnapshot, ascii: bool) {
    let _ = writeln!(
        out,
        "  {} {:<16} {:>7} ({:<8}) mentions {:>5}  share {:>6}%  engagement {}",
        symbol(trend_symbol(&brand.sentiment_trend), ascii),
        brand.brand,
        format_signed_score(brand.sentiment_avg),
        classify_sentiment(brand.sentiment_avg),
        brand.total_mentions,
        brand.market_share,
        brand.engagement_score,
    );
}

/// Full report: headline counters, both brand groups, recent mentions.
pub(crate) fn report(state: &DashboardState, ascii: bool) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        let _ = writeln!(out, "error: {error}");
    }

    let Some(snapshot) = state.snapshot.as_deref().filter(|s| !s.is_empty()) else {
        out.push_str("No data available. Run `brandpulse collect` to start collecting.\n");
        return out;
    };

    let summary = brandpulse_core::DashboardSummary::from_snapshot(snapshot);
    let _ = writeln!(
        out,
        "Last updated {}",
        snapshot.last_updated.format("%Y-%m-%d %H:%M:%S UTC")
    );
    let _ = writeln!(
        out,
        "Total brands {}  |  Total mentions {}  |  Positive sentiment {}  |  Rising trends {}",
        summary.brand_count, summary.total_mentions, summary.positive_brands, summary.rising_brands
    );

    let views = state.catalog.categorize(&snapshot.brands_overview);
    out.push_str("\nIndian brands\n");
    for brand in views.indian {
        write_brand(&mut out, brand, ascii);
    }
    out.push_str("\nGlobal brands\n");
    for brand in views.global {
        write_brand(&mut out, brand, ascii);
    }

    out.push_str("\nRecent mentions\n");
    for mention in recent_mentions(snapshot, RECENT_MENTIONS_LIMIT) {
        let _ = writeln!(
            out,
            "  [{:<8}] {} ({}) {} | sentiment {:.3}, engagement {}",
            label_bucket(mention.sentiment_label),
            mention.brand,
            mention.source,
            mention.content,
            mention.sentiment_score,
            mention.engagement,
        );
    }

    out
}
