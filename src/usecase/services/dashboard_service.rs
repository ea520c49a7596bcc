use chrono::Local;
use rand::Rng;

use crate::domain::entities::dashboard::{ActivityItem, ActivityKind, MetricCard, MetricKind};
use crate::format_decimal_with_commas;

pub const ACTIVITY_FEED_LIMIT: usize = 10;

const TOTAL_REVENUE_BASE: f64 = 284_532.0;
const ACTIVE_USERS_BASE: f64 = 18_293.0;
const CONVERSIONS_BASE: f64 = 2_847.0;
const GROWTH_RATE_BASE: f64 = 23.8;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `base` shifted by up to `variance / 2` of itself in either direction, rounded to cents.
pub fn generate_random_metric<R: Rng + ?Sized>(rng: &mut R, base: f64, variance: f64) -> f64 {
    let change = (rng.gen::<f64>() - 0.5) * variance * base;
    round2(base + change)
}

pub fn format_metric_value(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::TotalRevenue => format!("${}", format_decimal_with_commas(value, 2)),
        MetricKind::ActiveUsers | MetricKind::Conversions => format_decimal_with_commas(value, 2),
        MetricKind::GrowthRate => format!("{value:.1}%"),
    }
}

pub fn refresh_metric<R: Rng + ?Sized>(rng: &mut R, metric: &MetricCard) -> MetricCard {
    let value = match metric.kind {
        MetricKind::TotalRevenue => generate_random_metric(rng, TOTAL_REVENUE_BASE, 0.1),
        MetricKind::ActiveUsers => generate_random_metric(rng, ACTIVE_USERS_BASE, 0.1),
        MetricKind::Conversions => generate_random_metric(rng, CONVERSIONS_BASE, 0.1),
        MetricKind::GrowthRate => generate_random_metric(rng, GROWTH_RATE_BASE, 0.05),
    };

    MetricCard {
        value: format_metric_value(metric.kind, value),
        change: generate_random_metric(rng, metric.change, 0.3),
        ..metric.clone()
    }
}

pub fn refresh_metrics<R: Rng + ?Sized>(rng: &mut R, metrics: &[MetricCard]) -> Vec<MetricCard> {
    metrics.iter().map(|metric| refresh_metric(rng, metric)).collect()
}

pub fn format_change(change: f64) -> String {
    if change >= 0.0 {
        format!("+{change}%")
    } else {
        format!("{change}%")
    }
}

/// Newest first, capped at [`ACTIVITY_FEED_LIMIT`].
pub fn push_activity(feed: &mut Vec<ActivityItem>, item: ActivityItem) {
    feed.insert(0, item);
    feed.truncate(ACTIVITY_FEED_LIMIT);
}

pub fn synthetic_conversion() -> ActivityItem {
    ActivityItem {
        id: Local::now().timestamp_millis().to_string(),
        action: "New conversion from organic search".to_string(),
        time: "Just now".to_string(),
        kind: ActivityKind::Conversion,
    }
}

pub fn activity_color(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Conversion => "#22c55e",
        ActivityKind::Campaign => "#3b82f6",
        ActivityKind::Alert => "#eab308",
        ActivityKind::User => "#a855f7",
        ActivityKind::Revenue => "#10b981",
    }
}

pub fn activity_label(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Conversion => "conversion",
        ActivityKind::Campaign => "campaign",
        ActivityKind::Alert => "alert",
        ActivityKind::User => "user",
        ActivityKind::Revenue => "revenue",
    }
}
