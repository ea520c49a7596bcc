use crate::domain::entities::campaign::{Campaign, CampaignStatus};
use crate::domain::entities::dashboard::{ActivityItem, ActivityKind, MetricCard, MetricKind, Trend};

#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: f64,
    pub users: u64,
    pub conversions: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareItem {
    pub name: &'static str,
    pub value: f64,
}

#[allow(clippy::too_many_arguments)]
fn campaign(
    id: &str,
    name: &str,
    channel: &str,
    impressions: u64,
    clicks: u64,
    conversions: u64,
    revenue: f64,
    ctr: f64,
    status: CampaignStatus,
) -> Campaign {
    Campaign {
        id: id.to_string(),
        campaign: name.to_string(),
        channel: channel.to_string(),
        impressions,
        clicks,
        conversions,
        revenue,
        ctr,
        status,
    }
}

pub fn campaign_data() -> Vec<Campaign> {
    use CampaignStatus::*;

    vec![
        campaign("1", "Summer Sale 2024", "Google Ads", 125_420, 8_934, 423, 45_230.0, 7.12, Active),
        campaign("2", "Brand Awareness Q4", "Facebook Ads", 98_765, 6_543, 287, 32_150.0, 6.62, Active),
        campaign("3", "Black Friday Promo", "Instagram Ads", 156_890, 12_456, 678, 68_990.0, 7.94, Completed),
        campaign("4", "Holiday Collection", "YouTube Ads", 89_012, 5_234, 234, 28_450.0, 5.88, Active),
        campaign("5", "New Product Launch", "LinkedIn Ads", 45_678, 3_421, 156, 18_900.0, 7.49, Paused),
        campaign("6", "Retargeting Campaign", "Display Network", 234_567, 15_678, 789, 56_780.0, 6.68, Active),
        campaign("7", "Mobile App Install", "TikTok Ads", 345_678, 23_456, 1_234, 89_012.0, 6.78, Active),
        campaign("8", "Local Business Promo", "Google Local", 67_890, 4_567, 234, 23_450.0, 6.73, Active),
    ]
}

pub fn key_metrics() -> Vec<MetricCard> {
    let card = |id: &str, kind, title: &str, value: &str, change, trend| MetricCard {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        value: value.to_string(),
        change,
        trend,
    };

    vec![
        card("1", MetricKind::TotalRevenue, "Total Revenue", "$284,532", 12.5, Trend::Up),
        card("2", MetricKind::ActiveUsers, "Active Users", "18,293", 8.2, Trend::Up),
        card("3", MetricKind::Conversions, "Conversions", "2,847", -3.1, Trend::Down),
        card("4", MetricKind::GrowthRate, "Growth Rate", "23.8%", 5.4, Trend::Up),
    ]
}

pub fn activity_seed() -> Vec<ActivityItem> {
    let item = |id: &str, action: &str, time: &str, kind| ActivityItem {
        id: id.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        kind,
    };

    vec![
        item("1", "New conversion from Google Ads", "2 minutes ago", ActivityKind::Conversion),
        item("2", "Campaign \"Summer Sale\" paused", "5 minutes ago", ActivityKind::Campaign),
        item("3", "Budget threshold reached for Facebook Ads", "12 minutes ago", ActivityKind::Alert),
        item("4", "New user registered via email campaign", "18 minutes ago", ActivityKind::User),
        item("5", "High-value transaction detected", "23 minutes ago", ActivityKind::Revenue),
    ]
}

pub fn revenue_data() -> Vec<RevenuePoint> {
    [
        ("Jan", 45_000.0, 2_400, 240),
        ("Feb", 52_000.0, 1_398, 221),
        ("Mar", 48_000.0, 9_800, 229),
        ("Apr", 61_000.0, 3_908, 290),
        ("May", 55_000.0, 4_800, 281),
        ("Jun", 67_000.0, 3_800, 350),
        ("Jul", 72_000.0, 4_300, 380),
        ("Aug", 68_000.0, 4_200, 365),
        ("Sep", 75_000.0, 4_500, 395),
        ("Oct", 82_000.0, 4_800, 425),
        ("Nov", 78_000.0, 4_600, 410),
        ("Dec", 85_000.0, 5_000, 450),
    ]
    .into_iter()
    .map(|(month, revenue, users, conversions)| RevenuePoint {
        month,
        revenue,
        users,
        conversions,
    })
    .collect()
}

pub fn channel_data() -> Vec<ShareItem> {
    [
        ("Organic Search", 45_230.0),
        ("Paid Search", 38_120.0),
        ("Social Media", 28_450.0),
        ("Email", 22_100.0),
        ("Direct", 19_800.0),
        ("Referral", 15_600.0),
    ]
    .into_iter()
    .map(|(name, value)| ShareItem { name, value })
    .collect()
}

pub fn device_data() -> Vec<ShareItem> {
    [("Desktop", 45.0), ("Mobile", 38.0), ("Tablet", 17.0)]
        .into_iter()
        .map(|(name, value)| ShareItem { name, value })
        .collect()
}
