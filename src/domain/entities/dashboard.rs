#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Which figure a metric card tracks; drives how its value is regenerated and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    TotalRevenue,
    ActiveUsers,
    Conversions,
    GrowthRate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub id: String,
    pub kind: MetricKind,
    pub title: String,
    pub value: String,
    /// Percentage change against last month.
    pub change: f64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Conversion,
    Campaign,
    Alert,
    User,
    Revenue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub id: String,
    pub action: String,
    pub time: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    MetricsGrid,
    ChartsSection,
    RevenueChart,
    ChannelChart,
    DeviceChart,
    ActivityFeed,
    CampaignsTable,
}

impl Section {
    pub fn element_id(self) -> &'static str {
        match self {
            Section::MetricsGrid => "metrics-grid",
            Section::ChartsSection => "charts-section",
            Section::RevenueChart => "revenue-chart",
            Section::ChannelChart => "channel-chart",
            Section::DeviceChart => "device-chart",
            Section::ActivityFeed => "activity-feed",
            Section::CampaignsTable => "campaigns-table",
        }
    }
}
