use crate::domain::entities::dashboard::Section;

/// Searching as you type kicks in past this many characters.
pub const AS_YOU_TYPE_MIN_LEN: usize = 3;

const SECTION_KEYWORDS: [(&str, Section); 20] = [
    ("channel performance", Section::ChannelChart),
    ("channel", Section::ChannelChart),
    ("revenue", Section::RevenueChart),
    ("revenue trend", Section::RevenueChart),
    ("device", Section::DeviceChart),
    ("device usage", Section::DeviceChart),
    ("real time", Section::ActivityFeed),
    ("activity", Section::ActivityFeed),
    ("device performance", Section::DeviceChart),
    ("real time activity", Section::ActivityFeed),
    ("activity feed", Section::ActivityFeed),
    ("recent activity", Section::ActivityFeed),
    ("campaign performance", Section::CampaignsTable),
    ("campaign table", Section::CampaignsTable),
    ("campaigns", Section::CampaignsTable),
    ("table", Section::CampaignsTable),
    ("metrics", Section::MetricsGrid),
    ("overview", Section::MetricsGrid),
    ("charts", Section::ChartsSection),
    ("analytics", Section::ChartsSection),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMatch {
    pub keyword: &'static str,
    pub section: Section,
}

/// Exact keyword match first, then the first keyword that contains or is contained by the input.
pub fn find_section(search: &str) -> Option<SectionMatch> {
    if search.trim().is_empty() {
        return None;
    }
    let needle = search.to_lowercase();

    SECTION_KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == needle)
        .or_else(|| {
            SECTION_KEYWORDS
                .iter()
                .find(|(keyword, _)| needle.contains(keyword) || keyword.contains(needle.as_str()))
        })
        .map(|(keyword, section)| SectionMatch {
            keyword,
            section: *section,
        })
}

/// Status text for an explicit search that found nothing; blank input stays silent.
pub fn no_match_message(search: &str) -> Option<String> {
    let search = search.trim();
    if search.is_empty() || find_section(search).is_some() {
        return None;
    }
    Some(format!("No section matches \"{search}\""))
}

pub fn should_search_as_you_type(value: &str) -> bool {
    value.chars().count() > AS_YOU_TYPE_MIN_LEN
}
