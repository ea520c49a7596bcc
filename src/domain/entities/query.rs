use crate::domain::entities::campaign::{CampaignStatus, SortDirection, SortField};

pub const PAGE_SIZE: usize = 5;
pub const ALL_OPTION_VALUE: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CampaignStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }

    pub fn option_value(&self) -> &'static str {
        match self {
            StatusFilter::All => ALL_OPTION_VALUE,
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    /// Unknown values fall back to `All`.
    pub fn from_option_value(value: &str) -> Self {
        CampaignStatus::parse(value)
            .map(StatusFilter::Only)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Only(String),
}

impl ChannelFilter {
    /// Channel filtering is an exact, case-sensitive match.
    pub fn matches(&self, channel: &str) -> bool {
        match self {
            ChannelFilter::All => true,
            ChannelFilter::Only(expected) => expected == channel,
        }
    }

    pub fn option_value(&self) -> &str {
        match self {
            ChannelFilter::All => ALL_OPTION_VALUE,
            ChannelFilter::Only(channel) => channel.as_str(),
        }
    }

    pub fn from_option_value(value: &str) -> Self {
        if value == ALL_OPTION_VALUE {
            ChannelFilter::All
        } else {
            ChannelFilter::Only(value.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub channel_filter: ChannelFilter,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            status_filter: StatusFilter::All,
            channel_filter: ChannelFilter::All,
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn active_filters(&self) -> ActiveFilters {
        ActiveFilters {
            search: Some(self.search_text.clone()).filter(|text| !text.is_empty()),
            status: match self.status_filter {
                StatusFilter::All => None,
                StatusFilter::Only(status) => Some(status),
            },
            channel: match &self.channel_filter {
                ChannelFilter::All => None,
                ChannelFilter::Only(channel) => Some(channel.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveFilters {
    pub search: Option<String>,
    pub status: Option<CampaignStatus>,
    pub channel: Option<String>,
}

impl ActiveFilters {
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.status.is_none() && self.channel.is_none()
    }

    pub fn count(&self) -> usize {
        [
            self.search.is_some(),
            self.status.is_some(),
            self.channel.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}
