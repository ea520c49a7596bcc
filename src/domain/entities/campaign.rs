use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 3] = [
        CampaignStatus::Active,
        CampaignStatus::Paused,
        CampaignStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One campaign performance snapshot. Rows are read-only once handed to a view.
#[derive(Debug, Clone, PartialEq)]
pub struct Campaign {
    pub id: String,
    pub campaign: String,
    pub channel: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub revenue: f64,
    /// Click-through percentage as supplied by the source.
    pub ctr: f64,
    pub status: CampaignStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    Campaign,
    Channel,
    Impressions,
    Clicks,
    Ctr,
    Conversions,
    #[default]
    Revenue,
    Status,
}

impl SortField {
    /// Column order of the campaigns table and of the csv export.
    pub const ALL: [SortField; 8] = [
        SortField::Campaign,
        SortField::Channel,
        SortField::Impressions,
        SortField::Clicks,
        SortField::Ctr,
        SortField::Conversions,
        SortField::Revenue,
        SortField::Status,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Campaign => "Campaign",
            SortField::Channel => "Channel",
            SortField::Impressions => "Impressions",
            SortField::Clicks => "Clicks",
            SortField::Ctr => "CTR",
            SortField::Conversions => "Conversions",
            SortField::Revenue => "Revenue",
            SortField::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate record id `{id}`")]
    DuplicateId { id: String },
    #[error("record `{id}` has a negative {field}")]
    Negative { id: String, field: &'static str },
    #[error("record `{id}` has a non-finite {field}")]
    NonFinite { id: String, field: &'static str },
}

/// Reports malformed rows without rejecting the set; callers decide what to do with them.
pub fn validate_campaigns(records: &[Campaign]) -> Vec<RecordError> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            issues.push(RecordError::EmptyId { index });
        } else if !seen.insert(record.id.as_str()) {
            issues.push(RecordError::DuplicateId {
                id: record.id.clone(),
            });
        }

        for (field, value) in [("revenue", record.revenue), ("ctr", record.ctr)] {
            if !value.is_finite() {
                issues.push(RecordError::NonFinite {
                    id: record.id.clone(),
                    field,
                });
            } else if value < 0.0 {
                issues.push(RecordError::Negative {
                    id: record.id.clone(),
                    field,
                });
            }
        }
    }

    issues
}
