use std::cmp::Ordering;

use tracing::debug;

use crate::domain::entities::campaign::{Campaign, SortDirection, SortField};
use crate::domain::entities::query::{
    ActiveFilters, ChannelFilter, QueryState, StatusFilter, PAGE_SIZE,
};

pub fn matches_search(record: &Campaign, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || record.campaign.to_lowercase().contains(needle_lower)
        || record.channel.to_lowercase().contains(needle_lower)
}

pub fn apply_filter<'a>(
    records: &'a [Campaign],
    search_text: &str,
    status_filter: &StatusFilter,
    channel_filter: &ChannelFilter,
) -> Vec<&'a Campaign> {
    let needle = search_text.to_lowercase();
    records
        .iter()
        .filter(|record| {
            matches_search(record, &needle)
                && status_filter.matches(record.status)
                && channel_filter.matches(&record.channel)
        })
        .collect()
}

/// Case-insensitive ordering; on a case-only tie lowercase sorts first.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

pub fn compare_by_field(a: &Campaign, b: &Campaign, field: SortField) -> Ordering {
    match field {
        SortField::Campaign => locale_compare(&a.campaign, &b.campaign),
        SortField::Channel => locale_compare(&a.channel, &b.channel),
        SortField::Impressions => a.impressions.cmp(&b.impressions),
        SortField::Clicks => a.clicks.cmp(&b.clicks),
        SortField::Ctr => a.ctr.total_cmp(&b.ctr),
        SortField::Conversions => a.conversions.cmp(&b.conversions),
        SortField::Revenue => a.revenue.total_cmp(&b.revenue),
        SortField::Status => locale_compare(a.status.as_str(), b.status.as_str()),
    }
}

/// Stable: rows with equal keys keep their incoming order in both directions.
pub fn apply_sort<'a>(
    mut filtered: Vec<&'a Campaign>,
    sort_field: SortField,
    sort_direction: SortDirection,
) -> Vec<&'a Campaign> {
    filtered.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, sort_field);
        match sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    filtered
}

pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1)).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow<'a> {
    pub rows: Vec<&'a Campaign>,
    pub total_pages: usize,
    /// 0-based index of the first row of the requested page.
    pub start_index: usize,
    /// `None` when the page is empty.
    pub end_index_inclusive: Option<usize>,
}

pub fn paginate<'a>(sorted: &[&'a Campaign], page: usize, page_size: usize) -> PageWindow<'a> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(sorted.len(), page_size);
    let start_index = page.saturating_sub(1).saturating_mul(page_size);

    let rows: Vec<&Campaign> = if page == 0 {
        Vec::new()
    } else {
        sorted
            .iter()
            .skip(start_index)
            .take(page_size)
            .copied()
            .collect()
    };
    let end_index_inclusive = rows.len().checked_sub(1).map(|last| start_index + last);

    PageWindow {
        rows,
        total_pages,
        start_index,
        end_index_inclusive,
    }
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub visible_page: Vec<Campaign>,
    pub total_count: usize,
    pub filtered_count: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub start_index: usize,
    pub end_index_inclusive: Option<usize>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    pub active_filters: ActiveFilters,
}

impl TableSnapshot {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Query state over an immutable campaign set.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    records: Vec<Campaign>,
    query: QueryState,
}

impl TableView {
    pub fn new(records: Vec<Campaign>) -> Self {
        Self {
            records,
            query: QueryState::default(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.query.search_text == text {
            return;
        }
        self.query.search_text = text;
        self.query.current_page = 1;
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if self.query.status_filter == filter {
            return;
        }
        self.query.status_filter = filter;
        self.query.current_page = 1;
    }

    pub fn set_channel_filter(&mut self, filter: ChannelFilter) {
        if self.query.channel_filter == filter {
            return;
        }
        self.query.channel_filter = filter;
        self.query.current_page = 1;
    }

    /// Same field flips the direction; a new field starts descending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.query.sort_field == field {
            self.query.sort_direction = self.query.sort_direction.flipped();
        } else {
            self.query.sort_field = field;
            self.query.sort_direction = SortDirection::Desc;
        }
        debug!(
            field = field.label(),
            direction = ?self.query.sort_direction,
            "campaign table sort changed"
        );
    }

    pub fn clear_filters(&mut self) {
        self.query.search_text.clear();
        self.query.status_filter = StatusFilter::All;
        self.query.channel_filter = ChannelFilter::All;
        self.query.current_page = 1;
    }

    pub fn filtered(&self) -> Vec<&Campaign> {
        apply_filter(
            &self.records,
            &self.query.search_text,
            &self.query.status_filter,
            &self.query.channel_filter,
        )
    }

    /// Filtered rows in display order, before pagination.
    pub fn filtered_sorted(&self) -> Vec<&Campaign> {
        apply_sort(
            self.filtered(),
            self.query.sort_field,
            self.query.sort_direction,
        )
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), PAGE_SIZE)
    }

    /// Returns false and leaves the state untouched when `page` is out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        if page == 0 || page > total {
            debug!(page, total, "rejected out-of-range page request");
            return false;
        }
        self.query.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.query.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.query.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    /// Distinct channels in first-seen order, for the channel filter options.
    pub fn channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = Vec::new();
        for record in &self.records {
            if !channels.iter().any(|channel| channel == &record.channel) {
                channels.push(record.channel.clone());
            }
        }
        channels
    }

    pub fn snapshot(&self) -> TableSnapshot {
        let sorted = self.filtered_sorted();
        let window = paginate(&sorted, self.query.current_page, PAGE_SIZE);

        TableSnapshot {
            visible_page: window.rows.into_iter().cloned().collect(),
            total_count: self.records.len(),
            filtered_count: sorted.len(),
            total_pages: window.total_pages,
            current_page: self.query.current_page,
            start_index: window.start_index,
            end_index_inclusive: window.end_index_inclusive,
            sort_field: self.query.sort_field,
            sort_direction: self.query.sort_direction,
            active_filters: self.query.active_filters(),
        }
    }
}
