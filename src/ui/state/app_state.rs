use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::campaign::Campaign;
use crate::domain::entities::dashboard::{ActivityItem, MetricCard};
use crate::infra::mock::data::{activity_seed, key_metrics};
use crate::usecase::services::table_view::TableView;

pub struct AppState {
    pub table: Signal<TableView>,
    pub metrics: Signal<Vec<MetricCard>>,
    pub activities: Signal<Vec<ActivityItem>>,
    pub loading: Signal<bool>,
    pub section_search: Signal<String>,
    pub status: Signal<String>,
}

impl AppState {
    /// `load_records` only runs on the first render.
    pub fn new(load_records: impl FnOnce() -> Vec<Campaign>) -> Self {
        Self {
            table: use_signal(move || TableView::new(load_records())),
            metrics: use_signal(key_metrics),
            activities: use_signal(activity_seed),
            loading: use_signal(|| true),
            section_search: use_signal(String::new),
            status: use_signal(|| "Ready".to_string()),
        }
    }
}
