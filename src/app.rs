use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use tokio::runtime::Handle;
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::domain::entities::campaign::{validate_campaigns, Campaign, CampaignStatus, SortField};
use crate::domain::entities::dashboard::{ActivityItem, MetricCard, Section, Trend};
use crate::domain::entities::query::{ChannelFilter, StatusFilter, ALL_OPTION_VALUE};
use crate::infra::export::saver::{DialogFileSaver, DirectoryFileSaver};
use crate::infra::mock::data::{campaign_data, channel_data, device_data, revenue_data};
use crate::platform::desktop::scheduler::ScheduledTask;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::file_saver::{ExportError, FileSaver};
use crate::usecase::services::dashboard_service::{
    activity_color, activity_label, format_change, push_activity, refresh_metrics,
    synthetic_conversion,
};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::section_search::{
    find_section, no_match_message, should_search_as_you_type,
};
use crate::usecase::services::table_view::TableView;
use crate::{
    card_style, format_ctr, format_currency, format_decimal_with_commas,
    format_number_with_commas, page_button_style, root_container_style,
    scroll_to_section_script, showing_label, sort_indicator, status_badge_style,
    table_cell_style, table_container_style, table_header_cell_style,
};

fn load_campaigns() -> Vec<Campaign> {
    let records = campaign_data();
    for issue in validate_campaigns(&records) {
        warn!("campaign data issue: {issue}");
    }
    records
}

fn jump_to_section(search: &str) -> Option<Section> {
    let Some(found) = find_section(search) else {
        debug!(search, "no dashboard section matches");
        return None;
    };
    debug!(
        search,
        keyword = found.keyword,
        section = found.section.element_id(),
        "jumping to section"
    );
    let scroll = document::eval(&scroll_to_section_script(found.section));
    spawn(async move {
        if let Err(err) = scroll.await {
            debug!("section scroll script failed: {err:?}");
        }
    });
    Some(found.section)
}

#[component]
pub fn App() -> Element {
    let config = use_context::<DashboardConfig>();

    let AppState {
        table,
        mut metrics,
        mut activities,
        mut loading,
        mut section_search,
        mut status,
    } = AppState::new(load_campaigns);

    let export_service = use_hook(|| {
        let saver: Arc<dyn FileSaver> = match (config.ask_export_location, &config.export_dir) {
            (false, Some(dir)) => Arc::new(DirectoryFileSaver::new(dir.clone())),
            _ => Arc::new(DialogFileSaver::new(config.export_dir.clone())),
        };
        Rc::new(ExportService::new(saver))
    });

    let metrics_refresh = config.metrics_refresh;
    let activity_refresh = config.activity_refresh;
    let loading_delay = config.loading_delay;
    // Dropping the hook on unmount stops both timers.
    let _timers = use_hook(move || {
        let Ok(runtime) = Handle::try_current() else {
            warn!("no async runtime available, live updates disabled");
            loading.set(false);
            return Rc::new(Vec::<ScheduledTask>::new());
        };

        let (metrics_task, mut metric_ticks) =
            ScheduledTask::start(&runtime, "metrics-refresh", metrics_refresh);
        spawn(async move {
            while metric_ticks.recv().await.is_some() {
                let next = refresh_metrics(&mut rand::thread_rng(), &metrics.peek());
                metrics.set(next);
            }
        });

        let (activity_task, mut activity_ticks) =
            ScheduledTask::start(&runtime, "activity-feed", activity_refresh);
        spawn(async move {
            while activity_ticks.recv().await.is_some() {
                push_activity(&mut activities.write(), synthetic_conversion());
            }
        });

        spawn(async move {
            tokio::time::sleep(loading_delay).await;
            loading.set(false);
        });

        let tasks = vec![metrics_task, activity_task];
        let names: Vec<&str> = tasks.iter().map(ScheduledTask::name).collect();
        info!(?names, "live dashboard updates started");
        Rc::new(tasks)
    });

    let export_service_for_click = export_service.clone();
    let on_export = move |_: ()| {
        let result = export_service_for_click.export_csv_today(&table.read());
        match result {
            Ok(outcome) => {
                status.set(format!(
                    "Exported {} campaigns to {}",
                    outcome.row_count,
                    outcome.path.display()
                ));
            }
            Err(ExportError::Cancelled) => status.set("Export cancelled".to_string()),
            Err(err) => {
                warn!("campaign export failed: {err}");
                status.set(format!("Export failed: {err}"));
            }
        }
    };

    rsx! {
        div { style: "{root_container_style()}",
            header {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 16px; flex-wrap: wrap;",
                div {
                    p { style: "font-size: 26px; font-weight: 700; margin: 0;", "Dashboard Overview" }
                    p { style: "color: #64748b; margin: 4px 0 0;",
                        "Welcome back! Here's what's happening with your campaigns today."
                    }
                }
                input {
                    style: "min-width: 320px; padding: 6px 10px; border: 1px solid #cbd5e1; border-radius: 6px;",
                    value: section_search(),
                    placeholder: "Search: device, channel, revenue, activity, campaigns...",
                    oninput: move |event| {
                        let value = event.value();
                        section_search.set(value.clone());
                        if should_search_as_you_type(&value) {
                            jump_to_section(&value);
                        }
                    },
                    onkeydown: move |event| {
                        if event.key() != Key::Enter {
                            return;
                        }
                        let search = section_search();
                        if jump_to_section(&search).is_none() {
                            if let Some(message) = no_match_message(&search) {
                                status.set(message);
                            }
                        }
                    },
                }
                span { style: "color: #64748b; font-size: 13px;", "{status}" }
            }

            if loading() {
                DashboardSkeleton {}
            } else {
                div { id: "{Section::MetricsGrid.element_id()}",
                    MetricsGrid { metrics: metrics() }
                }

                div {
                    id: "{Section::ChartsSection.element_id()}",
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px;",
                    div { id: "{Section::RevenueChart.element_id()}", style: "{card_style()}", RevenueTrend {} }
                    div { id: "{Section::ChannelChart.element_id()}", style: "{card_style()}", ChannelPerformance {} }
                    div { id: "{Section::DeviceChart.element_id()}", style: "{card_style()}", DeviceUsage {} }
                    div { id: "{Section::ActivityFeed.element_id()}", style: "{card_style()}",
                        ActivityFeed { activities: activities() }
                    }
                }

                div { id: "{Section::CampaignsTable.element_id()}", style: "{card_style()}",
                    CampaignsTable { table, on_export }
                }
            }
        }
    }
}

#[component]
fn DashboardSkeleton() -> Element {
    let block = "background: #e2e8f0; border-radius: 6px;";
    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 16px;",
            div { style: "{block} height: 32px;" }
            div { style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px;",
                for idx in 0..4 {
                    div { key: "{idx}", style: "{block} height: 96px;" }
                }
            }
            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
                for idx in 0..3 {
                    div { key: "{idx}", style: "{block} height: 280px;" }
                }
            }
        }
    }
}

fn trend_style(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "color: #22c55e;",
        Trend::Down => "color: #ef4444;",
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲ ",
        Trend::Down => "▼ ",
    }
}

#[component]
fn MetricsGrid(metrics: Vec<MetricCard>) -> Element {
    rsx! {
        div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;",
            for metric in metrics {
                div { key: "{metric.id}", style: "{card_style()}",
                    div { style: "font-size: 13px; color: #64748b;", "{metric.title}" }
                    div { style: "font-size: 24px; font-weight: 700; margin: 6px 0;", "{metric.value}" }
                    div { style: "font-size: 12px; color: #64748b;",
                        span { style: "{trend_style(metric.trend)}",
                            "{trend_arrow(metric.trend)}{format_change(metric.change)}"
                        }
                        " from last month"
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityFeed(activities: Vec<ActivityItem>) -> Element {
    rsx! {
        div { style: "font-weight: 600; margin-bottom: 4px;", "Real-time Activity" }
        div { style: "font-size: 13px; color: #64748b; margin-bottom: 12px;", "Live updates from your campaigns" }
        div { style: "max-height: 400px; overflow-y: auto; display: flex; flex-direction: column; gap: 8px;",
            for activity in activities {
                div { key: "{activity.id}", style: "display: flex; gap: 10px; align-items: flex-start;",
                    span {
                        style: "color: {activity_color(activity.kind)}; font-size: 12px; min-width: 72px;",
                        "{activity_label(activity.kind)}"
                    }
                    div {
                        div { style: "font-size: 14px;", "{activity.action}" }
                        div { style: "font-size: 12px; color: #64748b;", "{activity.time}" }
                    }
                }
            }
        }
    }
}

fn bar_width(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).clamp(0.0, 100.0)
    }
}

#[component]
fn RevenueTrend() -> Element {
    let points = revenue_data();
    let max = points.iter().map(|p| p.revenue).fold(0.0, f64::max);
    rsx! {
        div { style: "font-weight: 600; margin-bottom: 12px;", "Revenue Trend" }
        for point in points {
            div { key: "{point.month}", title: "{format_number_with_commas(point.users)} users", style: "display: flex; align-items: center; gap: 8px; font-size: 12px; margin-bottom: 4px;",
                span { style: "min-width: 32px;", "{point.month}" }
                div { style: "flex: 1; background: #f1f5f9; border-radius: 4px;",
                    div { style: "width: {bar_width(point.revenue, max)}%; height: 10px; background: #8884d8; border-radius: 4px;" }
                }
                span { style: "min-width: 72px; text-align: right;", "{format_currency(point.revenue)}" }
                span { style: "min-width: 48px; text-align: right; color: #64748b;",
                    "{format_number_with_commas(point.conversions)}"
                }
            }
        }
    }
}

#[component]
fn ChannelPerformance() -> Element {
    let channels = channel_data();
    let max = channels.iter().map(|c| c.value).fold(0.0, f64::max);
    rsx! {
        div { style: "font-weight: 600; margin-bottom: 12px;", "Channel Performance" }
        for channel in channels {
            div { key: "{channel.name}", style: "display: flex; align-items: center; gap: 8px; font-size: 12px; margin-bottom: 6px;",
                span { style: "min-width: 110px;", "{channel.name}" }
                div { style: "flex: 1; background: #f1f5f9; border-radius: 4px;",
                    div { style: "width: {bar_width(channel.value, max)}%; height: 10px; background: #82ca9d; border-radius: 4px;" }
                }
                span { style: "min-width: 56px; text-align: right;", "{format_decimal_with_commas(channel.value, 0)}" }
            }
        }
    }
}

#[component]
fn DeviceUsage() -> Element {
    rsx! {
        div { style: "font-weight: 600; margin-bottom: 12px;", "Device Usage" }
        for device in device_data() {
            div { key: "{device.name}", style: "display: flex; align-items: center; gap: 8px; font-size: 12px; margin-bottom: 6px;",
                span { style: "min-width: 64px;", "{device.name}" }
                div { style: "flex: 1; background: #f1f5f9; border-radius: 4px;",
                    div { style: "width: {bar_width(device.value, 100.0)}%; height: 10px; background: #ffc658; border-radius: 4px;" }
                }
                span { style: "min-width: 40px; text-align: right;", "{device.value}%" }
            }
        }
    }
}

#[component]
fn CampaignsTable(mut table: Signal<TableView>, on_export: EventHandler<()>) -> Element {
    let snapshot = table.read().snapshot();
    let channels = table.read().channels();
    let query = table.read().query().clone();
    let filters = snapshot.active_filters.clone();

    rsx! {
        div { style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; flex-wrap: wrap;",
            div {
                div { style: "font-weight: 600;", "Campaign Performance" }
                div { style: "font-size: 13px; color: #64748b;",
                    "Detailed analytics for all marketing campaigns ({snapshot.filtered_count} of {snapshot.total_count})"
                }
            }
            div { style: "display: flex; gap: 8px; align-items: center;",
                select {
                    value: "{query.status_filter.option_value()}",
                    onchange: move |event| {
                        table.write().set_status_filter(StatusFilter::from_option_value(&event.value()));
                    },
                    option { value: "{ALL_OPTION_VALUE}", "All statuses" }
                    for status in CampaignStatus::ALL {
                        option { key: "{status}", value: "{status}", "{status}" }
                    }
                }
                select {
                    value: "{query.channel_filter.option_value()}",
                    onchange: move |event| {
                        table.write().set_channel_filter(ChannelFilter::from_option_value(&event.value()));
                    },
                    option { value: "{ALL_OPTION_VALUE}", "All channels" }
                    for channel in channels {
                        option { key: "{channel}", value: "{channel}", "{channel}" }
                    }
                }
                button {
                    onclick: move |_| on_export.call(()),
                    "Export"
                }
            }
        }

        div { style: "display: flex; align-items: center; gap: 8px; margin: 12px 0; flex-wrap: wrap;",
            input {
                style: "min-width: 280px; padding: 6px 10px; border: 1px solid #cbd5e1; border-radius: 6px;",
                value: "{query.search_text}",
                placeholder: "Search campaigns...",
                oninput: move |event| table.write().set_search_text(event.value()),
            }
            if let Some(search) = filters.search.clone() {
                button {
                    style: "border: 1px solid #cbd5e1; border-radius: 9999px; padding: 2px 10px; background: #f8fafc;",
                    onclick: move |_| table.write().set_search_text(String::new()),
                    "Search: {search} ×"
                }
            }
            if let Some(status) = filters.status {
                button {
                    style: "border: 1px solid #cbd5e1; border-radius: 9999px; padding: 2px 10px; background: #f8fafc;",
                    onclick: move |_| table.write().set_status_filter(StatusFilter::All),
                    "Status: {status} ×"
                }
            }
            if let Some(channel) = filters.channel.clone() {
                button {
                    style: "border: 1px solid #cbd5e1; border-radius: 9999px; padding: 2px 10px; background: #f8fafc;",
                    onclick: move |_| table.write().set_channel_filter(ChannelFilter::All),
                    "Channel: {channel} ×"
                }
            }
            if !filters.is_empty() {
                button {
                    onclick: move |_| table.write().clear_filters(),
                    "Clear filters ({filters.count()})"
                }
            }
        }

        div { style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for field in SortField::ALL {
                            th { key: "{field.label()}", style: "{table_header_cell_style()}",
                                button {
                                    style: "border: none; background: transparent; font-weight: 600; cursor: pointer; padding: 0;",
                                    onclick: move |_| table.write().toggle_sort(field),
                                    "{field.label()}{sort_indicator(&snapshot, field)}"
                                }
                            }
                        }
                    }
                }
                tbody {
                    if snapshot.visible_page.is_empty() {
                        tr {
                            td { style: "{table_cell_style()} color: #64748b;",
                                colspan: SortField::ALL.len(),
                                "No campaigns match the current filters"
                            }
                        }
                    } else {
                        for row in snapshot.visible_page.clone() {
                            tr { key: "{row.id}",
                                td { style: "{table_cell_style()} font-weight: 500;", "{row.campaign}" }
                                td { style: "{table_cell_style()}", "{row.channel}" }
                                td { style: "{table_cell_style()}", "{format_number_with_commas(row.impressions)}" }
                                td { style: "{table_cell_style()}", "{format_number_with_commas(row.clicks)}" }
                                td { style: "{table_cell_style()}", "{format_ctr(row.ctr)}" }
                                td { style: "{table_cell_style()}", "{format_number_with_commas(row.conversions)}" }
                                td { style: "{table_cell_style()}", "{format_currency(row.revenue)}" }
                                td { style: "{table_cell_style()}",
                                    span { style: "{status_badge_style(row.status)}", "{row.status}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        div { style: "display: flex; align-items: center; justify-content: space-between; gap: 8px; padding-top: 12px; flex-wrap: wrap;",
            span { style: "font-size: 13px; color: #64748b;", "{showing_label(&snapshot)}" }
            div { style: "display: flex; gap: 6px;",
                button {
                    disabled: !snapshot.has_previous(),
                    onclick: move |_| {
                        table.write().previous_page();
                    },
                    "Previous"
                }
                for page_number in 1..=snapshot.total_pages {
                    button {
                        key: "{page_number}",
                        style: "{page_button_style(page_number == snapshot.current_page)}",
                        onclick: move |_| {
                            table.write().go_to_page(page_number);
                        },
                        "{page_number}"
                    }
                }
                button {
                    disabled: !snapshot.has_next(),
                    onclick: move |_| {
                        table.write().next_page();
                    },
                    "Next"
                }
            }
        }
    }
}
