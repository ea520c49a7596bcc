use tracing::{info, warn};

use crate::app::App;
use crate::config::{default_webview_data_dir, DashboardConfig};
use crate::domain::entities::campaign::{CampaignStatus, SortDirection, SortField};
use crate::domain::entities::dashboard::Section;
use crate::usecase::services::table_view::TableSnapshot;

mod app;
mod config;
mod logging;

mod domain {
    pub mod entities {
        pub mod campaign;
        pub mod dashboard;
        pub mod query;
    }
}

mod infra {
    pub mod export {
        pub mod csv;
        pub mod saver;
    }
    pub mod mock {
        pub mod data;
    }
}

mod platform {
    pub mod desktop {
        pub mod scheduler;
    }
}

mod ui {
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod file_saver;
    }
    pub mod services {
        pub mod dashboard_service;
        pub mod export_service;
        pub mod section_search;
        pub mod table_view;
    }
}

#[cfg(test)]
mod tests;

fn main() {
    logging::init_logging();

    let config = DashboardConfig::resolve().unwrap_or_else(|err| {
        warn!("falling back to default configuration: {err:#}");
        DashboardConfig::default()
    });
    info!(export_dir = ?config.export_dir, "starting campaign dashboard");

    let mut desktop_config = dioxus::desktop::Config::new().with_window(
        dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
    );
    match default_webview_data_dir() {
        Ok(dir) => desktop_config = desktop_config.with_data_directory(dir),
        Err(err) => warn!("using default webview data directory: {err:#}"),
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(config)
        .launch(App);
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_number_with_commas(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Thousands separators, at most `max_fraction_digits` decimals, trailing zeros dropped.
pub fn format_decimal_with_commas(value: f64, max_fraction_digits: usize) -> String {
    let formatted = format!("{:.*}", max_fraction_digits, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 && formatted.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

pub fn format_currency(value: f64) -> String {
    format!("${}", format_decimal_with_commas(value, 2))
}

pub fn format_ctr(ctr: f64) -> String {
    format!("{ctr:.2}%")
}

pub fn showing_label(snapshot: &TableSnapshot) -> String {
    let (from, to) = match snapshot.end_index_inclusive {
        Some(end) => (snapshot.start_index + 1, end + 1),
        None => (0, 0),
    };
    format!(
        "Showing {from} to {to} of {} results",
        snapshot.filtered_count
    )
}

pub fn sort_indicator(snapshot: &TableSnapshot, field: SortField) -> &'static str {
    if snapshot.sort_field != field {
        return "";
    }
    match snapshot.sort_direction {
        SortDirection::Asc => " ▲",
        SortDirection::Desc => " ▼",
    }
}

pub fn status_badge_style(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Active => {
            "display: inline-flex; padding: 2px 8px; border-radius: 9999px; font-size: 12px; background: #dcfce7; color: #166534;"
        }
        CampaignStatus::Paused => {
            "display: inline-flex; padding: 2px 8px; border-radius: 9999px; font-size: 12px; background: #fef9c3; color: #854d0e;"
        }
        CampaignStatus::Completed => {
            "display: inline-flex; padding: 2px 8px; border-radius: 9999px; font-size: 12px; background: #dbeafe; color: #1e40af;"
        }
    }
}

pub fn root_container_style() -> &'static str {
    "min-height: 100vh; display: flex; flex-direction: column; gap: 16px; padding: 16px; box-sizing: border-box; font-family: system-ui, sans-serif; background: #f8fafc; color: #0f172a;"
}

pub fn card_style() -> &'static str {
    "background: #fff; border: 1px solid #e2e8f0; border-radius: 8px; padding: 16px;"
}

pub fn table_container_style() -> &'static str {
    "overflow: auto; border: 1px solid #e2e8f0; border-radius: 6px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f1f5f9; border-bottom: 1px solid #e2e8f0; padding: 8px; text-align: left; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "border-bottom: 1px solid #f1f5f9; padding: 8px; white-space: nowrap;"
}

pub fn page_button_style(is_current: bool) -> &'static str {
    if is_current {
        "min-width: 32px; padding: 4px 8px; border: 1px solid #0f172a; border-radius: 6px; background: #0f172a; color: #fff; cursor: pointer;"
    } else {
        "min-width: 32px; padding: 4px 8px; border: 1px solid #cbd5e1; border-radius: 6px; background: #fff; color: #0f172a; cursor: pointer;"
    }
}

/// Scrolls the section into view below the header and flashes an outline around it.
pub fn scroll_to_section_script(section: Section) -> String {
    format!(
        r#"const el = document.getElementById("{id}");
if (el) {{
  const top = el.getBoundingClientRect().top + window.pageYOffset - 80;
  window.scrollTo({{ top, behavior: "smooth" }});
  el.style.outline = "2px solid rgba(59, 130, 246, 0.5)";
  setTimeout(() => {{ el.style.outline = ""; }}, 2000);
}}"#,
        id = section.element_id()
    )
}
