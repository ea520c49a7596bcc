use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ensure_webview_data_dir, DashboardConfig};
use crate::domain::entities::campaign::{
    validate_campaigns, Campaign, CampaignStatus, RecordError, SortDirection, SortField,
};
use crate::domain::entities::dashboard::{ActivityKind, MetricKind, Section, Trend};
use crate::domain::entities::query::{ChannelFilter, QueryState, StatusFilter, PAGE_SIZE};
use crate::infra::export::csv::{encode_campaigns_csv, export_file_name, CSV_HEADER};
use crate::infra::export::saver::DirectoryFileSaver;
use crate::infra::mock::data::{activity_seed, campaign_data, key_metrics};
use crate::usecase::ports::file_saver::{ExportError, FileSaver};
use crate::usecase::services::dashboard_service::{
    format_change, format_metric_value, generate_random_metric, push_activity, refresh_metrics,
    synthetic_conversion, ACTIVITY_FEED_LIMIT,
};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::section_search::{
    find_section, no_match_message, should_search_as_you_type,
};
use crate::usecase::services::table_view::{
    apply_filter, apply_sort, locale_compare, paginate, total_pages, TableView,
};
use crate::*;

fn sample_view() -> TableView {
    TableView::new(campaign_data())
}

fn names(rows: &[&Campaign]) -> Vec<String> {
    rows.iter().map(|row| row.campaign.clone()).collect()
}

fn campaign_with(id: &str, name: &str, channel: &str, clicks: u64) -> Campaign {
    Campaign {
        id: id.to_string(),
        campaign: name.to_string(),
        channel: channel.to_string(),
        impressions: clicks * 10,
        clicks,
        conversions: 0,
        revenue: 100.0,
        ctr: 10.0,
        status: CampaignStatus::Active,
    }
}

fn numbered_campaigns(count: usize) -> Vec<Campaign> {
    (0..count)
        .map(|idx| campaign_with(&idx.to_string(), &format!("Campaign {idx}"), "Email", idx as u64))
        .collect()
}

#[test]
fn empty_search_returns_every_record() {
    let records = campaign_data();

    let filtered = apply_filter(&records, "", &StatusFilter::All, &ChannelFilter::All);

    assert_eq!(filtered.len(), records.len());
}

#[test]
fn search_matches_campaign_or_channel_case_insensitively() {
    let records = campaign_data();

    for search in ["ads", "ADS", "Google", "promo", "q4", "tiktok", "zzz", " "] {
        let needle = search.to_lowercase();
        let expected: Vec<&str> = records
            .iter()
            .filter(|r| {
                r.campaign.to_lowercase().contains(&needle)
                    || r.channel.to_lowercase().contains(&needle)
            })
            .map(|r| r.id.as_str())
            .collect();

        let actual: Vec<&str> =
            apply_filter(&records, search, &StatusFilter::All, &ChannelFilter::All)
                .iter()
                .map(|r| r.id.as_str())
                .collect();

        assert_eq!(actual, expected, "search {search:?}");
    }

    let google = apply_filter(&records, "GOOGLE", &StatusFilter::All, &ChannelFilter::All);
    assert_eq!(
        names(&google),
        vec!["Summer Sale 2024", "Local Business Promo"]
    );
}

#[test]
fn status_and_channel_filters_combine_with_search() {
    let records = campaign_data();

    let paused = apply_filter(
        &records,
        "",
        &StatusFilter::Only(CampaignStatus::Paused),
        &ChannelFilter::All,
    );
    assert_eq!(names(&paused), vec!["New Product Launch"]);

    let google_ads = apply_filter(
        &records,
        "",
        &StatusFilter::All,
        &ChannelFilter::Only("Google Ads".to_string()),
    );
    assert_eq!(names(&google_ads), vec!["Summer Sale 2024"]);

    let wrong_case = apply_filter(
        &records,
        "",
        &StatusFilter::All,
        &ChannelFilter::Only("google ads".to_string()),
    );
    assert!(wrong_case.is_empty(), "channel filter is an exact match");

    let none = apply_filter(
        &records,
        "summer",
        &StatusFilter::Only(CampaignStatus::Completed),
        &ChannelFilter::All,
    );
    assert!(none.is_empty());
}

#[test]
fn filtering_does_not_touch_input() {
    let records = campaign_data();
    let before = records.clone();

    let _ = apply_filter(&records, "ads", &StatusFilter::All, &ChannelFilter::All);

    assert_eq!(records, before);
}

#[test]
fn default_sort_is_revenue_descending() {
    let view = sample_view();

    assert_eq!(view.query().sort_field, SortField::Revenue);
    assert_eq!(view.query().sort_direction, SortDirection::Desc);

    let revenues: Vec<f64> = view.filtered_sorted().iter().map(|r| r.revenue).collect();
    assert_eq!(
        revenues,
        vec![89_012.0, 68_990.0, 56_780.0, 45_230.0, 32_150.0, 28_450.0, 23_450.0, 18_900.0]
    );
}

#[test]
fn text_fields_sort_case_insensitively() {
    let records = vec![
        campaign_with("1", "beta", "Email", 1),
        campaign_with("2", "Alpha", "Email", 1),
        campaign_with("3", "alpha", "Email", 1),
        campaign_with("4", "Gamma", "Email", 1),
    ];
    let filtered = apply_filter(&records, "", &StatusFilter::All, &ChannelFilter::All);

    let ascending = apply_sort(filtered.clone(), SortField::Campaign, SortDirection::Asc);
    assert_eq!(names(&ascending), vec!["alpha", "Alpha", "beta", "Gamma"]);

    let descending = apply_sort(filtered, SortField::Campaign, SortDirection::Desc);
    assert_eq!(names(&descending), vec!["Gamma", "beta", "Alpha", "alpha"]);

    assert_eq!(locale_compare("a", "B"), std::cmp::Ordering::Less);
}

#[test]
fn sort_keeps_tied_rows_in_filtered_order() {
    let records = vec![
        campaign_with("1", "First", "Email", 5),
        campaign_with("2", "Second", "Email", 9),
        campaign_with("3", "Third", "Email", 5),
        campaign_with("4", "Fourth", "Email", 5),
    ];
    let filtered = apply_filter(&records, "", &StatusFilter::All, &ChannelFilter::All);

    let ascending = apply_sort(filtered.clone(), SortField::Clicks, SortDirection::Asc);
    assert_eq!(names(&ascending), vec!["First", "Third", "Fourth", "Second"]);

    let descending = apply_sort(filtered, SortField::Clicks, SortDirection::Desc);
    assert_eq!(names(&descending), vec!["Second", "First", "Third", "Fourth"]);
}

#[test]
fn toggle_sort_flips_same_field_and_resets_new_field_to_desc() {
    let mut view = sample_view();

    view.toggle_sort(SortField::Revenue);
    assert_eq!(view.query().sort_direction, SortDirection::Asc);
    assert_eq!(view.filtered_sorted()[0].campaign, "New Product Launch");

    view.toggle_sort(SortField::Revenue);
    assert_eq!(view.query().sort_direction, SortDirection::Desc);

    view.toggle_sort(SortField::Revenue);
    view.toggle_sort(SortField::Impressions);
    assert_eq!(view.query().sort_field, SortField::Impressions);
    assert_eq!(view.query().sort_direction, SortDirection::Desc);
    assert_eq!(view.filtered_sorted()[0].campaign, "Mobile App Install");

    view.toggle_sort(SortField::Status);
    let statuses: Vec<CampaignStatus> = view.filtered_sorted().iter().map(|r| r.status).collect();
    assert_eq!(statuses.first(), Some(&CampaignStatus::Paused));
    assert_eq!(statuses.last(), Some(&CampaignStatus::Active));
}

#[test]
fn total_pages_is_never_below_one() {
    for n in 0_usize..=17 {
        let expected = if n == 0 { 1 } else { n.div_ceil(PAGE_SIZE) };
        assert_eq!(total_pages(n, PAGE_SIZE), expected, "n = {n}");
    }
}

#[test]
fn paginate_returns_expected_slice_lengths() {
    for n in [0_usize, 1, 4, 5, 6, 10, 12] {
        let records = numbered_campaigns(n);
        let rows: Vec<&Campaign> = records.iter().collect();
        let pages = total_pages(n, PAGE_SIZE);

        for page in 1..=pages {
            let window = paginate(&rows, page, PAGE_SIZE);
            let expected_len = PAGE_SIZE.min(n.saturating_sub((page - 1) * PAGE_SIZE));
            assert_eq!(window.rows.len(), expected_len, "n = {n}, page = {page}");
            assert_eq!(window.total_pages, pages);
            assert_eq!(window.start_index, (page - 1) * PAGE_SIZE);
        }
    }
}

#[test]
fn paginate_out_of_range_page_is_empty() {
    let records = numbered_campaigns(7);
    let rows: Vec<&Campaign> = records.iter().collect();

    let page_zero = paginate(&rows, 0, PAGE_SIZE);
    assert!(page_zero.rows.is_empty());
    assert_eq!(page_zero.end_index_inclusive, None);

    let beyond = paginate(&rows, 3, PAGE_SIZE);
    assert!(beyond.rows.is_empty());
    assert_eq!(beyond.total_pages, 2);

    let huge = paginate(&rows, usize::MAX, PAGE_SIZE);
    assert!(huge.rows.is_empty());

    let last = paginate(&rows, 2, PAGE_SIZE);
    assert_eq!(last.start_index, 5);
    assert_eq!(last.end_index_inclusive, Some(6));
}

#[test]
fn empty_record_set_degrades_to_single_empty_page() {
    let view = TableView::new(Vec::new());

    let snapshot = view.snapshot();

    assert!(snapshot.visible_page.is_empty());
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(snapshot.current_page, 1);
    assert!(!snapshot.has_previous());
    assert!(!snapshot.has_next());
    assert_eq!(showing_label(&snapshot), "Showing 0 to 0 of 0 results");
}

#[test]
fn go_to_page_rejects_pages_outside_range() {
    let mut view = sample_view();

    assert!(!view.go_to_page(0));
    assert!(!view.go_to_page(3));
    assert_eq!(view.query().current_page, 1);

    assert!(view.go_to_page(2));
    assert!(!view.next_page());
    assert_eq!(view.query().current_page, 2);

    assert!(view.previous_page());
    assert!(!view.previous_page());
    assert_eq!(view.query().current_page, 1);
}

#[test]
fn filter_changes_reset_page_but_sort_changes_do_not() {
    let mut view = sample_view();

    view.go_to_page(2);
    view.set_search_text("a");
    assert_eq!(view.query().current_page, 1);

    view.go_to_page(2);
    view.set_status_filter(StatusFilter::Only(CampaignStatus::Active));
    assert_eq!(view.query().current_page, 1);

    view.set_status_filter(StatusFilter::All);
    view.go_to_page(2);
    view.set_channel_filter(ChannelFilter::Only("Google Ads".to_string()));
    assert_eq!(view.query().current_page, 1);

    view.set_channel_filter(ChannelFilter::All);
    view.go_to_page(2);
    view.toggle_sort(SortField::Clicks);
    view.toggle_sort(SortField::Campaign);
    assert_eq!(view.query().current_page, 2);
}

#[test]
fn current_page_stays_within_total_pages() {
    let mut view = sample_view();

    view.go_to_page(2);
    view.set_search_text("mobile");

    let snapshot = view.snapshot();
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(snapshot.current_page, 1);
    assert_eq!(snapshot.visible_page.len(), 1);
}

#[test]
fn searching_ads_with_active_status_lists_highest_revenue_first() {
    let mut view = sample_view();

    view.set_search_text("ads");
    view.set_status_filter(StatusFilter::Only(CampaignStatus::Active));
    let snapshot = view.snapshot();

    let visible: Vec<&str> = snapshot
        .visible_page
        .iter()
        .map(|r| r.campaign.as_str())
        .collect();
    assert_eq!(
        visible,
        vec![
            "Mobile App Install",
            "Summer Sale 2024",
            "Brand Awareness Q4",
            "Holiday Collection",
        ]
    );
    assert_eq!(snapshot.visible_page[0].revenue, 89_012.0);
    assert_eq!(snapshot.filtered_count, 4);
    assert_eq!(snapshot.total_count, 8);
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(showing_label(&snapshot), "Showing 1 to 4 of 4 results");
    assert_eq!(snapshot.active_filters.search.as_deref(), Some("ads"));
    assert_eq!(snapshot.active_filters.status, Some(CampaignStatus::Active));
    assert_eq!(snapshot.active_filters.channel, None);
}

#[test]
fn second_page_shows_remaining_rows() {
    let mut view = sample_view();
    view.go_to_page(2);

    let snapshot = view.snapshot();

    assert_eq!(snapshot.visible_page.len(), 3);
    assert_eq!(snapshot.visible_page[0].campaign, "Holiday Collection");
    assert_eq!(showing_label(&snapshot), "Showing 6 to 8 of 8 results");
    assert!(snapshot.has_previous());
    assert!(!snapshot.has_next());
}

#[test]
fn clear_filters_is_idempotent_and_keeps_sort() {
    let mut view = sample_view();
    view.set_search_text("ads");
    view.set_status_filter(StatusFilter::Only(CampaignStatus::Active));
    view.set_channel_filter(ChannelFilter::Only("TikTok Ads".to_string()));
    view.toggle_sort(SortField::Clicks);
    view.toggle_sort(SortField::Clicks);

    view.clear_filters();
    let once = view.query().clone();
    view.clear_filters();

    assert_eq!(view.query(), &once);
    assert_eq!(
        once,
        QueryState {
            sort_field: SortField::Clicks,
            sort_direction: SortDirection::Asc,
            ..QueryState::default()
        }
    );
    assert!(view.snapshot().active_filters.is_empty());
}

#[test]
fn channels_lists_distinct_values_in_source_order() {
    let view = sample_view();

    let channels = view.channels();

    assert_eq!(channels.len(), 8);
    assert_eq!(channels[0], "Google Ads");
    assert_eq!(channels[7], "Google Local");
}

#[test]
fn filter_option_values_round_trip_through_selects() {
    assert_eq!(StatusFilter::from_option_value("all"), StatusFilter::All);
    assert_eq!(
        StatusFilter::from_option_value("paused"),
        StatusFilter::Only(CampaignStatus::Paused)
    );
    assert_eq!(StatusFilter::from_option_value("unknown"), StatusFilter::All);
    assert_eq!(
        ChannelFilter::from_option_value("Email"),
        ChannelFilter::Only("Email".to_string())
    );
    assert_eq!(ChannelFilter::Only("Email".to_string()).option_value(), "Email");
}

#[test]
fn export_header_and_rows_follow_csv_contract() {
    let view = sample_view();

    let bytes = encode_campaigns_csv(view.filtered_sorted()).expect("encode should succeed");
    let text = String::from_utf8(bytes).expect("csv should be utf-8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "Campaign,Channel,Impressions,Clicks,CTR,Conversions,Revenue,Status"
    );
    assert_eq!(lines[0], CSV_HEADER.join(","));
    assert_eq!(
        lines[1],
        r#""Mobile App Install","TikTok Ads",345678,23456,6.78,1234,89012,"active""#
    );
    assert_eq!(lines.len(), 9);
}

#[test]
fn export_covers_whole_filtered_set_regardless_of_page() {
    let mut view = sample_view();
    view.set_search_text("ads");
    view.go_to_page(2);
    let filtered_len = view.filtered().len();

    let bytes = encode_campaigns_csv(view.filtered_sorted()).expect("encode should succeed");
    let text = String::from_utf8(bytes).expect("csv should be utf-8");

    assert_eq!(text.lines().count(), filtered_len + 1);
    assert!(filtered_len > PAGE_SIZE);
}

#[test]
fn export_escapes_quotes_and_formats_numbers() {
    let mut record = campaign_with("9", r#"Say "Hi", world"#, "Google Ads", 1);
    record.impressions = 10;
    record.ctr = 7.1;
    record.revenue = 12.5;

    let bytes = encode_campaigns_csv([&record]).expect("encode should succeed");
    let text = String::from_utf8(bytes).expect("csv should be utf-8");

    assert_eq!(
        text.lines().nth(1),
        Some(r#""Say ""Hi"", world","Google Ads",10,1,7.10,0,12.5,"active""#)
    );

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let parsed = reader
        .records()
        .next()
        .expect("one data row")
        .expect("row should parse");
    assert_eq!(&parsed[0], r#"Say "Hi", world"#);
}

#[test]
fn export_quotes_text_fields_that_look_numeric() {
    let digits = campaign_with("1", "2024", "Email", 1);
    let not_a_number = campaign_with("2", "NaN", "inf", 1);

    let bytes =
        encode_campaigns_csv([&digits, &not_a_number]).expect("encode should succeed");
    let text = String::from_utf8(bytes).expect("csv should be utf-8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[1], r#""2024","Email",10,1,10.00,0,100,"active""#);
    assert_eq!(lines[2], r#""NaN","inf",10,1,10.00,0,100,"active""#);

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let parsed: Vec<csv::StringRecord> = reader
        .records()
        .collect::<Result<_, _>>()
        .expect("rows should parse");
    assert_eq!(&parsed[0][0], "2024");
    assert_eq!(&parsed[1][1], "inf");
}

#[test]
fn export_of_empty_set_is_header_only() {
    let bytes = encode_campaigns_csv(Vec::<&Campaign>::new()).expect("encode should succeed");

    assert_eq!(
        String::from_utf8(bytes).expect("csv should be utf-8"),
        "Campaign,Channel,Impressions,Clicks,CTR,Conversions,Revenue,Status\n"
    );
}

#[test]
fn export_file_name_uses_iso_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");

    assert_eq!(export_file_name(date), "campaigns-2024-03-05.csv");
}

#[test]
fn export_service_writes_file_through_saver() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let service = ExportService::new(Arc::new(DirectoryFileSaver::new(temp_dir.path())));
    let mut view = sample_view();
    view.set_status_filter(StatusFilter::Only(CampaignStatus::Active));
    let date = NaiveDate::from_ymd_opt(2024, 11, 29).expect("valid date");

    let outcome = service.export_csv(&view, date).expect("export should succeed");

    assert_eq!(outcome.path, temp_dir.path().join("campaigns-2024-11-29.csv"));
    assert_eq!(outcome.row_count, 6);
    let written = fs::read_to_string(&outcome.path).expect("export file should exist");
    assert_eq!(written.lines().count(), 7);
    assert!(!written.contains("Black Friday Promo"));
}

struct UnavailableSaver;

impl FileSaver for UnavailableSaver {
    fn save(&self, _file_name: &str, _contents: &[u8]) -> Result<PathBuf, ExportError> {
        Err(ExportError::Unavailable("no download access".to_string()))
    }
}

#[test]
fn failed_export_leaves_query_state_untouched() {
    let service = ExportService::new(Arc::new(UnavailableSaver));
    let mut view = sample_view();
    view.set_search_text("ads");
    view.go_to_page(2);
    let before = view.query().clone();

    let err = service
        .export_csv_today(&view)
        .expect_err("export should fail without a saver");

    assert!(matches!(err, ExportError::Unavailable(_)), "unexpected error: {err}");
    assert_eq!(view.query(), &before);
}

#[test]
fn directory_saver_rejects_nested_file_names() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");
    let saver = DirectoryFileSaver::new(temp_dir.path());

    let err = saver
        .save("../escape.csv", b"x")
        .expect_err("nested path should be rejected");

    assert!(matches!(err, ExportError::Unavailable(_)));
}

#[test]
fn sample_campaigns_pass_validation() {
    assert!(validate_campaigns(&campaign_data()).is_empty());
}

#[test]
fn validation_flags_duplicates_and_bad_numbers() {
    let mut records = numbered_campaigns(3);
    records[1].id = "0".to_string();
    records[2].revenue = -1.0;
    records[2].ctr = f64::NAN;
    records.push(campaign_with(" ", "Blank", "Email", 1));

    let issues = validate_campaigns(&records);

    assert_eq!(
        issues,
        vec![
            RecordError::DuplicateId { id: "0".to_string() },
            RecordError::Negative {
                id: "2".to_string(),
                field: "revenue"
            },
            RecordError::NonFinite {
                id: "2".to_string(),
                field: "ctr"
            },
            RecordError::EmptyId { index: 3 },
        ]
    );
}

#[test]
fn sort_with_nan_revenue_does_not_panic() {
    let mut records = numbered_campaigns(3);
    records[1].revenue = f64::NAN;
    let view = TableView::new(records);

    assert_eq!(view.filtered_sorted().len(), 3);
}

#[test]
fn section_search_prefers_exact_then_partial_matches() {
    let exact = find_section("Revenue Trend").expect("exact match");
    assert_eq!(exact.keyword, "revenue trend");
    assert_eq!(exact.section, Section::RevenueChart);

    let partial = find_section("rev").expect("partial match");
    assert_eq!(partial.section, Section::RevenueChart);

    let contained = find_section("show device usage please").expect("contained keyword");
    assert_eq!(contained.keyword, "device");

    assert_eq!(
        find_section("campaigns").map(|m| m.section),
        Some(Section::CampaignsTable)
    );
    assert_eq!(find_section("   "), None);
    assert_eq!(find_section("zzz"), None);
}

#[test]
fn blank_section_search_reports_nothing() {
    assert_eq!(no_match_message(""), None);
    assert_eq!(no_match_message("   "), None);
    assert_eq!(no_match_message("device"), None);
    assert_eq!(
        no_match_message(" zzz "),
        Some(r#"No section matches "zzz""#.to_string())
    );
}

#[test]
fn as_you_type_search_needs_more_than_three_characters() {
    assert!(!should_search_as_you_type("dev"));
    assert!(should_search_as_you_type("devi"));
}

#[test]
fn scroll_script_targets_section_element() {
    let script = scroll_to_section_script(Section::ActivityFeed);

    assert!(script.contains(r#"getElementById("activity-feed")"#));
    assert!(script.contains("setTimeout"));
}

#[test]
fn random_metric_stays_within_variance() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let value = generate_random_metric(&mut rng, 1_000.0, 0.1);
        assert!((950.0..=1_050.0).contains(&value), "value {value}");
        assert_eq!((value * 100.0).round() / 100.0, value);
    }
}

#[test]
fn refresh_metrics_keeps_identity_and_reformats_values() {
    let mut rng = StdRng::seed_from_u64(42);
    let metrics = key_metrics();

    let refreshed = refresh_metrics(&mut rng, &metrics);

    assert_eq!(refreshed.len(), metrics.len());
    for (before, after) in metrics.iter().zip(&refreshed) {
        assert_eq!(before.id, after.id);
        assert_eq!(before.kind, after.kind);
        assert_eq!(before.trend, after.trend);
    }
    assert!(refreshed[0].value.starts_with('$'));
    assert!(refreshed[3].value.ends_with('%'));
    assert_eq!(refreshed[2].trend, Trend::Down);
    assert!(refreshed[2].change < 0.0);
}

#[test]
fn metric_values_render_like_the_cards() {
    assert_eq!(
        format_metric_value(MetricKind::TotalRevenue, 284_532.47),
        "$284,532.47"
    );
    assert_eq!(format_metric_value(MetricKind::ActiveUsers, 18_293.0), "18,293");
    assert_eq!(format_metric_value(MetricKind::GrowthRate, 23.84), "23.8%");
    assert_eq!(format_change(12.5), "+12.5%");
    assert_eq!(format_change(-3.1), "-3.1%");
}

#[test]
fn activity_feed_keeps_ten_newest_entries() {
    let mut feed = activity_seed();

    for _ in 0..8 {
        push_activity(&mut feed, synthetic_conversion());
    }

    assert_eq!(feed.len(), ACTIVITY_FEED_LIMIT);
    assert_eq!(feed[0].kind, ActivityKind::Conversion);
    assert_eq!(feed[0].time, "Just now");
    assert_eq!(feed[9].id, "2", "oldest seed entries fall off first");
}

#[test]
fn number_formatting_uses_thousands_separators() {
    assert_eq!(format_number_with_commas(0), "0");
    assert_eq!(format_number_with_commas(999), "999");
    assert_eq!(format_number_with_commas(345_678), "345,678");
    assert_eq!(format_number_with_commas(1_234_567), "1,234,567");
    assert_eq!(format_decimal_with_commas(284_532.5, 2), "284,532.5");
    assert_eq!(format_decimal_with_commas(-1_234.0, 2), "-1,234");
    assert_eq!(format_currency(45_230.0), "$45,230");
    assert_eq!(format_ctr(7.1), "7.10%");
}

#[test]
fn sort_indicator_marks_only_active_column() {
    let mut view = sample_view();
    let snapshot = view.snapshot();
    assert_eq!(sort_indicator(&snapshot, SortField::Revenue), " ▼");
    assert_eq!(sort_indicator(&snapshot, SortField::Clicks), "");

    view.toggle_sort(SortField::Revenue);
    assert_eq!(sort_indicator(&view.snapshot(), SortField::Revenue), " ▲");
}

#[test]
fn sticky_header_styles_include_positioning() {
    let style = table_header_cell_style();

    assert!(style.contains("position: sticky"));
    assert!(style.contains("top: 0"));
    assert!(style.contains("z-index"));
}

#[test]
fn status_badges_differ_per_status() {
    let styles: Vec<&str> = CampaignStatus::ALL
        .into_iter()
        .map(status_badge_style)
        .collect();

    assert_ne!(styles[0], styles[1]);
    assert_ne!(styles[1], styles[2]);
}

#[test]
fn default_config_matches_dashboard_intervals() {
    let config = DashboardConfig::default();

    assert_eq!(config.metrics_refresh.as_secs(), 10);
    assert_eq!(config.activity_refresh.as_secs(), 30);
    assert_eq!(config.loading_delay.as_secs(), 1);
    assert!(config.export_dir.is_none());
    assert!(config.ask_export_location);
}

#[test]
fn ensure_webview_data_dir_creates_webview2_subdir() {
    let temp_dir = tempfile::tempdir().expect("should create temp dir");

    let webview_dir =
        ensure_webview_data_dir(temp_dir.path()).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.path().join("webview2"));
    assert!(webview_dir.is_dir(), "webview2 directory should exist");
}

#[test]
fn logging_init_can_run_twice() {
    crate::logging::init_logging();
    crate::logging::init_logging();
}
