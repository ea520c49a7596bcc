use chrono::NaiveDate;
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::entities::campaign::Campaign;
use crate::usecase::ports::file_saver::ExportError;

pub const CSV_HEADER: [&str; 8] = [
    "Campaign",
    "Channel",
    "Impressions",
    "Clicks",
    "CTR",
    "Conversions",
    "Revenue",
    "Status",
];

pub fn export_file_name(date: NaiveDate) -> String {
    format!("campaigns-{}.csv", date.format("%Y-%m-%d"))
}

/// Wraps a text field in double quotes, doubling any embedded quote.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn campaign_row(record: &Campaign) -> [String; 8] {
    [
        quote_field(&record.campaign),
        quote_field(&record.channel),
        record.impressions.to_string(),
        record.clicks.to_string(),
        format!("{:.2}", record.ctr),
        record.conversions.to_string(),
        record.revenue.to_string(),
        quote_field(record.status.as_str()),
    ]
}

/// Header is written bare; text fields are always quoted, numeric columns never are.
pub fn encode_campaigns_csv<'a, I>(records: I) -> Result<Vec<u8>, ExportError>
where
    I: IntoIterator<Item = &'a Campaign>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(campaign_row(record))?;
    }

    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}
