use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::infra::export::csv::{encode_campaigns_csv, export_file_name};
use crate::usecase::ports::file_saver::{ExportError, FileSaver};
use crate::usecase::services::table_view::TableView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub row_count: usize,
}

pub struct ExportService {
    saver: Arc<dyn FileSaver>,
}

impl ExportService {
    pub fn new(saver: Arc<dyn FileSaver>) -> Self {
        Self { saver }
    }

    /// Exports every filtered row in display order, ignoring pagination.
    pub fn export_csv(&self, view: &TableView, date: NaiveDate) -> Result<ExportOutcome, ExportError> {
        let rows = view.filtered_sorted();
        let contents = encode_campaigns_csv(rows.iter().copied())?;
        let file_name = export_file_name(date);
        let path = self.saver.save(&file_name, &contents)?;

        info!(path = %path.display(), rows = rows.len(), "exported campaigns csv");
        Ok(ExportOutcome {
            path,
            row_count: rows.len(),
        })
    }

    pub fn export_csv_today(&self, view: &TableView) -> Result<ExportOutcome, ExportError> {
        self.export_csv(view, Local::now().date_naive())
    }
}
