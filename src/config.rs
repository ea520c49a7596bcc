use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::{ProjectDirs, UserDirs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub window_title: String,
    pub metrics_refresh: Duration,
    pub activity_refresh: Duration,
    pub loading_delay: Duration,
    /// Starting directory offered by the export dialog.
    pub export_dir: Option<PathBuf>,
    /// When false, exports go straight into `export_dir` without a dialog.
    pub ask_export_location: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_title: "Campaign Dashboard".to_string(),
            metrics_refresh: Duration::from_secs(10),
            activity_refresh: Duration::from_secs(30),
            loading_delay: Duration::from_secs(1),
            export_dir: None,
            ask_export_location: true,
        }
    }
}

impl DashboardConfig {
    pub fn resolve() -> Result<Self> {
        Ok(Self {
            export_dir: Some(default_export_dir()?),
            ..Self::default()
        })
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "campaigndash", "campaign-dash")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_export_dir() -> Result<PathBuf> {
    let download_dir =
        UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf));
    if let Some(dir) = download_dir {
        return Ok(dir);
    }
    Ok(project_dirs()?.data_local_dir().join("exports"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
