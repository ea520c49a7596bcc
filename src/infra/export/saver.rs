use std::path::{Path, PathBuf};

use rfd::FileDialog;
use tracing::{debug, warn};

use crate::usecase::ports::file_saver::{ExportError, FileSaver};

fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

/// Asks the user where to save through the native save dialog.
pub struct DialogFileSaver {
    default_dir: Option<PathBuf>,
}

impl DialogFileSaver {
    pub fn new(default_dir: Option<PathBuf>) -> Self {
        Self { default_dir }
    }
}

impl FileSaver for DialogFileSaver {
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
        let mut dialog = FileDialog::new()
            .set_title("Export campaigns")
            .set_file_name(file_name)
            .add_filter("CSV", &["csv"]);
        if let Some(dir) = self.default_dir.as_deref() {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            debug!(file_name, "save dialog dismissed");
            return Err(ExportError::Cancelled);
        };

        write_file(&path, contents)?;
        Ok(path)
    }
}

/// Writes straight into a directory without asking.
pub struct DirectoryFileSaver {
    dir: PathBuf,
}

impl DirectoryFileSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSaver for DirectoryFileSaver {
    fn save(&self, file_name: &str, contents: &[u8]) -> Result<PathBuf, ExportError> {
        if file_name.is_empty() || Path::new(file_name).components().count() != 1 {
            warn!(file_name, "refusing export file name with path components");
            return Err(ExportError::Unavailable(format!(
                "invalid export file name: {file_name}"
            )));
        }

        let path = self.dir.join(file_name);
        write_file(&path, contents)?;
        Ok(path)
    }
}
