//! Dataset discovery in a data directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// File name the dashboard looks for first.
pub const DEFAULT_DATASET_FILE: &str = "merged_country_data.csv";

/// Lists all CSV files in a directory, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Pick the dataset inside `dir`.
///
/// Prefers [`DEFAULT_DATASET_FILE`]; otherwise accepts the directory's only
/// CSV file.
pub fn discover_dataset(dir: &Path) -> Result<PathBuf> {
    let preferred = dir.join(DEFAULT_DATASET_FILE);
    if preferred.is_file() {
        return Ok(preferred);
    }
    let mut files = list_csv_files(dir)?;
    if files.len() == 1 {
        let path = files.remove(0);
        debug!(path = %path.display(), "using only CSV file in directory");
        return Ok(path);
    }
    Err(IngestError::DatasetNotFound {
        path: dir.to_path_buf(),
        expected: DEFAULT_DATASET_FILE,
        count: files.len(),
    })
}

/// Resolve a user-supplied path: files are used as-is, directories are searched.
pub fn resolve_dataset_path(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        discover_dataset(path)
    } else if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        })
    }
}
