//! Snapshot file naming and loading.
//!
//! A load-test run writes `<prefix>_stats.csv`; the baseline lives next to it
//! as `<prefix>_stats_previous.csv`. The prefix may carry a directory part.

use std::path::{Path, PathBuf};

use crate::{CompareError, table::Table};

pub fn stats_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_stats.csv"))
}

pub fn previous_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_stats_previous.csv"))
}

pub fn comparison_path(prefix: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}_comparison_stats.csv"))
}

/// Load a snapshot, turning a missing file into `MissingSnapshot`.
pub fn load_snapshot(path: &Path) -> Result<Table, CompareError> {
    if !path.exists() {
        return Err(CompareError::missing_snapshot(path.display().to_string()));
    }
    Table::from_csv_path(path)
}
