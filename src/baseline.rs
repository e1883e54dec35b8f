use std::fs;

use crate::{CompareError, snapshot};

/// What `create_baseline` did to the snapshot files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BaselineAction {
    /// An old baseline was removed and the current stats took its place.
    Rotated,
    /// No baseline existed; the current stats became the first one.
    Created,
    /// A baseline exists and there are no current stats to promote.
    AlreadyExists,
}

/// Promote `<prefix>_stats.csv` to `<prefix>_stats_previous.csv`.
///
/// Any existing baseline is discarded first. With no current stats the
/// existing baseline is left untouched; with neither file present this is an
/// error and nothing is created.
pub fn create_baseline(prefix: &str) -> Result<BaselineAction, CompareError> {
    let current = snapshot::stats_path(prefix);
    let previous = snapshot::previous_path(prefix);

    if current.exists() {
        let rotated = previous.exists();
        if rotated {
            fs::remove_file(&previous).map_err(|e| CompareError::io(e.to_string()))?;
        }
        fs::rename(&current, &previous).map_err(|e| CompareError::io(e.to_string()))?;
        if rotated {
            Ok(BaselineAction::Rotated)
        } else {
            Ok(BaselineAction::Created)
        }
    } else if previous.exists() {
        Ok(BaselineAction::AlreadyExists)
    } else {
        Err(CompareError::missing_snapshot(format!(
            "{} (run a load test first)",
            current.display()
        )))
    }
}
