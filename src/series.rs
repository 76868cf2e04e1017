//! Result-file discovery and per-load aggregation.

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::info;

use crate::error::ReportError;
use crate::loader;
use crate::model::SeriesPoint;

/// Discover `<prefix>_rps_<level>.csv` files in `dir`, load each into a
/// summary, and return the points ordered by ascending load level.
///
/// Zero matching files is an empty series, not an error. A file with the
/// right shape but a non-numeric load level aborts the run, as does any
/// load failure on a matched file.
pub fn collect(dir: &Path, prefix: &str, column: &str) -> Result<Vec<SeriesPoint>, ReportError> {
    let pattern = Regex::new(&format!(r"^{}_rps_(\d+)\.csv$", regex::escape(prefix)))?;
    let loose_prefix = format!("{prefix}_rps_");

    let entries = fs::read_dir(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut points = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ReportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(&loose_prefix) || !name.ends_with(".csv") {
            continue;
        }
        let load_rps = pattern
            .captures(&name)
            .and_then(|caps| caps[1].parse::<u64>().ok())
            .ok_or_else(|| ReportError::PatternMismatch {
                name: name.clone(),
                pattern: pattern.as_str().to_string(),
            })?;
        let summary = loader::load_summary(&entry.path(), column)?;
        points.push(SeriesPoint { load_rps, summary });
    }

    // Stable sort: duplicate load levels keep their discovery order.
    points.sort_by_key(|p| p.load_rps);
    info!(prefix, files = points.len(), "collected series");
    Ok(points)
}
