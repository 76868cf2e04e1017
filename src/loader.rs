//! Result-file loading.
//!
//! Each result file is a headered CSV with one latency sample per row. The
//! whole file is read and summarized before the next file is opened.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::error::ReportError;
use crate::metrics;
use crate::model::LatencySummary;

/// Read every `column` cell of a headered CSV file and summarize the values.
///
/// A file with a header but no data rows is an [`ReportError::EmptyDataset`].
pub fn load_summary(path: &Path, column: &str) -> Result<LatencySummary, ReportError> {
    let file = File::open(path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers().map_err(|source| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let column_idx = headers.iter().position(|h| h == column).ok_or_else(|| {
        ReportError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        }
    })?;

    let mut samples = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|source| ReportError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let cell = record.get(column_idx).unwrap_or("");
        let value = cell
            .trim()
            .parse::<f64>()
            .map_err(|_| ReportError::InvalidSample {
                path: path.to_path_buf(),
                // 1-based file line, counting the header
                line: row + 2,
                value: cell.to_string(),
            })?;
        samples.push(value);
    }
    debug!(path = %path.display(), samples = samples.len(), "loaded result file");

    metrics::summarize(&samples).ok_or_else(|| ReportError::EmptyDataset {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_file(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn summarizes_a_result_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "mix_rps_100.csv",
            "latency_ms\n4.0\n1.0\n3.0\n2.0\n",
        );
        let s = load_summary(&path, "latency_ms").unwrap();
        assert_eq!(s.count, 4);
        assert_eq!(s.avg_ms, 2.5);
        assert_eq!(s.p50_ms, 3.0);
        assert_eq!(s.p95_ms, 4.0);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "mix_rps_100.csv",
            "op,latency_ms\nhash,10.0\nsort,20.0\n",
        );
        let s = load_summary(&path, "latency_ms").unwrap();
        assert_eq!(s.count, 2);
        assert_eq!(s.avg_ms, 15.0);
    }

    #[test]
    fn header_only_file_is_an_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "mix_rps_100.csv", "latency_ms\n");
        let err = load_summary(&path, "latency_ms").unwrap_err();
        assert!(matches!(err, ReportError::EmptyDataset { .. }));
    }

    #[test]
    fn wrong_header_is_a_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "mix_rps_100.csv", "rtt_ms\n1.0\n");
        let err = load_summary(&path, "latency_ms").unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { .. }));
    }

    #[test]
    fn non_numeric_cell_names_the_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "mix_rps_100.csv", "latency_ms\n1.0\nfast\n");
        let err = load_summary(&path, "latency_ms").unwrap_err();
        match err {
            ReportError::InvalidSample { line, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_summary(&dir.path().join("absent.csv"), "latency_ms").unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
