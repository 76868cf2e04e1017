use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while discovering and loading result files.
///
/// Any variant aborts the whole run; there is no partial report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: no {column:?} column in header")]
    MissingColumn { path: PathBuf, column: String },
    #[error("{path}: line {line}: {value:?} is not a latency value")]
    InvalidSample {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("{path}: no data rows")]
    EmptyDataset { path: PathBuf },
    #[error("{name:?} does not match {pattern:?}")]
    PatternMismatch { name: String, pattern: String },
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}
