use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary statistics computed from one result file's latency samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencySummary {
    pub count: u64,
    pub avg_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
}

/// One measured load level within a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub load_rps: u64,
    pub summary: LatencySummary,
}

/// Degradation onset found by the knee heuristic: the first load level
/// whose p95 exceeds the configured multiple of the series' minimum p50.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Knee {
    pub load_rps: u64,
    pub p95_ms: f64,
}

/// A named operation's series for the comparison chart. `points` is empty
/// when no result file matched the operation's prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

/// Everything one run computes, with each series in ascending load order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_utc: String,
    pub mixed: Vec<SeriesPoint>,
    pub knee: Option<Knee>,
    pub operations: Vec<OperationSeries>,
}

/// Resolved configuration for one report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub results_dir: PathBuf,
    pub latency_column: String,
    pub mixed_prefix: String,
    pub operations: Vec<String>,
    pub knee_factor: f64,
    pub load_latency_chart: PathBuf,
    pub comparison_chart: PathBuf,
}
