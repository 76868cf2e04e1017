use crate::charts;
use crate::metrics;
use crate::model::{OperationSeries, Report, ReportConfig};
use crate::series;
use crate::text_summary;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, info};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "bench-report",
    version,
    about = "Render latency summary charts from load-test result files"
)]
pub struct Cli {
    /// Directory holding `<prefix>_rps_<level>.csv` result files
    #[arg(long, default_value = "results")]
    pub results_dir: PathBuf,

    /// Header name of the latency column, in milliseconds
    #[arg(long, default_value = "latency_ms")]
    pub latency_column: String,

    /// File prefix of the mixed-workload series
    #[arg(long, default_value = "mix")]
    pub mixed_prefix: String,

    /// Operation prefixes overlaid on the comparison chart
    #[arg(long, value_delimiter = ',', default_value = "hash,sort,matmul,compress")]
    pub operations: Vec<String>,

    /// Knee threshold: first load level where p95 exceeds this multiple
    /// of the series' minimum p50
    #[arg(long, default_value_t = 2.0)]
    pub knee_factor: f64,

    /// Load-latency chart file name, resolved under the results directory
    #[arg(long, default_value = "load_latency_mix.png")]
    pub load_latency_chart: PathBuf,

    /// Comparison chart file name, resolved under the results directory
    #[arg(long, default_value = "op_comparison_p95.png")]
    pub comparison_chart: PathBuf,

    /// Print the computed report as JSON instead of the text lines
    #[arg(long)]
    pub json: bool,
}

/// Build a `ReportConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> ReportConfig {
    ReportConfig {
        results_dir: args.results_dir.clone(),
        latency_column: args.latency_column.clone(),
        mixed_prefix: args.mixed_prefix.clone(),
        operations: args.operations.clone(),
        knee_factor: args.knee_factor,
        load_latency_chart: args.results_dir.join(&args.load_latency_chart),
        comparison_chart: args.results_dir.join(&args.comparison_chart),
    }
}

pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args);
    let report = build_report(&cfg)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    for line in text_summary::build_text_summary(&cfg, report.knee.as_ref()).lines {
        println!("{line}");
    }
    Ok(())
}

/// Aggregate every configured series, render both charts, and assemble the
/// run's [`Report`]. The first failure aborts the whole run.
pub fn build_report(cfg: &ReportConfig) -> Result<Report> {
    let mixed = series::collect(&cfg.results_dir, &cfg.mixed_prefix, &cfg.latency_column)
        .context("collect mixed-workload series")?;
    charts::render_load_latency(&cfg.load_latency_chart, &mixed)
        .with_context(|| format!("render {}", cfg.load_latency_chart.display()))?;

    let knee = metrics::find_knee(&mixed, cfg.knee_factor);
    if let Some(k) = knee.as_ref() {
        debug!(load_rps = k.load_rps, p95_ms = k.p95_ms, "knee detected");
    }

    let mut operations = Vec::with_capacity(cfg.operations.len());
    for name in &cfg.operations {
        let points = series::collect(&cfg.results_dir, name, &cfg.latency_column)
            .with_context(|| format!("collect {name} series"))?;
        if points.is_empty() {
            info!(operation = %name, "no result files, skipped in comparison chart");
        }
        operations.push(OperationSeries {
            name: name.clone(),
            points,
        });
    }
    charts::render_op_comparison(&cfg.comparison_chart, &operations)
        .with_context(|| format!("render {}", cfg.comparison_chart.display()))?;

    let generated_utc = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("format timestamp")?;
    Ok(Report {
        generated_utc,
        mixed,
        knee,
        operations,
    })
}
