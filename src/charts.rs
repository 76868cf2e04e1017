//! PNG chart rendering for aggregated series.

use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::model::{OperationSeries, SeriesPoint};

/// Output bitmap size for both charts.
const CHART_SIZE: (u32, u32) = (1024, 768);

/// Line palette cycled across operation series.
const SERIES_COLORS: [&RGBColor; 4] = [&BLUE, &RED, &GREEN, &MAGENTA];

/// Render the mixed-workload chart: avg, p50, and p95 latency against
/// offered load. An empty series still produces the chart frame.
pub fn render_load_latency(out: &Path, series: &[SeriesPoint]) -> Result<()> {
    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_range = load_range(series.iter().map(|p| p.load_rps));
    let y_range = latency_range(
        series
            .iter()
            .flat_map(|p| [p.summary.avg_ms, p.summary.p50_ms, p.summary.p95_ms]),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption("Load-Latency (mixed workload)", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .x_desc("Offered load (RPS)")
        .y_desc("Latency (ms)")
        .draw()?;

    let lines: [(&str, &RGBColor, fn(&SeriesPoint) -> f64); 3] = [
        ("avg", &BLUE, |p| p.summary.avg_ms),
        ("p50", &GREEN, |p| p.summary.p50_ms),
        ("p95", &RED, |p| p.summary.p95_ms),
    ];
    for (label, color, value) in lines {
        chart
            .draw_series(LineSeries::new(
                series.iter().map(|p| (p.load_rps as f64, value(p))),
                color,
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()
        .with_context(|| format!("write {}", out.display()))?;
    Ok(())
}

/// Render the comparison chart: one p95-vs-load line per operation,
/// skipping operations with no result files.
pub fn render_op_comparison(out: &Path, operations: &[OperationSeries]) -> Result<()> {
    let root = BitMapBackend::new(out, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let plotted: Vec<&OperationSeries> = operations
        .iter()
        .filter(|op| !op.points.is_empty())
        .collect();
    let x_range = load_range(
        plotted
            .iter()
            .flat_map(|op| op.points.iter().map(|p| p.load_rps)),
    );
    let y_range = latency_range(
        plotted
            .iter()
            .flat_map(|op| op.points.iter().map(|p| p.summary.p95_ms)),
    );

    let mut chart = ChartBuilder::on(&root)
        .caption("Operation Comparison (p95 vs RPS)", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;
    chart
        .configure_mesh()
        .x_desc("Offered load (RPS)")
        .y_desc("p95 latency (ms)")
        .draw()?;

    for (idx, op) in plotted.iter().enumerate() {
        let color = SERIES_COLORS[idx % SERIES_COLORS.len()];
        chart
            .draw_series(LineSeries::new(
                op.points
                    .iter()
                    .map(|p| (p.load_rps as f64, p.summary.p95_ms)),
                color,
            ))?
            .label(&op.name)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()
        .with_context(|| format!("write {}", out.display()))?;
    Ok(())
}

/// X axis spanning the observed load levels. A single level is padded so
/// the interval stays drawable; no levels falls back to a unit range.
fn load_range(loads: impl Iterator<Item = u64>) -> Range<f64> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for load in loads {
        min = min.min(load as f64);
        max = max.max(load as f64);
    }
    if !min.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }
    min..max
}

/// Y axis from zero to a hair above the largest plotted latency.
fn latency_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let max = values.fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 0.0..1.0;
    }
    0.0..max * 1.05
}
