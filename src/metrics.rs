use crate::model::{Knee, LatencySummary, SeriesPoint};

/// Compute count, mean, and nearest-rank p50/p95/p99 from latency samples.
/// Returns `None` when there are no samples.
pub fn summarize(samples: &[f64]) -> Option<LatencySummary> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;
    Some(LatencySummary {
        count: sorted.len() as u64,
        avg_ms: avg,
        p50_ms: nearest_rank(&sorted, 50.0),
        p95_ms: nearest_rank(&sorted, 95.0),
        p99_ms: nearest_rank(&sorted, 99.0),
    })
}

/// Nearest-rank percentile: the sample at index `round((p/100) * (n-1))`
/// of the ascending-sorted data. Tie indexes round half-to-even.
fn nearest_rank(sorted: &[f64], pct: f64) -> f64 {
    let idx = ((pct / 100.0) * (sorted.len() as f64 - 1.0)).round_ties_even() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// First point, in ascending load order, whose p95 exceeds
/// `factor * min(p50)` across the series. `None` when the series is empty
/// or the threshold is never crossed.
pub fn find_knee(series: &[SeriesPoint], factor: f64) -> Option<Knee> {
    let min_p50 = series
        .iter()
        .map(|p| p.summary.p50_ms)
        .fold(f64::INFINITY, f64::min);
    series
        .iter()
        .find(|p| p.summary.p95_ms > factor * min_p50)
        .map(|p| Knee {
            load_rps: p.load_rps,
            p95_ms: p.summary.p95_ms,
        })
}
