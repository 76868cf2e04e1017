//! Text summary builder for CLI output.
//!
//! This module formats the stdout lines for a completed report run.

use crate::model::{Knee, ReportConfig};

/// Pre-formatted lines for text output.
pub struct TextSummary {
    pub lines: Vec<String>,
}

/// Build the stdout lines: an optional knee diagnostic followed by the
/// artifact confirmation.
pub fn build_text_summary(cfg: &ReportConfig, knee: Option<&Knee>) -> TextSummary {
    let mut lines = Vec::new();
    if let Some(knee) = knee {
        lines.push(format!(
            "Knee (heuristic): ~{} RPS where p95 ~ {:.2}ms",
            knee.load_rps, knee.p95_ms
        ));
    }
    lines.push(format!(
        "Wrote {} and {}",
        cfg.load_latency_chart.display(),
        cfg.comparison_chart.display()
    ));
    TextSummary { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> ReportConfig {
        ReportConfig {
            results_dir: PathBuf::from("results"),
            latency_column: "latency_ms".into(),
            mixed_prefix: "mix".into(),
            operations: vec!["hash".into()],
            knee_factor: 2.0,
            load_latency_chart: PathBuf::from("results/load_latency_mix.png"),
            comparison_chart: PathBuf::from("results/op_comparison_p95.png"),
        }
    }

    #[test]
    fn knee_line_precedes_the_confirmation() {
        let knee = Knee {
            load_rps: 300,
            p95_ms: 25.0,
        };
        let summary = build_text_summary(&config(), Some(&knee));
        assert_eq!(
            summary.lines,
            vec![
                "Knee (heuristic): ~300 RPS where p95 ~ 25.00ms".to_string(),
                "Wrote results/load_latency_mix.png and results/op_comparison_p95.png"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn no_knee_means_only_the_confirmation() {
        let summary = build_text_summary(&config(), None);
        assert_eq!(summary.lines.len(), 1);
        assert!(summary.lines[0].starts_with("Wrote "));
    }
}
