//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-width bars), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)

use crate::domain::CorrelationResult;
use crate::stats::frequency::PositionFrequency;

/// Horizontal bar chart of correlation coefficients.
///
/// Bar length is `|coefficient| * width`, the sign is carried by the printed
/// value; NaN entries are labeled instead of drawn.
pub fn render_correlation_bars(results: &[CorrelationResult], width: usize) -> String {
    let width = width.max(10);
    let label_width = results
        .iter()
        .map(|r| r.label.len())
        .max()
        .unwrap_or(0)
        .max(8);

    let mut out = String::new();
    for r in results {
        if r.coefficient.is_nan() {
            out.push_str(&format!(
                "{:<label_width$}     nan  (zero variance)\n",
                r.label
            ));
            continue;
        }
        let bar_len = (r.coefficient.abs() * width as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_width$}  {:+.4}  {}\n",
            r.label,
            r.coefficient,
            "#".repeat(bar_len.min(width)),
        ));
    }
    out
}

/// Histogram of one primary position, bars scaled to the widest bin.
pub fn render_histogram(freq: &PositionFrequency, width: usize) -> String {
    let width = width.max(10);
    let max_count = freq.histogram.iter().map(|(_, c)| *c).max().unwrap_or(0);

    let mut out = format!("{} (mean {:.2})\n", freq.position, freq.mean);
    for (edge, count) in &freq.histogram {
        let bar_len = if max_count == 0 || *count == 0 {
            0
        } else {
            ((count * width) / max_count).clamp(1, width)
        };
        out.push_str(&format!(
            "{edge:>6.1} | {:<width$} {count}\n",
            "#".repeat(bar_len)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_correlation_fills_the_width() {
        let results = vec![
            CorrelationResult {
                label: "n1 ~ n2".to_string(),
                coefficient: 1.0,
            },
            CorrelationResult {
                label: "n1 ~ weekday".to_string(),
                coefficient: f64::NAN,
            },
        ];
        let plot = render_correlation_bars(&results, 20);
        let lines: Vec<&str> = plot.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&"#".repeat(20)));
        assert!(lines[1].contains("zero variance"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let freq = PositionFrequency {
            position: "n1".to_string(),
            values: vec![1.0, 2.0, 40.0],
            mean: 14.333,
            histogram: vec![(1.0, 2), (21.5, 1)],
        };
        assert_eq!(render_histogram(&freq, 20), render_histogram(&freq, 20));
        let plot = render_histogram(&freq, 20);
        assert!(plot.starts_with("n1 (mean 14.33)"));
        assert_eq!(plot.lines().count(), 3);
    }
}
