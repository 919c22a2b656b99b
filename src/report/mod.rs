//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the enrichment/statistics code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

use crate::domain::{AnalysisConfig, CorrelationResult, EnrichedTable};
use crate::stats::frequency::PositionFrequency;

/// Format the run summary (dataset shape + configuration).
pub fn format_run_summary(config: &AnalysisConfig, raw_rows: usize, table: &EnrichedTable) -> String {
    let mut out = String::new();

    out.push_str("=== draws - lottery draw analysis ===\n");
    out.push_str(&format!("Lottery: {}\n", config.lottery.id()));
    out.push_str(&format!("Source : {}\n", config.csv_path.display()));
    out.push_str(&format!(
        "Rows   : {} | columns: {} (raw + derived)\n",
        raw_rows,
        table.columns.len()
    ));

    if let Some(span) = date_span(table) {
        out.push_str(&format!("Dates  : {} .. {}\n", span.0, span.1));
    }

    out
}

fn date_span(table: &EnrichedTable) -> Option<(String, String)> {
    let idx = table.column_index("date")?;
    let first = table.rows.first()?[idx].to_string();
    let last = table.rows.last()?[idx].to_string();
    Some((first, last))
}

/// Format the correlation table.
pub fn format_correlations(results: &[CorrelationResult]) -> String {
    let mut out = String::new();
    out.push_str("Correlations:\n");
    if results.is_empty() {
        out.push_str("  (none resolved)\n");
        return out;
    }

    let label_width = results.iter().map(|r| r.label.len()).max().unwrap_or(0);
    for r in results {
        if r.coefficient.is_nan() {
            out.push_str(&format!("  {:<label_width$}      nan\n", r.label));
        } else {
            out.push_str(&format!("  {:<label_width$}  {:+.4}\n", r.label, r.coefficient));
        }
    }
    out
}

/// Format per-position frequency summaries (means only; histograms are the
/// plot layer's job).
pub fn format_frequencies(freqs: &[PositionFrequency]) -> String {
    let mut out = String::new();
    out.push_str("Primary-number means:\n");
    for f in freqs {
        out.push_str(&format!(
            "  {:<4} mean={:<8.2} n={}\n",
            f.position,
            f.mean,
            f.values.len()
        ));
    }
    out
}
