//! Exports: enriched table as flat CSV, analysis summary as JSON.
//!
//! The CSV export is meant to be easy to consume in spreadsheets or
//! downstream scripts; its header matches the enrichment pipeline's column
//! order exactly, so re-running the pipeline reproduces the file byte for
//! byte.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::domain::{CorrelationResult, EnrichedTable};
use crate::error::AppError;
use crate::stats::frequency::PositionFrequency;

/// Write the enriched table to a flat delimited file with a header row.
pub fn write_enriched_csv(path: &Path, table: &EnrichedTable) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create export CSV '{}': {e}", path.display()))
    })?;

    writeln!(file, "{}", table.columns.join(","))
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for row in &table.rows {
        writeln!(file, "{}", csv_line(row))
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

fn csv_line(row: &[crate::domain::Value]) -> String {
    row.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Machine-readable analysis summary.
#[derive(Debug, Serialize)]
pub struct SummaryExport<'a> {
    pub tool: &'static str,
    pub lottery: &'a str,
    pub rows: usize,
    pub correlations: &'a [CorrelationResult],
    pub frequencies: &'a [PositionFrequency],
}

/// Write correlations + frequency summaries as pretty JSON.
pub fn write_summary_json(path: &Path, summary: &SummaryExport<'_>) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create summary JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, summary)
        .map_err(|e| AppError::io(format!("Failed to write summary JSON: {e}")))?;

    Ok(())
}
