//! Raw archive ingest.
//!
//! Raw draw tables are positional CSV with no header row; the active layout
//! defines what each column means. Design goals:
//!
//! - **Strict schema**: row width must equal the layout width (exit code 3)
//! - **Deterministic behavior** (no hidden randomness)
//! - **Separation of concerns**: no enrichment logic here

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::domain::{Lottery, RawRecord, RawTable};
use crate::error::AppError;
use crate::schema::{self, LayoutDescriptor};

/// Load a raw draw table from a local positional CSV.
pub fn load_raw_table(path: &Path, lottery: Lottery) -> Result<RawTable, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open raw CSV '{}': {e}", path.display()))
    })?;
    read_raw_table(file, lottery)
}

/// Parse a raw table from any reader (file in production, string in tests).
pub fn read_raw_table(reader: impl Read, lottery: Lottery) -> Result<RawTable, AppError> {
    let layout = schema::layout(lottery);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        // No header row, so CSV line numbers are 1-based record indices.
        let line = idx + 1;

        let record =
            result.map_err(|e| AppError::io(format!("CSV parse error at line {line}: {e}")))?;

        if record.len() != layout.columns.len() {
            return Err(AppError::SchemaMismatch {
                line,
                expected: layout.columns.len(),
                found: record.len(),
            });
        }

        validate_number_fields(&record, layout, line)?;

        rows.push(RawRecord {
            fields: record.iter().map(str::to_string).collect(),
        });
    }

    if rows.is_empty() {
        return Err(AppError::io("Raw table contains no rows."));
    }

    Ok(RawTable { lottery, rows })
}

/// Number columns must hold integers; anything else is a data problem worth
/// failing on before the enrichment pipeline runs.
fn validate_number_fields(
    record: &csv::StringRecord,
    layout: &LayoutDescriptor,
    line: usize,
) -> Result<(), AppError> {
    for name in layout.number_columns() {
        let idx = layout
            .columns
            .iter()
            .position(|c| *c == name)
            .unwrap_or_default();
        let value = record.get(idx).unwrap_or_default();
        if value.trim().parse::<i64>().is_err() {
            return Err(AppError::io(format!(
                "Line {line}: column '{name}' holds '{value}', expected an integer."
            )));
        }
    }
    Ok(())
}
