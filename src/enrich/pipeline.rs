//! The enrichment pipeline.
//!
//! Turns a raw draw table into the enriched table by appending, per row and
//! in fixed order: calendar components, ephemeris distances, and decile
//! buckets for every number field. Rows are independent, so they are fanned
//! out with rayon; ordered `collect` keeps the output order identical to the
//! sequential pipeline, and any row failure aborts the whole batch.

use rayon::prelude::*;

use crate::astro::{self, BodyPair, DistanceOracle};
use crate::domain::{EnrichedTable, RawRecord, RawTable, Value};
use crate::enrich::{bucket, calendar};
use crate::error::AppError;
use crate::schema::{self, LayoutDescriptor};

/// Calendar columns, in append order.
pub const CALENDAR_COLUMNS: [&str; 5] = ["year", "month", "day", "weekday", "day_of_year"];

/// Names of the derived columns for a layout, in append order.
pub fn derived_columns(layout: &LayoutDescriptor) -> Vec<String> {
    let mut out: Vec<String> = CALENDAR_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    out.extend(BodyPair::ALL.iter().map(|p| p.column_name().to_string()));
    out.extend(layout.number_columns().map(|name| format!("{name}r")));
    out
}

/// Enrich a raw table. All-or-nothing: the first row-level failure (date
/// parse, oracle, bucket) fails the whole table.
pub fn enrich(raw: &RawTable, oracle: &dyn DistanceOracle) -> Result<EnrichedTable, AppError> {
    let layout = schema::layout(raw.lottery);

    let mut columns: Vec<String> = layout.columns.iter().map(|c| (*c).to_string()).collect();
    columns.extend(derived_columns(layout));

    let rows: Vec<Vec<Value>> = raw
        .rows
        .par_iter()
        .map(|record| enrich_row(record, layout, oracle))
        .collect::<Result<_, _>>()?;

    Ok(EnrichedTable { columns, rows })
}

fn enrich_row(
    record: &RawRecord,
    layout: &LayoutDescriptor,
    oracle: &dyn DistanceOracle,
) -> Result<Vec<Value>, AppError> {
    debug_assert_eq!(record.fields.len(), layout.columns.len());

    let mut row: Vec<Value> = record
        .fields
        .iter()
        .map(|f| Value::Text(f.clone()))
        .collect();

    let date_value = &record.fields[layout.date_index()];
    let parts = calendar::decompose(date_value, layout.date_format)?;
    row.push(Value::Int(i64::from(parts.year)));
    row.push(Value::Int(i64::from(parts.month)));
    row.push(Value::Int(i64::from(parts.day)));
    row.push(Value::Int(i64::from(parts.weekday)));
    row.push(Value::Int(i64::from(parts.day_of_year)));

    let at = astro::observation_instant(parts.date)?;
    for pair in BodyPair::ALL {
        row.push(Value::Float(oracle.apparent_distance(pair, at)?));
    }

    for name in layout.number_columns() {
        let value = record
            .field(layout.columns, &name)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .ok_or_else(|| AppError::io(format!("Non-numeric value in column '{name}'.")))?;
        row.push(Value::Int(bucket::decile(value)?));
    }

    Ok(row)
}
