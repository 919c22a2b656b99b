//! Synthetic raw-draw generation.
//!
//! Produces a plausible raw table for any layout without touching the
//! network: consecutive draw dates and uniformly drawn, duplicate-free
//! numbers within the configured ranges. Seeded, so the same seed always
//! yields the same table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{Lottery, RawRecord, RawTable};
use crate::error::AppError;
use crate::schema;

/// First draw date of generated tables; subsequent rows are daily.
const START_DATE: (i32, u32, u32) = (2021, 1, 1);

/// Generate a synthetic raw table with `rows` draws.
pub fn generate_raw_table(lottery: Lottery, rows: usize, seed: u64) -> Result<RawTable, AppError> {
    if rows == 0 {
        return Err(AppError::config("Sample row count must be > 0."));
    }

    let layout = schema::layout(lottery);
    let start = NaiveDate::from_ymd_opt(START_DATE.0, START_DATE.1, START_DATE.2)
        .ok_or_else(|| AppError::config("Invalid sample start date."))?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(rows);

    for i in 0..rows {
        let date = start + Duration::days(i as i64);
        let primaries = draw_numbers(&mut rng, layout.primary_range, layout.primary_count);
        let secondaries = match layout.secondary_range {
            Some(range) => draw_numbers(&mut rng, range, layout.secondary_count),
            None => Vec::new(),
        };

        let mut fields = Vec::with_capacity(layout.columns.len());
        for column in layout.columns {
            match *column {
                "no" => fields.push((i + 1).to_string()),
                "date" => fields.push(date.format(layout.date_format).to_string()),
                "time" => fields.push(format!(
                    "{:02}:{:02}",
                    rng.gen_range(10..22),
                    rng.gen_range(0..60)
                )),
                name => {
                    let (group, idx) = name.split_at(1);
                    let idx: usize = idx.parse().unwrap_or(0);
                    let value = match group {
                        "n" => primaries[idx - 1],
                        _ => secondaries[idx - 1],
                    };
                    fields.push(value.to_string());
                }
            }
        }
        out.push(RawRecord { fields });
    }

    Ok(RawTable {
        lottery,
        rows: out,
    })
}

/// `count` distinct numbers from the inclusive range, ascending.
fn draw_numbers(rng: &mut StdRng, range: (u32, u32), count: usize) -> Vec<u32> {
    let (lo, hi) = range;
    let span = (hi - lo + 1) as usize;
    let mut numbers: Vec<u32> = rand::seq::index::sample(rng, span, count.min(span))
        .into_iter()
        .map(|i| lo + i as u32)
        .collect();
    numbers.sort_unstable();
    numbers
}

/// Write a raw table as positional CSV (the same form ingest reads).
pub fn write_raw_csv(path: &Path, table: &RawTable) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::io(format!("Failed to create '{}': {e}", parent.display()))
        })?;
    }
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create '{}': {e}", path.display()))
    })?;
    for row in &table.rows {
        writeln!(file, "{}", row.fields.join(","))
            .map_err(|e| AppError::io(format!("Failed to write raw CSV: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_table() {
        let a = generate_raw_table(Lottery::Lotto, 10, 42).unwrap();
        let b = generate_raw_table(Lottery::Lotto, 10, 42).unwrap();
        for (ra, rb) in a.rows.iter().zip(b.rows.iter()) {
            assert_eq!(ra.fields, rb.fields);
        }
    }

    #[test]
    fn rows_match_layout_width_and_ranges() {
        for lottery in Lottery::ALL {
            let layout = schema::layout(lottery);
            let table = generate_raw_table(lottery, 5, 7).unwrap();
            for row in &table.rows {
                assert_eq!(row.fields.len(), layout.columns.len());
                for name in layout.primary_columns() {
                    let v: u32 = row.field(layout.columns, &name).unwrap().parse().unwrap();
                    assert!(v >= layout.primary_range.0 && v <= layout.primary_range.1);
                }
            }
        }
    }

    #[test]
    fn primaries_are_distinct_and_sorted() {
        let table = generate_raw_table(Lottery::Lotto, 20, 1).unwrap();
        let layout = schema::layout(Lottery::Lotto);
        for row in &table.rows {
            let nums: Vec<u32> = layout
                .primary_columns()
                .map(|c| row.field(layout.columns, &c).unwrap().parse().unwrap())
                .collect();
            let mut sorted = nums.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(nums, sorted);
        }
    }

    #[test]
    fn zero_rows_is_a_config_error() {
        let err = generate_raw_table(Lottery::Lotto, 0, 1).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
