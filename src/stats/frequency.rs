//! Frequency summarizer.
//!
//! Per primary-number position: the raw value sequence, its arithmetic mean,
//! and a histogram over the layout's configured range. The values + mean are
//! the hard contract; binning is a presentation choice.

use serde::Serialize;

use crate::domain::EnrichedTable;
use crate::math::stats::mean;

#[derive(Debug, Clone, Serialize)]
pub struct PositionFrequency {
    /// Column name, `n1`..`n{k}`.
    pub position: String,
    #[serde(skip)]
    pub values: Vec<f64>,
    pub mean: f64,
    /// `(bucket lower edge, count)` pairs in ascending edge order.
    pub histogram: Vec<(f64, usize)>,
}

/// Summarize positions `n1..n{primary_count}` over the given number range.
///
/// Positions whose column is missing from the table are skipped, mirroring
/// the correlation summarizer's soft matching.
pub fn summarize(
    table: &EnrichedTable,
    primary_count: usize,
    range: (u32, u32),
    bins: usize,
) -> Vec<PositionFrequency> {
    (1..=primary_count)
        .filter_map(|i| {
            let position = format!("n{i}");
            let values = table.numeric_column(&position)?;
            let histogram = histogram(&values, range, bins);
            Some(PositionFrequency {
                mean: mean(&values),
                position,
                values,
                histogram,
            })
        })
        .collect()
}

/// Equal-width bins over `[low, high + 1)`; out-of-range values are dropped.
fn histogram(values: &[f64], range: (u32, u32), bins: usize) -> Vec<(f64, usize)> {
    let bins = bins.max(1);
    let low = f64::from(range.0);
    let high = f64::from(range.1) + 1.0;
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        if v >= low && v < high {
            let idx = (((v - low) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (low + i as f64 * width, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Value;

    fn table() -> EnrichedTable {
        EnrichedTable {
            columns: vec!["n1".to_string(), "n2".to_string()],
            rows: vec![
                vec![Value::Int(1), Value::Int(40)],
                vec![Value::Int(2), Value::Int(41)],
                vec![Value::Int(42), Value::Int(42)],
            ],
        }
    }

    #[test]
    fn mean_and_value_sequence_per_position() {
        let freqs = summarize(&table(), 2, (1, 42), 6);
        assert_eq!(freqs.len(), 2);
        assert_eq!(freqs[0].position, "n1");
        assert_eq!(freqs[0].values, vec![1.0, 2.0, 42.0]);
        assert!((freqs[0].mean - 15.0).abs() < 1e-12);
        assert!((freqs[1].mean - 41.0).abs() < 1e-12);
    }

    #[test]
    fn histogram_counts_sum_to_row_count() {
        let freqs = summarize(&table(), 2, (1, 42), 6);
        for f in &freqs {
            assert_eq!(f.histogram.len(), 6);
            let total: usize = f.histogram.iter().map(|(_, c)| c).sum();
            assert_eq!(total, 3);
        }
        // n1: values 1 and 2 land in the first bin, 42 in the last.
        assert_eq!(freqs[0].histogram[0].1, 2);
        assert_eq!(freqs[0].histogram[5].1, 1);
    }

    #[test]
    fn missing_positions_are_skipped() {
        let freqs = summarize(&table(), 5, (1, 42), 6);
        assert_eq!(freqs.len(), 2);
    }
}
