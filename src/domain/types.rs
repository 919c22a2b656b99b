//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during enrichment and summarization
//! - exported to CSV/JSON
//! - reloaded later for plotting or comparisons

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The five supported draw archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Lottery {
    Lotto,
    LottoPlus,
    Eurojackpot,
    Minilotto,
    Multi,
}

impl Lottery {
    pub const ALL: [Lottery; 5] = [
        Lottery::Lotto,
        Lottery::LottoPlus,
        Lottery::Eurojackpot,
        Lottery::Minilotto,
        Lottery::Multi,
    ];

    /// Stable string identifier (used in file names and the registry).
    pub fn id(self) -> &'static str {
        match self {
            Lottery::Lotto => "lotto",
            Lottery::LottoPlus => "lotto_plus",
            Lottery::Eurojackpot => "eurojackpot",
            Lottery::Minilotto => "minilotto",
            Lottery::Multi => "multi",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, AppError> {
        Lottery::ALL
            .into_iter()
            .find(|l| l.id() == id)
            .ok_or_else(|| AppError::UnknownLottery { id: id.to_string() })
    }
}

/// One cell of a table.
///
/// Raw fields stay `Text` until enrichment types them; derived calendar and
/// bucket columns are `Int`, ephemeris distances are `Float`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
}

impl Value {
    /// Numeric view of the cell, if it has one.
    ///
    /// `Text` cells holding an integer (raw number fields) also qualify, so
    /// correlation specs can reference `n1` as well as `n1r`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:.6}"),
        }
    }
}

/// One positional row of untyped raw data, as loaded from the archive file.
///
/// Field order matches the active layout's `columns`; rows are consumed by the
/// enrichment pipeline and not retained afterward.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Field value addressed by column name per the given column list.
    pub fn field<'a>(&'a self, columns: &[&str], name: &str) -> Option<&'a str> {
        let idx = columns.iter().position(|c| *c == name)?;
        self.fields.get(idx).map(String::as_str)
    }
}

/// A loaded raw table, tied to the lottery whose layout it satisfies.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub lottery: Lottery,
    pub rows: Vec<RawRecord>,
}

/// The enriched table: raw columns plus the derived temporal, astronomical,
/// and bucket columns, in the fixed pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl EnrichedTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Full value sequence of a column, paired by row index.
    ///
    /// Returns `None` when the column is absent or any cell is non-numeric,
    /// which callers treat as "this relation does not resolve here".
    pub fn numeric_column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.column_index(name)?;
        self.rows.iter().map(|row| row[idx].as_f64()).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }
}

/// A named pair of column references to correlate.
///
/// Declared once and reused across all layouts; references that do not
/// resolve against the current table are skipped silently.
#[derive(Debug, Clone)]
pub struct RelationSpec {
    pub label: String,
    pub x: String,
    pub y: String,
}

impl RelationSpec {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        let x = x.into();
        let y = y.into();
        RelationSpec {
            label: format!("{x} ~ {y}"),
            x,
            y,
        }
    }
}

/// One computed correlation: label plus the Pearson coefficient.
///
/// `NaN` is a legal degenerate coefficient (zero-variance column) and is
/// surfaced to the caller rather than treated as an error.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    pub label: String,
    pub coefficient: f64,
}

/// Ordering of the correlation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CorrSort {
    /// Keep the declaration order of the relation list.
    Declared,
    /// Stable sort by coefficient, ascending; NaN entries last.
    Coefficient,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults) and threaded explicitly —
/// there is no process-wide mutable configuration.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub lottery: Lottery,
    /// Local raw archive file; defaults to `data/<lottery>.csv`.
    pub csv_path: PathBuf,
    /// Download the archive before loading.
    pub fetch: bool,
    pub sort: CorrSort,
    pub plot: bool,
    pub plot_width: usize,
    /// Histogram bin count for the frequency summaries.
    pub hist_bins: usize,
    /// Write the enriched table to this CSV path.
    pub export: Option<PathBuf>,
    /// Write correlations + frequency summaries to this JSON path.
    pub export_summary: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lottery_ids_round_trip() {
        for lottery in Lottery::ALL {
            assert_eq!(Lottery::from_id(lottery.id()).unwrap(), lottery);
        }
    }

    #[test]
    fn unknown_lottery_is_rejected() {
        let err = Lottery::from_id("powerball").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, AppError::UnknownLottery { .. }));
    }

    #[test]
    fn value_numeric_views() {
        assert_eq!(Value::Int(7).as_f64(), Some(7.0));
        assert_eq!(Value::Text("15".to_string()).as_f64(), Some(15.0));
        assert_eq!(Value::Text("12.06.2013".to_string()).as_f64(), None);
    }

    #[test]
    fn numeric_column_requires_every_cell() {
        let table = EnrichedTable {
            columns: vec!["n1".to_string(), "date".to_string()],
            rows: vec![
                vec![Value::Int(3), Value::Text("01.01.2021".to_string())],
                vec![Value::Int(9), Value::Text("02.01.2021".to_string())],
            ],
        };
        assert_eq!(table.numeric_column("n1"), Some(vec![3.0, 9.0]));
        assert_eq!(table.numeric_column("date"), None);
        assert_eq!(table.numeric_column("missing"), None);
    }
}
