//! Correlation summarizer.
//!
//! A declarative relation list is evaluated against the enriched table.
//! Relations whose columns do not resolve in the current layout are skipped
//! silently; the same list is reused across all five layouts.

use std::cmp::Ordering;

use crate::domain::{CorrSort, CorrelationResult, EnrichedTable, RelationSpec};
use crate::math::stats::pearson;

// Widest layout (`multi`): 20 primary + 2 secondary (eurojackpot) columns.
const MAX_PRIMARY: usize = 20;
const MAX_SECONDARY: usize = 2;

/// Derived predictors each number column is correlated against.
const PREDICTORS: [&str; 6] = [
    "weekday",
    "month",
    "day_of_year",
    "dist_moon_au",
    "dist_sun_au",
    "dist_mars_au",
];

/// The built-in relation list: every possible number column against every
/// derived predictor. Built by iterating known counts; silent skipping
/// trims it down to the active layout.
pub fn default_relations() -> Vec<RelationSpec> {
    let mut specs = Vec::new();
    for i in 1..=MAX_PRIMARY {
        for predictor in PREDICTORS {
            specs.push(RelationSpec::new(format!("n{i}"), predictor));
        }
    }
    for i in 1..=MAX_SECONDARY {
        for predictor in PREDICTORS {
            specs.push(RelationSpec::new(format!("m{i}"), predictor));
        }
    }
    specs
}

/// Evaluate the relation list against a table, in declaration order.
///
/// Unresolved relations produce no entry and no error. Zero-variance columns
/// produce NaN coefficients, surfaced as-is.
pub fn summarize(table: &EnrichedTable, specs: &[RelationSpec]) -> Vec<CorrelationResult> {
    specs
        .iter()
        .filter_map(|spec| {
            let x = table.numeric_column(&spec.x)?;
            let y = table.numeric_column(&spec.y)?;
            Some(CorrelationResult {
                label: spec.label.clone(),
                coefficient: pearson(&x, &y),
            })
        })
        .collect()
}

/// Stable sort by coefficient ascending; NaN entries keep their relative
/// order at the end so degenerate results stay visible.
pub fn sort_by_coefficient(results: &mut [CorrelationResult]) {
    results.sort_by(|a, b| compare_coefficients(a.coefficient, b.coefficient));
}

fn compare_coefficients(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Apply the requested output ordering.
pub fn ordered(mut results: Vec<CorrelationResult>, sort: CorrSort) -> Vec<CorrelationResult> {
    if sort == CorrSort::Coefficient {
        sort_by_coefficient(&mut results);
    }
    results
}
