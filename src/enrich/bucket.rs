//! Fixed-width range bucketing.
//!
//! Drawn numbers are classified into deciles on a fixed 0–100 scale,
//! independent of the field's configured number range. A value exactly on a
//! bucket boundary belongs to the next bucket (half-open intervals), and the
//! top boundary itself has no bucket.

use crate::error::AppError;

pub const BUCKET_WIDTH: f64 = 10.0;
pub const BUCKET_FLOOR: f64 = 0.0;
pub const BUCKET_CEILING: f64 = 100.0;

/// Bucket index of `value` within `[floor, ceiling)` at the given width.
pub fn bucket(value: f64, width: f64, floor: f64, ceiling: f64) -> Result<i64, AppError> {
    if !value.is_finite() || value < floor || value >= ceiling {
        return Err(AppError::UnresolvedBucket { value });
    }
    Ok(((value - floor) / width).floor() as i64)
}

/// Decile bucket on the fixed 0–100 scale.
pub fn decile(value: f64) -> Result<i64, AppError> {
    bucket(value, BUCKET_WIDTH, BUCKET_FLOOR, BUCKET_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_law() {
        assert_eq!(decile(0.0).unwrap(), 0);
        assert_eq!(decile(9.0).unwrap(), 0);
        assert_eq!(decile(10.0).unwrap(), 1);
        assert_eq!(decile(99.0).unwrap(), 9);
    }

    #[test]
    fn ceiling_and_outside_values_are_unresolved() {
        for v in [100.0, 101.0, -1.0, f64::NAN] {
            let err = decile(v).unwrap_err();
            assert!(matches!(err, AppError::UnresolvedBucket { .. }));
        }
    }

    #[test]
    fn scale_is_independent_of_field_ranges() {
        // A 1-42 minilotto number still buckets on the 0-100 scale.
        assert_eq!(decile(42.0).unwrap(), 4);
        // multi's 1-80 numbers top out at bucket 8.
        assert_eq!(decile(80.0).unwrap(), 8);
    }
}
