//! Astronomical distance oracle.
//!
//! The enrichment pipeline only ever asks one question: "how far apart were
//! these two bodies on this calendar date?". The `DistanceOracle` trait is
//! the seam to the ephemeris backend; `ephemeris::BuiltinEphemeris` is the
//! shipped analytic implementation and tests substitute fixed stubs.

use chrono::{DateTime, NaiveDate, Utc};

use crate::enrich::calendar;
use crate::error::AppError;

pub mod ephemeris;

pub use ephemeris::BuiltinEphemeris;

/// Fixed observation time: draws happen at varying real-world times, so all
/// draws on the same date are collapsed to one date-addressable instant.
pub const OBSERVATION_HOUR: u32 = 9;

/// The body pairs the pipeline derives distance columns for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPair {
    EarthMoon,
    EarthSun,
    EarthMars,
}

impl BodyPair {
    /// Column-append order of the enriched table.
    pub const ALL: [BodyPair; 3] = [BodyPair::EarthMoon, BodyPair::EarthSun, BodyPair::EarthMars];

    /// Enriched-table column name.
    pub fn column_name(self) -> &'static str {
        match self {
            BodyPair::EarthMoon => "dist_moon_au",
            BodyPair::EarthSun => "dist_sun_au",
            BodyPair::EarthMars => "dist_mars_au",
        }
    }
}

/// Apparent-distance source, queried at a UTC instant.
///
/// Implementations must be pure: repeated calls for the same pair/instant
/// return bit-identical values, and `Sync` lets the enrichment pipeline fan
/// rows out across threads.
pub trait DistanceOracle: Sync {
    fn apparent_distance(&self, pair: BodyPair, at: DateTime<Utc>) -> Result<f64, AppError>;
}

/// The 09:00 UTC instant of a calendar date.
pub fn observation_instant(date: NaiveDate) -> Result<DateTime<Utc>, AppError> {
    date.and_hms_opt(OBSERVATION_HOUR, 0, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| AppError::oracle("invalid observation time"))
}

/// Distance in AU between a body pair on a formatted calendar date.
///
/// Parses the date, normalizes to 09:00 UTC, and queries the oracle; oracle
/// failures propagate unchanged.
pub fn distance_on_date(
    oracle: &dyn DistanceOracle,
    pair: BodyPair,
    date_value: &str,
    date_format: &str,
) -> Result<f64, AppError> {
    let parts = calendar::decompose(date_value, date_format)?;
    let at = observation_instant(parts.date)?;
    oracle.apparent_distance(pair, at)
}
