//! Built-in analytic ephemeris.
//!
//! Stateless implementation of `DistanceOracle` on top of `math::kepler`.
//! Valid for dates in 1900–2100; anything outside that window is an oracle
//! error, matching how a file-backed ephemeris rejects dates beyond its
//! coverage.

use chrono::{DateTime, Utc};

use crate::astro::{BodyPair, DistanceOracle};
use crate::error::AppError;
use crate::math::kepler;

// Julian days of 1900-01-01T00:00Z and 2100-01-01T00:00Z.
const JD_MIN: f64 = 2_415_020.5;
const JD_MAX: f64 = 2_488_069.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEphemeris;

impl BuiltinEphemeris {
    pub fn new() -> Self {
        BuiltinEphemeris
    }
}

impl DistanceOracle for BuiltinEphemeris {
    fn apparent_distance(&self, pair: BodyPair, at: DateTime<Utc>) -> Result<f64, AppError> {
        let jd = kepler::julian_day(at);
        if !(JD_MIN..JD_MAX).contains(&jd) {
            return Err(AppError::oracle(format!(
                "date {} outside ephemeris validity window (1900-2100)",
                at.date_naive()
            )));
        }

        Ok(match pair {
            BodyPair::EarthMoon => kepler::earth_moon_distance_au(jd),
            BodyPair::EarthSun => kepler::earth_sun_distance_au(jd),
            BodyPair::EarthMars => kepler::earth_mars_distance_au(jd),
        })
    }
}
