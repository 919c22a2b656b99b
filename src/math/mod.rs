//! Mathematical utilities: analytic ephemeris and scalar statistics.

pub mod kepler;
pub mod stats;

pub use kepler::*;
pub use stats::*;
