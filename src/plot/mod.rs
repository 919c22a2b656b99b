//! Terminal rendering of analysis results.

pub mod ascii;

pub use ascii::*;
