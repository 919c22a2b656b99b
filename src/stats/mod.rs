//! Descriptive summaries over the enriched table.
//!
//! - `correlation`: Pearson coefficients for a declarative relation list
//! - `frequency`: per-position means and histograms
//!
//! Both expose a `summarize`, so they are addressed by module path rather
//! than glob re-exported.

pub mod correlation;
pub mod frequency;

pub use correlation::{default_relations, ordered, sort_by_coefficient};
pub use frequency::PositionFrequency;
