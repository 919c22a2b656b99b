//! Dataset enrichment: date decomposition, bucketing, and the row pipeline.

pub mod bucket;
pub mod calendar;
pub mod pipeline;

pub use bucket::*;
pub use calendar::*;
pub use pipeline::*;
