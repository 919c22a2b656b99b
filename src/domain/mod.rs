//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the lottery identifiers (`Lottery`)
//! - raw and enriched tables (`RawTable`, `EnrichedTable`, `Value`)
//! - correlation declarations and results (`RelationSpec`, `CorrelationResult`)
//! - run configuration (`AnalysisConfig`)

pub mod types;

pub use types::*;
