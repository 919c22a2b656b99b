//! Input/output helpers.
//!
//! - positional raw-archive ingest + validation (`ingest`)
//! - enriched-table and summary exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
