//! Shared analysis pipeline.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! (fetch) -> load -> enrich -> correlate -> frequency summaries
//!
//! The CLI front-end then focuses on presentation (printing and exports).
//! Configuration and the ephemeris oracle are threaded in explicitly; there
//! is no process-wide state.

use crate::astro::DistanceOracle;
use crate::data::archive::ArchiveClient;
use crate::domain::{AnalysisConfig, CorrelationResult, EnrichedTable};
use crate::error::AppError;
use crate::stats::frequency::PositionFrequency;
use crate::{enrich, io, schema, stats};

/// All computed outputs of a single `draws analyze` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub raw_rows: usize,
    pub table: EnrichedTable,
    pub correlations: Vec<CorrelationResult>,
    pub frequencies: Vec<PositionFrequency>,
}

/// Execute the full analysis pipeline and return the computed outputs.
pub fn run_analysis(
    config: &AnalysisConfig,
    oracle: &dyn DistanceOracle,
) -> Result<RunOutput, AppError> {
    if config.fetch {
        let client = ArchiveClient::from_env();
        client.fetch_to_csv(config.lottery, &config.csv_path)?;
    }

    let raw = io::ingest::load_raw_table(&config.csv_path, config.lottery)?;
    let table = enrich::pipeline::enrich(&raw, oracle)?;

    let correlations = stats::correlation::ordered(
        stats::correlation::summarize(&table, &stats::correlation::default_relations()),
        config.sort,
    );

    let layout = schema::layout(config.lottery);
    let frequencies = stats::frequency::summarize(
        &table,
        layout.primary_count,
        layout.primary_range,
        config.hist_bins,
    );

    Ok(RunOutput {
        raw_rows: raw.rows.len(),
        table,
        correlations,
        frequencies,
    })
}
