//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the analysis pipeline
//! - prints reports/plots
//! - writes optional exports

use std::path::PathBuf;

use clap::Parser;

use crate::astro::BuiltinEphemeris;
use crate::cli::{AnalyzeArgs, Command, FetchArgs, SampleArgs};
use crate::data::archive::ArchiveClient;
use crate::data::sample;
use crate::domain::{AnalysisConfig, Lottery};
use crate::error::AppError;
use crate::io::export::{self, SummaryExport};

pub mod pipeline;

/// Entry point for the `draws` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Fetch(args) => handle_fetch(args),
        Command::Sample(args) => handle_sample(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let config = analysis_config_from_args(&args);
    let oracle = BuiltinEphemeris::new();
    let run = pipeline::run_analysis(&config, &oracle)?;

    println!(
        "{}",
        crate::report::format_run_summary(&config, run.raw_rows, &run.table)
    );
    println!("{}", crate::report::format_correlations(&run.correlations));
    println!("{}", crate::report::format_frequencies(&run.frequencies));

    if config.plot {
        println!(
            "{}",
            crate::plot::render_correlation_bars(&run.correlations, config.plot_width)
        );
        for freq in &run.frequencies {
            println!("{}", crate::plot::render_histogram(freq, config.plot_width));
        }
    }

    if let Some(path) = &config.export {
        export::write_enriched_csv(path, &run.table)?;
        println!("Enriched table -> {}", path.display());
    }
    if let Some(path) = &config.export_summary {
        let summary = SummaryExport {
            tool: "draws",
            lottery: config.lottery.id(),
            rows: run.table.n_rows(),
            correlations: &run.correlations,
            frequencies: &run.frequencies,
        };
        export::write_summary_json(path, &summary)?;
        println!("Summary -> {}", path.display());
    }

    Ok(())
}

fn handle_fetch(args: FetchArgs) -> Result<(), AppError> {
    let dest = args.out.unwrap_or_else(|| default_csv_path(args.lottery));
    let client = ArchiveClient::from_env();
    let rows = client.fetch_to_csv(args.lottery, &dest)?;
    println!("Fetched {rows} draws -> {}", dest.display());
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let dest = args.out.unwrap_or_else(|| default_csv_path(args.lottery));
    let table = sample::generate_raw_table(args.lottery, args.rows, args.seed)?;
    sample::write_raw_csv(&dest, &table)?;
    println!(
        "Wrote {} synthetic {} draws -> {}",
        args.rows,
        args.lottery.id(),
        dest.display()
    );
    Ok(())
}

pub fn analysis_config_from_args(args: &AnalyzeArgs) -> AnalysisConfig {
    AnalysisConfig {
        lottery: args.lottery,
        csv_path: args
            .csv
            .clone()
            .unwrap_or_else(|| default_csv_path(args.lottery)),
        fetch: args.fetch,
        sort: args.sort,
        plot: !args.no_plot,
        plot_width: args.width,
        hist_bins: args.bins,
        export: args.export.clone(),
        export_summary: args.export_summary.clone(),
    }
}

fn default_csv_path(lottery: Lottery) -> PathBuf {
    PathBuf::from(format!("data/{}.csv", lottery.id()))
}
