//! Command-line parsing for the draw-analysis tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the enrichment/statistics code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{CorrSort, Lottery};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "draws", version, about = "Lottery draw enrichment & correlation explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load a raw archive, enrich it, and print correlation/frequency summaries.
    Analyze(AnalyzeArgs),
    /// Download one lottery archive and normalize it to positional CSV.
    Fetch(FetchArgs),
    /// Write a synthetic raw table (offline stand-in for a fetched archive).
    Sample(SampleArgs),
}

/// Options for the full analysis run.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Lottery layout to analyze.
    #[arg(short = 'l', long, value_enum, default_value_t = Lottery::Lotto)]
    pub lottery: Lottery,

    /// Raw archive CSV (defaults to data/<lottery>.csv).
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Download the archive before loading.
    #[arg(long)]
    pub fetch: bool,

    /// Ordering of the correlation report.
    #[arg(long, value_enum, default_value_t = CorrSort::Coefficient)]
    pub sort: CorrSort,

    /// Disable the terminal charts (enabled by default).
    #[arg(long)]
    pub no_plot: bool,

    /// Chart width (columns).
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Histogram bin count.
    #[arg(long, default_value_t = 10)]
    pub bins: usize,

    /// Export the enriched table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export correlations + frequencies to JSON.
    #[arg(long = "export-summary")]
    pub export_summary: Option<PathBuf>,
}

/// Options for downloading an archive.
#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// Lottery archive to download.
    #[arg(short = 'l', long, value_enum, default_value_t = Lottery::Lotto)]
    pub lottery: Lottery,

    /// Destination CSV (defaults to data/<lottery>.csv).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Options for synthetic table generation.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Lottery layout to generate.
    #[arg(short = 'l', long, value_enum, default_value_t = Lottery::Lotto)]
    pub lottery: Lottery,

    /// Number of draws to generate.
    #[arg(short = 'n', long, default_value_t = 500)]
    pub rows: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Destination CSV (defaults to data/<lottery>.csv).
    #[arg(long)]
    pub out: Option<PathBuf>,
}
