//! `draw-stats` library crate.
//!
//! The binary (`draws`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod astro;
pub mod cli;
pub mod data;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod io;
pub mod math;
pub mod plot;
pub mod report;
pub mod schema;
pub mod stats;
