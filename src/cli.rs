//! CLI argument parsing for wayfind
//!
//! Uses clap for argument parsing. Positional arguments name the graph
//! file and the two query endpoints; flags control output and logging.

use std::path::PathBuf;

use clap::Parser;

pub use wayfind_core::format::OutputFormat;

/// Wayfind - shortest-distance queries over weighted undirected graph files
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the graph description file
    pub path: PathBuf,

    /// Node to start the search from
    #[arg(value_parser = parse_node_id)]
    pub from_node_id: String,

    /// Node to find the shortest distance to
    #[arg(value_parser = parse_node_id)]
    pub to_node_id: String,

    /// Output format
    #[arg(long, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

fn parse_node_id(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("node identifier must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
        .map_err(|e: wayfind_core::error::WayfindError| e.to_string())
}
