//! Command-line interface definitions.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Scheduling is not handled here - an external scheduler (cron, systemd
//! timer, a DAG runner) invokes the binary on whatever cadence it wants.

use clap::Parser;

/// Command-line arguments for the news harvest pipeline.
///
/// # Examples
///
/// ```sh
/// # Harvest the default sites into the current directory
/// news_harvest
///
/// # Custom site list and output directory
/// news_harvest --sites sites.yaml -o /var/data/news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML site list (defaults to the built-in dawn/bbc pair)
    #[arg(short, long)]
    pub sites: Option<String>,

    /// Directory the destination CSV files are written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// HTTP timeout in seconds, covering connect plus body read
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}
