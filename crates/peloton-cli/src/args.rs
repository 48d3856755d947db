//! Command-line argument definitions for the Peloton CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the participant sequence number, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Peloton registration tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input registration file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to write the participant record (TOML); stdout if omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Sequence number of this participant within its category
    #[arg(long, default_value_t = 1)]
    pub sequence: u32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
