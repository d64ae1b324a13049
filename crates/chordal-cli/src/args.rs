//! Command-line argument definitions for the Chordal CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select where chord text comes from, which
//! configuration file is used, how results are rendered, and logging
//! verbosity.

use clap::Parser;

use chordal::config::OutputFormat;

/// Command-line arguments for the Chordal chord parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Chord text to parse, as a single argument
    #[arg(help = "Chord text, e.g. Cmaj7 or C-Am-F-G7")]
    pub chords: Option<String>,

    /// Parse each non-blank line of a file instead of arguments
    #[arg(short, long, conflicts_with = "chords")]
    pub file: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (symbol, tree, debug); overrides the configuration file
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
