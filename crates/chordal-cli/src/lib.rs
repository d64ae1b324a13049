//! Chordal CLI library
//!
//! This module contains the core CLI logic for the Chordal chord parser.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{BufRead, Write},
};

use log::{debug, info};

use chordal::{ChordParser, ChordalError, config::{AppConfig, OutputConfig}};

/// Run the Chordal CLI application
///
/// Chord text is taken from, in order of preference:
/// 1. The positional argument
/// 2. Each non-blank line of `--file`
/// 3. Each non-blank line of `stdin`
///
/// Every parsed text is rendered on its own to `out`. Processing stops at the
/// first error.
///
/// # Errors
///
/// Returns `ChordalError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input longer than the configured limit
/// - Parsing errors
pub fn run(args: &Args, stdin: impl BufRead, mut out: impl Write) -> Result<(), ChordalError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = AppConfig::new(app_config.parser().clone(), OutputConfig::new(format));
    }
    debug!(format:% = app_config.output().format(); "Configuration loaded");

    let parser = ChordParser::new(app_config);

    if let Some(source) = &args.chords {
        info!(source; "Parsing chord argument");
        return process(&parser, source, &mut out);
    }

    let lines = match &args.file {
        Some(path) => {
            info!(path; "Parsing chord file");
            fs::read_to_string(path)?
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        }
        None => {
            info!("Parsing chords from stdin");
            stdin.lines().collect::<Result<Vec<_>, _>>()?
        }
    };

    let mut count = 0;
    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        process(&parser, line, &mut out)?;
        count += 1;
    }

    info!(count; "All chord lines parsed");
    Ok(())
}

/// Parse one chord text and write its rendering
fn process(parser: &ChordParser, source: &str, out: &mut impl Write) -> Result<(), ChordalError> {
    let tree = parser.parse(source)?;
    let rendered = parser.render(&tree);

    write!(out, "{rendered}")?;
    if !rendered.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}
