//! Configuration types for parsing and rendering chord text.
//!
//! All types implement [`serde::Deserialize`] and every section is optional,
//! so an empty document yields [`AppConfig::default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining parser and output settings.
//! - [`ParserConfig`] - Input normalisation applied before parsing.
//! - [`OutputConfig`] - Selects the [`OutputFormat`] used when rendering trees.
//!
//! # Example
//!
//! ```
//! # use chordal::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.parser().max_input_len(), 1000);
//! assert!(config.parser().trim_whitespace());
//! assert_eq!(config.output().format(), OutputFormat::Symbol);
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(parser: ParserConfig, output: OutputConfig) -> Self {
        Self { parser, output }
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Input normalisation applied before text reaches the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Longest accepted input, in bytes, after trimming.
    #[serde(default = "default_max_input_len")]
    max_input_len: usize,

    /// Ignore leading and trailing whitespace.
    #[serde(default = "default_trim_whitespace")]
    trim_whitespace: bool,
}

fn default_max_input_len() -> usize {
    1000
}

fn default_trim_whitespace() -> bool {
    true
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            trim_whitespace: default_trim_whitespace(),
        }
    }
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`].
    ///
    /// # Arguments
    ///
    /// * `max_input_len` - Longest accepted input in bytes.
    /// * `trim_whitespace` - Whether surrounding whitespace is ignored.
    pub fn new(max_input_len: usize, trim_whitespace: bool) -> Self {
        Self {
            max_input_len,
            trim_whitespace,
        }
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub fn trim_whitespace(&self) -> bool {
        self.trim_whitespace
    }
}

/// Output configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the given format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the [`OutputFormat`] used to render parsed trees.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// How a parsed tree is rendered to text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical chord text on one line, e.g. `Cmaj7-F-G7`.
    #[default]
    Symbol,
    /// Indented listing of every chord and its parts.
    Tree,
    /// The Rust debug representation of the tree.
    Debug,
}

impl OutputFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Symbol,
        OutputFormat::Tree,
        OutputFormat::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Symbol => "symbol",
            OutputFormat::Tree => "tree",
            OutputFormat::Debug => "debug",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`OutputFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format `{0}` (expected one of: symbol, tree, debug)")]
pub struct UnknownFormatError(String);

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFormatError(s.to_string()))
    }
}
