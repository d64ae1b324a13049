//! Error types for Chordal operations.
//!
//! This module provides the main error type [`ChordalError`] which wraps
//! the conditions that can occur while reading and parsing chord text.

use std::io;

use thiserror::Error;

use chordal_parser::ParseError;

/// The main error type for Chordal operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the text that was parsed next to the error, so
/// callers can render the offending span. Offsets in `err` are relative to
/// `src`.
#[derive(Debug, Error)]
pub enum ChordalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("input is {len} bytes long, the limit is {max}")]
    InputTooLong { len: usize, max: usize },
}

impl ChordalError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
