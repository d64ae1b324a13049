//! The closed taxonomy of parse failures.

use thiserror::Error;

use chordal_core::Quality;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// A positional, typed parse failure.
///
/// Offsets are zero-based byte offsets into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character does not match any token expected at this position.
    #[error("unexpected character `{found}` at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    /// Input ended where a root letter was required.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A quality-shaped word is not one of the recognised spellings.
    #[error("unknown chord quality `{word}` at offset {offset}")]
    UnknownQuality { offset: usize, word: String },

    /// The note after `/` carried a quality or a slash of its own.
    ///
    /// `offset` points at the offending token; `slash` at the `/` that
    /// introduced the bass note.
    #[error("invalid bass note: unexpected `{found}` at offset {offset}")]
    InvalidBassRoot {
        offset: usize,
        found: char,
        slash: usize,
    },
}

impl ParseError {
    /// Byte offset where the mismatch was detected.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::UnexpectedEnd { offset }
            | ParseError::UnknownQuality { offset, .. }
            | ParseError::InvalidBassRoot { offset, .. } => *offset,
        }
    }

    /// The character that triggered the error, `None` at end of input.
    pub fn found(&self) -> Option<char> {
        match self {
            ParseError::UnexpectedChar { found, .. } | ParseError::InvalidBassRoot { found, .. } => {
                Some(*found)
            }
            ParseError::UnknownQuality { word, .. } => word.chars().next(),
            ParseError::UnexpectedEnd { .. } => None,
        }
    }

    /// The stable code for this kind of error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::UnexpectedChar { .. } => ErrorCode::E001,
            ParseError::UnexpectedEnd { .. } => ErrorCode::E002,
            ParseError::UnknownQuality { .. } => ErrorCode::E003,
            ParseError::InvalidBassRoot { .. } => ErrorCode::E004,
        }
    }

    /// The source range covered by the offending text.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedChar { offset, found }
            | ParseError::InvalidBassRoot { offset, found, .. } => {
                Span::new(*offset..*offset + found.len_utf8())
            }
            ParseError::UnknownQuality { offset, word } => Span::new(*offset..*offset + word.len()),
            ParseError::UnexpectedEnd { offset } => Span::empty(*offset),
        }
    }

    /// Returns the same error with every offset moved `delta` bytes right.
    ///
    /// Used when the parsed text is a suffix of a larger input.
    pub fn offset_by(self, delta: usize) -> Self {
        match self {
            ParseError::UnexpectedChar { offset, found } => ParseError::UnexpectedChar {
                offset: offset + delta,
                found,
            },
            ParseError::UnexpectedEnd { offset } => ParseError::UnexpectedEnd {
                offset: offset + delta,
            },
            ParseError::UnknownQuality { offset, word } => ParseError::UnknownQuality {
                offset: offset + delta,
                word,
            },
            ParseError::InvalidBassRoot {
                offset,
                found,
                slash,
            } => ParseError::InvalidBassRoot {
                offset: offset + delta,
                found,
                slash: slash + delta,
            },
        }
    }

    /// Build the presentation form of this error.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.code();
        let span = self.span();

        match self {
            ParseError::UnexpectedChar { found, .. } => {
                let help = if found.is_whitespace() {
                    "chord symbols cannot contain whitespace".to_string()
                } else if ('a'..='g').contains(found) {
                    format!(
                        "note letters are uppercase: did you mean `{}`?",
                        found.to_ascii_uppercase()
                    )
                } else {
                    "a chord is a root `A`-`G`, an optional `#` or `b`, an optional quality \
                     and an optional `/bass`; chords are joined with `-`"
                        .to_string()
                };
                Diagnostic::error(format!("unexpected character `{found}`"))
                    .with_code(code)
                    .with_label(span, code.description())
                    .with_help(help)
            }
            ParseError::UnexpectedEnd { .. } => Diagnostic::error("unexpected end of input")
                .with_code(code)
                .with_label(span, "expected a note letter here")
                .with_help("add a root note `A`-`G`"),
            ParseError::UnknownQuality { word, .. } => {
                Diagnostic::error(format!("unknown chord quality `{word}`"))
                    .with_code(code)
                    .with_label(span, "not a known quality")
                    .with_help(format!(
                        "known qualities: {}",
                        Quality::SPELLINGS.join(", ")
                    ))
            }
            ParseError::InvalidBassRoot { offset, slash, .. } => {
                Diagnostic::error("bass note must be a bare root")
                    .with_code(code)
                    .with_label(span, "not allowed after a bass note")
                    .with_secondary_label(Span::new(*slash..*offset), "bass note starts here")
                    .with_help("a bass note is a letter with an optional `#` or `b`")
            }
        }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        err.to_diagnostic()
    }
}
