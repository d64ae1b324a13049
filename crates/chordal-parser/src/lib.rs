//! # Chordal Parser
//!
//! Parser for chord-symbol notation: single chords such as `Cmaj7`, `F#m` or
//! `G7/B`, and hyphen-separated progressions such as `C-F-G-C`.
//!
//! ## Grammar
//!
//! ```text
//! entry       := progression | chord
//! progression := chord ("-" chord)+
//! chord       := root quality? bass?
//! root        := NOTE_LETTER accidental?
//! NOTE_LETTER := 'A'..'G'
//! accidental  := '#' | 'b'
//! quality     := 'm' | 'maj7' | 'M7' | '7' | 'dim' | 'aug' | '+' | 'sus4' | 'sus2'
//! bass        := '/' root
//! ```
//!
//! ## Usage
//!
//! ```
//! # use chordal_core::{ChordTree, NoteLetter, Quality};
//! # use chordal_parser::{parse, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let ChordTree::Chord(chord) = parse("Dm")? else {
//!         panic!("a single chord");
//!     };
//!     assert_eq!(chord.root().letter(), NoteLetter::D);
//!     assert_eq!(chord.quality(), Some(Quality::Minor));
//!
//!     let progression = parse("C-F-G-C")?;
//!     assert_eq!(progression.chords().len(), 4);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lexer;
mod parser;
mod span;
mod tokens;

pub use error::ParseError;
pub use span::Span;

use log::debug;

use chordal_core::ChordTree;

/// The outcome of a parse: a tree or a typed error, never both.
pub type ParseResult = Result<ChordTree, ParseError>;

/// Parse chord text into a chord tree.
///
/// This is the only entry point of the parser. It runs two steps:
///
/// 1. **Tokenize** - Split text into letters, accidentals, quality words and
///    punctuation
/// 2. **Parse** - Build a single chord, or a progression when chords are
///    joined by `-`
///
/// Parsing is pure: the same text always yields a structurally equal result.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the byte offset of the first mismatch.
///
/// # Example
///
/// ```
/// # use chordal_parser::{parse, ParseError};
///
/// assert_eq!(parse(""), Err(ParseError::UnexpectedEnd { offset: 0 }));
/// ```
pub fn parse(text: &str) -> ParseResult {
    // Step 1: Tokenize
    let tokens = lexer::tokenize(text)?;

    // Step 2: Parse
    let tree = parser::build_tree(&tokens)?;

    debug!(chords = tree.chords().len(), progression = tree.is_progression(); "Parsed chord text");
    Ok(tree)
}
