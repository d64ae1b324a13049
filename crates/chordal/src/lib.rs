//! Chordal - a parser for chord symbols and chord progressions.
//!
//! Turns text such as `Cmaj7`, `F#m/A` or `C-Am-F-G7` into a typed
//! [`ChordTree`], and renders trees back to text.

pub mod config;

mod error;
mod render;

pub use chordal_core::{
    Accidental, ChordNode, ChordTree, ModelError, NoteLetter, ProgressionNode, Quality, RootNote,
};
pub use chordal_parser::ParseError;

pub use error::ChordalError;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for parsing and rendering chord text.
///
/// Holds an [`AppConfig`] that controls input normalisation and the output
/// format.
///
/// # Examples
///
/// ```rust
/// use chordal::{ChordParser, config::AppConfig};
///
/// let parser = ChordParser::new(AppConfig::default());
///
/// let tree = parser.parse(" C-Am-F-G7 ").expect("Failed to parse");
/// assert_eq!(tree.chords().len(), 4);
///
/// assert_eq!(parser.render(&tree), "C-Am-F-G7");
///
/// // Or use default config
/// let parser = ChordParser::default();
/// ```
#[derive(Debug, Default)]
pub struct ChordParser {
    config: AppConfig,
}

impl ChordParser {
    /// Create a new chord parser with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this parser was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse chord text into a chord tree.
    ///
    /// Surrounding whitespace is dropped first when
    /// [`trim_whitespace`](config::ParserConfig::trim_whitespace) is set.
    /// Offsets in a returned parse error always refer to `source` as given.
    ///
    /// # Errors
    ///
    /// - [`ChordalError::InputTooLong`] when the text exceeds the configured limit
    /// - [`ChordalError::Parse`] for any syntax error
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordal::{ChordParser, ChordalError, ParseError};
    ///
    /// let parser = ChordParser::default();
    /// match parser.parse("  Cx") {
    ///     Err(ChordalError::Parse { err, .. }) => {
    ///         assert!(matches!(err, ParseError::UnknownQuality { offset: 3, .. }));
    ///     }
    ///     other => panic!("unexpected result: {other:?}"),
    /// }
    /// ```
    pub fn parse(&self, source: &str) -> Result<ChordTree, ChordalError> {
        let parser_config = self.config.parser();

        let (text, leading) = if parser_config.trim_whitespace() {
            let start_trimmed = source.trim_start();
            (start_trimmed.trim_end(), source.len() - start_trimmed.len())
        } else {
            (source, 0)
        };

        let len = text.len();
        let max = parser_config.max_input_len();
        if len > max {
            return Err(ChordalError::InputTooLong { len, max });
        }

        info!(len; "Parsing chord text");

        let tree = chordal_parser::parse(text)
            .map_err(|err| ChordalError::new_parse_error(err.offset_by(leading), source))?;

        debug!(chords = tree.chords().len(); "Chord text parsed successfully");
        trace!(tree:?; "Parsed tree");

        Ok(tree)
    }

    /// Render a chord tree in the configured output format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chordal::ChordParser;
    ///
    /// let parser = ChordParser::default();
    /// let tree = parser.parse("CM7").expect("Failed to parse");
    ///
    /// assert_eq!(parser.render(&tree), "Cmaj7");
    /// ```
    pub fn render(&self, tree: &ChordTree) -> String {
        let format = self.config.output().format();
        trace!(format:% = format; "Rendering tree");
        render::render(tree, format)
    }
}
