//! Error reporting for the Chordal parser.
//!
//! Every failed parse produces exactly one [`ParseError`], drawn from a closed
//! taxonomy. Each error carries the zero-based byte offset where the mismatch
//! was detected and the character that triggered it (none at end of input).
//! Errors are terminal: no partial tree is ever returned alongside one.
//!
//! For presentation, a [`ParseError`] converts into a [`Diagnostic`] with a
//! stable [`ErrorCode`], labelled source spans, and help text.
//!
//! # Example
//!
//! ```
//! # use chordal_parser::error::{ErrorCode, ParseError};
//!
//! let err = chordal_parser::parse("H").unwrap_err();
//! assert_eq!(err, ParseError::UnexpectedChar { offset: 0, found: 'H' });
//!
//! let diag = err.to_diagnostic();
//! assert_eq!(diag.code(), Some(ErrorCode::E001));
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;

/// A type alias for `Result<T, ParseError>`
pub type Result<T> = std::result::Result<T, ParseError>;
