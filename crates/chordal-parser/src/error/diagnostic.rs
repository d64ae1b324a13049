//! The presentation form of a parse error.
//!
//! A [`Diagnostic`] carries everything a front end needs to render an error
//! against the source text: an error code, a message, labeled spans, and
//! optional help.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A rich diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E003]: unknown chord quality `min`
///   |
/// 1 | Cmin
///   |  ^^^ not a known quality
///   |
///   = help: known qualities: maj7, sus4, sus2, dim, aug, M7, m, 7, +
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use chordal_parser::error::{Diagnostic, ErrorCode};
    /// # use chordal_parser::Span;
    ///
    /// let diag = Diagnostic::error("unexpected character `H`")
    ///     .with_code(ErrorCode::E001)
    ///     .with_label(Span::new(0..1), "not a note letter")
    ///     .with_help("note letters are A-G");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("bass note must be a bare root")
            .with_code(ErrorCode::E004)
            .with_label(Span::new(3..4), "not allowed after a bass note")
            .with_secondary_label(Span::new(1..3), "bass note starts here")
            .with_help("a bass note is a letter with an optional `#` or `b`");

        assert_eq!(diag.code(), Some(ErrorCode::E004));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(
            diag.help(),
            Some("a bass note is a letter with an optional `#` or `b`")
        );
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unknown chord quality `x`").with_code(ErrorCode::E003);

        assert_eq!(diag.to_string(), "error[E003]: unknown chord quality `x`");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("something went wrong");

        assert_eq!(diag.to_string(), "error: something went wrong");
    }
}
