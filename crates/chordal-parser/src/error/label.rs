//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A labeled span in source code.
///
/// - **Primary labels** mark where the mismatch was detected.
/// - **Secondary labels** add context, such as where a bass note started.
///
/// # Example
///
/// ```text
/// error[E004]: bass note must be a bare root
///   |
/// 1 | C/Em
///   |  --^ not allowed after a bass note
///   |  |
///   |  bass note starts here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(3..4), "here");

        assert_eq!(label.span().start(), 3);
        assert_eq!(label.span().end(), 4);
        assert_eq!(label.message(), "here");
        assert!(label.is_primary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(1..3), "bass note starts here");

        assert_eq!(label.message(), "bass note starts here");
        assert!(!label.is_primary());
    }
}
