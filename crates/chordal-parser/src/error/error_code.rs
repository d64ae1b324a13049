//! Error codes for the Chordal diagnostic system.

use std::fmt;

/// Error codes for categorizing parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected character.
    ///
    /// A character does not match any token expected at this position, such
    /// as a letter outside `A`-`G` where a root is required.
    E001,

    /// Unexpected end of input.
    ///
    /// The input ended where a root letter was required, for example in an
    /// empty string, after a trailing `-`, or after a trailing `/`.
    E002,

    /// Unknown chord quality.
    ///
    /// A quality-shaped word followed the root but is not one of the
    /// recognised spellings.
    E003,

    /// Invalid bass note.
    ///
    /// The note after `/` carried a quality or a slash of its own. A bass
    /// note is always a bare root.
    E004,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
        }
    }

    /// Returns a short description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unexpected character",
            ErrorCode::E002 => "unexpected end of input",
            ErrorCode::E003 => "unknown chord quality",
            ErrorCode::E004 => "invalid bass note",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E004.to_string(), "E004");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E002.description(), "unexpected end of input");
        assert_eq!(ErrorCode::E003.description(), "unknown chord quality");
    }
}
