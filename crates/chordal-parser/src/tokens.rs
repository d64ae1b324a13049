use std::fmt;

use chordal_core::{Accidental, NoteLetter};

use crate::span::Span;

/// Token types for chord notation
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'src> {
    /// Root or bass note letter, `A`..`G`
    Letter(NoteLetter),
    /// `#` or `b` directly after a note letter
    Accidental(Accidental),
    /// A quality-shaped word; not necessarily a known quality
    QualityWord(&'src str),

    Slash,  // /
    Hyphen, // -

    EndOfInput,
}

impl Token<'_> {
    /// The first character of this token's surface text, `None` at end of input.
    pub fn first_char(&self) -> Option<char> {
        match self {
            Token::Letter(letter) => Some(letter.as_char()),
            Token::Accidental(accidental) => Some(accidental.symbol()),
            Token::QualityWord(word) => word.chars().next(),
            Token::Slash => Some('/'),
            Token::Hyphen => Some('-'),
            Token::EndOfInput => None,
        }
    }
}

/// A token with position information for winnow integration
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl<'src> std::ops::Deref for PositionedToken<'src> {
    type Target = Token<'src>;

    fn deref(&self) -> &Self::Target {
        &self.token
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Letter(letter) => write!(f, "{letter}"),
            Token::Accidental(accidental) => write!(f, "{accidental}"),
            Token::QualityWord(word) => write!(f, "{word}"),
            Token::Slash => write!(f, "/"),
            Token::Hyphen => write!(f, "-"),
            Token::EndOfInput => write!(f, "end of input"),
        }
    }
}
