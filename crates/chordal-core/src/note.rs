//! Note letters, accidentals and roots.
//!
//! A [`RootNote`] is the building block shared by a chord's root and its
//! optional bass note. A bass note is always a bare root: it has no quality
//! and cannot carry a bass of its own, which the type system enforces by
//! storing it as a [`RootNote`] rather than a chord.

use std::fmt;

use serde::Serialize;

use crate::error::ModelError;

/// One of the seven note letters `A` through `G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum NoteLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl NoteLetter {
    /// All note letters in alphabetical order.
    pub const ALL: [NoteLetter; 7] = [
        NoteLetter::A,
        NoteLetter::B,
        NoteLetter::C,
        NoteLetter::D,
        NoteLetter::E,
        NoteLetter::F,
        NoteLetter::G,
    ];

    /// Returns the uppercase character for this letter.
    pub fn as_char(self) -> char {
        match self {
            NoteLetter::A => 'A',
            NoteLetter::B => 'B',
            NoteLetter::C => 'C',
            NoteLetter::D => 'D',
            NoteLetter::E => 'E',
            NoteLetter::F => 'F',
            NoteLetter::G => 'G',
        }
    }
}

impl TryFrom<char> for NoteLetter {
    type Error = ModelError;

    /// Only the uppercase letters `A`..=`G` are note letters; lowercase `b`
    /// is reserved for the flat accidental.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'A' => Ok(NoteLetter::A),
            'B' => Ok(NoteLetter::B),
            'C' => Ok(NoteLetter::C),
            'D' => Ok(NoteLetter::D),
            'E' => Ok(NoteLetter::E),
            'F' => Ok(NoteLetter::F),
            'G' => Ok(NoteLetter::G),
            other => Err(ModelError::InvalidNoteLetter(other)),
        }
    }
}

impl fmt::Display for NoteLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A sharp or flat modifier attached to a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Accidental {
    Sharp,
    Flat,
}

impl Accidental {
    /// Map a surface symbol (`#` or `b`) to an accidental.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '#' => Some(Accidental::Sharp),
            'b' => Some(Accidental::Flat),
            _ => None,
        }
    }

    /// Returns the surface symbol for this accidental.
    pub fn symbol(self) -> char {
        match self {
            Accidental::Sharp => '#',
            Accidental::Flat => 'b',
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A note letter with at most one accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RootNote {
    letter: NoteLetter,
    accidental: Option<Accidental>,
}

impl RootNote {
    /// Create a root from a letter and an optional accidental.
    pub fn new(letter: NoteLetter, accidental: Option<Accidental>) -> Self {
        Self { letter, accidental }
    }

    /// Create a root with no accidental.
    pub fn natural(letter: NoteLetter) -> Self {
        Self::new(letter, None)
    }

    pub fn letter(&self) -> NoteLetter {
        self.letter
    }

    pub fn accidental(&self) -> Option<Accidental> {
        self.accidental
    }
}

impl From<NoteLetter> for RootNote {
    fn from(letter: NoteLetter) -> Self {
        Self::natural(letter)
    }
}

impl fmt::Display for RootNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(accidental) = self.accidental {
            write!(f, "{accidental}")?;
        }
        Ok(())
    }
}
