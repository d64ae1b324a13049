//! Chord qualities.
//!
//! The set of qualities is closed. Two qualities have more than one surface
//! spelling (`maj7`/`M7` and `aug`/`+`); each spelling maps to the same
//! [`Quality`] value, and [`Quality::canonical`] picks the one used when a
//! chord is rendered back to text.

use std::fmt;

use serde::Serialize;

/// The harmonic color of a chord, independent of its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Minor,
    Major7,
    Dominant7,
    Diminished,
    Augmented,
    Sus4,
    Sus2,
}

impl Quality {
    /// Every surface spelling, longest first.
    ///
    /// Spellings are case-sensitive: `m` is minor while `M7` is major seventh.
    pub const SPELLINGS: [&'static str; 9] =
        ["maj7", "sus4", "sus2", "dim", "aug", "M7", "m", "7", "+"];

    /// Map a surface spelling to its quality.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        match spelling {
            "m" => Some(Quality::Minor),
            "maj7" | "M7" => Some(Quality::Major7),
            "7" => Some(Quality::Dominant7),
            "dim" => Some(Quality::Diminished),
            "aug" | "+" => Some(Quality::Augmented),
            "sus4" => Some(Quality::Sus4),
            "sus2" => Some(Quality::Sus2),
            _ => None,
        }
    }

    /// All surface spellings of this quality; the first is canonical.
    pub fn spellings(self) -> &'static [&'static str] {
        match self {
            Quality::Minor => &["m"],
            Quality::Major7 => &["maj7", "M7"],
            Quality::Dominant7 => &["7"],
            Quality::Diminished => &["dim"],
            Quality::Augmented => &["aug", "+"],
            Quality::Sus4 => &["sus4"],
            Quality::Sus2 => &["sus2"],
        }
    }

    /// The spelling used when rendering this quality.
    pub fn canonical(self) -> &'static str {
        self.spellings()[0]
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spelling_maps_to_a_quality() {
        for spelling in Quality::SPELLINGS {
            let quality = Quality::from_spelling(spelling)
                .unwrap_or_else(|| panic!("`{spelling}` should be a quality"));
            assert!(quality.spellings().contains(&spelling));
        }
    }

    #[test]
    fn test_spellings_are_longest_first() {
        let lengths: Vec<_> = Quality::SPELLINGS.iter().map(|s| s.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_alternate_spellings_share_a_value() {
        assert_eq!(Quality::from_spelling("maj7"), Some(Quality::Major7));
        assert_eq!(Quality::from_spelling("M7"), Some(Quality::Major7));
        assert_eq!(Quality::from_spelling("aug"), Some(Quality::Augmented));
        assert_eq!(Quality::from_spelling("+"), Some(Quality::Augmented));
    }

    #[test]
    fn test_spellings_are_case_sensitive() {
        assert_eq!(Quality::from_spelling("M"), None);
        assert_eq!(Quality::from_spelling("m7"), None);
        assert_eq!(Quality::from_spelling("Maj7"), None);
        assert_eq!(Quality::from_spelling("DIM"), None);
    }

    #[test]
    fn test_canonical_display() {
        assert_eq!(Quality::Major7.to_string(), "maj7");
        assert_eq!(Quality::Augmented.to_string(), "aug");
        assert_eq!(Quality::Minor.to_string(), "m");
        assert_eq!(Quality::Dominant7.to_string(), "7");
    }
}
