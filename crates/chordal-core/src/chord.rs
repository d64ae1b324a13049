//! Chords, progressions, and the shape returned by a parse.
//!
//! A parse yields a [`ChordTree`], which is either a single [`ChordNode`] or a
//! [`ProgressionNode`] of two or more chords. A lone chord is never wrapped in
//! a one-element progression.

use std::{fmt, slice};

use serde::Serialize;

use crate::{error::ModelError, note::RootNote, quality::Quality};

/// Exactly one chord symbol: a root, an optional quality and an optional bass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChordNode {
    root: RootNote,
    quality: Option<Quality>,
    bass: Option<RootNote>,
}

impl ChordNode {
    /// Create a chord with only a root.
    pub fn new(root: impl Into<RootNote>) -> Self {
        Self {
            root: root.into(),
            quality: None,
            bass: None,
        }
    }

    /// Set the quality of this chord (builder style).
    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = Some(quality);
        self
    }

    /// Set the bass note of this chord (builder style).
    pub fn with_bass(mut self, bass: impl Into<RootNote>) -> Self {
        self.bass = Some(bass.into());
        self
    }

    pub fn root(&self) -> RootNote {
        self.root
    }

    pub fn quality(&self) -> Option<Quality> {
        self.quality
    }

    pub fn bass(&self) -> Option<RootNote> {
        self.bass
    }
}

impl fmt::Display for ChordNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        if let Some(quality) = self.quality {
            write!(f, "{quality}")?;
        }
        if let Some(bass) = self.bass {
            write!(f, "/{bass}")?;
        }
        Ok(())
    }
}

/// An ordered sequence of at least two chords, first chord sounding first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProgressionNode {
    chords: Vec<ChordNode>,
}

impl ProgressionNode {
    /// Create a progression from chords in time order.
    ///
    /// `first` and `second` are required; `rest` may be empty.
    pub fn new(
        first: ChordNode,
        second: ChordNode,
        rest: impl IntoIterator<Item = ChordNode>,
    ) -> Self {
        let mut chords = vec![first, second];
        chords.extend(rest);
        Self { chords }
    }

    /// Returns the chords in time order.
    pub fn chords(&self) -> &[ChordNode] {
        &self.chords
    }

    /// Returns the number of chords, always at least two.
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    /// Iterate over the chords in time order.
    pub fn iter(&self) -> slice::Iter<'_, ChordNode> {
        self.chords.iter()
    }
}

impl TryFrom<Vec<ChordNode>> for ProgressionNode {
    type Error = ModelError;

    /// # Errors
    ///
    /// Returns [`ModelError::ProgressionTooShort`] when fewer than two chords
    /// are given.
    fn try_from(chords: Vec<ChordNode>) -> Result<Self, Self::Error> {
        if chords.len() < 2 {
            return Err(ModelError::ProgressionTooShort { len: chords.len() });
        }
        Ok(Self { chords })
    }
}

impl<'a> IntoIterator for &'a ProgressionNode {
    type Item = &'a ChordNode;
    type IntoIter = slice::Iter<'a, ChordNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ProgressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}

/// The result shape of a successful parse.
///
/// Consumers must handle both shapes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChordTree {
    Chord(ChordNode),
    Progression(ProgressionNode),
}

impl ChordTree {
    /// Returns the chords in time order regardless of shape.
    pub fn chords(&self) -> &[ChordNode] {
        match self {
            ChordTree::Chord(chord) => slice::from_ref(chord),
            ChordTree::Progression(progression) => progression.chords(),
        }
    }

    pub fn is_progression(&self) -> bool {
        matches!(self, ChordTree::Progression(_))
    }
}

impl From<ChordNode> for ChordTree {
    fn from(chord: ChordNode) -> Self {
        ChordTree::Chord(chord)
    }
}

impl From<ProgressionNode> for ChordTree {
    fn from(progression: ProgressionNode) -> Self {
        ChordTree::Progression(progression)
    }
}

impl fmt::Display for ChordTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordTree::Chord(chord) => write!(f, "{chord}"),
            ChordTree::Progression(progression) => write!(f, "{progression}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Accidental, NoteLetter};

    fn chord(letter: NoteLetter) -> ChordNode {
        ChordNode::new(letter)
    }

    #[test]
    fn test_chord_display() {
        assert_eq!(chord(NoteLetter::C).to_string(), "C");
        assert_eq!(
            chord(NoteLetter::D).with_quality(Quality::Minor).to_string(),
            "Dm"
        );
        assert_eq!(
            ChordNode::new(RootNote::new(NoteLetter::B, Some(Accidental::Flat)))
                .with_quality(Quality::Major7)
                .with_bass(RootNote::new(NoteLetter::F, Some(Accidental::Sharp)))
                .to_string(),
            "Bbmaj7/F#"
        );
    }

    #[test]
    fn test_progression_rejects_fewer_than_two_chords() {
        assert_eq!(
            ProgressionNode::try_from(vec![]),
            Err(ModelError::ProgressionTooShort { len: 0 })
        );
        assert_eq!(
            ProgressionNode::try_from(vec![chord(NoteLetter::C)]),
            Err(ModelError::ProgressionTooShort { len: 1 })
        );
    }

    #[test]
    fn test_progression_keeps_order() {
        let progression = ProgressionNode::new(
            chord(NoteLetter::C),
            chord(NoteLetter::F),
            [chord(NoteLetter::G), chord(NoteLetter::C)],
        );

        assert_eq!(progression.len(), 4);
        assert!(!progression.is_empty());
        let letters: Vec<_> = progression.iter().map(|c| c.root().letter()).collect();
        assert_eq!(
            letters,
            [NoteLetter::C, NoteLetter::F, NoteLetter::G, NoteLetter::C]
        );
        assert_eq!(progression.to_string(), "C-F-G-C");
    }

    #[test]
    fn test_tree_chords_view() {
        let single = ChordTree::from(chord(NoteLetter::A));
        assert!(!single.is_progression());
        assert_eq!(single.chords().len(), 1);

        let progression =
            ProgressionNode::try_from(vec![chord(NoteLetter::A), chord(NoteLetter::E)])
                .expect("two chords form a progression");
        let tree = ChordTree::from(progression);
        assert!(tree.is_progression());
        assert_eq!(tree.chords().len(), 2);
        assert_eq!(tree.to_string(), "A-E");
    }
}
