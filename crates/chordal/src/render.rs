//! Text renderings of parsed chord trees.

use std::fmt;

use chordal_core::{ChordNode, ChordTree};

use crate::config::OutputFormat;

/// Render `tree` in the given format.
pub(crate) fn render(tree: &ChordTree, format: OutputFormat) -> String {
    match format {
        OutputFormat::Symbol => tree.to_string(),
        OutputFormat::Tree => TreeView(tree).to_string(),
        OutputFormat::Debug => format!("{tree:#?}"),
    }
}

/// Indented listing of a tree, one line per chord part.
///
/// ```text
/// progression C-G7/B (2 chords)
///   chord C
///     root: C
///   chord G7/B
///     root: G
///     quality: 7
///     bass: B
/// ```
struct TreeView<'a>(&'a ChordTree);

impl TreeView<'_> {
    fn write_chord(f: &mut fmt::Formatter<'_>, chord: &ChordNode, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        writeln!(f, "{pad}chord {chord}")?;
        writeln!(f, "{pad}  root: {}", chord.root())?;
        if let Some(quality) = chord.quality() {
            writeln!(f, "{pad}  quality: {quality}")?;
        }
        if let Some(bass) = chord.bass() {
            writeln!(f, "{pad}  bass: {bass}")?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ChordTree::Chord(chord) => Self::write_chord(f, chord, 0),
            ChordTree::Progression(progression) => {
                writeln!(
                    f,
                    "progression {progression} ({} chords)",
                    progression.len()
                )?;
                for chord in progression {
                    Self::write_chord(f, chord, 1)?;
                }
                Ok(())
            }
        }
    }
}
