//! Chordal Core Types
//!
//! This crate provides the syntax tree produced by the Chordal parser:
//!
//! - **Notes**: Note letters, accidentals and roots ([`note`] module)
//! - **Qualities**: The closed set of chord qualities ([`quality`] module)
//! - **Chords**: Single chords, progressions and the tagged parse shape
//!   ([`chord`] module)
//!
//! Every node is immutable once constructed. [`std::fmt::Display`] renders the
//! canonical chord-symbol text of a node.

pub mod chord;
pub mod note;
pub mod quality;

mod error;

pub use chord::{ChordNode, ChordTree, ProgressionNode};
pub use error::ModelError;
pub use note::{Accidental, NoteLetter, RootNote};
pub use quality::Quality;
