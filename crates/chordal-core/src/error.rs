use thiserror::Error;

/// Errors raised when constructing syntax tree nodes directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("`{0}` is not a note letter (expected A-G)")]
    InvalidNoteLetter(char),

    #[error("a progression needs at least two chords, got {len}")]
    ProgressionTooShort { len: usize },
}
