use thiserror::Error;

/// Build-time failures. These indicate a broken level asset or integration
/// error and should abort initialization rather than produce a partial graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("jump_distance must be at least 1 (got {0})")]
    InvalidJumpDistance(i32),

    #[error("jump_height must be at least 1 (got {0})")]
    InvalidJumpHeight(i32),
}

/// Level text parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("level text contains no rows")]
    Empty,

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
}
