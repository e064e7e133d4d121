//! Error types for maze construction and configuration.

use std::fmt;
use std::io;

/// Errors surfaced to callers when a maze cannot be built.
///
/// Wall bumps are not errors, and contract violations such as reading a
/// cell outside the grid panic instead of showing up here.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// A dimension is zero, or the cell count does not fit in `usize`.
    InvalidDimensions {
        cols: usize,
        rows: usize,
    },
    /// The braid factor is NaN or outside `[0, 1]`.
    InvalidBraidFactor(f64),
    /// A difficulty name that is not one of `easy`, `medium`, `hard`.
    UnknownDifficulty(String),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { cols, rows } => {
                write!(f, "invalid maze dimensions {cols}x{rows}: need at least one row and column")
            }
            Self::InvalidBraidFactor(factor) => {
                write!(f, "braid factor {factor} must lie in [0, 1]")
            }
            Self::UnknownDifficulty(name) => {
                write!(f, "unknown difficulty {name:?} (expected easy, medium or hard)")
            }
        }
    }
}

impl std::error::Error for MazeError {}

impl From<MazeError> for io::Error {
    fn from(err: MazeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = MazeError::InvalidDimensions { cols: 0, rows: 7 };
        assert!(err.to_string().contains("0x7"));
        let err = MazeError::UnknownDifficulty("nightmare".into());
        assert!(err.to_string().contains("nightmare"));
    }

    #[test]
    fn converts_into_invalid_input() {
        let err: io::Error = MazeError::InvalidBraidFactor(1.5).into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
