//! Error taxonomy for grid construction, traversal, and bit assignment

use std::fmt;

use thiserror::Error;

use crate::placement::traverse::Cursor;

/// Why `Grid::assign` rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentRejection {
    /// Coordinate lies outside the matrix
    OutOfBounds,
    /// Target cell is a function/format/alignment module
    NotUsable,
    /// Target cell already carries a data bit
    AlreadyAssigned,
}

impl fmt::Display for AssignmentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            AssignmentRejection::OutOfBounds => "coordinate out of bounds",
            AssignmentRejection::NotUsable => "cell is not usable for data",
            AssignmentRejection::AlreadyAssigned => "cell already assigned",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced by the placement pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// Matrix side is not an odd length of at least 9 modules
    #[error("matrix side must be odd and at least 9, got {0}")]
    InvalidSize(usize),

    /// Version number outside 1..=40
    #[error("version {0} out of range 1..=40")]
    InvalidVersion(u8),

    /// Grid classification failed the construction-time validation pass
    #[error("invalid classification: {0}")]
    Classification(String),

    /// Write to a cell that cannot take a data bit
    #[error("invalid assignment at ({x}, {y}): {reason}")]
    InvalidAssignment {
        /// Column of the rejected write
        x: usize,
        /// Row of the rejected write
        y: usize,
        /// Why the write was rejected
        reason: AssignmentRejection,
    },

    /// Traversal stopped making progress; carries the cursor for diagnostics
    #[error("traversal dead end at {cursor:?}")]
    DeadEnd {
        /// Cursor state at the point the engine gave up
        cursor: Cursor,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_error_message() {
        let err = PlaceError::InvalidAssignment {
            x: 6,
            y: 10,
            reason: AssignmentRejection::NotUsable,
        };
        assert_eq!(
            err.to_string(),
            "invalid assignment at (6, 10): cell is not usable for data"
        );
    }
}
