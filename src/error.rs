use crate::maze::PathCoord;

/// Errors reported by grid construction, wall lookup and solving.
///
/// Every variant is a caller-input error. They are detected before the grid is
/// mutated, so a failed call leaves the grid as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    /// Grid dimensions must both be odd and at least 3.
    #[error("invalid grid dimension {rows}x{cols}: both must be odd and at least 3")]
    InvalidDimension { rows: u16, cols: u16 },

    /// A resize request left the allowed size window.
    #[error(
        "grid dimension {rows}x{cols} is outside the resize range ({min}, {max})",
        min = crate::maze::MIN_DIMENSION,
        max = crate::maze::MAX_DIMENSION
    )]
    DimensionOutOfRange { rows: i32, cols: i32 },

    /// Wall lookup between two path cells that do not share a wall.
    #[error("path cells {a:?} and {b:?} are not adjacent")]
    NotAdjacent { a: PathCoord, b: PathCoord },

    /// Solve start outside the path-cell range.
    #[error("path cell {coord:?} is outside the {path_rows}x{path_cols} path-cell range")]
    OutOfBounds {
        coord: PathCoord,
        path_rows: u16,
        path_cols: u16,
    },

    #[error("maze has not been generated yet")]
    MazeNotGenerated,
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MazeError::InvalidDimension { rows: 4, cols: 7 };
        assert_eq!(
            err.to_string(),
            "invalid grid dimension 4x7: both must be odd and at least 3"
        );
        let err = MazeError::NotAdjacent { a: (0, 0), b: (1, 1) };
        assert_eq!(err.to_string(), "path cells (0, 0) and (1, 1) are not adjacent");
        let err = MazeError::DimensionOutOfRange { rows: 9, cols: 9 };
        assert_eq!(
            err.to_string(),
            "grid dimension 9x9 is outside the resize range (10, 100)"
        );
    }
}
