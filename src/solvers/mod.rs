mod bfs;

pub use bfs::solve_bfs;

use crate::{
    error::Result,
    maze::{Grid, PathCoord},
};

/// Solves the maze from `start` to the bottom-right path cell.
///
/// Highlights the route (path cells and the walls between them) on the grid
/// and returns the path cells from `start` to the goal. Solving replaces any
/// previously highlighted route rather than adding to it; use
/// [`Grid::clear_highlights`] to drop a route without solving again.
///
/// # Errors
/// [`MazeError::MazeNotGenerated`](crate::error::MazeError::MazeNotGenerated)
/// before any generator has run, and
/// [`MazeError::OutOfBounds`](crate::error::MazeError::OutOfBounds) when `start`
/// is not a path cell.
pub fn solve_maze(grid: &mut Grid, start: PathCoord) -> Result<Vec<PathCoord>> {
    let path = solve_bfs(grid, start)?;
    tracing::info!(
        "[solve] route from {:?} to {:?} takes {} steps",
        start,
        grid.goal(),
        path.len() - 1
    );
    Ok(path)
}
