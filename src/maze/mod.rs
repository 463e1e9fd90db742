pub mod cell;
mod lattice;

use std::fmt;

pub use cell::{Cell, CellView};
use lattice::Lattice;

use crate::error::{MazeError, Result};

/// Coordinate of a path cell as `(path_row, path_col)`.
pub type PathCoord = (u16, u16);

/// Lower bound (exclusive) for dimensions reached through [`Grid::change_size`].
pub const MIN_DIMENSION: i32 = 10;
/// Upper bound (exclusive) for dimensions reached through [`Grid::change_size`].
pub const MAX_DIMENSION: i32 = 100;
/// Lattice size used when the caller does not pick one.
pub const DEFAULT_DIMENSION: u16 = 31;

/// The full cell lattice of a maze plus the per-path-cell state the
/// generators and the solver work on.
///
/// Lattice coordinates are `(row, col)` over `num_rows x num_cols`. Path cells
/// sit at odd/odd lattice coordinates and are addressed by [`PathCoord`];
/// path cell `(r, c)` lives at lattice `(2r + 1, 2c + 1)`. Every other cell is a
/// wall, and the border is never opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    lattice: Lattice,
    path_rows: u16,
    path_cols: u16,
    visited: Box<[bool]>,
    /// Path-cell index of each cell's parent during a solve. Self means none.
    parent: Box<[usize]>,
    generated: bool,
}

impl Grid {
    /// Creates a reset grid of `num_rows x num_cols` lattice cells.
    ///
    /// # Errors
    /// [`MazeError::InvalidDimension`] if either dimension is even or below 3.
    pub fn new(num_rows: u16, num_cols: u16) -> Result<Self> {
        if num_rows < 3 || num_cols < 3 || num_rows % 2 == 0 || num_cols % 2 == 0 {
            return Err(MazeError::InvalidDimension {
                rows: num_rows,
                cols: num_cols,
            });
        }
        let path_rows = (num_rows - 1) / 2;
        let path_cols = (num_cols - 1) / 2;
        let path_cells = path_rows as usize * path_cols as usize;
        let mut grid = Grid {
            lattice: Lattice::new(num_rows, num_cols, Cell::WALL),
            path_rows,
            path_cols,
            visited: vec![false; path_cells].into_boxed_slice(),
            parent: (0..path_cells).collect(),
            generated: false,
        };
        grid.reset();
        Ok(grid)
    }

    /// Number of lattice rows.
    pub fn num_rows(&self) -> u16 {
        self.lattice.rows()
    }

    /// Number of lattice columns.
    pub fn num_cols(&self) -> u16 {
        self.lattice.cols()
    }

    /// Number of path-cell rows.
    pub fn path_rows(&self) -> u16 {
        self.path_rows
    }

    /// Number of path-cell columns.
    pub fn path_cols(&self) -> u16 {
        self.path_cols
    }

    pub fn path_cell_count(&self) -> usize {
        self.path_rows as usize * self.path_cols as usize
    }

    /// The fixed solve target, the bottom-right path cell.
    pub fn goal(&self) -> PathCoord {
        (self.path_rows - 1, self.path_cols - 1)
    }

    /// True once a generator has completed since the last reset.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub(crate) fn mark_generated(&mut self) {
        self.generated = true;
    }

    /// Restores the freshly-allocated state: every odd/odd cell is a path
    /// cell, every wall is closed, and all visited, parent and highlight
    /// state is cleared. Calling it repeatedly has no further effect.
    pub fn reset(&mut self) {
        let (rows, cols) = (self.num_rows(), self.num_cols());
        (0..rows).for_each(|row| {
            (0..cols).for_each(|col| {
                self.lattice[(row, col)] = if row % 2 == 1 && col % 2 == 1 {
                    Cell::PATH
                } else {
                    Cell::WALL
                };
            })
        });
        self.clear_search_state();
        self.generated = false;
    }

    /// Removes every highlight, leaving walls untouched.
    pub fn clear_highlights(&mut self) {
        self.lattice
            .iter_mut()
            .for_each(|cell| cell.highlighted = false);
    }

    /// Grows or shrinks both lattice dimensions by `delta` and resets the grid.
    ///
    /// Both new dimensions must lie strictly between [`MIN_DIMENSION`] and
    /// [`MAX_DIMENSION`] and stay odd. The grid is left untouched on error.
    pub fn change_size(&mut self, delta: i32) -> Result<()> {
        let rows = self.num_rows() as i32 + delta;
        let cols = self.num_cols() as i32 + delta;
        let in_range = |d: i32| d > MIN_DIMENSION && d < MAX_DIMENSION;
        if !in_range(rows) || !in_range(cols) {
            return Err(MazeError::DimensionOutOfRange { rows, cols });
        }
        *self = Grid::new(rows as u16, cols as u16)?;
        tracing::debug!("[grid] resized to {}x{}", rows, cols);
        Ok(())
    }

    /// Checks if the given path coordinate lies within the path-cell range.
    pub fn is_path_coord(&self, coord: PathCoord) -> bool {
        coord.0 < self.path_rows && coord.1 < self.path_cols
    }

    pub(crate) fn check_path_coord(&self, coord: PathCoord) -> Result<()> {
        if self.is_path_coord(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord,
                path_rows: self.path_rows,
                path_cols: self.path_cols,
            })
        }
    }

    /// Lattice coordinate of a path cell.
    pub(crate) fn to_lattice(coord: PathCoord) -> (u16, u16) {
        (coord.0 * 2 + 1, coord.1 * 2 + 1)
    }

    pub(crate) fn path_index(&self, coord: PathCoord) -> usize {
        coord.0 as usize * self.path_cols as usize + coord.1 as usize
    }

    pub(crate) fn path_coord(&self, index: usize) -> PathCoord {
        let cols = self.path_cols as usize;
        ((index / cols) as u16, (index % cols) as u16)
    }

    /// Lattice coordinate of the wall separating two adjacent path cells.
    ///
    /// # Errors
    /// [`MazeError::NotAdjacent`] unless `a` and `b` are in range and differ by
    /// exactly one step in either path row or path column.
    pub fn wall_between(&self, a: PathCoord, b: PathCoord) -> Result<(u16, u16)> {
        let adjacent = self.is_path_coord(a)
            && self.is_path_coord(b)
            && a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1;
        if !adjacent {
            return Err(MazeError::NotAdjacent { a, b });
        }
        // Midpoint of (2a + 1) and (2b + 1).
        Ok((a.0 + b.0 + 1, a.1 + b.1 + 1))
    }

    /// The two path cells an interior wall separates, or `None` for path
    /// cells, corners and the border.
    pub fn cells_across(&self, wall: (u16, u16)) -> Option<(PathCoord, PathCoord)> {
        let (row, col) = wall;
        if row >= self.num_rows()
            || col >= self.num_cols()
            || self.lattice.is_boundary(row, col)
        {
            return None;
        }
        match (row % 2, col % 2) {
            // Between a left and a right path cell
            (1, 0) => Some((((row - 1) / 2, col / 2 - 1), ((row - 1) / 2, col / 2))),
            // Between an upper and a lower path cell
            (0, 1) => Some(((row / 2 - 1, (col - 1) / 2), (row / 2, (col - 1) / 2))),
            _ => None,
        }
    }

    /// Every wall cell that separates two in-bounds path cells, row-major.
    pub fn interior_walls(&self) -> Vec<(u16, u16)> {
        self.lattice
            .iter()
            .map(|(coord, _)| coord)
            .filter(|&coord| self.cells_across(coord).is_some())
            .collect()
    }

    /// Path-cell neighbours of `coord` whose visited flag equals
    /// `want_visited`, probed in the order up, down, left, right.
    pub fn neighbors(
        &self,
        coord: PathCoord,
        want_visited: bool,
    ) -> impl Iterator<Item = PathCoord> + '_ {
        let candidates: Vec<PathCoord> = if self.is_path_coord(coord) {
            let (r, c) = coord;
            vec![
                // NOTE: wrapping_sub turns a step off the top/left edge into u16::MAX,
                // and saturating_add pins a step past u16::MAX at u16::MAX. Both
                // land outside the path-cell range and get filtered below.
                (r.wrapping_sub(1), c),
                (r.saturating_add(1), c),
                (r, c.wrapping_sub(1)),
                (r, c.saturating_add(1)),
            ]
        } else {
            // No neighbors if the coordinate is out of bounds
            vec![]
        };

        candidates
            .into_iter()
            .filter(move |&n| {
                self.is_path_coord(n) && self.visited[self.path_index(n)] == want_visited
            })
    }

    /// Whether the last generation or solve reached `coord`.
    ///
    /// # Errors
    /// [`MazeError::OutOfBounds`] if `coord` is not a path cell.
    pub fn is_visited(&self, coord: PathCoord) -> Result<bool> {
        self.check_path_coord(coord)?;
        Ok(self.visited[self.path_index(coord)])
    }

    pub(crate) fn set_visited(&mut self, coord: PathCoord) {
        let idx = self.path_index(coord);
        self.visited[idx] = true;
    }

    /// Clears visited flags and points every parent back at its own cell.
    pub(crate) fn clear_search_state(&mut self) {
        self.visited.fill(false);
        self.parent
            .iter_mut()
            .enumerate()
            .for_each(|(i, parent)| *parent = i);
    }

    /// The cell a solve reached `coord` from. Equal to `coord` when unset.
    ///
    /// # Errors
    /// [`MazeError::OutOfBounds`] if `coord` is not a path cell.
    pub fn parent(&self, coord: PathCoord) -> Result<PathCoord> {
        self.check_path_coord(coord)?;
        Ok(self.path_coord(self.parent[self.path_index(coord)]))
    }

    pub(crate) fn set_parent(&mut self, child: PathCoord, parent: PathCoord) {
        let (child, parent) = (self.path_index(child), self.path_index(parent));
        self.parent[child] = parent;
    }

    /// Opens the wall between two adjacent path cells.
    pub(crate) fn open_wall(&mut self, a: PathCoord, b: PathCoord) -> Result<()> {
        let wall = self.wall_between(a, b)?;
        self.lattice[wall].is_open_wall = true;
        Ok(())
    }

    /// Whether the wall between two adjacent path cells is open.
    pub fn is_wall_open(&self, a: PathCoord, b: PathCoord) -> Result<bool> {
        let wall = self.wall_between(a, b)?;
        Ok(self.lattice[wall].is_open_wall)
    }

    pub fn open_wall_count(&self) -> usize {
        self.lattice.iter().filter(|(_, cell)| cell.is_open_wall).count()
    }

    pub(crate) fn highlight(&mut self, coord: (u16, u16)) {
        self.lattice[coord].highlighted = true;
    }

    /// Highlighted path cells in row-major order.
    pub fn highlighted_path_cells(&self) -> Vec<PathCoord> {
        (0..self.path_cell_count())
            .map(|i| self.path_coord(i))
            .filter(|&coord| self[Grid::to_lattice(coord)].highlighted)
            .collect()
    }

    /// Read-only view of every lattice cell in row-major order, for renderers.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.lattice
            .iter()
            .map(|((row, col), &cell)| CellView::new(row, col, cell))
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.lattice[index]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows() {
            for col in 0..self.num_cols() {
                write!(f, "{}", self[(row, col)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
