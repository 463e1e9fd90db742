use super::cell::Cell;

/// Row-major storage for every cell of the maze, walls included.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    data: Box<[Cell]>,
    rows: u16,
    cols: u16,
}

impl Lattice {
    pub fn new(rows: u16, cols: u16, cell: Cell) -> Self {
        let data = vec![cell; rows as usize * cols as usize].into_boxed_slice();
        Lattice { data, rows, cols }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn is_boundary(&self, row: u16, col: u16) -> bool {
        row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1
    }

    fn ravel_index(&self, row: u16, col: u16) -> usize {
        // Overflow-safe since rows and cols are u16 (assuming usize is at least 32 bits)
        row as usize * self.cols as usize + col as usize
    }

    /// Iterates over `((row, col), cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), &Cell)> {
        let cols = self.cols as usize;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, cell)| (((i / cols) as u16, (i % cols) as u16), cell))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.data.iter_mut()
    }
}

impl std::ops::Index<(u16, u16)> for Lattice {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Lattice {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_indexing() {
        let mut lattice = Lattice::new(3, 5, Cell::WALL);
        lattice[(1, 3)] = Cell::PATH;
        assert_eq!(lattice[(1, 3)], Cell::PATH);
        assert_eq!(lattice[(1, 2)], Cell::WALL);
    }

    #[test]
    fn test_iter_is_row_major() {
        let lattice = Lattice::new(3, 5, Cell::WALL);
        let coords = lattice.iter().map(|(c, _)| c).take(6).collect::<Vec<_>>();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 0)]);
        assert_eq!(lattice.iter().count(), 15);
    }

    #[test]
    fn test_boundary() {
        let lattice = Lattice::new(5, 7, Cell::WALL);
        assert!(lattice.is_boundary(0, 3));
        assert!(lattice.is_boundary(4, 3));
        assert!(lattice.is_boundary(2, 6));
        assert!(!lattice.is_boundary(2, 3));
    }
}
