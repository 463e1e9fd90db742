use crossterm::style::{Color, Stylize};

use std::fmt;

/// One cell of the full lattice, path cells and wall cells alike.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Set for every cell at odd/odd lattice coordinates.
    pub is_path_cell: bool,
    /// Set for wall cells whose two path cells are connected.
    pub is_open_wall: bool,
    /// Set by the solver for cells on the solution route.
    pub highlighted: bool,
}

impl Cell {
    /// The width of each cell when printed, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    pub const WALL: Cell = Cell {
        is_path_cell: false,
        is_open_wall: false,
        highlighted: false,
    };

    pub const PATH: Cell = Cell {
        is_path_cell: true,
        is_open_wall: false,
        highlighted: false,
    };

    /// Whether a walker can stand on this cell.
    pub fn is_passable(&self) -> bool {
        self.is_path_cell || self.is_open_wall
    }
}

/// Read-only snapshot of a lattice cell, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub row: u16,
    pub col: u16,
    pub is_path_cell: bool,
    pub is_open_wall: bool,
    pub highlighted: bool,
}

impl CellView {
    pub(crate) fn new(row: u16, col: u16, cell: Cell) -> Self {
        CellView {
            row,
            col,
            is_path_cell: cell.is_path_cell,
            is_open_wall: cell.is_open_wall,
            highlighted: cell.highlighted,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = if self.highlighted {
            "🟨".with(Color::Yellow)
        } else if self.is_passable() {
            "  ".with(Color::Reset)
        } else {
            "⬜".with(Color::White)
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
