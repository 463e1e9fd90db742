pub mod error;
pub mod generators;
pub mod logging;
pub mod maze;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::{Generator, generate_maze};
pub use maze::{Cell, CellView, Grid, PathCoord};
pub use solvers::solve_maze;
