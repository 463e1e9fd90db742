use rand::{Rng, SeedableRng, rngs::StdRng};

mod backtrack;
pub mod disjoint_set;
mod grow;
mod kruskal;
mod prim;

pub use backtrack::randomized_backtrack;
pub use disjoint_set::DisjointSet;
pub use grow::randomized_grow;
pub use kruskal::randomized_kruskal;
pub use prim::randomized_prim;

use crate::maze::{Grid, PathCoord};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Resets the grid and marks a uniformly random path cell as visited.
///
/// Returns that cell and the number of path cells still unexplored.
fn carve_start(grid: &mut Grid, rng: &mut StdRng) -> (PathCoord, usize) {
    grid.reset();
    let start: PathCoord = (
        rng.random_range(0..grid.path_rows()),
        rng.random_range(0..grid.path_cols()),
    );
    grid.set_visited(start);
    (start, grid.path_cell_count() - 1)
}

/// Opens the wall between two neighbouring path cells and visits `to`.
fn carve_passage(grid: &mut Grid, from: PathCoord, to: PathCoord) {
    if let Err(err) = grid.open_wall(from, to) {
        unreachable!("generators only carve between neighbours: {err}");
    }
    grid.set_visited(to);
}

/// Picks a uniformly random element of a non-empty slice.
fn pick<T: Copy>(items: &[T], rng: &mut StdRng) -> T {
    items[rng.random_range(0..items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    /// Randomized depth-first backtracking
    Backtrack,
    /// Randomized breadth-first growth
    Grow,
    /// Randomized Prim's algorithm
    Prim,
    /// Randomized Kruskal's algorithm
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 4] = [
        Generator::Backtrack,
        Generator::Grow,
        Generator::Prim,
        Generator::Kruskal,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Backtrack => write!(f, "Randomized Depth-First Backtracking"),
            Generator::Grow => write!(f, "Randomized Breadth-First Growth"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

/// Carves a perfect maze into `grid` with the chosen algorithm.
///
/// The grid is reset first, so any previous maze and solution are discarded.
/// The same `seed` on the same grid size always yields the same maze.
pub fn generate_maze(grid: &mut Grid, generator: Generator, seed: Option<u64>) {
    tracing::debug!(
        "[generate] {} on {}x{} grid, seed {:?}",
        generator,
        grid.num_rows(),
        grid.num_cols(),
        seed
    );
    match generator {
        Generator::Backtrack => randomized_backtrack(grid, seed),
        Generator::Grow => randomized_grow(grid, seed),
        Generator::Prim => randomized_prim(grid, seed),
        Generator::Kruskal => randomized_kruskal(grid, seed),
    }
    debug_assert_eq!(grid.open_wall_count(), grid.path_cell_count() - 1);
}
