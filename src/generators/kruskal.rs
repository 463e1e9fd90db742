use rand::seq::SliceRandom;

use crate::{
    generators::{DisjointSet, carve_passage, carve_start, get_rng},
    maze::Grid,
};

/// Randomized Kruskal's algorithm: visit every interior wall in random order
/// and open it whenever the cells on either side are not yet connected.
pub fn randomized_kruskal(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    let (_, mut unexplored) = carve_start(grid, &mut rng);

    // Collect all walls between adjacent path cells
    let mut walls = grid.interior_walls();
    // Shuffle walls randomly
    walls.shuffle(&mut rng);

    let mut sets = DisjointSet::new(grid.path_cell_count());

    for wall in walls {
        let Some((a, b)) = grid.cells_across(wall) else {
            unreachable!("interior wall {wall:?} separates two path cells");
        };
        let (idx_a, idx_b) = (grid.path_index(a), grid.path_index(b));

        // Opening a wall between already connected cells would close a loop
        if sets.union(idx_a, idx_b) {
            carve_passage(grid, a, b);
            grid.set_visited(a);
            unexplored -= 1;
        }
    }

    debug_assert_eq!(unexplored, 0, "kruskal joins every path cell into one tree");
    tracing::debug!("[kruskal] carved {} passages", grid.open_wall_count());
    grid.mark_generated();
}
