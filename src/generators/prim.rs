use rand::Rng;

use crate::{
    generators::{carve_passage, carve_start, get_rng, pick},
    maze::Grid,
};

/// Randomized Prim's algorithm over cells: grow the maze from a random
/// frontier cell each step, linking it to a random visited neighbour. Gives
/// many short dead-ends.
pub fn randomized_prim(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    let (mut current, mut unexplored) = carve_start(grid, &mut rng);

    // Discovered-but-unvisited cells, with a flag per path cell so nothing is queued twice
    let mut frontier = Vec::new();
    let mut in_frontier = vec![false; grid.path_cell_count()];

    while unexplored > 0 {
        // Add the unvisited neighbors of the newest maze cell to the frontier
        let discovered = grid.neighbors(current, false).collect::<Vec<_>>();
        for coord in discovered {
            let idx = grid.path_index(coord);
            if !in_frontier[idx] {
                in_frontier[idx] = true;
                frontier.push(coord);
            }
        }

        if frontier.is_empty() {
            unreachable!("prim frontier ran dry with {unexplored} cells unexplored");
        }
        let cell = frontier.swap_remove(rng.random_range(0..frontier.len()));

        // A frontier cell was discovered from a visited one, so at least one exists
        let linked = grid.neighbors(cell, true).collect::<Vec<_>>();
        let connection = pick(&linked, &mut rng);
        carve_passage(grid, connection, cell);
        current = cell;
        unexplored -= 1;
    }

    tracing::debug!("[prim] carved {} passages", grid.open_wall_count());
    grid.mark_generated();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::assert_spanning_tree;

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(7, 7).unwrap();
        let neighbors = grid.neighbors((1, 1), false).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(0, 1), (2, 1), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_randomized_prim() {
        let mut grid = Grid::new(19, 11).unwrap();
        randomized_prim(&mut grid, Some(9));
        assert!(grid.is_generated());
        assert_spanning_tree(&grid);
        // Walls get opened, never path cells rewritten
        assert_eq!(grid.cells().filter(|c| c.is_path_cell).count(), grid.path_cell_count());
        assert!(grid.cells().filter(|c| c.is_open_wall).all(|c| !c.is_path_cell));
    }
}
