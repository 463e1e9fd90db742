use crate::{
    generators::{carve_passage, carve_start, get_rng, pick},
    maze::Grid,
};

/// Depth-first backtracking: keep walking into a random unvisited neighbour,
/// and back up along the walked path when stuck. Gives long, winding corridors.
pub fn randomized_backtrack(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    let (mut current, mut unexplored) = carve_start(grid, &mut rng);

    // The stack keeps every cell on the way back to the start that may still
    // have unvisited neighbours
    let mut stack = Vec::new();

    while unexplored > 0 {
        let neighbors = grid.neighbors(current, false).collect::<Vec<_>>();

        if neighbors.is_empty() {
            // Some visited cell still borders the unexplored region, and it is on the stack
            let Some(previous) = stack.pop() else {
                unreachable!("backtrack stack ran dry with {unexplored} cells unexplored");
            };
            current = previous;
            continue;
        }

        let neighbor = pick(&neighbors, &mut rng);
        carve_passage(grid, current, neighbor);
        // Put the cell back first so we can look at another neighbor of this cell later
        stack.push(current);
        current = neighbor;
        unexplored -= 1;
    }

    tracing::debug!("[backtrack] carved {} passages", grid.open_wall_count());
    grid.mark_generated();
}
