use std::collections::VecDeque;

use crate::{
    generators::{carve_passage, carve_start, get_rng, pick},
    maze::Grid,
};

/// Breadth-first growth: the same carving step as backtracking, but a stuck
/// walker resumes from the oldest cell that still has room to grow. Gives
/// shorter, more evenly branching passages.
pub fn randomized_grow(grid: &mut Grid, seed: Option<u64>) {
    let mut rng = get_rng(seed);
    let (mut current, mut unexplored) = carve_start(grid, &mut rng);

    let mut queue = VecDeque::new();

    while unexplored > 0 {
        let neighbors = grid.neighbors(current, false).collect::<Vec<_>>();

        if neighbors.is_empty() {
            let Some(next) = queue.pop_front() else {
                unreachable!("growth queue ran dry with {unexplored} cells unexplored");
            };
            current = next;
            continue;
        }

        let neighbor = pick(&neighbors, &mut rng);
        carve_passage(grid, current, neighbor);
        queue.push_back(current);
        current = neighbor;
        unexplored -= 1;
    }

    tracing::debug!("[grow] carved {} passages", grid.open_wall_count());
    grid.mark_generated();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::assert_spanning_tree;

    #[test]
    fn test_randomized_grow() {
        let mut grid = Grid::new(17, 13).unwrap();
        randomized_grow(&mut grid, Some(5));
        assert!(grid.is_generated());
        assert_spanning_tree(&grid);
    }

    #[test]
    fn test_single_column_is_a_corridor() {
        let mut grid = Grid::new(11, 3).unwrap();
        randomized_grow(&mut grid, None);
        (0..4).for_each(|r| assert_eq!(grid.is_wall_open((r, 0), (r + 1, 0)), Ok(true)));
    }
}
